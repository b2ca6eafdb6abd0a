pub mod branch_name;
pub mod branch_table;
