#![allow(dead_code)]

use assert_fs::TempDir;
use assert_fs::fixture::ChildPath;
use assert_fs::prelude::{FileWriteStr, PathChild};
use fake::Fake;
use fake::faker::lorem::en::{Word, Words};

/// Writes a graph script into `dir` and hands back its path.
pub fn script_file(dir: &TempDir, contents: &str) -> ChildPath {
    let file = dir.child("graph.twig");
    file.write_str(contents).expect("failed to write script file");
    file
}

pub fn random_branch_name() -> String {
    format!("feature-{}", Word().fake::<String>())
}

pub fn random_subject() -> String {
    Words(3..6).fake::<Vec<String>>().join(" ")
}
