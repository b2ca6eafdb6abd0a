//! twig — a tiny interpreter for git graph scripts
//!
//! A script is a newline-delimited list of commands (`checkout`, `commit`,
//! `merge`, `set_commit_num`) describing how a commit graph evolves. The
//! interpreter replays the script against a [`Renderer`], which owns all
//! layout and drawing; twig only decides *which* graph mutations happen and
//! in what order.
//!
//! ```ignore
//! let graph = GitGraph::new(GraphOptions::default());
//! let mut renderer = TraceRenderer::default();
//! let report = graph.render("checkout main\ncommit initial", &mut renderer)?;
//! ```
//!
//! [`Renderer`]: artifacts::render::Renderer

pub mod areas;
pub mod artifacts;
pub mod commands;

pub use areas::graph::{GitGraph, RenderReport};
pub use artifacts::render::options::GraphOptions;
