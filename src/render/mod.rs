//! Console rendering of a library.

pub mod tree;

pub use tree::{render, render_to_string, PLACEHOLDER};
