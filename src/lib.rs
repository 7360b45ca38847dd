//! gdoc - module catalog browser
//!
//! Loads a JSON library of packages and modules, renders it as a box-drawing
//! tree for the console, and serves it as HTML pages while a background task
//! swaps in freshly loaded catalogs.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod render;
pub mod state;
pub mod telemetry;
pub mod web;

pub use error::{GdocError, LoadError, MalformedIcon, RequestError, Result};
