//! Module catalog: icon decoding, the Library/Package/Module model, and the
//! JSON loader.

pub mod icon;
pub mod loader;
pub mod model;

pub use icon::IconField;
pub use loader::{load, load_file, load_path};
pub use model::{Library, Module, Package};
