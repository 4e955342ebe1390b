//! Binding to the external cube renderer shared object.

mod library;

pub use library::{NativeCubeLibrary, DEFAULT_LIBRARY};
