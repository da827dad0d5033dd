//! Desktop services
//!
//! Platform integration around the core crate.

pub mod connectivity;
pub mod installer;
mod notebook;

pub use notebook::NotebookService;
