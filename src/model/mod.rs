//! Domain model: the release records read from GitHub and the document tree
//! built from them.

pub mod document;
mod release;

pub use document::DocumentNode;
pub use release::Release;
