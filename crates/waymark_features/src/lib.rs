//! Map elements (point features and routes) and the index that resolves permalink ids to them.
//!
//! Every element is addressed by an [ElementPath] of the form `{type}/{name}/{id}`.
//! The index first maps an id to its path, and then the path to the element itself.

mod element;
mod error;
mod index;
mod path;

pub use element::*;
pub use error::*;
pub use index::*;
pub use path::*;
