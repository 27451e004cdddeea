//! Editing model - the complete state of an editor
//!
//! - `document` - buffer + tokenizer updated in one step
//! - `view` - a document with its cursor, selection, tab width and job queue
//! - `editor` - a view plus mouse state, driven by `update`

pub mod document;
pub mod editor;
pub mod view;

pub use document::{Document, DocumentEdit};
pub use editor::Editor;
pub use view::View;
