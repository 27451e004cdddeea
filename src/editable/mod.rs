//! Text buffer, positions and selections.
//!
//! # Architecture
//!
//! - [`Buffer`]: the document as a vector of lines, mutated only by range replacement
//! - [`Position`]: a clamped `(row, offset)` cursor bound to one buffer
//! - [`Range`]: anchor + head selection with order-derived start/end
//! - [`Ordered`]: the fallible total order shared by positions and ranges
//! - [`column`]: tab-aware offset/column conversion
//!
//! # Example
//!
//! ```
//! use lexedit::editable::{Buffer, Position, Range};
//!
//! let mut buffer = Buffer::from_text("hello");
//! let mut head = Position::new(&buffer, 4);
//! head.set(&buffer, 0, 5);
//! let mut range = Range::new(head);
//!
//! buffer.replace_range_text(&mut range, " world").unwrap();
//! assert_eq!(buffer.text(), "hello world");
//! assert_eq!(range.head().offset(), 11);
//! ```

mod buffer;
pub mod column;
mod cursor;
mod ordering;
mod selection;

pub use buffer::{Buffer, BufferChange, BufferId};
pub use cursor::{Position, PositionChange, Resolved, PAGE_ROWS};
pub use ordering::Ordered;
pub use selection::{Range, RangeChange};
