//! Runtime module - cooperative scheduling
//!
//! - `ticker` - host-driven periodic tick source
//! - `jobs` - queue that runs one job per tick, used to pace re-lexing

pub mod jobs;
pub mod ticker;

pub use jobs::{Job, JobQueue};
pub use ticker::Ticker;
