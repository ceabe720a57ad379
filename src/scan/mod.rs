//! Segment scanning module
//!
//! Single-pass detection of declining runs against a running mean. Up trends
//! reuse the same pass: a monotonic-decrease detector applied to the negated
//! series equals a monotonic-increase detector applied to the series itself.

mod scanner;
mod types;

pub use scanner::scan;
pub use types::{Direction, Segment};
