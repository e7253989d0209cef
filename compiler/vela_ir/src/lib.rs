//! Vela IR - leaf types shared by every compiler phase.
//!
//! - [`Span`]: byte range into a source file
//! - [`Name`]: interned identifier, compared in O(1)
//! - [`StringInterner`]: thread-safe storage behind `Name`
//!
//! Everything here is `Copy` or cheaply clonable, and is `Send + Sync` so
//! that independent analysis passes can run on separate threads.

mod interner;
mod name;
mod span;

pub use interner::{InternError, StringInterner};
pub use name::Name;
pub use span::{Span, SpanError};
