//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`CodeSpan`**: `TICK = b'\`'`
//! - **`Link`** / **`Image`**: `[text](url)` and `![alt](url)`
//! - **`Emphasis`**: `*text*`
//!
//! ## Design Principle
//!
//! All delimiter constants live here, not scattered in scanner code.
//! The scanners call these constants; they never hardcode `[` or `` ` ``.

pub mod code_span;
pub mod emphasis;
pub mod link;

pub use code_span::CodeSpan;
pub use emphasis::Emphasis;
pub use link::{Image, Link};
