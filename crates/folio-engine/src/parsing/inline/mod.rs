//! # Inline Scanning
//!
//! Cursor-based scanners for the few inline tokens the homepage grammar cares
//! about: code spans, links and images.
//!
//! ## Modules
//!
//! - **`types`**: match records (`CodeSpanMatch`, `LinkMatch`) holding byte spans
//! - **`kinds`**: token types with owned delimiters (CodeSpan, Link, Image, Emphasis)
//! - **`cursor`**: `Cursor` for byte-by-byte scanning with position tracking
//! - **`parser`**: `code_spans()`, `first_link()`, `whole_image()`
//!
//! Each scanner runs independently over the whole line. There is no shared
//! precedence between them: a link whose text contains a code span is still a
//! link to `first_link()`, and its code span is still seen by `code_spans()`.
//! Which token wins is decided by the line classifiers, not here.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::{code_spans, first_link, whole_image};
pub use types::{CodeSpanMatch, LinkMatch};
