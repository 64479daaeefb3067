pub mod io;
pub mod models;
pub mod parsing;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use io::*;
pub use models::{homepage::*, section::*};
pub use parsing::{parse_homepage, strip_comments};
