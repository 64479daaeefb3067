pub mod homepage;
pub mod section;

pub use homepage::*;
pub use section::*;
