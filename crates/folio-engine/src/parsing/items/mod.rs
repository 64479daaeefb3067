//! # Item Parsing
//!
//! Field extraction for the `###` entries of projects and experience blocks.
//!
//! Each body line is classified on its own by an explicit, ordered rule
//! table; the first rule that claims the line wins and unclaimed lines fall
//! through to the item description. The classifiers are public so each rule
//! can be exercised independently of the splitter.

pub mod experience;
pub mod projects;

pub use experience::{ExperienceLine, classify_experience_line, parse_experience_items, split_role_company};
pub use projects::{ProjectLine, classify_project_line, parse_project_items};
