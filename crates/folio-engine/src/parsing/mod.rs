//! # Homepage Parsing
//!
//! Turns the homepage markdown document into an ordered list of
//! [`HomepageSection`]s.
//!
//! ## Pipeline
//!
//! 1. **`comments`**: strip `<!-- ... -->` editorial notes
//! 2. **`blocks`**: split on `## ` lines into the intro and named blocks
//! 3. **dispatch**: route each named block by its lowercased heading
//! 4. **`intro`** / **`items`**: extract fields from each block
//!
//! The pipeline is total: every input string, however malformed, yields a
//! (possibly empty) list. Unknown headings become [`HomepageSection::Default`]
//! and unrecognized lines become item descriptions.

pub mod blocks;
pub mod comments;
pub mod inline;
pub mod intro;
pub mod items;
pub mod span;

#[cfg(test)]
mod tests;

use crate::models::{
    BlogsSection, DefaultSection, ExperienceSection, HomepageSection, ProjectsSection,
    SectionKind,
};

use blocks::{RawBlock, split_sections};
use intro::parse_intro;
use items::{parse_experience_items, parse_project_items};

pub use comments::strip_comments;

/// Parses a homepage document into its sections, in document order.
///
/// The intro, if the document has any text before its first `## ` line, is
/// always first. Each `## ` heading then yields exactly one section.
pub fn parse_homepage(markdown: &str) -> Vec<HomepageSection> {
    let cleaned = strip_comments(markdown);
    let doc = split_sections(&cleaned);

    let mut sections = Vec::with_capacity(doc.sections.len() + 1);
    if let Some(intro) = parse_intro(doc.intro) {
        sections.push(HomepageSection::Intro(intro));
    }
    sections.extend(doc.sections.iter().map(parse_section));

    log::debug!("parsed homepage into {} sections", sections.len());
    sections
}

/// Where a named `##` block is routed. The intro never comes from a
/// heading, so it has no variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Projects,
    Experience,
    Blogs,
    Default,
}

impl From<BlockKind> for SectionKind {
    fn from(kind: BlockKind) -> Self {
        match kind {
            BlockKind::Projects => SectionKind::Projects,
            BlockKind::Experience => SectionKind::Experience,
            BlockKind::Blogs => SectionKind::Blogs,
            BlockKind::Default => SectionKind::Default,
        }
    }
}

/// Routes a `##` heading. Matching is case-insensitive but otherwise exact.
pub fn classify_heading(heading: &str) -> BlockKind {
    match heading.to_lowercase().as_str() {
        "projects" => BlockKind::Projects,
        "experience" => BlockKind::Experience,
        "blogs" | "blog" => BlockKind::Blogs,
        _ => BlockKind::Default,
    }
}

fn parse_section(block: &RawBlock<'_>) -> HomepageSection {
    let kind = classify_heading(block.heading);
    log::debug!(
        "section {:?} dispatched as {}",
        block.heading,
        SectionKind::from(kind)
    );

    let heading = block.heading.to_string();
    match kind {
        BlockKind::Projects => HomepageSection::Projects(ProjectsSection {
            heading,
            items: parse_project_items(block.body),
        }),
        BlockKind::Experience => HomepageSection::Experience(ExperienceSection {
            heading,
            items: parse_experience_items(block.body),
        }),
        BlockKind::Blogs => HomepageSection::Blogs(BlogsSection { heading }),
        BlockKind::Default => HomepageSection::Default(DefaultSection {
            heading,
            raw: block.body.to_string(),
        }),
    }
}
