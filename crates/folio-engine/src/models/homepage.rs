use crate::models::{BlogsSection, HomepageSection, SectionKind};
use crate::parsing::parse_homepage;

/// Heading used for the blog listing when the document has no blogs section.
pub const DEFAULT_BLOGS_HEADING: &str = "Blogs";

/// A parsed homepage document, ready to hand to the page renderers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Homepage {
    sections: Vec<HomepageSection>,
}

impl Homepage {
    /// Parse a homepage document. Never fails; see [`parse_homepage`].
    pub fn parse(markdown: &str) -> Self {
        Self {
            sections: parse_homepage(markdown),
        }
    }

    /// Sections exactly as they appear in the document.
    pub fn sections(&self) -> &[HomepageSection] {
        &self.sections
    }

    pub fn has_blogs_section(&self) -> bool {
        self.sections
            .iter()
            .any(|s| s.kind() == SectionKind::Blogs)
    }

    /// Sections in render order.
    ///
    /// The page always shows a blog listing: if the author did not place one,
    /// a `Blogs` section headed [`DEFAULT_BLOGS_HEADING`] is appended last.
    pub fn render_sections(&self) -> Vec<HomepageSection> {
        let mut sections = self.sections.clone();
        if !self.has_blogs_section() {
            sections.push(HomepageSection::Blogs(BlogsSection {
                heading: DEFAULT_BLOGS_HEADING.to_string(),
            }));
        }
        sections
    }
}
