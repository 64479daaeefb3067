use std::fmt;

use serde::{Deserialize, Serialize};

/// One structural unit of the homepage document.
///
/// Serialized internally tagged, e.g. `{"type": "projects", "heading": ..., "items": [...]}`,
/// so renderers can match on the `type` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum HomepageSection {
    /// The untagged block before the first `##` heading.
    Intro(IntroSection),
    Projects(ProjectsSection),
    Experience(ExperienceSection),
    /// Marker only; the post list is supplied by the blog listing at render time.
    Blogs(BlogsSection),
    /// Any other named `##` block, rendered verbatim as markdown.
    Default(DefaultSection),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntroSection {
    /// Text of a leading `# Name` heading, empty if the intro has none.
    pub name: String,
    pub subtitle: String,
    /// Remaining intro lines joined with `\n`.
    pub raw: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectsSection {
    pub heading: String,
    pub items: Vec<ProjectItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceSection {
    pub heading: String,
    pub items: Vec<ExperienceItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogsSection {
    pub heading: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultSection {
    pub heading: String,
    pub raw: String,
}

/// A `###` entry within a projects block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectItem {
    pub title: String,
    /// Unclassified body lines joined with a single space.
    pub description: String,
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// A `###` entry within an experience block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceItem {
    pub role: String,
    pub company: String,
    pub period: String,
    /// Unclassified body lines joined with `\n`, rendered as markdown.
    pub description: String,
}

impl ExperienceItem {
    /// Whether the timeline entry has an expandable body.
    pub fn has_details(&self) -> bool {
        !self.description.is_empty()
    }
}

/// Discriminant of a [`HomepageSection`] without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Intro,
    Projects,
    Experience,
    Blogs,
    Default,
}

impl SectionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SectionKind::Intro => "intro",
            SectionKind::Projects => "projects",
            SectionKind::Experience => "experience",
            SectionKind::Blogs => "blogs",
            SectionKind::Default => "default",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl HomepageSection {
    pub fn kind(&self) -> SectionKind {
        match self {
            HomepageSection::Intro(_) => SectionKind::Intro,
            HomepageSection::Projects(_) => SectionKind::Projects,
            HomepageSection::Experience(_) => SectionKind::Experience,
            HomepageSection::Blogs(_) => SectionKind::Blogs,
            HomepageSection::Default(_) => SectionKind::Default,
        }
    }

    /// The `##` heading text as written, or `None` for the intro.
    pub fn heading(&self) -> Option<&str> {
        match self {
            HomepageSection::Intro(_) => None,
            HomepageSection::Projects(s) => Some(&s.heading),
            HomepageSection::Experience(s) => Some(&s.heading),
            HomepageSection::Blogs(s) => Some(&s.heading),
            HomepageSection::Default(s) => Some(&s.heading),
        }
    }
}
