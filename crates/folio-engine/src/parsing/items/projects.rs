use crate::models::ProjectItem;
use crate::parsing::blocks::{RawBlock, split_items};
use crate::parsing::inline::{code_spans, first_link, whole_image};
use crate::parsing::span::{Span, only_whitespace_outside};

/// What a single project body line contributes to its item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectLine<'a> {
    /// `![alt](url)` on its own: the url.
    Image(&'a str),
    /// Only code spans: their contents, left to right.
    Tags(Vec<&'a str>),
    /// `[text](url)` on its own: the url.
    Link(&'a str),
    Description(&'a str),
}

type ProjectRule = for<'a> fn(&'a str) -> Option<ProjectLine<'a>>;

/// Metadata rules in priority order.
const PROJECT_RULES: [ProjectRule; 3] = [image_line, tag_line, link_line];

/// Classifies a trimmed, non-blank project body line.
///
/// Metadata rules only claim a line made entirely of their token, so a
/// sentence that merely mentions `code` or a [link](url) stays description.
pub fn classify_project_line(line: &str) -> ProjectLine<'_> {
    PROJECT_RULES
        .iter()
        .find_map(|rule| rule(line))
        .unwrap_or(ProjectLine::Description(line))
}

pub fn image_line(line: &str) -> Option<ProjectLine<'_>> {
    whole_image(line).map(|m| ProjectLine::Image(m.url.slice(line)))
}

pub fn tag_line(line: &str) -> Option<ProjectLine<'_>> {
    let spans = code_spans(line);
    if spans.is_empty() {
        return None;
    }

    let full: Vec<Span> = spans.iter().map(|m| m.full).collect();
    if !only_whitespace_outside(line, &full) {
        return None;
    }

    Some(ProjectLine::Tags(
        spans.iter().map(|m| m.inner.slice(line)).collect(),
    ))
}

pub fn link_line(line: &str) -> Option<ProjectLine<'_>> {
    let m = first_link(line)?;
    only_whitespace_outside(line, &[m.full]).then(|| ProjectLine::Link(m.url.slice(line)))
}

/// Parses the body of a `## Projects` block into one item per `###` entry.
pub fn parse_project_items(body: &str) -> Vec<ProjectItem> {
    split_items(body).into_iter().map(parse_project_item).collect()
}

fn parse_project_item(block: RawBlock<'_>) -> ProjectItem {
    let mut item = ProjectItem {
        title: block.heading.to_string(),
        ..Default::default()
    };

    for line in block.body_lines() {
        match classify_project_line(line) {
            ProjectLine::Image(url) => item.image = Some(url.to_string()),
            ProjectLine::Tags(tags) => item.tags.extend(tags.into_iter().map(str::to_string)),
            ProjectLine::Link(url) => item.link = Some(url.to_string()),
            ProjectLine::Description(text) => {
                if !item.description.is_empty() {
                    item.description.push(' ');
                }
                item.description.push_str(text);
            }
        }
    }

    log::trace!(
        "project {:?}: {} tags, link={}, image={}",
        item.title,
        item.tags.len(),
        item.link.is_some(),
        item.image.is_some()
    );
    item
}
