use std::sync::LazyLock;

use regex::Regex;

use crate::models::ExperienceItem;
use crate::parsing::blocks::{RawBlock, split_items};
use crate::parsing::inline::kinds::Emphasis;

/// `Role @ Company`: the first `@` that has text on both sides.
static ROLE_AT_COMPANY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+?)\s*@\s*(.+)$").unwrap());

/// What a single experience body line contributes to its item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExperienceLine<'a> {
    /// Inner text of an `*italic*` line.
    Period(&'a str),
    Description(&'a str),
}

/// Splits an experience heading into `(role, company)`.
///
/// Without a usable `@` the whole heading is the role and company is empty.
pub fn split_role_company(heading: &str) -> (&str, &str) {
    match ROLE_AT_COMPANY.captures(heading) {
        Some(caps) => match (caps.get(1), caps.get(2)) {
            (Some(role), Some(company)) => (role.as_str().trim(), company.as_str().trim()),
            _ => (heading, ""),
        },
        None => (heading, ""),
    }
}

/// Classifies a trimmed, non-blank experience body line.
///
/// Only the first italic-only line of an item is its period: once
/// `period_set` is true, further italic lines are ordinary description.
pub fn classify_experience_line(line: &str, period_set: bool) -> ExperienceLine<'_> {
    match Emphasis::wrapped(line) {
        Some(period) if !period_set => ExperienceLine::Period(period),
        _ => ExperienceLine::Description(line),
    }
}

/// Parses the body of a `## Experience` block into one item per `###` entry.
pub fn parse_experience_items(body: &str) -> Vec<ExperienceItem> {
    split_items(body)
        .into_iter()
        .map(parse_experience_item)
        .collect()
}

fn parse_experience_item(block: RawBlock<'_>) -> ExperienceItem {
    let (role, company) = split_role_company(block.heading);
    let mut item = ExperienceItem {
        role: role.to_string(),
        company: company.to_string(),
        ..Default::default()
    };

    for line in block.body_lines() {
        match classify_experience_line(line, !item.period.is_empty()) {
            ExperienceLine::Period(period) => item.period = period.to_string(),
            ExperienceLine::Description(text) => {
                if !item.description.is_empty() {
                    item.description.push('\n');
                }
                item.description.push_str(text);
            }
        }
    }

    log::trace!(
        "experience {:?} at {:?}: period={:?}",
        item.role,
        item.company,
        item.period
    );
    item
}
