use pulldown_cmark::{Event, Parser, Tag, TagEnd};

/// Flattens markdown into plain terminal lines for the preview pane.
///
/// Emphasis markers are dropped, list items get bullets, links keep their
/// destination in angle brackets and code blocks are indented.
pub fn markdown_to_lines(markdown: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut list_depth = 0usize;
    let mut link_dest: Option<String> = None;
    let mut in_code_block = false;

    for event in Parser::new(markdown) {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                flush(&mut lines, &mut current);
                current.push_str(&"#".repeat(level as usize));
                current.push(' ');
            }
            Event::Start(Tag::List(_)) => {
                flush(&mut lines, &mut current);
                list_depth += 1;
            }
            Event::End(TagEnd::List(_)) => {
                list_depth = list_depth.saturating_sub(1);
            }
            Event::Start(Tag::Item) => {
                flush(&mut lines, &mut current);
                current.push_str(&"  ".repeat(list_depth.saturating_sub(1)));
                current.push_str("• ");
            }
            Event::Start(Tag::Link { dest_url, .. }) => {
                link_dest = Some(dest_url.to_string());
            }
            Event::End(TagEnd::Link) => {
                if let Some(url) = link_dest.take() {
                    current.push_str(&format!(" <{url}>"));
                }
            }
            Event::Start(Tag::CodeBlock(_)) => {
                flush(&mut lines, &mut current);
                in_code_block = true;
            }
            Event::End(TagEnd::CodeBlock) => {
                in_code_block = false;
            }
            Event::Text(text) => {
                if in_code_block {
                    lines.extend(text.lines().map(|l| format!("    {l}")));
                } else {
                    current.push_str(&text);
                }
            }
            Event::Code(code) => {
                current.push('`');
                current.push_str(&code);
                current.push('`');
            }
            Event::SoftBreak => current.push(' '),
            Event::HardBreak => flush(&mut lines, &mut current),
            Event::Rule => {
                flush(&mut lines, &mut current);
                lines.push("───".to_string());
            }
            Event::End(TagEnd::Paragraph | TagEnd::Heading(_) | TagEnd::Item) => {
                flush(&mut lines, &mut current);
            }
            _ => {}
        }
    }

    flush(&mut lines, &mut current);
    lines
}

fn flush(lines: &mut Vec<String>, current: &mut String) {
    if current.trim().is_empty() {
        current.clear();
    } else {
        lines.push(std::mem::take(current));
    }
}
