use folio_engine::{Homepage, HomepageSection};
use ratatui::widgets::ListState;

use crate::markdown::markdown_to_lines;

pub struct App {
    pub sections: Vec<HomepageSection>,
    pub section_list_state: ListState,
    pub current_content: Vec<String>,
}

impl App {
    pub fn new(homepage: &Homepage) -> Self {
        let mut app = Self {
            sections: homepage.render_sections(),
            section_list_state: ListState::default(),
            current_content: Vec::new(),
        };

        // Select first section if available
        if !app.sections.is_empty() {
            app.section_list_state.select(Some(0));
            app.update_content_for_selection();
        }

        app
    }

    pub fn next_section(&mut self) {
        if self.sections.is_empty() {
            return;
        }
        let i = match self.section_list_state.selected() {
            Some(i) => (i + 1) % self.sections.len(),
            None => 0,
        };
        self.section_list_state.select(Some(i));
        self.update_content_for_selection();
    }

    pub fn previous_section(&mut self) {
        if self.sections.is_empty() {
            return;
        }
        let i = match self.section_list_state.selected() {
            Some(0) | None => self.sections.len() - 1,
            Some(i) => i - 1,
        };
        self.section_list_state.select(Some(i));
        self.update_content_for_selection();
    }

    fn update_content_for_selection(&mut self) {
        if let Some(index) = self.section_list_state.selected()
            && let Some(section) = self.sections.get(index)
        {
            self.current_content = section_detail_lines(section);
        }
    }
}

/// One-line label for the section list.
pub fn section_title(section: &HomepageSection) -> String {
    match section {
        HomepageSection::Intro(intro) if intro.name.is_empty() => "intro".to_string(),
        HomepageSection::Intro(intro) => format!("intro: {}", intro.name),
        HomepageSection::Projects(p) => format!("projects: {} ({})", p.heading, p.items.len()),
        HomepageSection::Experience(e) => {
            format!("experience: {} ({})", e.heading, e.items.len())
        }
        HomepageSection::Blogs(b) => format!("blogs: {}", b.heading),
        HomepageSection::Default(d) => format!("section: {}", d.heading),
    }
}

/// Field-by-field view of a section for the content pane.
pub fn section_detail_lines(section: &HomepageSection) -> Vec<String> {
    let mut lines = Vec::new();

    match section {
        HomepageSection::Intro(intro) => {
            if !intro.name.is_empty() {
                lines.push(intro.name.clone());
            }
            if !intro.subtitle.is_empty() {
                lines.push(intro.subtitle.clone());
            }
            lines.push(String::new());
            lines.extend(markdown_to_lines(&intro.raw));
        }
        HomepageSection::Projects(projects) => {
            for item in &projects.items {
                lines.push(format!("▸ {}", item.title));
                if !item.description.is_empty() {
                    lines.push(format!("  {}", item.description));
                }
                if !item.tags.is_empty() {
                    lines.push(format!("  tags: {}", item.tags.join(", ")));
                }
                if let Some(link) = &item.link {
                    lines.push(format!("  link: {link}"));
                }
                if let Some(image) = &item.image {
                    lines.push(format!("  image: {image}"));
                }
                lines.push(String::new());
            }
        }
        HomepageSection::Experience(experience) => {
            for item in &experience.items {
                if item.company.is_empty() {
                    lines.push(format!("▸ {}", item.role));
                } else {
                    lines.push(format!("▸ {} @ {}", item.role, item.company));
                }
                if !item.period.is_empty() {
                    lines.push(format!("  {}", item.period));
                }
                if item.has_details() {
                    lines.extend(
                        markdown_to_lines(&item.description)
                            .into_iter()
                            .map(|l| format!("  {l}")),
                    );
                }
                lines.push(String::new());
            }
        }
        HomepageSection::Blogs(_) => {
            lines.push("Published posts are listed here when the page renders.".to_string());
        }
        HomepageSection::Default(section) => {
            lines.extend(markdown_to_lines(&section.raw));
        }
    }

    lines
}
