//! End-to-end tests for homepage parsing.
//!
//! Uses snapshot testing with YAML format for readability.
//! Fixtures (.md) and snapshots (.snap) are co-located in `fixtures/`.


use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::models::*;
use crate::parsing::{BlockKind, classify_heading, parse_homepage};

// Fixture-based snapshot tests

#[test]
fn fixture_homepage_full() {
    assert_fixture("homepage_full");
}

#[test]
fn fixture_comments_and_casing() {
    assert_fixture("comments_and_casing");
}

fn assert_fixture(name: &str) {
    let fixtures_dir = format!("{}/src/parsing/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    let md = std::fs::read_to_string(format!("{fixtures_dir}/{name}.md")).unwrap();

    let sections = parse_homepage(&md);
    invariants::check(&md, &sections);

    insta::with_settings!({
        snapshot_path => fixtures_dir.as_str(),
        prepend_module_to_snapshot => false,
    }, {
        insta::assert_yaml_snapshot!(name, sections);
    });
}

// Document-level behavior

#[test]
fn empty_document() {
    assert!(parse_homepage("").is_empty());
}

#[test]
fn blank_after_stripping_comments() {
    assert!(parse_homepage("  <!-- just a note -->\n\n<!--\nanother\n-->\n").is_empty());
}

#[test]
fn only_blogs_heading() {
    assert_eq!(
        parse_homepage("## Blogs"),
        vec![HomepageSection::Blogs(BlogsSection {
            heading: "Blogs".to_string()
        })]
    );
}

#[test]
fn no_headings_is_intro_only() {
    let sections = parse_homepage("# Ada\nBuilder of engines\nWelcome.");
    assert_eq!(
        sections,
        vec![HomepageSection::Intro(IntroSection {
            name: "Ada".to_string(),
            subtitle: "Builder of engines".to_string(),
            raw: "Welcome.".to_string(),
        })]
    );
}

#[test]
fn sections_follow_document_order() {
    let md = "# Name\nSub\n\n## Projects\n### A\n\n## Experience\n### B @ C\n";
    let kinds: Vec<_> = parse_homepage(md).iter().map(|s| s.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            SectionKind::Intro,
            SectionKind::Projects,
            SectionKind::Experience
        ]
    );
}

#[test]
fn unknown_heading_keeps_body_verbatim() {
    let md = "## About Me\n\nI like **bold** text.\n\n- and\n- lists\n\n";
    assert_eq!(
        parse_homepage(md),
        vec![HomepageSection::Default(DefaultSection {
            heading: "About Me".to_string(),
            raw: "I like **bold** text.\n\n- and\n- lists".to_string(),
        })]
    );
}

#[test]
fn heading_without_body() {
    assert_eq!(
        parse_homepage("## Projects"),
        vec![HomepageSection::Projects(ProjectsSection {
            heading: "Projects".to_string(),
            items: vec![],
        })]
    );
}

#[test]
fn comment_hides_a_heading() {
    let md = "## About\nHi\n<!--\n## Secret\nnot yet\n-->\n## Blog";
    let headings: Vec<_> = parse_homepage(md)
        .iter()
        .filter_map(|s| s.heading().map(str::to_string))
        .collect();
    assert_eq!(headings, vec!["About", "Blog"]);
}

#[test]
fn unterminated_comment_is_text() {
    let sections = parse_homepage("## About\nbefore <!-- never closed");
    assert_eq!(
        sections,
        vec![HomepageSection::Default(DefaultSection {
            heading: "About".to_string(),
            raw: "before <!-- never closed".to_string(),
        })]
    );
}

#[test]
fn heading_casing_is_preserved() {
    let sections = parse_homepage("## PROJECTS\n### One\n## My Blog\n## BLOG");
    assert_eq!(sections[0].heading(), Some("PROJECTS"));
    assert_eq!(sections[0].kind(), SectionKind::Projects);
    assert_eq!(sections[1].kind(), SectionKind::Default);
    assert_eq!(sections[2].heading(), Some("BLOG"));
    assert_eq!(sections[2].kind(), SectionKind::Blogs);
}

#[rstest]
#[case("Projects", BlockKind::Projects)]
#[case("PROJECTS", BlockKind::Projects)]
#[case("pRoJeCtS", BlockKind::Projects)]
#[case("Experience", BlockKind::Experience)]
#[case("Blogs", BlockKind::Blogs)]
#[case("blog", BlockKind::Blogs)]
#[case("Project", BlockKind::Default)]
#[case("My Projects", BlockKind::Default)]
#[case("Blog posts", BlockKind::Default)]
#[case("", BlockKind::Default)]
fn dispatches_heading(#[case] heading: &str, #[case] expected: BlockKind) {
    assert_eq!(classify_heading(heading), expected);
}

#[test]
fn routed_kind_matches_parsed_section() {
    for heading in ["Projects", "experience", "BLOG", "About"] {
        let sections = parse_homepage(&format!("## {heading}
body"));
        assert_eq!(
            sections[0].kind(),
            SectionKind::from(classify_heading(heading))
        );
    }
}

#[test]
fn project_lines_end_to_end() {
    let md = "## Projects\n\
              ### Thing\n\
              Built a thing with [docs](https://x) for users\n\
              `Go` `React`\n\
              ![Screenshot](https://x/y.png)\n";

    assert_eq!(
        parse_homepage(md),
        vec![HomepageSection::Projects(ProjectsSection {
            heading: "Projects".to_string(),
            items: vec![ProjectItem {
                title: "Thing".to_string(),
                description: "Built a thing with [docs](https://x) for users".to_string(),
                tags: vec!["Go".to_string(), "React".to_string()],
                link: None,
                image: Some("https://x/y.png".to_string()),
            }],
        })]
    );
}

#[test]
fn experience_end_to_end() {
    let md = "## Experience\n\
              ### Staff Engineer @ Acme Corp\n\
              *2023-Present*\n\
              *also italic*\n\
              Ran the platform team\n";

    assert_eq!(
        parse_homepage(md),
        vec![HomepageSection::Experience(ExperienceSection {
            heading: "Experience".to_string(),
            items: vec![ExperienceItem {
                role: "Staff Engineer".to_string(),
                company: "Acme Corp".to_string(),
                period: "2023-Present".to_string(),
                description: "*also italic*\nRan the platform team".to_string(),
            }],
        })]
    );
}

#[test]
fn intro_headings_below_level_one_stay_in_intro() {
    let sections = parse_homepage("# Ada\nSub\n### Aside\ntext\n## About\nx");
    assert_eq!(
        sections[0],
        HomepageSection::Intro(IntroSection {
            name: "Ada".to_string(),
            subtitle: "Sub".to_string(),
            raw: "### Aside\ntext".to_string(),
        })
    );
    assert_eq!(sections.len(), 2);
}
