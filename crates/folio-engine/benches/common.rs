// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_homepage(items: usize) -> String {
    let mut content = String::from("<!-- generated -->\n# Bench Person\nSubtitle line\n\nIntro text.\n\n");

    content.push_str("## Projects\n\n");
    for i in 0..items {
        content.push_str(&format!(
            "### Project {i}\nDescription for project {i} with [a link](https://x/{i}) inline.\n`Rust` `Tag{i}`\n[Repo](https://example.com/{i})\n![Shot](https://img/{i}.png)\n\n"
        ));
    }

    content.push_str("## Experience\n\n");
    for i in 0..items {
        content.push_str(&format!(
            "### Role {i} @ Company {i}\n*20{:02}-Present*\n- Did thing one\n- Did thing two\n\n",
            i % 100
        ));
    }

    content.push_str("## Blogs\n\n## Contact\nSay hi.\n");
    content
}
