//! Integration tests for block extraction.

use ignoregen_blocks::parser::{Block, Unit, extract};
use pretty_assertions::assert_eq;

fn line(s: &str) -> Unit {
    Unit::Line(s.to_string())
}

fn block(header: &str, content: &[&str]) -> Unit {
    Unit::Block(Block::new(
        header,
        content.iter().map(|s| s.to_string()).collect(),
    ))
}

#[test]
fn test_only_template() {
    let units = extract(&["# ignoregen env", ".env*", ".envrc", "!.env.example", ""]);
    assert_eq!(
        units,
        vec![block("# ignoregen env", &[".env*", ".envrc", "!.env.example"])]
    );
}

#[test]
fn test_multiple_templates() {
    let units = extract(&[
        "# ignoregen env",
        ".env*",
        ".envrc",
        "!.env.example",
        "",
        "# ignoregen node",
        "node_modules/",
        "",
    ]);
    assert_eq!(
        units,
        vec![
            block("# ignoregen env", &[".env*", ".envrc", "!.env.example"]),
            block("# ignoregen node", &["node_modules/"]),
        ]
    );
}

#[test]
fn test_mixed_plain_lines_and_templates() {
    let units = extract(&[
        ".vscode/",
        "# ignoregen env",
        ".env*",
        ".envrc",
        "!.env.example",
        "",
        "dist/",
        "lib/",
        "",
    ]);
    assert_eq!(
        units,
        vec![
            line(".vscode/"),
            block("# ignoregen env", &[".env*", ".envrc", "!.env.example"]),
            line("dist/"),
            line("lib/"),
            line(""),
        ]
    );
}

#[test]
fn test_templates_with_empty_content() {
    let units = extract(&["# ignoregen node", "", "# ignoregen env", ""]);
    assert_eq!(
        units,
        vec![block("# ignoregen node", &[]), block("# ignoregen env", &[])]
    );
}

#[test]
fn test_near_miss_comments_are_plain_lines() {
    let units = extract(&["#ignoregen node", "# ignoregen", "node_modules/"]);
    assert!(units.iter().all(|u| !u.is_block()));
    assert_eq!(units.len(), 3);
}

#[test]
fn test_directive_with_inline_options_keeps_header_verbatim() {
    let header = r#"# ignoregen env {"src": "https://example.com/ignores/"}"#;
    let units = extract(&[header, ".env*", ""]);
    assert_eq!(units[0].as_block().map(|b| b.header.as_str()), Some(header));
}
