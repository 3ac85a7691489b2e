//! Rendering tests over whole documents.

use pretty_assertions::assert_eq;
use rstest::rstest;

use super::{Block, InlineSpan, render};

fn plain(s: &str) -> InlineSpan {
    InlineSpan::Plain(s.to_string())
}

#[test]
fn render_level_two_markdown_heading() {
    assert_eq!(
        render(Some("## Title")),
        vec![Block::Heading {
            level: 3,
            text: vec![plain("Title")],
        }]
    );
}

#[test]
fn render_bullet() {
    assert_eq!(
        render(Some("- item one")),
        vec![Block::ListItem {
            ordered: false,
            text: vec![plain("item one")],
        }]
    );
}

#[test]
fn render_table_suppresses_divider() {
    assert_eq!(
        render(Some("| a | b |\n|---|---|\n| 1 | 2 |")),
        vec![
            Block::TableRow {
                cells: vec![vec![plain("a")], vec![plain("b")]],
            },
            Block::Omitted,
            Block::TableRow {
                cells: vec![vec![plain("1")], vec![plain("2")]],
            },
        ]
    );
}

#[test]
fn render_bold_paragraph() {
    assert_eq!(
        render(Some("**bold** and plain")),
        vec![Block::Paragraph {
            text: vec![InlineSpan::Bold("bold".into()), plain(" and plain")],
        }]
    );
}

#[test]
fn render_absent_or_empty_is_nothing() {
    assert!(render(None).is_empty());
    assert!(render(Some("")).is_empty());
}

#[rstest]
#[case("single line")]
#[case("trailing newline\n")]
#[case("\n\n\n")]
#[case("# A\n## B\n### C\n- d\n* e\n1. f\n| g |\n|---|\n\nh")]
#[case("| x |\r\n|:-:|\r\n")]
fn one_block_per_line(#[case] input: &str) {
    let blocks = render(Some(input));
    assert_eq!(blocks.len(), input.split('\n').count());
}

#[rstest]
#[case("plain only")]
#[case("**Attrition Risk Index**: 38% - High risk")]
#[case("mix **a** of **b** runs")]
#[case("**")]
#[case("****")]
fn spans_rejoin_to_unmarked_text(#[case] line: &str) {
    let blocks = render(Some(line));
    let rejoined = blocks[0].plain_text();
    let markers = line.matches("**").count();
    if markers % 2 == 0 {
        assert_eq!(rejoined, line.replace("**", ""));
    } else {
        assert_eq!(rejoined, line);
    }
}

#[test]
fn block_order_follows_lines() {
    let blocks = render(Some("### Scenario Analysis\n\n1. **Best case**: +280\n2. Base case"));
    insta::assert_debug_snapshot!(blocks, @r#"
    [
        Heading {
            level: 4,
            text: [
                Plain(
                    "Scenario Analysis",
                ),
            ],
        },
        Blank,
        ListItem {
            ordered: true,
            text: [
                Bold(
                    "Best case",
                ),
                Plain(
                    ": +280",
                ),
            ],
        },
        ListItem {
            ordered: true,
            text: [
                Plain(
                    "Base case",
                ),
            ],
        },
    ]
    "#);
}
