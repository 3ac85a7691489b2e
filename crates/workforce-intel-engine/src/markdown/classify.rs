use std::sync::OnceLock;

use regex::Regex;

use super::{inline::parse_inline, types::Block};

/// Heading prefixes and the level each renders at, longest prefix first.
const HEADINGS: [(&str, u8); 3] = [("### ", 4), ("## ", 3), ("# ", 2)];
const BULLETS: [&str; 2] = ["- ", "* "];
const TABLE_DELIMITER: char = '|';

fn ordered_item_regex() -> &'static Regex {
    static ORDERED_ITEM: OnceLock<Regex> = OnceLock::new();
    // ASCII digits only; `\d` would also accept other scripts' numerals.
    ORDERED_ITEM.get_or_init(|| Regex::new(r"^[0-9]+\.\s").expect("Invalid ordered item regex"))
}

/// Classifies individual lines into [`Block`]s.
///
/// Each line is classified independently; the first matching rule wins:
/// headings, bullets, numbered items, table rows, blank lines, paragraphs.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineClassifier;

impl LineClassifier {
    pub fn classify(&self, line: &str) -> Block {
        for (prefix, level) in HEADINGS {
            if let Some(rest) = line.strip_prefix(prefix) {
                return Block::Heading {
                    level,
                    text: parse_inline(rest),
                };
            }
        }

        for bullet in BULLETS {
            if let Some(rest) = line.strip_prefix(bullet) {
                return Block::ListItem {
                    ordered: false,
                    text: parse_inline(rest),
                };
            }
        }

        if let Some(m) = ordered_item_regex().find(line) {
            return Block::ListItem {
                ordered: true,
                text: parse_inline(&line[m.end()..]),
            };
        }

        if line.starts_with(TABLE_DELIMITER) {
            return classify_table_row(line);
        }

        if line.trim().is_empty() {
            return Block::Blank;
        }

        Block::Paragraph {
            text: parse_inline(line),
        }
    }
}

/// Splits a `|`-delimited line into cells, suppressing divider rows.
///
/// Whitespace-only fragments (including those produced by the leading and
/// trailing delimiters) are dropped. A row whose remaining cells are made only
/// of whitespace, `-` and `:` is a divider and renders as [`Block::Omitted`].
fn classify_table_row(line: &str) -> Block {
    let cells: Vec<&str> = line
        .split(TABLE_DELIMITER)
        .filter(|cell| !cell.trim().is_empty())
        .collect();

    if cells.iter().all(|cell| is_divider_cell(cell)) {
        return Block::Omitted;
    }

    Block::TableRow {
        cells: cells
            .into_iter()
            .map(|cell| parse_inline(cell.trim()))
            .collect(),
    }
}

fn is_divider_cell(cell: &str) -> bool {
    !cell.is_empty()
        && cell
            .chars()
            .all(|c| c.is_whitespace() || c == '-' || c == ':')
}
