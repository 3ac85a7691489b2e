use serde::Serialize;

/// A run of inline text, either plain or emphasised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum InlineSpan {
    Plain(String),
    Bold(String),
}

impl InlineSpan {
    /// The text of the span without any formatting markers.
    pub fn text(&self) -> &str {
        match self {
            InlineSpan::Plain(text) | InlineSpan::Bold(text) => text,
        }
    }
}

/// One display unit produced from one input line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Block {
    /// A heading. `#` renders at level 2, `##` at 3 and `###` at 4.
    Heading { level: u8, text: Vec<InlineSpan> },
    /// A bullet (`- `, `* `) or numbered (`1. `) list item with its marker removed.
    ///
    /// Numbered items do not keep their numeral; numbering is up to the presenter.
    ListItem { ordered: bool, text: Vec<InlineSpan> },
    /// A table row. Cell count may differ from row to row.
    TableRow { cells: Vec<Vec<InlineSpan>> },
    /// Any other non-blank line.
    Paragraph { text: Vec<InlineSpan> },
    /// A whitespace-only line.
    Blank,
    /// A line that must not be displayed, such as a table divider row.
    Omitted,
}

impl Block {
    /// Concatenated plain text of the block, markers removed.
    ///
    /// Table cells are joined with `" | "`; `Blank` and `Omitted` are empty.
    pub fn plain_text(&self) -> String {
        fn join(spans: &[InlineSpan]) -> String {
            spans.iter().map(InlineSpan::text).collect()
        }

        match self {
            Block::Heading { text, .. }
            | Block::ListItem { text, .. }
            | Block::Paragraph { text } => join(text),
            Block::TableRow { cells } => cells
                .iter()
                .map(|cell| join(cell))
                .collect::<Vec<_>>()
                .join(" | "),
            Block::Blank | Block::Omitted => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_strips_markers() {
        let block = Block::Paragraph {
            text: vec![
                InlineSpan::Bold("bold".into()),
                InlineSpan::Plain(" and plain".into()),
            ],
        };
        assert_eq!(block.plain_text(), "bold and plain");
    }

    #[test]
    fn plain_text_joins_cells() {
        let block = Block::TableRow {
            cells: vec![
                vec![InlineSpan::Plain("a".into())],
                vec![InlineSpan::Bold("b".into())],
            ],
        };
        assert_eq!(block.plain_text(), "a | b");
    }

    #[test]
    fn spacer_blocks_have_no_text() {
        assert_eq!(Block::Blank.plain_text(), "");
        assert_eq!(Block::Omitted.plain_text(), "");
    }
}
