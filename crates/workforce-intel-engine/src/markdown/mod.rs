//! # Markdown Rendering
//!
//! Line-oriented rendering of the small markdown subset that agent reports
//! are written in.
//!
//! ## Rendering Phases
//!
//! 1. **Line Classification** (`classify`): each line is classified on its own,
//!    with no reference to the lines around it, into exactly one [`Block`]
//!
//! 2. **Inline Formatting** (`inline`): the text carried by a block is split
//!    into [`InlineSpan`]s by a two-state bold scanner
//!
//! ## Modules
//!
//! - **`types`**: Output types (`Block`, `InlineSpan`)
//! - **`classify`**: `LineClassifier` with the prefix precedence rules
//! - **`inline`**: `parse_inline()` for `**bold**` spans
//!
//! ## Key Invariants
//!
//! - One output block per input line, in input order (table divider rows
//!   become [`Block::Omitted`] rather than disappearing)
//! - Inline spans concatenate back to the line content minus matched `**` pairs
//! - Rendering never fails

pub mod classify;
pub mod inline;
pub mod types;

#[cfg(test)]
mod tests;

pub use classify::LineClassifier;
pub use inline::parse_inline;
pub use types::{Block, InlineSpan};

/// Renders markdown text into one [`Block`] per line.
///
/// Absent or empty input renders to nothing.
pub fn render(text: Option<&str>) -> Vec<Block> {
    let Some(text) = text.filter(|t| !t.is_empty()) else {
        return vec![];
    };

    let classifier = LineClassifier;
    text.split('\n').map(|line| classifier.classify(line)).collect()
}
