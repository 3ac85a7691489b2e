use super::types::InlineSpan;

/// Delimiter on both sides of a bold run.
pub const BOLD: &str = "**";

/// Scanner state: outside a bold run, or inside one opened at byte `open`.
#[derive(Debug, Clone, Copy)]
enum State {
    Outside,
    Inside { open: usize },
}

/// Parses `**bold**` runs out of a line of text.
///
/// Markers pair up left to right. Text between the first and second marker is
/// bold, between the second and third is plain, and so on. A trailing marker
/// with no partner is kept literally in the final plain run, so text with no
/// complete pair comes back as a single [`InlineSpan::Plain`].
///
/// Empty runs are not emitted: `""` parses to no spans, `"****"` to no spans.
pub fn parse_inline(s: &str) -> Vec<InlineSpan> {
    let mut out = vec![];
    let mut state = State::Outside;
    let mut text_start = 0;

    while let Some(found) = s[text_start..].find(BOLD) {
        let marker = text_start + found;
        let run = &s[text_start..marker];
        state = match state {
            State::Outside => {
                push_plain(&mut out, run);
                State::Inside { open: marker }
            }
            State::Inside { .. } => {
                if !run.is_empty() {
                    out.push(InlineSpan::Bold(run.to_string()));
                }
                State::Outside
            }
        };
        text_start = marker + BOLD.len();
    }

    match state {
        State::Outside => push_plain(&mut out, &s[text_start..]),
        // Unclosed: the opening marker and everything after it stay literal
        State::Inside { open } => push_plain(&mut out, &s[open..]),
    }
    out
}

/// Appends plain text, extending the previous span when it is plain too.
fn push_plain(out: &mut Vec<InlineSpan>, text: &str) {
    if text.is_empty() {
        return;
    }
    match out.last_mut() {
        Some(InlineSpan::Plain(prev)) => prev.push_str(text),
        _ => out.push(InlineSpan::Plain(text.to_string())),
    }
}
