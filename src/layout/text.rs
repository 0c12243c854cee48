use crate::font::FontMetrics;
use crate::units::Pt;

/// A wrapped line of text, remembering whether it closes its paragraph (the input
/// ended or a hard line break followed it). Justification leaves such lines ragged.
#[derive(Clone, Debug, PartialEq)]
pub struct WrappedLine {
    pub text: String,
    pub ends_paragraph: bool,
}

/// Greedily wraps `text` into lines no wider than `max_width` when set in `font` at
/// `size`.
///
/// Words are accumulated onto a line for as long as the line (with single spaces
/// between words) still fits; the first word that would overflow starts the next
/// line. A word that is wider than `max_width` on its own is never split or
/// dropped, it is placed alone on its own line and will overhang.
///
/// Newlines in the input are hard line breaks, so an empty line between two
/// newlines is kept as an empty string. Input that is empty or only whitespace
/// produces no lines at all.
pub fn wrap_text<F: FontMetrics + ?Sized>(
    text: &str,
    max_width: Pt,
    font: &F,
    size: Pt,
) -> Vec<String> {
    wrap_text_lines(text, max_width, font, size)
        .into_iter()
        .map(|line| line.text)
        .collect()
}

/// As [wrap_text], but keeps track of which lines end a paragraph
pub fn wrap_text_lines<F: FontMetrics + ?Sized>(
    text: &str,
    max_width: Pt,
    font: &F,
    size: Pt,
) -> Vec<WrappedLine> {
    // normalize newlines
    let text = text.replace("\r\n", "\n").replace('\r', "\n");
    let text = text.trim();
    if text.is_empty() {
        return Vec::new();
    }

    let mut lines: Vec<WrappedLine> = Vec::new();
    for segment in text.split('\n') {
        let mut words = segment.split_whitespace();
        let Some(first) = words.next() else {
            lines.push(WrappedLine {
                text: String::new(),
                ends_paragraph: true,
            });
            continue;
        };

        let mut line = first.to_string();
        for word in words {
            let candidate = format!("{line} {word}");
            if font.width_of_text(&candidate, size) <= max_width {
                line = candidate;
            } else {
                lines.push(WrappedLine {
                    text: std::mem::replace(&mut line, word.to_string()),
                    ends_paragraph: false,
                });
            }
        }
        lines.push(WrappedLine {
            text: line,
            ends_paragraph: true,
        });
    }

    lines
}

/// Spreads the words of a single line across `width`, returning each word with its
/// horizontal offset from the start of the line. The leftover space is divided
/// evenly between the gaps, so the last word ends flush with `width`. Lines of a
/// single word are returned unchanged at offset zero.
pub fn justify_line<F: FontMetrics + ?Sized>(
    line: &str,
    width: Pt,
    font: &F,
    size: Pt,
) -> Vec<(String, Pt)> {
    let words: Vec<(&str, Pt)> = line
        .split_whitespace()
        .map(|word| (word, font.width_of_text(word, size)))
        .collect();

    if words.len() < 2 {
        return words
            .into_iter()
            .map(|(word, _)| (word.to_string(), Pt(0.0)))
            .collect();
    }

    let words_width: Pt = words.iter().map(|(_, w)| *w).sum();
    let gap = ((width - words_width) / (words.len() - 1) as f32)
        .max(font.width_of_text(" ", size));

    let mut x = Pt(0.0);
    let mut placed = Vec::with_capacity(words.len());
    for (word, word_width) in words {
        placed.push((word.to_string(), x));
        x += word_width + gap;
    }
    placed
}
