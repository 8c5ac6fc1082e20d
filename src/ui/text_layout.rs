// ── Boxed greedy text layout ──────────────────────────────────────────────────

use crate::geometry::Rect;

/// Anything that can report how wide a string renders at a given font size.
pub trait TextMeasure {
    fn measure_text(&self, text: &str, font_size: f32) -> f32;
}

impl<F: Fn(&str, f32) -> f32> TextMeasure for F {
    fn measure_text(&self, text: &str, font_size: f32) -> f32 {
        self(text, font_size)
    }
}

/// One committed line of a boxed layout.
#[derive(Clone, Debug, PartialEq)]
pub struct LaidOutLine {
    /// Space-joined words, each followed by a single space.
    pub text: String,
    /// Top of the line in screen pixels.
    pub y: f32,
}

/// Greedy word wrap of `message` into `bounds`.
///
/// Words are split on single spaces and appended to an accumulator line
/// (`word + " "`). When appending a word would make a non-empty accumulator
/// wider than `bounds.w`, the accumulator is committed and the word starts
/// the next line, one line height (`font_size + line_spacing`) lower. A word
/// is never split; a word wider than the box sits alone on its line.
///
/// If a new line would start below `bounds.bottom() - line_height`, layout
/// stops there and that word plus everything after it is dropped. Otherwise
/// the remaining accumulator is committed once after the last word, without
/// a width check. At least one line is always returned; `""` yields `" "`.
pub fn wrap_text_boxed<M>(
    message: &str,
    bounds: Rect,
    font_size: f32,
    line_spacing: f32,
    measure: &M,
) -> Vec<LaidOutLine>
where
    M: TextMeasure + ?Sized,
{
    let line_height = font_size + line_spacing;
    let last_line_y = bounds.bottom() - line_height;

    let mut lines = Vec::new();
    let mut line = String::new();
    let mut y = bounds.y;

    for word in message.split(' ') {
        let candidate = format!("{line}{word} ");

        if !line.is_empty() && measure.measure_text(&candidate, font_size) > bounds.w {
            lines.push(LaidOutLine { text: std::mem::take(&mut line), y });
            y += line_height;

            if y > last_line_y {
                return lines;
            }
            line = format!("{word} ");
        } else {
            line = candidate;
        }
    }

    lines.push(LaidOutLine { text: line, y });
    lines
}

/// Number of message words carried by `lines`. Each word, empty or not, is
/// stored with exactly one trailing space.
pub fn word_count(lines: &[LaidOutLine]) -> usize {
    lines.iter().map(|l| l.text.matches(' ').count()).sum()
}

/// How many lines of `line_height` fit in `height`.
pub fn line_capacity(height: f32, line_height: f32) -> usize {
    if line_height <= 0.0 {
        return 0;
    }
    (height / line_height).floor().max(0.0) as usize
}
