//! Text metrics approximation.
//!
//! No font shaping is performed. Character widths come from three classes
//! scaled by the font size, and line boxes are built by greedy word wrap.
//! Downstream consumers rely on these exact ratios.

use crate::types::{LineBox, TextMetrics};

pub const WIDE_CHARS: &str = "mwWMOQ@";
pub const NARROW_CHARS: &str = "iljI.,:;";

pub const WIDE_RATIO: f64 = 0.8;
pub const NARROW_RATIO: f64 = 0.3;
pub const SPACE_RATIO: f64 = 0.25;
pub const DEFAULT_RATIO: f64 = 0.5;

pub const ASCENT_RATIO: f64 = 0.75;
pub const DESCENT_RATIO: f64 = 0.25;
pub const FONT_BOX_ASCENT_RATIO: f64 = 0.8;
pub const FONT_BOX_DESCENT_RATIO: f64 = 0.2;

pub fn char_width(ch: char, font_size: f64) -> f64 {
    let ratio = if ch == ' ' {
        SPACE_RATIO
    } else if WIDE_CHARS.contains(ch) {
        WIDE_RATIO
    } else if NARROW_CHARS.contains(ch) {
        NARROW_RATIO
    } else {
        DEFAULT_RATIO
    };
    ratio * font_size
}

pub fn estimate_width(text: &str, font_size: f64) -> f64 {
    text.chars().map(|ch| char_width(ch, font_size)).sum()
}

/// Parameters for [`layout_lines`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineLayout<'a> {
    pub font_size: f64,
    pub line_height: f64,
    /// Wrap width; `f64::INFINITY` disables wrapping.
    pub max_width: f64,
    /// Horizontal alignment (`LEFT`, `CENTER`, `RIGHT`, `JUSTIFIED`).
    pub alignment: &'a str,
}

/// Greedy word wrap. Each `\n`-separated paragraph wraps independently.
pub fn layout_lines(text: &str, layout: &LineLayout<'_>) -> Vec<LineBox> {
    let mut lines = Vec::new();
    let mut y = 0.0;

    for paragraph in text.split('\n') {
        let mut current = String::new();
        for word in paragraph.split(' ') {
            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                format!("{current} {word}")
            };
            if estimate_width(&candidate, layout.font_size) > layout.max_width
                && !current.is_empty()
            {
                lines.push(line_box(std::mem::take(&mut current), y, layout));
                y += layout.line_height;
                current = word.to_string();
            } else {
                current = candidate;
            }
        }
        lines.push(line_box(current, y, layout));
        y += layout.line_height;
    }

    lines
}

fn line_box(text: String, y: f64, layout: &LineLayout<'_>) -> LineBox {
    let width = estimate_width(&text, layout.font_size);
    let free = if layout.max_width.is_finite() {
        (layout.max_width - width).max(0.0)
    } else {
        0.0
    };
    let x = match layout.alignment.to_ascii_uppercase().as_str() {
        "CENTER" => free / 2.0,
        "RIGHT" => free,
        _ => 0.0,
    };
    LineBox {
        text,
        x,
        y,
        width,
        height: layout.line_height,
        baseline: y + ASCENT_RATIO * layout.font_size,
        ascent: ASCENT_RATIO * layout.font_size,
        descent: DESCENT_RATIO * layout.font_size,
        leading: layout.line_height - layout.font_size,
        alignment: layout.alignment.to_string(),
    }
}

/// Summary metrics over already laid-out line boxes.
pub fn summarize(lines: &[LineBox], font_size: f64, line_height: f64) -> TextMetrics {
    TextMetrics {
        ascent: ASCENT_RATIO * font_size,
        descent: DESCENT_RATIO * font_size,
        font_box_ascent: FONT_BOX_ASCENT_RATIO * font_size,
        font_box_descent: FONT_BOX_DESCENT_RATIO * font_size,
        line_height,
        width: lines.iter().map(|l| l.width).fold(0.0, f64::max),
        height: line_height * lines.len() as f64,
        line_count: lines.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(max_width: f64, alignment: &str) -> LineLayout<'_> {
        LineLayout {
            font_size: 10.0,
            line_height: 12.0,
            max_width,
            alignment,
        }
    }

    #[test]
    fn character_classes_use_fixed_ratios() {
        assert_eq!(char_width('m', 10.0), 8.0);
        assert_eq!(char_width('@', 10.0), 8.0);
        assert_eq!(char_width('i', 10.0), 3.0);
        assert_eq!(char_width(';', 10.0), 3.0);
        assert_eq!(char_width(' ', 10.0), 2.5);
        assert_eq!(char_width('a', 10.0), 5.0);
        // "Wi a" = 8 + 3 + 2.5 + 5
        assert_eq!(estimate_width("Wi a", 10.0), 18.5);
    }

    #[test]
    fn wraps_greedily_when_line_overflows() {
        // "aa" = 10, "aa aa" = 22.5
        let lines = layout_lines("aa aa aa", &layout(20.0, "LEFT"));
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].text, "aa");
        assert_eq!(lines[1].y, 12.0);
        assert_eq!(lines[2].y, 24.0);

        let first = &lines[0];
        assert_eq!(first.height, 12.0);
        assert_eq!(first.baseline, 7.5);
        assert_eq!(first.ascent, 7.5);
        assert_eq!(first.descent, 2.5);
        assert_eq!(first.leading, 2.0);
        assert_eq!(first.width, 10.0);
    }

    #[test]
    fn single_long_word_is_never_split() {
        // 8 default-width chars at 5.0 plus `i` and `j` at 3.0
        let lines = layout_lines("abcdefghij", &layout(5.0, "LEFT"));
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].width, 46.0);
    }

    #[test]
    fn line_that_exactly_fills_max_width_is_kept_whole() {
        let lines = layout_lines("aa aa", &layout(22.5, "LEFT"));
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].text, "aa aa");
        assert_eq!(lines[0].width, 22.5);

        let narrower = layout_lines("aa aa", &layout(22.4, "LEFT"));
        assert_eq!(narrower.len(), 2);
    }

    #[test]
    fn newlines_start_new_paragraphs() {
        let lines = layout_lines("ab\n\ncd", &layout(f64::INFINITY, "LEFT"));
        let texts: Vec<&str> = lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["ab", "", "cd"]);
        assert_eq!(lines[2].y, 24.0);
    }

    #[test]
    fn alignment_offsets_line_x() {
        let centered = layout_lines("aa", &layout(30.0, "CENTER"));
        assert_eq!(centered[0].x, 10.0);
        let right = layout_lines("aa", &layout(30.0, "RIGHT"));
        assert_eq!(right[0].x, 20.0);
        let unbounded = layout_lines("aa", &layout(f64::INFINITY, "RIGHT"));
        assert_eq!(unbounded[0].x, 0.0);
    }

    #[test]
    fn summary_reports_font_box_and_extent() {
        let lines = layout_lines("aa aa aa", &layout(20.0, "LEFT"));
        let metrics = summarize(&lines, 10.0, 12.0);
        assert_eq!(metrics.font_box_ascent, 8.0);
        assert_eq!(metrics.font_box_descent, 2.0);
        assert_eq!(metrics.line_count, 3);
        assert_eq!(metrics.height, 36.0);
        assert_eq!(metrics.width, 10.0);
    }
}
