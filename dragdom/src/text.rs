use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

use crate::types::TextWrap;

pub fn display_width(s: &str) -> usize {
    s.width()
}

pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Measure text content as (width, height) in cells. `NoWrap` keeps each
/// input line whole; `Wrap` breaks lines at `max_width`.
pub fn measure(s: &str, wrap: TextWrap, max_width: u16) -> (u16, u16) {
    match wrap {
        TextWrap::NoWrap => {
            let mut width = 0usize;
            let mut lines = 0u16;
            for line in s.split('\n') {
                width = width.max(display_width(line));
                lines += 1;
            }
            (width.min(u16::MAX as usize) as u16, lines)
        }
        TextWrap::Wrap => {
            if max_width == 0 {
                return (0, 0);
            }
            let mut width = 0u16;
            let mut lines = 0u16;
            for input_line in s.split('\n') {
                let mut current = 0u16;
                for c in input_line.chars() {
                    let w = char_width(c) as u16;
                    if w == 0 {
                        continue;
                    }
                    if current + w > max_width && current > 0 {
                        lines += 1;
                        width = width.max(current);
                        current = 0;
                    }
                    current += w;
                }
                lines += 1;
                width = width.max(current);
            }
            (width, lines)
        }
    }
}
