//! Shared rendering utilities.
//!
//! Text helpers operate on `char` counts, not bytes, so names with non-ASCII
//! characters line up.

/// Moves the cursor to a 1-indexed row and column.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Rectangular screen area, 1-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub top: usize,
    pub left: usize,
    pub width: usize,
    pub height: usize,
}

impl Region {
    /// Last row inside the region.
    #[must_use]
    pub const fn bottom(&self) -> usize {
        self.top + self.height.saturating_sub(1)
    }

    /// Region shifted right by `offset` columns, clipped to the same right edge.
    #[must_use]
    pub const fn shifted(self, offset: usize) -> Self {
        let offset = if offset > self.width { self.width } else { offset };
        Self {
            top: self.top,
            left: self.left + offset,
            width: self.width - offset,
            height: self.height,
        }
    }
}

/// Truncates or pads `text` to exactly `width` characters.
///
/// Truncated text ends in `…`.
///
/// # Example
///
/// ```rust
/// use socialshell::ui::helpers::fit;
///
/// assert_eq!(fit("chat", 6), "chat  ");
/// assert_eq!(fit("conversation", 6), "conve…");
/// ```
#[must_use]
pub fn fit(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len <= width {
        let mut out = String::with_capacity(text.len() + width - len);
        out.push_str(text);
        out.extend(std::iter::repeat(' ').take(width - len));
        return out;
    }
    if width == 0 {
        return String::new();
    }
    let mut out: String = text.chars().take(width - 1).collect();
    out.push('…');
    out
}

/// Centers `text` in `width` characters, truncating if needed.
///
/// Odd leftover space goes to the right.
#[must_use]
pub fn centered(text: &str, width: usize) -> String {
    let len = text.chars().count().min(width);
    let left = (width - len) / 2;
    let mut out = " ".repeat(left);
    out.push_str(&fit(text, width - left));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_counts_chars_not_bytes() {
        assert_eq!(fit("Анна", 5), "Анна ");
        assert_eq!(fit("Анна Иванова", 5).chars().count(), 5);
    }

    #[test]
    fn fit_zero_width_is_empty() {
        assert_eq!(fit("abc", 0), "");
    }

    #[test]
    fn centered_pads_both_sides() {
        assert_eq!(centered("ab", 6), "  ab  ");
        assert_eq!(centered("abc", 6), " abc  ");
        assert_eq!(centered("abcdefgh", 4), "abc…");
    }

    #[test]
    fn shifted_region_keeps_right_edge() {
        let region = Region { top: 3, left: 10, width: 20, height: 5 };
        let moved = region.shifted(8);
        assert_eq!(moved.left, 18);
        assert_eq!(moved.left + moved.width, region.left + region.width);
        assert_eq!(region.shifted(50).width, 0);
        assert_eq!(region.bottom(), 7);
    }
}
