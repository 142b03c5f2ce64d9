//! Fixed-width bordered box lines for the terminal UI.
//!
//! Every line the tool prints inside a box goes through one of these
//! composers; none of them ever panic, and after stripping color codes each
//! composed line occupies exactly `inner_width + 2` terminal columns.

use crate::text::{display_width, truncate_to_width};
use crate::theme::Theme;

/// Columns between the two border glyphs of a box.
pub const BOX_INNER_WIDTH: usize = 69;
/// Full box width, borders included.
pub const BOX_TOTAL_WIDTH: usize = BOX_INNER_WIDTH + 2;

/// Wraps already-styled content between the border glyphs, right-padding
/// with spaces so the visible width equals `inner_width`.
///
/// A content wider than the budget gets zero padding; the line overflows
/// instead of corrupting the output with a bogus repeat count.
pub fn content_line(theme: &Theme, content: &str, inner_width: usize) -> String {
    let padding = inner_width.saturating_sub(display_width(content));
    format!(
        "{border}\u{2502}{content}{pad}{border}\u{2502}",
        border = theme.border,
        pad = " ".repeat(padding),
    )
}

/// A `│ 【●】Label: value │` line. The value is cut to whatever budget the
/// decorated label leaves over, then the whole line is padded to width.
pub fn kv_line(theme: &Theme, label: &str, value: &str, inner_width: usize) -> String {
    kv_line_styled(theme, label, value, theme.label, theme.border, inner_width)
}

/// [`kv_line`] with an explicit color for the value text.
pub fn kv_line_colored(
    theme: &Theme,
    label: &str,
    value: &str,
    value_color: &str,
    inner_width: usize,
) -> String {
    kv_line_styled(theme, label, value, theme.label, value_color, inner_width)
}

/// [`kv_line`] with explicit colors for both halves.
pub fn kv_line_styled(
    theme: &Theme,
    label: &str,
    value: &str,
    label_color: &str,
    value_color: &str,
    inner_width: usize,
) -> String {
    let prefix = format!(
        " {bracket}\u{3010}{reset}\u{25cf}{bracket}\u{3011}{label_color}{label}: {value_color}",
        bracket = theme.bracket,
        reset = theme.reset,
    );
    let budget = inner_width.saturating_sub(display_width(&prefix));
    let value = truncate_to_width(value, budget);
    let content = format!("{prefix}{value}{border}", border = theme.border);
    content_line(theme, &content, inner_width)
}

/// A `│ 【x】text │` line: bracketed symbol, then colored free text. The
/// text may carry its own color switches; they cost no columns.
pub fn bullet_line(
    theme: &Theme,
    symbol: &str,
    color: &str,
    text: &str,
    inner_width: usize,
) -> String {
    let prefix = format!(
        " {bracket}\u{3010}{reset}{symbol}{bracket}\u{3011}{color}",
        bracket = theme.bracket,
        reset = theme.reset,
    );
    let budget = inner_width.saturating_sub(display_width(&prefix));
    let text = truncate_to_width(text, budget);
    let content = format!("{prefix}{text}{border}", border = theme.border);
    content_line(theme, &content, inner_width)
}

/// A `│ 【1】Menu entry │` line.
pub fn menu_line(theme: &Theme, index: &str, text: &str, inner_width: usize) -> String {
    bullet_line(theme, index, theme.menu, text, inner_width)
}

/// A `╭──── < Title > ────╮` opening rule of exactly `total_width` columns.
/// Leftover dashes split as evenly as possible, odd remainder on the right.
pub fn box_header(theme: &Theme, title: &str, total_width: usize) -> String {
    let inner = total_width.saturating_sub(2);
    let visible = format!(" < {title} > ");
    let colored = format!(
        " <{bg}{fg} {title} {bg}{reset}{border}> ",
        bg = theme.title_bg,
        fg = theme.title_fg,
        reset = theme.reset,
        border = theme.border,
    );
    let dashes = inner.saturating_sub(display_width(&visible));
    let left = dashes / 2;
    let right = dashes - left;
    format!(
        "{border}\u{256d}{l}{colored}{r}\u{256e}",
        border = theme.border,
        l = "\u{2500}".repeat(left),
        r = "\u{2500}".repeat(right),
    )
}

/// The matching `╰────╯` closing rule.
pub fn box_footer(theme: &Theme, total_width: usize) -> String {
    format!(
        "{border}\u{2570}{rule}\u{256f}{reset}",
        border = theme.border,
        rule = "\u{2500}".repeat(total_width.saturating_sub(2)),
        reset = theme.reset,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::strip_ansi;

    fn visible(line: &str) -> usize {
        display_width(line)
    }

    #[test]
    fn kv_line_is_exactly_total_width_for_any_value_length() {
        let theme = Theme::default();
        for len in [0usize, 1, 3, 10, 20, 40, 69, 150] {
            let value = "x".repeat(len);
            let line = kv_line(&theme, "Title", &value, 20);
            assert_eq!(visible(&line), 22, "value len {len}");
        }
    }

    #[test]
    fn menu_line_keeps_index_and_text() {
        let theme = Theme::default();
        let line = menu_line(&theme, "1", "Exit", BOX_INNER_WIDTH);
        assert_eq!(visible(&line), BOX_TOTAL_WIDTH);
        let plain = strip_ansi(&line);
        assert!(plain.contains('1'));
        assert!(plain.contains("Exit"));
    }

    #[test]
    fn wide_value_is_truncated_not_overflowed() {
        let theme = Theme::default();
        let line = kv_line(&theme, "Title", &"\u{60a8}\u{597d}".repeat(60), BOX_INNER_WIDTH);
        assert_eq!(visible(&line), BOX_TOTAL_WIDTH);
    }

    #[test]
    fn oversized_prefix_degrades_to_zero_padding() {
        let theme = Theme::default();
        // Inner width smaller than the decorated label: no padding, no panic.
        let line = kv_line(&theme, "A very long label indeed", "v", 4);
        assert!(visible(&line) >= 6);
    }

    #[test]
    fn header_is_total_width_with_remainder_on_the_right() {
        let theme = Theme::plain();
        let line = box_header(&theme, "Home Menu", BOX_TOTAL_WIDTH);
        assert_eq!(visible(&line), BOX_TOTAL_WIDTH);

        // " < Od > " is 8 visible columns inside 13; 5 dashes split 2/3.
        let small = box_header(&theme, "Od", 15);
        assert_eq!(small, "\u{256d}\u{2500}\u{2500} < Od > \u{2500}\u{2500}\u{2500}\u{256e}");
    }

    #[test]
    fn footer_matches_header_width() {
        let theme = Theme::default();
        let line = box_footer(&theme, BOX_TOTAL_WIDTH);
        assert_eq!(visible(&line), BOX_TOTAL_WIDTH);
    }

    #[test]
    fn content_line_wraps_styled_art() {
        let theme = Theme::default();
        let art = format!("{}\u{2588}\u{2588}\u{2557}", crate::theme::color::GREEN1);
        let line = content_line(&theme, &art, 10);
        assert_eq!(visible(&line), 12);
    }
}
