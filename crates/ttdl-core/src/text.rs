//! Display-width aware text helpers for fixed-width box rendering.
//!
//! All layout decisions are made in terminal columns, never in character or
//! byte counts: ANSI color sequences cost nothing, combining marks cost
//! nothing, and East Asian wide/fullwidth characters cost two columns.

use unicode_width::UnicodeWidthChar;

/// Marker appended when a string had to be cut to fit its budget.
pub const ELLIPSIS: &str = "...";

/// Byte length of the ANSI color sequence at the start of `s`
/// (ESC `[`, digits and semicolons, final `m`), if one is present.
fn ansi_prefix_len(s: &str) -> Option<usize> {
    let rest = s.strip_prefix("\x1b[")?;
    let body = rest.trim_start_matches(|c: char| c.is_ascii_digit() || c == ';');
    body.starts_with('m').then(|| s.len() - body.len() + 1)
}

/// Columns a single character occupies: 0 for combining marks, 2 for East
/// Asian wide/fullwidth, 1 otherwise.
fn char_width(ch: char) -> usize {
    ch.width().unwrap_or(0)
}

/// Removes all ANSI color sequences, leaving only visible text.
pub fn strip_ansi(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while !rest.is_empty() {
        if let Some(len) = ansi_prefix_len(rest) {
            rest = &rest[len..];
            continue;
        }
        let mut chars = rest.chars();
        let Some(ch) = chars.next() else { break };
        out.push(ch);
        rest = chars.as_str();
    }
    out
}

/// Number of terminal columns `text` occupies, with color codes excluded.
pub fn display_width(text: &str) -> usize {
    let mut width = 0;
    let mut rest = text;
    while !rest.is_empty() {
        if let Some(len) = ansi_prefix_len(rest) {
            rest = &rest[len..];
            continue;
        }
        let mut chars = rest.chars();
        let Some(ch) = chars.next() else { break };
        width += char_width(ch);
        rest = chars.as_str();
    }
    width
}

/// Cuts `text` down to at most `max_width` columns, appending [`ELLIPSIS`]
/// when something was dropped and there is room for it.
///
/// Color sequences are carried over verbatim since they take no columns. A
/// wide character that would straddle the boundary is dropped whole rather
/// than half-rendered. Text that already fits is returned unchanged, which
/// also makes the operation idempotent for a fixed budget.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if display_width(text) <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut taken: Vec<(&str, usize)> = Vec::new();
    let mut width = 0;
    let mut rest = text;
    while !rest.is_empty() {
        if let Some(len) = ansi_prefix_len(rest) {
            taken.push((&rest[..len], 0));
            rest = &rest[len..];
            continue;
        }
        let mut chars = rest.chars();
        let Some(ch) = chars.next() else { break };
        let w = char_width(ch);
        if width + w > max_width {
            break;
        }
        taken.push((&rest[..ch.len_utf8()], w));
        width += w;
        rest = chars.as_str();
    }

    if max_width < ELLIPSIS.len() {
        // No room for a marker; return the bare prefix.
        return taken.iter().map(|(s, _)| *s).collect();
    }
    while width + ELLIPSIS.len() > max_width {
        match taken.pop() {
            Some((_, w)) => width -= w,
            None => break,
        }
    }
    let mut out: String = taken.iter().map(|(s, _)| *s).collect();
    out.push_str(ELLIPSIS);
    out
}

/// Middle-truncates a filesystem path for display, keeping both ends.
pub fn shorten_path(path: &str, max_len: usize) -> String {
    let chars: Vec<char> = path.chars().collect();
    if chars.len() <= max_len {
        return path.to_string();
    }
    let part = max_len.saturating_sub(5) / 2;
    let head: String = chars[..part].iter().collect();
    let tail: String = chars[chars.len() - part..].iter().collect();
    format!("{head}.....{tail}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ansi_sequences_do_not_count() {
        assert_eq!(display_width("\x1b[1;34mAB\x1b[0m"), 2);
        assert_eq!(display_width("AB"), 2);
        assert_eq!(strip_ansi("\x1b[1;34mAB\x1b[0m"), "AB");
    }

    #[test]
    fn non_color_escapes_are_kept() {
        // ESC without a `[0-9;]*m` tail is not a color sequence.
        assert_eq!(strip_ansi("a\x1b[2Jb"), "a\x1b[2Jb");
    }

    #[test]
    fn combining_marks_are_zero_width() {
        assert_eq!(display_width("e\u{301}"), 1);
    }

    #[test]
    fn wide_characters_count_double() {
        assert_eq!(display_width("\u{60a8}\u{597d}"), 4); // 您好
    }

    #[test]
    fn fitting_text_is_returned_unchanged() {
        assert_eq!(truncate_to_width("hello", 5), "hello");
        assert_eq!(truncate_to_width("hello", 10), "hello");
        assert_eq!(truncate_to_width("", 10), "");
    }

    #[test]
    fn truncation_appends_ellipsis_within_budget() {
        let out = truncate_to_width("hello world", 8);
        assert!(out.ends_with(ELLIPSIS));
        assert!(display_width(&out) <= 8);
        assert_eq!(out, "hello...");
    }

    #[test]
    fn truncation_is_idempotent() {
        let once = truncate_to_width("hello world, this is long", 12);
        let twice = truncate_to_width(&once, 12);
        assert_eq!(once, twice);
    }

    #[test]
    fn zero_budget_yields_empty() {
        assert_eq!(truncate_to_width("hello", 0), "");
    }

    #[test]
    fn tiny_budget_omits_ellipsis() {
        let out = truncate_to_width("hello", 2);
        assert_eq!(out, "he");
    }

    #[test]
    fn wide_char_never_split_at_boundary() {
        // Budget of 3 fits one wide char (2) but not two (4); the second is
        // dropped whole and the ellipsis needs the full 3 columns.
        let out = truncate_to_width("\u{60a8}\u{597d}\u{60a8}\u{597d}", 5);
        assert!(display_width(&out) <= 5);
        assert!(out.ends_with(ELLIPSIS));
    }

    #[test]
    fn color_codes_survive_truncation() {
        let out = truncate_to_width("\x1b[1;31mhello world\x1b[0m", 8);
        assert!(out.starts_with("\x1b[1;31m"));
        assert!(display_width(&out) <= 8);
        assert!(out.ends_with(ELLIPSIS));
    }

    #[test]
    fn shorten_path_keeps_both_ends() {
        let long = "/home/user/downloads/tiktok/some_very_long_title_video.mp4";
        let short = shorten_path(long, 30);
        assert!(short.contains("....."));
        assert!(short.starts_with("/home"));
        assert!(short.ends_with(".mp4"));
        assert_eq!(shorten_path("a/b.mp4", 30), "a/b.mp4");
    }
}
