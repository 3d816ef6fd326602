use ratatui::layout::{Constraint, Direction, Layout, Rect};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const MESSAGE_PERFECT: &str = "Perfect score! Outstanding!";
pub const MESSAGE_GREAT: &str = "Great job!";
pub const MESSAGE_KEEP_GOING: &str = "Nearly there, keep going!";
pub const MESSAGE_TRY_AGAIN: &str = "Shall we try once more?";

/// Encouragement shown on the results screen, by percentage of correct
/// answers: 100, at least 80, at least 60, anything lower.
pub fn result_message(score: usize, total: usize) -> &'static str {
    if total == 0 {
        return MESSAGE_TRY_AGAIN;
    }
    if score >= total {
        MESSAGE_PERFECT
    } else if score * 100 >= total * 80 {
        MESSAGE_GREAT
    } else if score * 100 >= total * 60 {
        MESSAGE_KEEP_GOING
    } else {
        MESSAGE_TRY_AGAIN
    }
}

pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Cut `s` to at most `max_width` terminal columns, ending in "..." when
/// anything was dropped.
pub fn truncate_string(s: &str, max_width: usize) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }
    let budget = max_width.saturating_sub(3);
    let mut out = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w > budget {
            break;
        }
        out.push(ch);
        width += w;
    }
    out.push_str("...");
    out
}

/// A `width` x `height` box centered in `area`, shrunk to fit.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height - height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width - width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vertical[1])[1]
}
