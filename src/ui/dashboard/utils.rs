//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::events::Panel;
use ratatui::prelude::{Color, Style};
use ratatui::widgets::{Block, BorderType, Borders, Padding};

/// Get a ratatui color for a panel's activity events
pub fn get_panel_color(panel: &Panel) -> Color {
    match panel {
        Panel::Overview => Color::LightBlue,
        Panel::Assets => Color::Cyan,
        Panel::Insights => Color::Yellow,
        Panel::Goals => Color::Green,
        Panel::System => Color::Gray,
    }
}

/// Rounded, titled panel block; the focused panel gets a highlighted border.
pub fn panel_block(title: &str, focused: bool) -> Block<'_> {
    let border_color = if focused { Color::LightYellow } else { Color::Cyan };
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .padding(Padding::horizontal(1))
}

/// Row prefix marking the cursor position inside the focused panel.
pub fn cursor_marker(focused: bool, selected: bool) -> &'static str {
    if focused && selected { "› " } else { "  " }
}

/// Text progress bar of `width` cells for a ratio in [0, 1].
pub fn progress_bar(ratio: f64, width: usize) -> String {
    let filled = ((ratio.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Vertical scroll offset that keeps the selected row inside `visible` lines.
///
/// The row's first line always stays on screen, even when the whole row
/// is taller than the viewport.
pub fn scroll_to_row(row_top: usize, row_height: usize, visible: usize) -> u16 {
    let bottom = row_top + row_height;
    let offset = if bottom <= visible {
        0
    } else {
        (bottom - visible).min(row_top)
    };
    u16::try_from(offset).unwrap_or(u16::MAX)
}

/// Greedy word wrap to `width` columns. Words longer than a line keep a line
/// of their own and are clipped by the panel.
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let needed = current.chars().count() + word.chars().count() + usize::from(!current.is_empty());
        if !current.is_empty() && needed > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract from "YYYY-MM-DD HH:MM:SS" format
    if let Some(date_part) = timestamp.split(' ').next() {
        if let Some(time_part) = timestamp.split(' ').nth(1) {
            // Extract MM-DD from date and HH:MM from time
            if let Some(month_day) = date_part.get(5..10) {
                // Get MM-DD
                if let Some(hour_min) = time_part.get(0..5) {
                    // Get HH:MM
                    return format!("{} {}", month_day, hour_min);
                }
            }
        }
    }
    // Fallback to original timestamp if parsing fails
    timestamp.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_bar() {
        assert_eq!(progress_bar(0.5, 10), "█████░░░░░");
        assert_eq!(progress_bar(0.0, 4), "░░░░");
        assert_eq!(progress_bar(1.0, 4), "████");
        assert_eq!(progress_bar(3.0, 4), "████");
    }

    #[test]
    fn test_scroll_to_row() {
        // Fits without scrolling
        assert_eq!(scroll_to_row(4, 2, 10), 0);
        // Bottom of the row lines up with the bottom of the view
        assert_eq!(scroll_to_row(10, 2, 6), 6);
        // A row taller than the view starts at the top
        assert_eq!(scroll_to_row(9, 10, 5), 9);
        assert_eq!(scroll_to_row(0, 3, 0), 0);
    }

    #[test]
    fn test_wrap_words() {
        assert_eq!(
            wrap_words("Set a budget for dining", 10),
            vec!["Set a", "budget for", "dining"]
        );
        assert_eq!(wrap_words("averyveryverylongword ok", 5), vec!["averyveryverylongword", "ok"]);
        assert!(wrap_words("   ", 8).is_empty());
        assert_eq!(wrap_words("a b", 0), vec!["a", "b"]);
    }

    #[test]
    fn test_format_compact_timestamp() {
        assert_eq!(format_compact_timestamp("2024-05-28 14:03:59"), "05-28 14:03");
        assert_eq!(format_compact_timestamp("garbage"), "garbage");
    }

    #[test]
    fn test_cursor_marker() {
        assert_eq!(cursor_marker(true, true), "› ");
        assert_eq!(cursor_marker(false, true), "  ");
    }
}
