//! Dashboard activity log component
//!
//! Renders the actions and navigation raised by the panels

use super::super::state::DashboardState;
use super::super::utils::{format_compact_timestamp, get_panel_color, panel_block};
use crate::events::EventType;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

/// Render the activity log, newest first.
pub fn render_activity_panel(f: &mut Frame, area: Rect, state: &DashboardState) {
    // Subtract the top and bottom borders
    let max_logs = (area.height.saturating_sub(2)) as usize;
    let log_count = if max_logs > 0 { max_logs } else { 1 };

    let log_lines: Vec<Line> = state
        .activity_logs
        .iter()
        .filter(|event| event.should_display())
        .rev()
        .take(log_count)
        .map(|event| {
            let status_icon = match event.event_type {
                EventType::Action => "✓",
                EventType::Navigation => "·",
                EventType::Warning => "!",
            };

            let compact_time = format_compact_timestamp(&event.timestamp);

            Line::from(vec![
                Span::raw(format!("{} ", status_icon)),
                Span::styled(
                    format!("{} ", compact_time),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    event.msg.clone(),
                    Style::default().fg(get_panel_color(&event.panel)),
                ),
            ])
        })
        .collect();

    let log_paragraph = if log_lines.is_empty() {
        Paragraph::new(vec![Line::from(Span::styled(
            "No activity yet",
            Style::default().fg(Color::DarkGray),
        ))])
    } else {
        Paragraph::new(log_lines)
    };

    let log_widget = log_paragraph
        .block(panel_block("ACTIVITY", false))
        .wrap(Wrap { trim: true });

    f.render_widget(log_widget, area);
}
