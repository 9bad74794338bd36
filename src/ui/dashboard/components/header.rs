//! Dashboard header component
//!
//! Renders the welcome line and the bill notification marker

use super::super::state::DashboardState;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render the header with greeting and notifications.
pub fn render_header(f: &mut Frame, area: Rect, state: &DashboardState) {
    let header_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Fill(1), Constraint::Length(28)])
        .split(area);

    let greeting = Paragraph::new(vec![
        Line::from(Span::styled(
            "Welcome back,",
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            state.user_name.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
    ])
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_type(BorderType::Thick),
    );
    f.render_widget(greeting, header_chunks[0]);

    // Priority bills drive the notification marker
    let priority_bills = state.overview.priority_bill_count();
    let (notice, notice_color) = if priority_bills > 0 {
        let noun = if priority_bills == 1 { "bill" } else { "bills" };
        (
            format!("● {} priority {}", priority_bills, noun),
            Color::LightRed,
        )
    } else {
        ("No alerts".to_string(), Color::DarkGray)
    };

    let notifications = Paragraph::new(vec![
        Line::from(Span::styled(
            format!("FINBOARD v{}", env!("CARGO_PKG_VERSION")),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(notice, Style::default().fg(notice_color))),
    ])
    .alignment(Alignment::Right)
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_type(BorderType::Thick),
    );
    f.render_widget(notifications, header_chunks[1]);
}
