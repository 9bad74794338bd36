//! Asset tracker component

use super::super::state::{DashboardState, Focus};
use super::super::utils::{cursor_marker, panel_block, scroll_to_row};
use crate::format::format_currency;
use crate::model::AssetKind;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

fn tab_span(kind: AssetKind, active: AssetKind) -> Span<'static> {
    let style = if kind == active {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    Span::styled(format!(" {} ", kind), style)
}

/// Lines per asset row: name and value, then the holding.
const ROW_HEIGHT: usize = 2;

pub fn render_assets(f: &mut Frame, area: Rect, state: &DashboardState) {
    let tracker = &state.assets;
    let focused = state.focus == Focus::Assets;
    let active = tracker.active_kind();

    let block = panel_block("ASSET TRACKER", focused);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .split(inner);

    let summary = vec![
        Line::from(vec![
            tab_span(AssetKind::Traditional, active),
            Span::raw(" "),
            tab_span(AssetKind::Crypto, active),
        ]),
        Line::from(vec![
            Span::styled(
                format!("{} ", tracker.total_label()),
                Style::default().fg(Color::Gray),
            ),
            Span::styled(
                format_currency(tracker.current_total()),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    ];
    f.render_widget(Paragraph::new(summary), sections[0]);

    let mut lines = Vec::new();
    for (index, row) in tracker.rows().into_iter().enumerate() {
        let change_text = match row.trend.indicator() {
            Some(arrow) => format!("{} {}", arrow, row.change),
            None => row.change.clone(),
        };
        lines.push(Line::from(vec![
            Span::styled(
                cursor_marker(focused, index == tracker.cursor()),
                Style::default().fg(Color::LightYellow),
            ),
            Span::styled(
                format!("[{:<2}] ", row.badge),
                Style::default().fg(Color::Cyan),
            ),
            Span::styled(format!("{:<20}", row.name), Style::default().fg(Color::White)),
            Span::styled(format!("{:>14}", row.value), Style::default().fg(Color::White)),
            Span::styled(format!("  {}", change_text), Style::default().fg(row.trend.color())),
        ]));
        lines.push(Line::from(Span::styled(
            format!("       {}", row.holding),
            Style::default().fg(Color::DarkGray),
        )));
    }
    let offset = scroll_to_row(
        tracker.cursor() * ROW_HEIGHT,
        ROW_HEIGHT,
        usize::from(sections[1].height),
    );
    f.render_widget(Paragraph::new(lines).scroll((offset, 0)), sections[1]);

    let add_button = Paragraph::new(Line::from(Span::styled(
        format!("[a] {}", tracker.add_label()),
        Style::default().fg(Color::LightBlue),
    )));
    f.render_widget(add_button, sections[2]);
}
