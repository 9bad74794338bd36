//! Goals tracker component

use super::super::state::{DashboardState, Focus};
use super::super::utils::{cursor_marker, panel_block, progress_bar, scroll_to_row};
use crate::panels::{GoalsTracker, GoalsView};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

const BAR_WIDTH: usize = 20;

fn filter_chips(tracker: &GoalsTracker) -> Line<'static> {
    let mut spans = Vec::new();
    for filter in GoalsTracker::filters() {
        let style = if filter.same_as(tracker.filter()) {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!(" {} ", filter.label()), style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

/// Lines per goal row: title, progress bar, amounts.
const ROW_HEIGHT: usize = 3;

pub fn render_goals(f: &mut Frame, area: Rect, state: &DashboardState) {
    let tracker = &state.goals;
    let focused = state.focus == Focus::Goals;

    let block = panel_block("FINANCIAL GOALS", focused);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(2),
        ])
        .split(inner);

    f.render_widget(Paragraph::new(filter_chips(tracker)), sections[0]);

    let mut lines = Vec::new();
    match tracker.view() {
        GoalsView::Empty { message } => {
            lines.push(Line::from(Span::styled(
                message,
                Style::default().fg(Color::DarkGray),
            )));
        }
        GoalsView::Goals(rows) => {
            for (index, row) in rows.into_iter().enumerate() {
                lines.push(Line::from(vec![
                    Span::styled(
                        cursor_marker(focused, index == tracker.cursor()),
                        Style::default().fg(Color::LightYellow),
                    ),
                    Span::raw(format!("{} ", row.icon)),
                    Span::styled(
                        row.name,
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("  {}", row.deadline),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]));
                let bar = progress_bar(row.ratio.unwrap_or(0.0), BAR_WIDTH);
                let bar_color = if row.ratio.is_some() {
                    Color::Green
                } else {
                    Color::DarkGray
                };
                lines.push(Line::from(vec![
                    Span::raw("  "),
                    Span::styled(bar, Style::default().fg(bar_color)),
                    Span::styled(format!(" {}", row.percent), Style::default().fg(Color::White)),
                ]));
                lines.push(Line::from(Span::styled(
                    format!("  {}", row.amounts),
                    Style::default().fg(Color::Gray),
                )));
            }
        }
    }
    let offset = scroll_to_row(
        tracker.cursor() * ROW_HEIGHT,
        ROW_HEIGHT,
        usize::from(sections[1].height),
    );
    f.render_widget(Paragraph::new(lines).scroll((offset, 0)), sections[1]);

    let footer = vec![
        Line::from(Span::styled(
            tracker.encouragement(),
            Style::default().fg(Color::LightGreen),
        )),
        Line::from(Span::styled(
            "[n] New Goal",
            Style::default().fg(Color::LightBlue),
        )),
    ];
    f.render_widget(Paragraph::new(footer), sections[2]);
}
