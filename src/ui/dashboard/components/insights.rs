//! AI insights component

use super::super::state::{DashboardState, Focus};
use super::super::utils::{cursor_marker, panel_block, scroll_to_row, wrap_words};
use crate::consts::dashboard_consts::LOADING_INSIGHTS_TEXT;
use crate::panels::InsightsView;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

/// Indent of a card's description and action lines.
const CARD_INDENT: &str = "    ";

pub fn render_insights(f: &mut Frame, area: Rect, state: &DashboardState) {
    let panel = &state.insights;
    let focused = state.focus == Focus::Insights;

    let block = panel_block("AI INSIGHTS", focused);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let cards = match panel.view() {
        InsightsView::Loading => {
            let placeholder = Paragraph::new(Line::from(Span::styled(
                LOADING_INSIGHTS_TEXT,
                Style::default().fg(Color::DarkGray),
            )));
            f.render_widget(placeholder, inner);
            return;
        }
        InsightsView::Cards(cards) => cards,
    };

    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Fill(1)])
        .split(inner);

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Powered by AI",
            Style::default().fg(Color::DarkGray),
        ))),
        sections[0],
    );

    // Descriptions are wrapped here so every card's height is known
    let text_width = usize::from(sections[1].width).saturating_sub(CARD_INDENT.len());
    let mut lines = Vec::new();
    let mut selected_top = 0;
    let mut selected_height = 0;
    for (index, card) in cards.iter().enumerate() {
        let top = lines.len();
        let style = card.kind.style();
        lines.push(Line::from(vec![
            Span::styled(
                cursor_marker(focused, index == panel.cursor()),
                Style::default().fg(Color::LightYellow),
            ),
            Span::styled(
                format!("{} ", style.icon),
                Style::default().fg(style.color),
            ),
            Span::styled(
                card.title.clone(),
                Style::default()
                    .fg(style.color)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        for text in wrap_words(&card.description, text_width) {
            lines.push(Line::from(Span::styled(
                format!("{}{}", CARD_INDENT, text),
                Style::default().fg(Color::Gray),
            )));
        }
        lines.push(Line::from(Span::styled(
            format!("{}→ {}", CARD_INDENT, card.action_text),
            Style::default().fg(style.border),
        )));
        if index == panel.cursor() {
            selected_top = top;
            selected_height = lines.len() - top;
        }
    }

    let offset = scroll_to_row(selected_top, selected_height, usize::from(sections[1].height));
    f.render_widget(Paragraph::new(lines).scroll((offset, 0)), sections[1]);
}
