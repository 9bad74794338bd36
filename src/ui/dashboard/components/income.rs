//! Income streams placeholder

use super::super::utils::panel_block;
use crate::consts::dashboard_consts::INCOME_PLACEHOLDER_TEXT;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Paragraph;

pub fn render_income_placeholder(f: &mut Frame, area: Rect) {
    let placeholder = Paragraph::new(INCOME_PLACEHOLDER_TEXT)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(panel_block("INCOME STREAMS", false));
    f.render_widget(placeholder, area);
}
