//! Dashboard footer component
//!
//! Renders key bindings

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render the key binding footer.
pub fn render_footer(f: &mut Frame, area: Rect) {
    let footer_text =
        "[Tab] Panel | [←/→] Tab/Filter | [↑/↓] Select | [Enter] Open | [t/c] Asset Tab | [a] Add Asset | [n] New Goal | [l] Loading | [Q] Quit";

    let footer = Paragraph::new(footer_text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Thick),
        );
    f.render_widget(footer, area);
}
