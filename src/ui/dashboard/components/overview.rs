//! Financial overview component
//!
//! Renders balances, the spending breakdown, savings opportunities and bills

use super::super::state::{DashboardState, Focus};
use super::super::utils::panel_block;
use crate::format::{format_currency, parse_hex_color};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

const QUADRANT_GLYPHS: [&str; 4] = ["◴", "◷", "◶", "◵"];

fn heading(text: String) -> Line<'static> {
    Line::from(Span::styled(
        text,
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ))
}

pub fn render_overview(f: &mut Frame, area: Rect, state: &DashboardState) {
    let overview = &state.overview;
    let mut lines = Vec::new();

    lines.push(Line::from(vec![
        Span::styled("Total Balance ", Style::default().fg(Color::Gray)),
        Span::styled(
            format_currency(overview.total_balance),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("   Monthly Spending ", Style::default().fg(Color::Gray)),
        Span::styled(
            format_currency(overview.monthly_spending),
            Style::default().fg(Color::LightBlue),
        ),
    ]));
    lines.push(Line::from(""));

    // Placeholder chart: one equal segment per category, marked with the
    // quadrant its slice starts in
    lines.push(heading("Spending Breakdown".to_string()));
    let chart: Vec<Span> = overview
        .chart_slices()
        .iter()
        .map(|slice| {
            let quadrant = QUADRANT_GLYPHS[(slice.rotation_deg / 90.0) as usize % 4];
            Span::styled(
                format!("{}██", quadrant),
                Style::default().fg(parse_hex_color(&slice.category.color)),
            )
        })
        .collect();
    lines.push(Line::from(chart));
    for category in &overview.spending_categories {
        lines.push(Line::from(vec![
            Span::styled("▌", Style::default().fg(parse_hex_color(&category.color))),
            Span::styled(
                format!("{:<14}", category.category),
                Style::default().fg(Color::Gray),
            ),
            Span::styled(
                format!("{:>10}", format_currency(category.amount)),
                Style::default().fg(Color::White),
            ),
            Span::styled(
                format!("  {}%", category.percentage),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }
    lines.push(Line::from(""));

    lines.push(heading(format!(
        "AI Savings Opportunities (up to {}/mo)",
        format_currency(overview.potential_savings_total())
    )));
    for opportunity in &overview.savings_opportunities {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{} ", opportunity.title),
                Style::default().fg(Color::LightBlue),
            ),
            Span::styled(
                format!("{} ↗", format_currency(opportunity.potential_savings)),
                Style::default().fg(Color::Green),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("  {}", opportunity.description),
            Style::default().fg(Color::DarkGray),
        )));
    }
    lines.push(Line::from(""));

    lines.push(heading("Upcoming Bills".to_string()));
    for bill in overview.bill_rows() {
        let (marker, color) = if bill.is_priority {
            ("! ", Color::LightRed)
        } else {
            ("  ", Color::Gray)
        };
        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(Color::Red)),
            Span::styled(format!("{:<14}", bill.name), Style::default().fg(Color::White)),
            Span::styled(format!("{:>10}", bill.amount), Style::default().fg(Color::Gray)),
            Span::styled(format!("  {}", bill.due), Style::default().fg(color)),
        ]));
    }

    let paragraph = Paragraph::new(lines)
        .block(panel_block(
            "FINANCIAL OVERVIEW",
            state.focus == Focus::Overview,
        ))
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}
