use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::types::Lead;

use super::{degree_color, lead_status_color};

pub fn render(frame: &mut Frame, lead: &Lead, area: Rect) {
    let label = Style::default().fg(Color::Gray);

    let lines = vec![
        Line::from(Span::styled(
            lead.name.clone(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("{} at {}", lead.title, lead.company)),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                format!(" {} ", lead.status),
                Style::default()
                    .fg(Color::Black)
                    .bg(lead_status_color(lead.status)),
            ),
            Span::raw(" "),
            Span::styled(
                format!(" {} ", lead.connection_degree),
                Style::default()
                    .fg(Color::Black)
                    .bg(degree_color(lead.connection_degree)),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled("Contact", Style::default().add_modifier(Modifier::BOLD))),
        Line::from(vec![
            Span::styled("Email:    ", label),
            Span::raw(lead.email.clone()),
        ]),
        Line::from(vec![
            Span::styled("LinkedIn: ", label),
            Span::styled(lead.linkedin_url.clone(), Style::default().fg(Color::Blue)),
        ]),
        Line::from(vec![
            Span::styled("Location: ", label),
            Span::raw(lead.location.clone()),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Last activity: ", label),
            Span::raw(lead.last_activity.clone()),
        ]),
    ];

    frame.render_widget(Clear, area);
    let detail = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title("Lead Details"));
    frame.render_widget(detail, area);
}
