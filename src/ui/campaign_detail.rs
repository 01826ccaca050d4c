use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::mock::{DailyPerformance, MESSAGE_SEQUENCE};
use crate::types::Campaign;

use super::{campaign_status_span, render_sparkline_row, truncate};

pub fn render(frame: &mut Frame, campaign: &Campaign, performance: &[DailyPerformance], area: Rect) {
    frame.render_widget(Clear, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8),
            Constraint::Length(8),
            Constraint::Min(0),
        ])
        .split(area);

    render_summary(frame, campaign, chunks[0]);
    render_performance(frame, performance, chunks[1]);
    render_sequence(frame, chunks[2]);
}

fn render_summary(frame: &mut Frame, campaign: &Campaign, area: Rect) {
    let label = Style::default().fg(Color::Gray);
    let end = campaign
        .end_date
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "ongoing".to_string());

    let lines = vec![
        Line::from(vec![
            Span::styled(
                campaign.name.clone(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            campaign_status_span(campaign.status),
        ]),
        Line::from(vec![
            Span::styled("Template: ", label),
            Span::raw(campaign.template.clone()),
        ]),
        Line::from(vec![
            Span::styled("Runs: ", label),
            Span::raw(format!(
                "{} to {} ({}% complete)",
                campaign.start_date.format("%Y-%m-%d"),
                end,
                campaign.progress
            )),
        ]),
        Line::from(vec![
            Span::styled("Funnel: ", label),
            Span::raw(format!(
                "{} leads > {} contacted > {} replied > {} interested",
                campaign.leads, campaign.contacted, campaign.replied, campaign.interested
            )),
        ]),
        Line::from(vec![
            Span::styled("Response rate: ", label),
            Span::styled(
                format!("{}%", campaign.response_rate),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    let summary = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title("Campaign Details"));
    frame.render_widget(summary, area);
}

fn render_performance(frame: &mut Frame, performance: &[DailyPerformance], area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Last 30 days");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(inner);

    let contacted: Vec<u64> = performance.iter().map(|d| d.contacted).collect();
    let replied: Vec<u64> = performance.iter().map(|d| d.replied).collect();
    let interested: Vec<u64> = performance.iter().map(|d| d.interested).collect();

    render_sparkline_row(frame, rows[0], "Contacted", &contacted, Color::Cyan);
    render_sparkline_row(frame, rows[1], "Replied", &replied, Color::Green);
    render_sparkline_row(frame, rows[2], "Interested", &interested, Color::Magenta);
}

fn render_sequence(frame: &mut Frame, area: Rect) {
    let width = area.width.saturating_sub(4) as usize;
    let mut lines = Vec::new();
    for step in &MESSAGE_SEQUENCE {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{}. {}", step.step, step.kind),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  after {}", step.delay),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("   {}", truncate(step.message, width)),
            Style::default().fg(Color::Gray),
        )));
        lines.push(Line::from(vec![
            Span::raw("   "),
            Span::styled(
                format!("{} sent", step.sent),
                Style::default().fg(Color::Cyan),
            ),
            Span::raw(" / "),
            Span::styled(
                format!("{} accepted", step.accepted),
                Style::default().fg(Color::Green),
            ),
        ]));
    }

    let sequence = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Message Sequence"));
    frame.render_widget(sequence, area);
}
