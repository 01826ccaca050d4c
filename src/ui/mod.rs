mod auth;
mod campaign_detail;
mod campaigns;
mod lead_detail;
mod leads;
mod overview;
mod popup;
mod sidebar;

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Sparkline};
use ratatui::Frame;

use crate::action::Screen;
use crate::app::App;
use crate::types::{CampaignStatus, ConnectionDegree, LeadStatus};

pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(frame.area());

    if !app.session.is_authenticated() {
        render_splash(frame, chunks[0]);
        render_status_bar(frame, app, chunks[1]);
        if app.session.prompt_visible() {
            auth::render(frame, app);
        }
        return;
    }

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(24), Constraint::Min(0)])
        .split(chunks[0]);

    sidebar::render(frame, app, body[0]);

    match app.screen {
        Screen::Overview => overview::render(frame, body[1]),
        Screen::Leads => render_with_detail(frame, app, body[1], app.leads.selection.is_open()),
        Screen::Campaigns => {
            render_with_detail(frame, app, body[1], app.campaigns.selection.is_open())
        }
        screen => render_placeholder(frame, screen, body[1]),
    }

    render_status_bar(frame, app, chunks[1]);
}

fn render_with_detail(frame: &mut Frame, app: &App, area: Rect, detail_open: bool) {
    let (list_area, detail_area) = if detail_open {
        let split = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(area);
        (split[0], Some(split[1]))
    } else {
        (area, None)
    };

    match app.screen {
        Screen::Leads => {
            leads::render(frame, app, list_area);
            if let (Some(area), Some(lead)) = (detail_area, app.leads.selection.current()) {
                lead_detail::render(frame, lead, area);
            }
        }
        Screen::Campaigns => {
            campaigns::render(frame, app, list_area);
            if let (Some(area), Some(campaign)) = (detail_area, app.campaigns.selection.current())
            {
                campaign_detail::render(frame, campaign, &app.performance, area);
            }
        }
        _ => {}
    }
}

fn render_splash(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "LinkBird",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "LinkedIn outreach, automated",
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(Span::styled("Loading...", Style::default().fg(Color::Yellow))),
    ];

    let top = area.height.saturating_sub(lines.len() as u16) / 2;
    let inner = Rect {
        y: area.y + top,
        height: area.height.saturating_sub(top),
        ..area
    };
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

fn render_placeholder(frame: &mut Frame, screen: Screen, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(screen.title());
    let text = Paragraph::new(format!("{} is coming soon", screen.title()))
        .block(block)
        .style(Style::default().fg(Color::Gray));
    frame.render_widget(text, area);
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let list_error = match app.screen {
        Screen::Leads => app.leads.list.last_error(),
        Screen::Campaigns => app.campaigns.list.last_error(),
        _ => None,
    };

    let status = if let Some(error) = &app.error {
        Line::from(Span::styled(
            format!("Error: {}", error),
            Style::default().fg(Color::Red),
        ))
    } else if let Some(error) = list_error.filter(|_| app.session.is_authenticated()) {
        Line::from(vec![
            Span::styled(format!("Error: {}", error), Style::default().fg(Color::Red)),
            Span::styled("  r: retry", Style::default().fg(Color::Gray)),
        ])
    } else if app.loading() {
        Line::from(Span::styled(
            "Loading more...",
            Style::default().fg(Color::Yellow),
        ))
    } else if let Some(notice) = &app.notice {
        Line::from(Span::styled(notice.clone(), Style::default().fg(Color::Green)))
    } else {
        Line::from(Span::styled(help_text(app), Style::default().fg(Color::Gray)))
    };

    let status_bar = Paragraph::new(status).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status_bar, area);
}

fn help_text(app: &App) -> &'static str {
    if !app.session.is_authenticated() {
        return if app.session.prompt_visible() {
            "Tab: next field | ←/→: sign in/up | Enter: submit | Esc: close"
        } else {
            "Enter: sign in | q: quit"
        };
    }
    if app.is_searching() {
        return "type to filter | Enter: done | Esc: clear";
    }
    match app.screen {
        Screen::Leads if app.detail_open() => {
            "j/k: switch lead | o: open profile | y: copy email | Esc/q: close"
        }
        Screen::Campaigns if app.detail_open() => "j/k: switch campaign | Esc/q: close",
        Screen::Leads | Screen::Campaigns => {
            "j/k/g/G: nav | Ctrl+d/u: page | /: search | Enter: details | Tab/1-6: screens | q: quit"
        }
        _ => "Tab/1-6: screens | L: sign out | q: quit",
    }
}

/// Cut `text` to `width` columns, marking the cut with "...".
pub(crate) fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let kept: String = text.chars().take(width.saturating_sub(3)).collect();
    format!("{}...", kept)
}

pub(crate) fn render_sparkline_row(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    data: &[u64],
    color: Color,
) {
    let parts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(20), Constraint::Min(0)])
        .split(area);

    let total: u64 = data.iter().sum();
    let caption = Paragraph::new(vec![
        Line::from(Span::styled(label.to_string(), Style::default().fg(color))),
        Line::from(Span::styled(
            format!("{} total", total),
            Style::default().fg(Color::DarkGray),
        )),
    ]);
    frame.render_widget(caption, parts[0]);

    let sparkline = Sparkline::default()
        .data(data)
        .style(Style::default().fg(color));
    frame.render_widget(sparkline, parts[1]);
}

pub(crate) fn campaign_status_span(status: CampaignStatus) -> Span<'static> {
    let color = match status {
        CampaignStatus::Active => Color::Green,
        CampaignStatus::Paused => Color::Yellow,
        CampaignStatus::Completed => Color::Blue,
        CampaignStatus::Draft => Color::Gray,
    };
    Span::styled(
        format!("{:<9}", status),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )
}

pub(crate) fn lead_status_color(status: LeadStatus) -> Color {
    match status {
        LeadStatus::New => Color::Cyan,
        LeadStatus::Contacted => Color::Yellow,
        LeadStatus::Replied => Color::Blue,
        LeadStatus::Interested => Color::Green,
        LeadStatus::NotInterested => Color::Red,
    }
}

pub(crate) fn degree_color(degree: ConnectionDegree) -> Color {
    match degree {
        ConnectionDegree::First => Color::Green,
        ConnectionDegree::Second => Color::Yellow,
        ConnectionDegree::Third => Color::Gray,
    }
}
