use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use crate::app::App;

use super::{degree_color, lead_status_color, truncate};

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let view = &app.leads;
    let show_search = view.searching || !view.query.is_empty();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(if show_search {
            vec![Constraint::Length(3), Constraint::Min(0)]
        } else {
            vec![Constraint::Length(0), Constraint::Min(0)]
        })
        .split(area);

    if show_search {
        render_search(frame, &view.query, view.searching, chunks[0]);
    }

    let visible = view.visible();
    let title = if view.query.is_empty() {
        format!("Leads ({})", view.list.len())
    } else {
        format!("Leads ({} of {})", visible.len(), view.list.len())
    };
    let block = Block::default().borders(Borders::ALL).title(title);

    if visible.is_empty() {
        let message = if view.list.is_loading() {
            "Loading leads..."
        } else if view.query.is_empty() {
            "No leads yet"
        } else {
            "No leads match your search"
        };
        let empty = Paragraph::new(message)
            .block(block)
            .style(Style::default().fg(Color::Gray));
        frame.render_widget(empty, chunks[1]);
        return;
    }

    let w = chunks[1].width.saturating_sub(2) as usize;
    let fixed = 54; // name(18) + title(20) + status(14) + spaces(2)
    let flex = w.saturating_sub(fixed).max(10);

    let mut items: Vec<ListItem> = visible
        .iter()
        .enumerate()
        .map(|(i, lead)| {
            let style = if i == view.cursor {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            let line = Line::from(vec![
                Span::styled(format!("{:<18}", truncate(&lead.name, 17)), style),
                Span::styled(
                    format!("{:<20}", truncate(&lead.title, 19)),
                    Style::default().fg(Color::Gray),
                ),
                Span::styled(
                    format!("{:<14}", lead.status.to_string()),
                    Style::default().fg(lead_status_color(lead.status)),
                ),
                Span::raw("  "),
                Span::styled(
                    format!("{:<flex$}", company_line(lead, flex)),
                    Style::default().fg(degree_color(lead.connection_degree)),
                ),
            ]);
            ListItem::new(line)
        })
        .collect();

    items.push(footer(view.list.is_loading(), view.list.has_more()));

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray));

    let mut state = ListState::default();
    state.select(Some(view.cursor));
    frame.render_stateful_widget(list, chunks[1], &mut state);
}

fn company_line(lead: &crate::types::Lead, width: usize) -> String {
    let text = format!("{} · {}", lead.company, lead.connection_degree);
    truncate(&text, width)
}

pub(super) fn render_search(frame: &mut Frame, query: &str, active: bool, area: Rect) {
    let border = if active { Color::Yellow } else { Color::DarkGray };
    let cursor = if active { "_" } else { "" };
    let search = Paragraph::new(Line::from(vec![
        Span::styled("/", Style::default().fg(Color::Yellow)),
        Span::raw(format!("{}{}", query, cursor)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title("Search"),
    );
    frame.render_widget(search, area);
}

/// Trailing row telling whether more pages are coming.
pub(super) fn footer(loading: bool, has_more: bool) -> ListItem<'static> {
    let (text, color) = if loading {
        ("  Loading more...", Color::Yellow)
    } else if has_more {
        ("", Color::DarkGray)
    } else {
        ("  -- end of list --", Color::DarkGray)
    };
    ListItem::new(Line::from(Span::styled(text, Style::default().fg(color))))
}
