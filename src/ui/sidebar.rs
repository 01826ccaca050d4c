use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use crate::action::Screen;
use crate::app::App;

use super::truncate;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(4)])
        .split(area);

    let items: Vec<ListItem> = Screen::ALL
        .iter()
        .enumerate()
        .map(|(i, screen)| {
            let style = if *screen == app.screen {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{} ", i + 1), Style::default().fg(Color::DarkGray)),
                Span::styled(screen.title(), style),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default().borders(Borders::ALL).title(Span::styled(
                " LinkBird ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
        )
        .highlight_style(Style::default().bg(Color::DarkGray));

    let mut state = ListState::default();
    state.select(Screen::ALL.iter().position(|s| *s == app.screen));
    frame.render_stateful_widget(list, chunks[0], &mut state);

    let width = chunks[1].width.saturating_sub(2) as usize;
    let lines = match app.session.identity() {
        Some(identity) => vec![
            Line::from(Span::styled(
                truncate(&identity.name, width),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                truncate(&identity.email, width),
                Style::default().fg(Color::Gray),
            )),
        ],
        None => vec![Line::from(Span::styled(
            "Not signed in",
            Style::default().fg(Color::Gray),
        ))],
    };
    let user = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
    frame.render_widget(user, chunks[1]);
}
