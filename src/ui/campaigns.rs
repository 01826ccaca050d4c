use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use crate::app::App;

use super::leads::{footer, render_search};
use super::{campaign_status_span, truncate};

const BAR_WIDTH: usize = 10;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let view = &app.campaigns;
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
        format!("Campaigns ({})", view.list.len())
    } else {
        format!("Campaigns ({} of {})", visible.len(), view.list.len())
    };
    let block = Block::default().borders(Borders::ALL).title(title);

    if visible.is_empty() {
        let message = if view.list.is_loading() {
            "Loading campaigns..."
        } else if view.query.is_empty() {
            "No campaigns yet"
        } else {
            "No campaigns match your search"
        };
        let empty = Paragraph::new(message)
            .block(block)
            .style(Style::default().fg(Color::Gray));
        frame.render_widget(empty, chunks[1]);
        return;
    }

    let w = chunks[1].width.saturating_sub(2) as usize;
    let fixed = 48; // status(9) + funnel(18) + rate(5) + bar(12) + spaces(4)
    let flex = w.saturating_sub(fixed).max(12);

    let mut items: Vec<ListItem> = visible
        .iter()
        .enumerate()
        .map(|(i, campaign)| {
            let style = if i == view.cursor {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            let line = Line::from(vec![
                Span::styled(format!("{:<flex$}", truncate(&campaign.name, flex)), style),
                Span::raw(" "),
                campaign_status_span(campaign.status),
                Span::raw(" "),
                Span::styled(
                    format!(
                        "{:>4}/{:<4}/{:>3}/{:<3}",
                        campaign.leads, campaign.contacted, campaign.replied, campaign.interested
                    ),
                    Style::default().fg(Color::Gray),
                ),
                Span::styled(
                    format!("{:>4}%", campaign.response_rate),
                    Style::default().fg(Color::Green),
                ),
                Span::raw(" "),
                Span::styled(
                    progress_bar(campaign.progress),
                    Style::default().fg(Color::Cyan),
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

fn progress_bar(progress: u8) -> String {
    let filled = (usize::from(progress.min(100)) * BAR_WIDTH + 50) / 100;
    format!(
        "[{}{}]",
        "█".repeat(filled),
        "░".repeat(BAR_WIDTH - filled)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_scales() {
        assert_eq!(progress_bar(0), "[░░░░░░░░░░]");
        assert_eq!(progress_bar(100), "[██████████]");
        assert_eq!(progress_bar(45).chars().filter(|c| *c == '█').count(), 5);
    }
}
