use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Gauge, Paragraph};
use ratatui::Frame;

use crate::types::CampaignStatus;

struct StatCard {
    label: &'static str,
    value: &'static str,
    trend: &'static str,
    color: Color,
}

const STATS: [StatCard; 4] = [
    StatCard {
        label: "Total Leads",
        value: "2,847",
        trend: "+12% from last month",
        color: Color::Cyan,
    },
    StatCard {
        label: "Active Campaigns",
        value: "24",
        trend: "8 launching this week",
        color: Color::Green,
    },
    StatCard {
        label: "Messages Sent",
        value: "1,256",
        trend: "+8% from last week",
        color: Color::Blue,
    },
    StatCard {
        label: "Response Rate",
        value: "28.5%",
        trend: "+3.2% improvement",
        color: Color::Magenta,
    },
];

// (leads added, messages sent, replies) for the last seven days
const WEEKLY_ACTIVITY: [(u64, u64, u64); 7] = [
    (45, 23, 8),
    (52, 31, 12),
    (38, 28, 9),
    (61, 35, 14),
    (47, 29, 11),
    (58, 33, 13),
    (44, 26, 10),
];

struct RecentCampaign {
    name: &'static str,
    status: CampaignStatus,
    progress: u16,
    leads: u32,
    replies: u32,
}

const RECENT_CAMPAIGNS: [RecentCampaign; 3] = [
    RecentCampaign {
        name: "Tech Leader Outreach Q1",
        status: CampaignStatus::Active,
        progress: 75,
        leads: 234,
        replies: 45,
    },
    RecentCampaign {
        name: "Product Demo Campaign",
        status: CampaignStatus::Paused,
        progress: 45,
        leads: 189,
        replies: 38,
    },
    RecentCampaign {
        name: "Partnership Inquiry Follow-up",
        status: CampaignStatus::Completed,
        progress: 100,
        leads: 156,
        replies: 32,
    },
];

pub fn render(frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Length(11),
            Constraint::Min(0),
        ])
        .split(area);

    render_stats(frame, chunks[0]);
    render_activity(frame, chunks[1]);
    render_recent(frame, chunks[2]);
}

fn render_stats(frame: &mut Frame, area: Rect) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    for (card, area) in STATS.iter().zip(cards.iter()) {
        let lines = vec![
            Line::from(Span::styled(
                card.value,
                Style::default().fg(card.color).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(card.trend, Style::default().fg(Color::Green))),
        ];
        let widget = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(card.label, Style::default().fg(Color::Gray))),
        );
        frame.render_widget(widget, *area);
    }
}

fn render_activity(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Activity Overview (past week)");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(inner);

    let series: [(&str, Vec<u64>, Color); 3] = [
        (
            "Leads added",
            WEEKLY_ACTIVITY.iter().map(|d| d.0).collect(),
            Color::Cyan,
        ),
        (
            "Messages sent",
            WEEKLY_ACTIVITY.iter().map(|d| d.1).collect(),
            Color::Green,
        ),
        (
            "Replies",
            WEEKLY_ACTIVITY.iter().map(|d| d.2).collect(),
            Color::Magenta,
        ),
    ];

    for ((label, data, color), area) in series.iter().zip(rows.iter()) {
        super::render_sparkline_row(frame, *area, label, data, *color);
    }
}

fn render_recent(frame: &mut Frame, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title("Recent Campaigns");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Min(0),
        ])
        .split(inner);

    for (campaign, area) in RECENT_CAMPAIGNS.iter().zip(rows.iter()) {
        let parts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(*area);

        let header = Line::from(vec![
            Span::styled(campaign.name, Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("  "),
            super::campaign_status_span(campaign.status),
            Span::styled(
                format!(
                    "  {} leads • {} replies",
                    campaign.leads, campaign.replies
                ),
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        frame.render_widget(Paragraph::new(header), parts[0]);

        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(Color::Cyan).bg(Color::Black))
            .percent(campaign.progress)
            .label(format!("{}% complete", campaign.progress));
        frame.render_widget(gauge, parts[1]);
    }
}
