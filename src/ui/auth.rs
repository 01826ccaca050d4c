use ratatui::layout::Alignment;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::App;
use crate::form::{SignInField, SignInMode};
use crate::session::Prompt;

use super::popup;

pub fn render(frame: &mut Frame, app: &App) {
    let form = &app.form;
    let title = match form.mode {
        SignInMode::SignIn => "Sign in to LinkBird",
        SignInMode::SignUp => "Create your LinkBird account",
    };
    let area = popup::open_dialog(frame, title, 56, 14);

    let focus = |field: SignInField| {
        if form.field == field {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        }
    };
    let marker = |field: SignInField| if form.field == field { "> " } else { "  " };

    let masked = "•".repeat(form.password.chars().count());
    let submit_label = match form.mode {
        SignInMode::SignIn => "[ Sign In ]",
        SignInMode::SignUp => "[ Create Account ]",
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                "Sign In",
                tab_style(form.mode == SignInMode::SignIn),
            ),
            Span::raw("  |  "),
            Span::styled(
                "Sign Up",
                tab_style(form.mode == SignInMode::SignUp),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::raw(marker(SignInField::Email)),
            Span::styled("Email:    ", focus(SignInField::Email)),
            Span::raw(form.email.clone()),
        ]),
        Line::from(vec![
            Span::raw(marker(SignInField::Password)),
            Span::styled("Password: ", focus(SignInField::Password)),
            Span::raw(masked),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::raw(marker(SignInField::Submit)),
            Span::styled(submit_label, focus(SignInField::Submit)),
        ]),
        Line::from(vec![
            Span::raw(marker(SignInField::Google)),
            Span::styled("[ Continue with Google ]", focus(SignInField::Google)),
        ]),
        Line::from(""),
    ];

    if app.session.prompt() == Prompt::Submitting {
        lines.push(Line::from(Span::styled(
            "Signing in...",
            Style::default().fg(Color::Yellow),
        )));
    } else if let Some(error) = form.error.as_deref().or(app.session.message()) {
        lines.push(Line::from(Span::styled(
            error.to_string(),
            Style::default().fg(Color::Red),
        )));
    }

    let body = Paragraph::new(lines).alignment(Alignment::Left);
    frame.render_widget(body, area);
}

fn tab_style(active: bool) -> Style {
    if active {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}
