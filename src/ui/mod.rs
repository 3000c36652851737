//! Rendering layer - reads the app state each frame and draws the shell
//!
//! Holds no state of its own; every user intent goes back through the
//! event handlers.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

pub mod layout;

mod applications;
mod browse;
mod home;
mod overlays;
mod sidebar;

use crate::app::{App, DataMode, Section, StatusLevel};

pub fn draw(f: &mut Frame, app: &mut App) {
    let size = f.size();
    let areas = layout::areas(size, app.sidebar_collapsed);

    sidebar::draw(f, areas.sidebar, app);

    match app.active_menu_section() {
        Some(Section::Home) => home::draw(f, areas.content, app),
        Some(Section::Browse) => browse::draw_browse(f, areas.content, app),
        Some(Section::Applications) => applications::draw(f, areas.content, app),
        Some(Section::Favorites) => browse::draw_favorites(f, areas.content, app),
        Some(Section::Profile) => draw_profile(f, areas.content, app),
        // Unknown section ids are accepted by the controller and land here
        None => draw_unknown_section(f, areas.content, app),
    }

    draw_status_line(f, areas.status_line, app);

    if app.notifications_open {
        overlays::draw_notifications(f, size, app);
    }
    if app.help_open {
        overlays::draw_help(f, size);
    }
}

fn draw_profile(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("PROFILE")
        .border_style(Style::default().fg(Color::DarkGray));

    let label = |text: &str| Span::styled(format!("{text}: "), Style::default().fg(Color::DarkGray));
    let data_mode = match app.data_mode {
        DataMode::Sample => "sample data",
        DataMode::Remote => "remote store",
    };
    let lines = vec![
        Line::from(Span::styled(
            app.identity.display_name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![label("email"), Span::raw(app.identity.email.clone())]),
        Line::from(vec![label("user id"), Span::raw(app.identity.user_id.clone())]),
        Line::from(""),
        Line::from(vec![label("data source"), Span::raw(data_mode)]),
        Line::from(vec![label("endpoint"), Span::raw(app.store_endpoint.clone())]),
        Line::from(""),
        Line::from("Press 'o' to sign out"),
    ];

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_unknown_section(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("UNKNOWN SECTION")
        .border_style(Style::default().fg(Color::Red));

    let lines = vec![
        Line::from(format!(
            "No view registered for section '{}'",
            app.active_section
        )),
        Line::from(""),
        Line::from("Press 1-5 to return to a known section"),
    ];

    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

fn draw_status_line(f: &mut Frame, area: Rect, app: &App) {
    let line = match app.status_text() {
        Some((text, level)) => {
            let color = match level {
                StatusLevel::Info => Color::Gray,
                StatusLevel::Warn => Color::Yellow,
                StatusLevel::Error => Color::Red,
            };
            Line::from(Span::styled(text.to_string(), Style::default().fg(color)))
        }
        None => Line::from(Span::styled(
            format!(
                "{} | ? help | q quit",
                app.identity.email
            ),
            Style::default().fg(Color::DarkGray),
        )),
    };
    f.render_widget(Paragraph::new(line), area);
}
