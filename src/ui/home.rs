//! Home section - summary statistics and recent activity panels

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};
use ratatui::Frame;

use crate::app::App;
use crate::domain::STATUS_PENDING;

pub fn draw(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(0)])
        .split(area);

    draw_stats_row(f, chunks[0], app);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    draw_recent_postings(f, bottom[0], app);
    draw_recent_applications(f, bottom[1], app);
}

fn draw_stats_row(f: &mut Frame, area: Rect, app: &App) {
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    draw_stat(f, cells[0], "OPEN INTERNSHIPS", app.engine.source_len());
    draw_stat(f, cells[1], "APPLICATIONS", app.applications.len());
    draw_stat(f, cells[2], "PENDING REVIEW", app.pending_application_count());
    draw_stat(f, cells[3], "FAVORITES", app.favorites.len());
}

fn draw_stat(f: &mut Frame, area: Rect, title: &str, value: usize) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(Color::DarkGray));
    let text = Line::from(Span::styled(
        value.to_string(),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ));
    f.render_widget(Paragraph::new(text).block(block), area);
}

fn draw_recent_postings(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("NEWEST INTERNSHIPS")
        .border_style(Style::default().fg(Color::DarkGray));

    let items: Vec<ListItem> = app
        .engine
        .source()
        .iter()
        .take(8)
        .map(|posting| {
            ListItem::new(Line::from(vec![
                Span::raw(posting.title.clone()),
                Span::styled(
                    format!("  {}", posting.company),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    if items.is_empty() {
        f.render_widget(
            Paragraph::new("No internships loaded yet").block(block),
            area,
        );
    } else {
        f.render_widget(List::new(items).block(block), area);
    }
}

fn draw_recent_applications(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("RECENT APPLICATIONS")
        .border_style(Style::default().fg(Color::DarkGray));

    let items: Vec<ListItem> = app
        .applications
        .iter()
        .take(8)
        .map(|application| {
            let status_color = if application.status == STATUS_PENDING {
                Color::Yellow
            } else {
                Color::Green
            };
            ListItem::new(Line::from(vec![
                Span::raw(application.posting_title.clone()),
                Span::styled(
                    format!("  [{}]", application.status),
                    Style::default().fg(status_color),
                ),
            ]))
        })
        .collect();

    if items.is_empty() {
        f.render_widget(Paragraph::new("No applications yet").block(block), area);
    } else {
        f.render_widget(List::new(items).block(block), area);
    }
}
