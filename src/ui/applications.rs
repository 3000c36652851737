//! Applications section - submitted applications with review status

use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph, Row, Table, TableState};
use ratatui::Frame;

use crate::app::{App, Focus};
use crate::domain::STATUS_PENDING;

pub fn draw(f: &mut Frame, area: Rect, app: &App) {
    let border_style = if app.focus == Focus::List {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(
            "MY APPLICATIONS ({} pending)",
            app.pending_application_count()
        ))
        .border_style(border_style);

    if app.applications.is_empty() {
        f.render_widget(
            Paragraph::new("No applications submitted yet").block(block),
            area,
        );
        return;
    }

    let rows: Vec<Row> = app
        .applications
        .iter()
        .map(|application| {
            let status_style = if application.status == STATUS_PENDING {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::Green)
            };
            Row::new(vec![
                application.posting_title.clone(),
                application.company.clone(),
                application.status.clone(),
                application
                    .submitted_at
                    .map(|at| at.format("%Y-%m-%d").to_string())
                    .unwrap_or_default(),
            ])
            .style(status_style)
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(40),
            Constraint::Percentage(25),
            Constraint::Percentage(15),
            Constraint::Percentage(20),
        ],
    )
    .header(
        Row::new(vec!["POSITION", "COMPANY", "STATUS", "SUBMITTED"])
            .style(Style::default().add_modifier(Modifier::BOLD)),
    )
    .block(block)
    .highlight_style(Style::default().bg(Color::DarkGray));

    let mut state = TableState::default();
    state.select(Some(app.selected_application.min(app.applications.len() - 1)));
    f.render_stateful_widget(table, area, &mut state);
}
