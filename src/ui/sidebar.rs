//! Sidebar - navigation menu with badge counts

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};
use ratatui::Frame;

use crate::app::{App, Focus};

pub fn draw(f: &mut Frame, area: Rect, app: &App) {
    let border_style = if app.focus == Focus::Sidebar {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title("stint")
        .border_style(border_style);

    if app.sidebar_collapsed {
        draw_collapsed(f, area, app, block);
        return;
    }

    let items: Vec<ListItem> = app
        .menu_badges()
        .iter()
        .map(|entry| {
            let active = app.active_section == entry.section.id();
            let marker = if active { "> " } else { "  " };
            let mut spans = vec![
                Span::raw(marker),
                Span::styled(
                    format!("{} ", entry.section.shortcut()),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(entry.section.title()),
            ];
            if let Some(badge) = entry.badge {
                spans.push(Span::styled(
                    format!(" ({badge})"),
                    Style::default().fg(Color::Yellow),
                ));
            }
            let style = if active {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(spans)).style(style)
        })
        .collect();

    f.render_widget(List::new(items).block(block), area);
}

fn draw_collapsed(f: &mut Frame, area: Rect, app: &App, block: Block) {
    // Shortcut column only; badges stay visible in the expanded view
    let lines: Vec<Line> = app
        .menu_badges()
        .iter()
        .map(|entry| {
            let active = app.active_section == entry.section.id();
            let style = if active {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Line::from(Span::styled(format!("{}", entry.section.shortcut()), style))
        })
        .collect();

    f.render_widget(Paragraph::new(lines).block(block), area);
}
