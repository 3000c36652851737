//! Overlays - notifications panel and help popup

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph};
use ratatui::Frame;

use crate::app::{App, StatusLevel};
use crate::ui::layout::centered_rect;

/// Right-hand notifications panel listing the recent notices
pub fn draw_notifications(f: &mut Frame, size: Rect, app: &App) {
    let width = size.width.min(44);
    let area = Rect {
        x: size.width.saturating_sub(width),
        y: 0,
        width,
        height: size.height.saturating_sub(1),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title("NOTIFICATIONS (n to close)")
        .border_style(Style::default().fg(Color::Yellow));

    f.render_widget(Clear, area);

    if app.notices.is_empty() {
        f.render_widget(Paragraph::new("No notifications yet").block(block), area);
        return;
    }

    let items: Vec<ListItem> = app
        .notices
        .iter()
        .rev()
        .map(|notice| {
            let color = match notice.level {
                StatusLevel::Info => Color::Gray,
                StatusLevel::Warn => Color::Yellow,
                StatusLevel::Error => Color::Red,
            };
            ListItem::new(Line::from(vec![
                Span::styled(
                    notice.at.format("%H:%M:%S ").to_string(),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(notice.text.clone(), Style::default().fg(color)),
            ]))
        })
        .collect();

    f.render_widget(List::new(items).block(block), area);
}

pub fn draw_help(f: &mut Frame, size: Rect) {
    let area = centered_rect(60, 70, size);
    let block = Block::default()
        .borders(Borders::ALL)
        .title("HELP (? to close)")
        .border_style(Style::default().fg(Color::Cyan));

    let lines = vec![
        Line::from("1-5        switch section"),
        Line::from("Tab/S-Tab  cycle sections"),
        Line::from("j/k        move selection"),
        Line::from("h/l        focus sidebar / list"),
        Line::from("/          search postings"),
        Line::from("c / C      cycle category filter"),
        Line::from("f / space  toggle favorite"),
        Line::from("b          collapse sidebar"),
        Line::from("n          notifications panel"),
        Line::from("r          refresh data"),
        Line::from("e          export current list"),
        Line::from("y          copy selection"),
        Line::from("o          sign out"),
        Line::from("q          quit"),
    ];

    f.render_widget(Clear, area);
    f.render_widget(Paragraph::new(lines).block(block), area);
}
