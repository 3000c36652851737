//! Browse and favorites sections - filterable posting list with details

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::{App, Focus, InputMode};
use crate::domain::InternshipPosting;

pub fn draw_browse(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    draw_filter_bar(f, chunks[0], app);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    let postings = app.engine.filtered();
    draw_posting_list(
        f,
        panes[0],
        app,
        &postings,
        app.selected_posting,
        format!("INTERNSHIPS ({}/{})", postings.len(), app.engine.source_len()),
    );
    draw_posting_detail(f, panes[1], app.selected_posting().map(|p| (p, app.is_favorite(&p.id))));
}

pub fn draw_favorites(f: &mut Frame, area: Rect, app: &App) {
    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let favorites = app.favorite_postings();
    draw_posting_list(
        f,
        panes[0],
        app,
        &favorites,
        app.selected_favorite,
        format!("FAVORITES ({})", favorites.len()),
    );
    draw_posting_detail(
        f,
        panes[1],
        app.selected_favorite_posting().map(|p| (p, true)),
    );
}

fn draw_filter_bar(f: &mut Frame, area: Rect, app: &App) {
    let searching = app.input_mode == InputMode::Search;
    let border_style = if searching {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let search = app.engine.search();
    let cursor = if searching { "_" } else { "" };
    let line = Line::from(vec![
        Span::styled("search: ", Style::default().fg(Color::DarkGray)),
        Span::raw(format!("{search}{cursor}")),
        Span::styled("    category: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            app.category_label().to_string(),
            Style::default().fg(Color::Cyan),
        ),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .title("FILTER (/ to search, c to change category)")
        .border_style(border_style);
    f.render_widget(Paragraph::new(line).block(block), area);
}

fn draw_posting_list(
    f: &mut Frame,
    area: Rect,
    app: &App,
    postings: &[&InternshipPosting],
    selected: usize,
    title: String,
) {
    let border_style = if app.focus == Focus::List {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(border_style);

    if postings.is_empty() {
        f.render_widget(
            Paragraph::new("No postings match the current filters").block(block),
            area,
        );
        return;
    }

    let items: Vec<ListItem> = postings
        .iter()
        .map(|posting| {
            let favorite = if app.is_favorite(&posting.id) {
                "* "
            } else {
                "  "
            };
            ListItem::new(Line::from(vec![
                Span::styled(favorite, Style::default().fg(Color::Yellow)),
                Span::raw(posting.title.clone()),
                Span::styled(
                    format!("  {} - {}", posting.company, posting.location),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let mut state = ListState::default();
    state.select(Some(selected.min(postings.len() - 1)));

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");
    f.render_stateful_widget(list, area, &mut state);
}

fn draw_posting_detail(f: &mut Frame, area: Rect, selected: Option<(&InternshipPosting, bool)>) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("DETAILS")
        .border_style(Style::default().fg(Color::DarkGray));

    let Some((posting, favorite)) = selected else {
        f.render_widget(Paragraph::new("Select a posting to view it").block(block), area);
        return;
    };

    let label = |text: &str| Span::styled(format!("{text}: "), Style::default().fg(Color::DarkGray));
    let mut lines = vec![
        Line::from(Span::styled(
            posting.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![label("company"), Span::raw(posting.company.clone())]),
        Line::from(vec![label("location"), Span::raw(posting.location.clone())]),
        Line::from(vec![label("salary"), Span::raw(posting.salary.clone())]),
        Line::from(vec![label("duration"), Span::raw(posting.duration.clone())]),
        Line::from(vec![label("work mode"), Span::raw(posting.work_mode.clone())]),
        Line::from(vec![label("category"), Span::raw(posting.category.clone())]),
    ];
    if let Some(created_at) = posting.created_at {
        lines.push(Line::from(vec![
            label("posted"),
            Span::raw(created_at.format("%Y-%m-%d").to_string()),
        ]));
    }
    if favorite {
        lines.push(Line::from(Span::styled(
            "* favorited",
            Style::default().fg(Color::Yellow),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(posting.description.clone()));

    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}
