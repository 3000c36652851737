//! Keyboard handling - translates terminal input into state operations
//!
//! The rendering layer stays stateless; every user intent (search edits,
//! category changes, section selection, sidebar/notification toggles,
//! favorite toggles, refresh, export, logout) lands here and mutates
//! [`App`] directly. Network work is requested through the pending-request
//! flags the main loop forwards to the runtime bridge.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{App, Focus, InputMode, Section, StatusLevel};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if app.help_open {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc) {
            app.help_open = false;
        }
        return;
    }

    if app.notifications_open {
        if matches!(key.code, KeyCode::Char('n') | KeyCode::Esc) {
            app.toggle_notifications();
        }
        return;
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_mode(app, key),
        InputMode::Search => handle_search_mode(app, key),
    }
}

fn handle_normal_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => app.help_open = true,

        KeyCode::Char(ch) if section_for_shortcut(ch).is_some() => {
            if let Some(section) = section_for_shortcut(ch) {
                app.set_active_section(section.id());
                app.focus = Focus::List;
            }
        }

        KeyCode::Tab => app.cycle_section(true),
        KeyCode::BackTab => app.cycle_section(false),

        KeyCode::Down | KeyCode::Char('j') => match app.focus {
            Focus::Sidebar => app.cycle_section(true),
            Focus::List => app.move_selection_down(),
        },
        KeyCode::Up | KeyCode::Char('k') => match app.focus {
            Focus::Sidebar => app.cycle_section(false),
            Focus::List => app.move_selection_up(),
        },
        KeyCode::Left | KeyCode::Char('h') => app.focus = Focus::Sidebar,
        KeyCode::Right | KeyCode::Char('l') => app.focus = Focus::List,
        KeyCode::Enter => app.focus = Focus::List,

        KeyCode::Char('/') => {
            if app.active_menu_section() == Some(Section::Browse) {
                app.input_mode = InputMode::Search;
                app.focus = Focus::List;
            }
        }
        KeyCode::Char('c') => {
            if app.active_menu_section() == Some(Section::Browse) {
                app.cycle_category(true);
            }
        }
        KeyCode::Char('C') => {
            if app.active_menu_section() == Some(Section::Browse) {
                app.cycle_category(false);
            }
        }

        KeyCode::Char('f') | KeyCode::Char(' ') => app.toggle_selected_favorite(),
        KeyCode::Char('b') => app.toggle_sidebar(),
        KeyCode::Char('n') => app.toggle_notifications(),
        KeyCode::Char('r') => app.request_refresh(),

        KeyCode::Char('e') => match crate::export::export_current_view(app) {
            Ok(message) => app.push_notice(message, StatusLevel::Info),
            Err(err) => app.set_status(err.to_string(), StatusLevel::Warn),
        },

        KeyCode::Char('y') => copy_selected_to_clipboard(app),
        KeyCode::Char('o') => app.request_logout(),

        KeyCode::Esc => {
            if app.active_menu_section() == Some(Section::Browse)
                && !app.engine.search().is_empty()
            {
                app.engine.clear_search();
                app.clamp_selections();
            } else {
                app.focus = Focus::Sidebar;
            }
        }

        _ => {}
    }
}

fn handle_search_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.engine.clear_search();
            app.clamp_selections();
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Enter => app.input_mode = InputMode::Normal,
        KeyCode::Backspace => {
            app.engine.pop_search_char();
            app.clamp_selections();
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.engine.clear_search();
            app.clamp_selections();
        }
        // Every keystroke recomputes the filtered list immediately
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.engine.push_search_char(ch);
            app.clamp_selections();
        }
        _ => {}
    }
}

fn section_for_shortcut(ch: char) -> Option<Section> {
    Section::ALL
        .iter()
        .copied()
        .find(|section| section.shortcut() == ch)
}

fn copy_selected_to_clipboard(app: &mut App) {
    use arboard::Clipboard;

    let text = match app.active_menu_section() {
        Some(Section::Browse) => app
            .selected_posting()
            .map(|posting| format!("{} - {}", posting.title, posting.company)),
        Some(Section::Favorites) => app
            .selected_favorite_posting()
            .map(|posting| format!("{} - {}", posting.title, posting.company)),
        Some(Section::Applications) => app
            .selected_application()
            .map(|application| format!("{} - {}", application.posting_title, application.company)),
        _ => None,
    };

    let Some(text) = text else {
        app.set_status("Nothing selected to copy", StatusLevel::Warn);
        return;
    };

    match Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text.clone())) {
        Ok(()) => app.set_status(format!("Copied: {text}"), StatusLevel::Info),
        Err(err) => app.set_status(format!("Clipboard unavailable: {err}"), StatusLevel::Warn),
    }
}
