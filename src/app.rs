use std::collections::BTreeSet;
use std::time::{Duration, Instant};

use chrono::{DateTime, Local};

use crate::domain::filter::ListFilterEngine;
use crate::domain::{
    ApplicationRecord, Identity, InternshipPosting, CATEGORY_ALL, DEFAULT_CATEGORIES,
    STATUS_PENDING,
};

/// Navigation sections offered by the sidebar menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    Browse,
    Applications,
    Favorites,
    Profile,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::Browse,
        Section::Applications,
        Section::Favorites,
        Section::Profile,
    ];

    /// Stable section identifier stored in [`App::active_section`]
    pub fn id(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Browse => "browse",
            Section::Applications => "applications",
            Section::Favorites => "favorites",
            Section::Profile => "profile",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Browse => "Browse Internships",
            Section::Applications => "My Applications",
            Section::Favorites => "Favorites",
            Section::Profile => "Profile",
        }
    }

    pub fn shortcut(&self) -> char {
        match self {
            Section::Home => '1',
            Section::Browse => '2',
            Section::Applications => '3',
            Section::Favorites => '4',
            Section::Profile => '5',
        }
    }

    /// Resolve a stored section id back to a known menu entry. Returns
    /// `None` for ids outside the menu set; the rendering layer falls
    /// through to an "unknown section" pane in that case.
    pub fn from_id(id: &str) -> Option<Self> {
        Section::ALL.iter().copied().find(|section| section.id() == id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Sidebar,
    List,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Search,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataMode {
    Sample,
    Remote,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warn,
    Error,
}

/// Transient message shown in the status line
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
    pub since: Instant,
}

/// Entry in the notifications panel history
#[derive(Debug, Clone)]
pub struct Notice {
    pub text: String,
    pub level: StatusLevel,
    pub at: DateTime<Local>,
}

/// One sidebar menu row with its derived badge count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry {
    pub section: Section,
    pub badge: Option<usize>,
}

const NOTICE_CAP: usize = 50;
const STATUS_TTL: Duration = Duration::from_secs(3);

/// Top-level application state: navigation, filters, favorites, fetched
/// lists, and the transient status/notice stream. All mutation happens on
/// the TUI thread, either from key handlers or from applied runtime
/// events.
pub struct App {
    /// Signed-in user, injected at construction
    pub identity: Identity,
    /// Active section id. Deliberately unvalidated: any id is accepted
    /// and unknown ids render through the fallback pane.
    pub active_section: String,
    pub sidebar_collapsed: bool,
    pub notifications_open: bool,
    pub help_open: bool,
    /// Favorited posting ids. In-memory only, lost on exit.
    pub favorites: BTreeSet<String>,
    /// Source posting list plus search/category criteria
    pub engine: ListFilterEngine,
    pub applications: Vec<ApplicationRecord>,
    /// Category values offered by the selector, without the "all" sentinel
    pub categories: Vec<String>,
    /// 0 = "all", i > 0 = categories[i - 1]
    pub category_index: usize,
    /// Position in the *filtered* posting list
    pub selected_posting: usize,
    pub selected_application: usize,
    pub selected_favorite: usize,
    pub focus: Focus,
    pub input_mode: InputMode,
    pub data_mode: DataMode,
    pub store_endpoint: String,
    pub status: Option<StatusMessage>,
    pub notices: Vec<Notice>,
    pub signed_out: bool,
    pub should_quit: bool,
    pending_signout_request: bool,
    pending_refresh_request: bool,
}

impl App {
    pub fn new(identity: Identity) -> Self {
        Self {
            identity,
            active_section: Section::Home.id().to_string(),
            sidebar_collapsed: false,
            notifications_open: false,
            help_open: false,
            favorites: BTreeSet::new(),
            engine: ListFilterEngine::new(),
            applications: Vec::new(),
            categories: DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect(),
            category_index: 0,
            selected_posting: 0,
            selected_application: 0,
            selected_favorite: 0,
            focus: Focus::Sidebar,
            input_mode: InputMode::Normal,
            data_mode: DataMode::Sample,
            store_endpoint: String::new(),
            status: None,
            notices: Vec::new(),
            signed_out: false,
            should_quit: false,
            pending_signout_request: false,
            pending_refresh_request: false,
        }
    }

    // --- navigation -----------------------------------------------------

    /// Set the active section id unconditionally. No validation against
    /// the menu set; unknown ids stay stored verbatim.
    pub fn set_active_section(&mut self, id: impl Into<String>) {
        self.active_section = id.into();
    }

    /// The active section as a known menu entry, if it is one
    pub fn active_menu_section(&self) -> Option<Section> {
        Section::from_id(&self.active_section)
    }

    /// Step the sidebar selection through the menu. An unknown active id
    /// re-enters the menu at the first entry.
    pub fn cycle_section(&mut self, forward: bool) {
        let current = self
            .active_menu_section()
            .and_then(|section| Section::ALL.iter().position(|s| *s == section));
        let next = match (current, forward) {
            (Some(idx), true) => (idx + 1) % Section::ALL.len(),
            (Some(idx), false) => (idx + Section::ALL.len() - 1) % Section::ALL.len(),
            (None, _) => 0,
        };
        self.set_active_section(Section::ALL[next].id());
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_collapsed = !self.sidebar_collapsed;
    }

    pub fn toggle_notifications(&mut self) {
        self.notifications_open = !self.notifications_open;
    }

    // --- favorites ------------------------------------------------------

    /// Toggle membership of a posting id in the favorite set. Toggling
    /// twice restores the original membership.
    pub fn toggle_favorite(&mut self, id: &str) -> bool {
        if self.favorites.contains(id) {
            self.favorites.remove(id);
            false
        } else {
            self.favorites.insert(id.to_string());
            true
        }
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.contains(id)
    }

    /// Toggle the favorite flag of whichever posting is selected in the
    /// current section's list
    pub fn toggle_selected_favorite(&mut self) {
        let id = match self.active_menu_section() {
            Some(Section::Browse) => self.selected_posting().map(|p| p.id.clone()),
            Some(Section::Favorites) => self.selected_favorite_posting().map(|p| p.id.clone()),
            _ => None,
        };
        if let Some(id) = id {
            if self.toggle_favorite(&id) {
                self.set_status("Added to favorites", StatusLevel::Info);
            } else {
                self.set_status("Removed from favorites", StatusLevel::Info);
            }
            self.clamp_selections();
        }
    }

    /// Favorited postings, in source-list order
    pub fn favorite_postings(&self) -> Vec<&InternshipPosting> {
        self.engine
            .source()
            .iter()
            .filter(|posting| self.favorites.contains(&posting.id))
            .collect()
    }

    // --- badges ---------------------------------------------------------

    /// Badge counts per menu entry. The browse badge is the size of the
    /// full unfiltered source list; the applications badge counts records
    /// whose status is exactly "pending". Other entries carry none.
    pub fn menu_badges(&self) -> Vec<MenuEntry> {
        Section::ALL
            .iter()
            .map(|section| MenuEntry {
                section: *section,
                badge: match section {
                    Section::Browse => Some(self.engine.source_len()),
                    Section::Applications => Some(self.pending_application_count()),
                    _ => None,
                },
            })
            .collect()
    }

    pub fn pending_application_count(&self) -> usize {
        self.applications
            .iter()
            .filter(|application| application.status == STATUS_PENDING)
            .count()
    }

    // --- filter criteria ------------------------------------------------

    /// Display label of the current category selector position
    pub fn category_label(&self) -> &str {
        if self.category_index == 0 {
            CATEGORY_ALL
        } else {
            self.categories
                .get(self.category_index - 1)
                .map(|c| c.as_str())
                .unwrap_or(CATEGORY_ALL)
        }
    }

    /// Step the category selector and recompute the filtered list
    pub fn cycle_category(&mut self, forward: bool) {
        let len = self.categories.len() + 1;
        self.category_index = if forward {
            (self.category_index + 1) % len
        } else {
            (self.category_index + len - 1) % len
        };
        let category = self.category_label().to_string();
        self.engine.set_category(category);
        self.clamp_selections();
    }

    // --- selection ------------------------------------------------------

    pub fn selected_posting(&self) -> Option<&InternshipPosting> {
        self.engine.filtered_get(self.selected_posting)
    }

    pub fn selected_application(&self) -> Option<&ApplicationRecord> {
        self.applications.get(self.selected_application)
    }

    pub fn selected_favorite_posting(&self) -> Option<&InternshipPosting> {
        self.favorite_postings().get(self.selected_favorite).copied()
    }

    pub fn move_selection_down(&mut self) {
        match self.active_menu_section() {
            Some(Section::Browse) | Some(Section::Home) => {
                if self.selected_posting + 1 < self.engine.filtered_len() {
                    self.selected_posting += 1;
                }
            }
            Some(Section::Applications) => {
                if self.selected_application + 1 < self.applications.len() {
                    self.selected_application += 1;
                }
            }
            Some(Section::Favorites) => {
                if self.selected_favorite + 1 < self.favorite_postings().len() {
                    self.selected_favorite += 1;
                }
            }
            _ => {}
        }
    }

    pub fn move_selection_up(&mut self) {
        match self.active_menu_section() {
            Some(Section::Browse) | Some(Section::Home) => {
                self.selected_posting = self.selected_posting.saturating_sub(1);
            }
            Some(Section::Applications) => {
                self.selected_application = self.selected_application.saturating_sub(1);
            }
            Some(Section::Favorites) => {
                self.selected_favorite = self.selected_favorite.saturating_sub(1);
            }
            _ => {}
        }
    }

    pub fn clamp_selections(&mut self) {
        self.selected_posting = self
            .selected_posting
            .min(self.engine.filtered_len().saturating_sub(1));
        self.selected_application = self
            .selected_application
            .min(self.applications.len().saturating_sub(1));
        self.selected_favorite = self
            .selected_favorite
            .min(self.favorite_postings().len().saturating_sub(1));
    }

    // --- status / notices -----------------------------------------------

    pub fn set_status(&mut self, text: impl Into<String>, level: StatusLevel) {
        self.status = Some(StatusMessage {
            text: text.into(),
            level,
            since: Instant::now(),
        });
    }

    pub fn status_text(&self) -> Option<(&str, StatusLevel)> {
        self.status
            .as_ref()
            .map(|status| (status.text.as_str(), status.level))
    }

    /// Record a notice in the panel history and surface it in the status
    /// line
    pub fn push_notice(&mut self, text: impl Into<String>, level: StatusLevel) {
        let text = text.into();
        self.notices.push(Notice {
            text: text.clone(),
            level,
            at: Local::now(),
        });
        if self.notices.len() > NOTICE_CAP {
            let overflow = self.notices.len() - NOTICE_CAP;
            self.notices.drain(0..overflow);
        }
        self.set_status(text, level);
    }

    pub fn on_tick(&mut self) {
        if let Some(status) = self.status.as_ref() {
            if status.since.elapsed() > STATUS_TTL {
                self.status = None;
            }
        }
        self.clamp_selections();
    }

    // --- applied runtime events -----------------------------------------

    /// Replace the posting source list with a fetched snapshot
    pub fn apply_postings(&mut self, postings: Vec<InternshipPosting>) {
        let count = postings.len();
        self.engine.set_source(postings);
        self.clamp_selections();
        self.push_notice(
            format!("Loaded {count} open internships"),
            StatusLevel::Info,
        );
    }

    /// Replace the application list with a fetched snapshot
    pub fn apply_applications(&mut self, applications: Vec<ApplicationRecord>) {
        let count = applications.len();
        self.applications = applications;
        self.clamp_selections();
        self.push_notice(format!("Loaded {count} applications"), StatusLevel::Info);
    }

    /// A store read failed. The fetch was already logged worker-side;
    /// here it only feeds the notice stream. Existing lists stay as they
    /// were.
    pub fn apply_store_error(&mut self, message: String) {
        self.push_notice(message, StatusLevel::Error);
    }

    pub fn apply_signed_out(&mut self) {
        self.set_status("Signed out", StatusLevel::Info);
    }

    // --- requests picked up by the main loop ----------------------------

    pub fn request_refresh(&mut self) {
        self.pending_refresh_request = true;
        self.set_status("Refreshing…", StatusLevel::Info);
    }

    pub fn take_refresh_request(&mut self) -> bool {
        if self.pending_refresh_request {
            self.pending_refresh_request = false;
            true
        } else {
            false
        }
    }

    /// Leave the authenticated view. Navigation happens here, immediately
    /// and exactly once; the sign-out call it queues is best effort and
    /// its failure never undoes the navigation.
    pub fn request_logout(&mut self) {
        if self.signed_out {
            return;
        }
        self.signed_out = true;
        self.should_quit = true;
        self.pending_signout_request = true;
    }

    pub fn take_signout_request(&mut self) -> bool {
        if self.pending_signout_request {
            self.pending_signout_request = false;
            true
        } else {
            false
        }
    }
}
