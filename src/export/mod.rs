//! Export Module
//!
//! Writes the current section's list to a file in the data directory.
//!
//! - 'e' key triggers export based on the active section
//! - Browse / Favorites → CSV of the visible posting list
//! - Applications → CSV of the application list
//! - Home → JSON overview snapshot

pub mod csv_export;
pub mod json_export;

use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use chrono::Local;
use directories::ProjectDirs;

use crate::app::{App, Section};

/// Get the export directory path, creating it if needed
fn get_export_dir() -> std::io::Result<PathBuf> {
    let export_dir = crate::config::data_dir()
        .map(|dir| dir.join("exports"))
        .or_else(|| ProjectDirs::from("io", "stint", "stint").map(|dirs| dirs.data_dir().join("exports")))
        .unwrap_or_else(|| PathBuf::from(".stint").join("exports"));
    fs::create_dir_all(&export_dir)?;
    Ok(export_dir)
}

/// Generate a timestamped filename
fn generate_filename(prefix: &str, extension: &str) -> String {
    let timestamp = Local::now().format("%Y-%m-%d-%H%M%S");
    format!("{}-{}.{}", prefix, timestamp, extension)
}

/// Export the active section's data. Returns the status-line message for
/// the written file.
pub fn export_current_view(app: &App) -> Result<String> {
    match app.active_menu_section() {
        Some(Section::Browse) => export_postings(app.engine.filtered(), "internships"),
        Some(Section::Favorites) => export_postings(app.favorite_postings(), "favorites"),
        Some(Section::Applications) => export_applications(app),
        Some(Section::Home) => export_overview(app),
        _ => Err(anyhow!("Nothing to export in this view")),
    }
}

fn export_postings(
    postings: Vec<&crate::domain::InternshipPosting>,
    prefix: &str,
) -> Result<String> {
    if postings.is_empty() {
        return Err(anyhow!("No postings to export"));
    }

    let path = get_export_dir()?.join(generate_filename(prefix, "csv"));
    let count = csv_export::write_postings(&path, &postings)
        .map_err(|err| anyhow!("Export failed: {err}"))?;
    Ok(format!("Exported {} postings to {}", count, path.display()))
}

fn export_applications(app: &App) -> Result<String> {
    if app.applications.is_empty() {
        return Err(anyhow!("No applications to export"));
    }

    let path = get_export_dir()?.join(generate_filename("applications", "csv"));
    let count = csv_export::write_applications(&path, &app.applications)
        .map_err(|err| anyhow!("Export failed: {err}"))?;
    Ok(format!("Exported {} applications to {}", count, path.display()))
}

fn export_overview(app: &App) -> Result<String> {
    let path = get_export_dir()?.join(generate_filename("overview", "json"));
    json_export::write_overview(&path, app).map_err(|err| anyhow!("Export failed: {err}"))?;
    Ok(format!("Exported overview to {}", path.display()))
}
