//! JSON Export
//!
//! Writes the home-view overview snapshot as pretty-printed JSON.

use std::fs::File;
use std::path::Path;

use crate::app::App;

/// Write the dashboard overview to a JSON file
pub fn write_overview(path: &Path, app: &App) -> Result<(), Box<dyn std::error::Error>> {
    let overview = serde_json::json!({
        "user": {
            "id": app.identity.user_id,
            "name": app.identity.display_name,
            "email": app.identity.email,
        },
        "open_internships": app.engine.source_len(),
        "applications": app.applications.len(),
        "pending_applications": app.pending_application_count(),
        "favorites": app.favorites.len(),
        "search": app.engine.search(),
        "category": app.engine.category(),
        "visible_postings": app.engine.filtered(),
    });

    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, &overview)?;
    Ok(())
}
