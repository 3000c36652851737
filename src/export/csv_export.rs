//! CSV Export
//!
//! Writes posting and application lists to CSV files.

use std::path::Path;

use crate::domain::{ApplicationRecord, InternshipPosting};

/// Write postings to CSV file
pub fn write_postings(
    path: &Path,
    postings: &[&InternshipPosting],
) -> Result<usize, Box<dyn std::error::Error>> {
    let mut wtr = csv::Writer::from_path(path)?;

    // Write header
    wtr.write_record([
        "id",
        "title",
        "company",
        "location",
        "salary",
        "duration",
        "work_mode",
        "category",
        "created_at",
    ])?;

    // Write data rows
    for posting in postings {
        wtr.write_record([
            posting.id.clone(),
            posting.title.clone(),
            posting.company.clone(),
            posting.location.clone(),
            posting.salary.clone(),
            posting.duration.clone(),
            posting.work_mode.clone(),
            posting.category.clone(),
            posting
                .created_at
                .map(|at| at.to_rfc3339())
                .unwrap_or_default(),
        ])?;
    }

    wtr.flush()?;
    Ok(postings.len())
}

/// Write applications to CSV file
pub fn write_applications(
    path: &Path,
    applications: &[ApplicationRecord],
) -> Result<usize, Box<dyn std::error::Error>> {
    let mut wtr = csv::Writer::from_path(path)?;

    // Write header
    wtr.write_record([
        "id",
        "posting_id",
        "posting_title",
        "company",
        "status",
        "submitted_at",
    ])?;

    // Write data rows
    for application in applications {
        wtr.write_record([
            application.id.clone(),
            application.posting_id.clone(),
            application.posting_title.clone(),
            application.company.clone(),
            application.status.clone(),
            application
                .submitted_at
                .map(|at| at.to_rfc3339())
                .unwrap_or_default(),
        ])?;
    }

    wtr.flush()?;
    Ok(applications.len())
}
