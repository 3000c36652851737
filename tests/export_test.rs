//! Tests for the CSV exporters

use stint::domain::{ApplicationRecord, InternshipPosting};
use stint::export::csv_export;

fn posting(id: &str, title: &str, company: &str) -> InternshipPosting {
    InternshipPosting {
        id: id.to_string(),
        title: title.to_string(),
        company: company.to_string(),
        location: "Remote".to_string(),
        salary: "$2,000/mo".to_string(),
        category: "Technology".to_string(),
        ..Default::default()
    }
}

#[test]
fn posting_export_round_trips_through_csv() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("internships.csv");

    let first = posting("p1", "Backend Intern", "Acme");
    let second = posting("p2", "Platform Intern", "Beta, Inc.");
    let count = csv_export::write_postings(&path, &[&first, &second]).expect("write");
    assert_eq!(count, 2);

    let mut reader = csv::Reader::from_path(&path).expect("read back");
    let headers = reader.headers().expect("headers").clone();
    assert_eq!(&headers[0], "id");
    assert_eq!(&headers[1], "title");

    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.expect("row")).collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(&rows[0][1], "Backend Intern");
    // Quoting survives a comma in the company name
    assert_eq!(&rows[1][2], "Beta, Inc.");
}

#[test]
fn application_export_writes_one_row_per_record() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("applications.csv");

    let applications = vec![
        ApplicationRecord {
            id: "a1".to_string(),
            posting_title: "Backend Intern".to_string(),
            status: "pending".to_string(),
            ..Default::default()
        },
        ApplicationRecord {
            id: "a2".to_string(),
            posting_title: "Finance Intern".to_string(),
            status: "reviewed".to_string(),
            ..Default::default()
        },
    ];

    let count = csv_export::write_applications(&path, &applications).expect("write");
    assert_eq!(count, 2);

    let mut reader = csv::Reader::from_path(&path).expect("read back");
    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.expect("row")).collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(&rows[0][4], "pending");
    assert_eq!(&rows[1][4], "reviewed");
}
