//! Document store abstraction and client implementations
//!
//! The hosted store exposes one query capability: fetch all documents of a
//! collection where a field equals a value, ordered by a field descending.
//! Documents come back as a store-assigned identifier merged with the
//! field data. Two collections are consumed here: `postings` and
//! `applications`.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::domain::{ApplicationRecord, InternshipPosting};

/// Collection holding internship postings
pub const POSTINGS_COLLECTION: &str = "postings";
/// Collection holding application records
pub const APPLICATIONS_COLLECTION: &str = "applications";

/// A failed store read. Reads are logged and swallowed at the call site;
/// the prior source list is retained and nothing is retried.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("store returned status {0}")]
    Status(u16),
    #[error("malformed document: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Read-only view of the hosted document store.
#[async_trait]
pub trait DocumentStore: Send + Sync + 'static {
    /// All postings with `status == "active"`, newest first
    async fn fetch_postings(&self) -> Result<Vec<InternshipPosting>, StoreError>;

    /// All applications submitted by `user_id`, newest first
    async fn fetch_applications(
        &self,
        user_id: &str,
    ) -> Result<Vec<ApplicationRecord>, StoreError>;

    /// Display name for the status line
    fn endpoint_name(&self) -> String;
}

/// HTTP client for the hosted store's JSON query endpoint.
pub struct RestStore {
    base_url: String,
    client: reqwest::Client,
}

impl RestStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// One store query: collection + equality filter + descending order.
    /// The response carries `documents: [{ "id": ..., "data": {...} }]`;
    /// the id is merged into the data object before decoding.
    async fn query<T: DeserializeOwned>(
        &self,
        collection: &str,
        field: &str,
        value: &str,
        order_by: &str,
    ) -> Result<Vec<T>, StoreError> {
        let url = format!("{}/query", self.base_url.trim_end_matches('/'));
        let body = serde_json::json!({
            "collection": collection,
            "where": { "field": field, "equals": value },
            "order_by": { "field": order_by, "direction": "desc" },
        });

        let response = self.client.post(&url).json(&body).send().await?;
        if !response.status().is_success() {
            return Err(StoreError::Status(response.status().as_u16()));
        }

        let payload: serde_json::Value = response.json().await?;
        let documents = payload
            .get("documents")
            .and_then(|docs| docs.as_array())
            .cloned()
            .unwrap_or_default();

        let mut records = Vec::with_capacity(documents.len());
        for document in documents {
            records.push(merge_document(document)?);
        }
        Ok(records)
    }
}

/// Fold the store-assigned id into the field data, then decode
fn merge_document<T: DeserializeOwned>(document: serde_json::Value) -> Result<T, StoreError> {
    let id = document
        .get("id")
        .and_then(|id| id.as_str())
        .unwrap_or_default()
        .to_string();
    let mut data = document
        .get("data")
        .cloned()
        .unwrap_or_else(|| serde_json::json!({}));
    if let Some(fields) = data.as_object_mut() {
        fields.insert("id".to_string(), serde_json::Value::String(id));
    }
    Ok(serde_json::from_value(data)?)
}

#[async_trait]
impl DocumentStore for RestStore {
    async fn fetch_postings(&self) -> Result<Vec<InternshipPosting>, StoreError> {
        self.query(POSTINGS_COLLECTION, "status", "active", "created_at")
            .await
    }

    async fn fetch_applications(
        &self,
        user_id: &str,
    ) -> Result<Vec<ApplicationRecord>, StoreError> {
        self.query(APPLICATIONS_COLLECTION, "applicant_id", user_id, "submitted_at")
            .await
    }

    fn endpoint_name(&self) -> String {
        self.base_url.clone()
    }
}

/// In-memory store used for `--mock` mode and tests. Applies the same
/// filter and ordering semantics the hosted store applies server-side.
#[derive(Debug, Clone, Default)]
pub struct SampleStore {
    pub postings: Vec<InternshipPosting>,
    pub applications: Vec<ApplicationRecord>,
}

impl SampleStore {
    pub fn new(postings: Vec<InternshipPosting>, applications: Vec<ApplicationRecord>) -> Self {
        Self {
            postings,
            applications,
        }
    }

    /// Seeded demo data set for running without a store endpoint
    pub fn with_sample_data(user_id: &str) -> Self {
        use chrono::{Duration, Utc};

        let now = Utc::now();
        let posting = |days_ago: i64,
                       id: &str,
                       title: &str,
                       company: &str,
                       location: &str,
                       salary: &str,
                       duration: &str,
                       work_mode: &str,
                       category: &str,
                       description: &str| InternshipPosting {
            id: id.to_string(),
            title: title.to_string(),
            company: company.to_string(),
            location: location.to_string(),
            salary: salary.to_string(),
            duration: duration.to_string(),
            work_mode: work_mode.to_string(),
            description: description.to_string(),
            status: "active".to_string(),
            created_at: Some(now - Duration::days(days_ago)),
            category: category.to_string(),
        };

        let postings = vec![
            posting(
                1,
                "post-001",
                "Backend Intern",
                "Acme Systems",
                "Remote",
                "$2,400/mo",
                "12 weeks",
                "Remote",
                "Technology",
                "Work on the order-processing services alongside the platform team.",
            ),
            posting(
                2,
                "post-002",
                "Marketing Intern",
                "Beta Labs",
                "New York, NY",
                "$1,800/mo",
                "10 weeks",
                "On-site",
                "Marketing",
                "Support campaign planning and social analytics reporting.",
            ),
            posting(
                3,
                "post-003",
                "Product Design Intern",
                "Northwind",
                "Seattle, WA",
                "$2,100/mo",
                "12 weeks",
                "Hybrid",
                "Design",
                "Prototype flows for the mobile app with the design systems group.",
            ),
            posting(
                5,
                "post-004",
                "Data Engineering Intern",
                "Acme Systems",
                "Austin, TX",
                "$2,600/mo",
                "16 weeks",
                "Hybrid",
                "Technology",
                "Build ingestion pipelines and dashboards for the analytics stack.",
            ),
            posting(
                8,
                "post-005",
                "Finance Intern",
                "Harbor Capital",
                "Boston, MA",
                "$2,000/mo",
                "10 weeks",
                "On-site",
                "Finance",
                "Assist the FP&A team with quarterly forecasting models.",
            ),
            posting(
                9,
                "post-006",
                "Operations Intern",
                "Beta Labs",
                "Remote",
                "$1,700/mo",
                "8 weeks",
                "Remote",
                "Operations",
                "Improve vendor onboarding runbooks and internal tooling.",
            ),
            posting(
                12,
                "post-007",
                "Frontend Intern",
                "Northwind",
                "Remote",
                "$2,300/mo",
                "12 weeks",
                "Remote",
                "Technology",
                "Ship UI improvements across the customer portal.",
            ),
        ];

        let application = |days_ago: i64, id: &str, posting_id: &str, title: &str,
                           company: &str, status: &str| ApplicationRecord {
            id: id.to_string(),
            applicant_id: user_id.to_string(),
            posting_id: posting_id.to_string(),
            posting_title: title.to_string(),
            company: company.to_string(),
            status: status.to_string(),
            submitted_at: Some(now - Duration::days(days_ago)),
        };

        let applications = vec![
            application(1, "app-001", "post-001", "Backend Intern", "Acme Systems", "pending"),
            application(3, "app-002", "post-003", "Product Design Intern", "Northwind", "pending"),
            application(6, "app-003", "post-002", "Marketing Intern", "Beta Labs", "reviewed"),
            application(9, "app-004", "post-005", "Finance Intern", "Harbor Capital", "pending"),
            application(14, "app-005", "post-006", "Operations Intern", "Beta Labs", "reviewed"),
        ];

        Self::new(postings, applications)
    }
}

#[async_trait]
impl DocumentStore for SampleStore {
    async fn fetch_postings(&self) -> Result<Vec<InternshipPosting>, StoreError> {
        let mut postings: Vec<InternshipPosting> = self
            .postings
            .iter()
            .filter(|posting| posting.status == "active")
            .cloned()
            .collect();
        postings.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(postings)
    }

    async fn fetch_applications(
        &self,
        user_id: &str,
    ) -> Result<Vec<ApplicationRecord>, StoreError> {
        let mut applications: Vec<ApplicationRecord> = self
            .applications
            .iter()
            .filter(|application| application.applicant_id == user_id)
            .cloned()
            .collect();
        applications.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
        Ok(applications)
    }

    fn endpoint_name(&self) -> String {
        "sample data".to_string()
    }
}
