//! Shared wire types for the regulatory intelligence backend.

use serde::{Deserialize, Deserializer, Serialize};

/// A scraped regulation as the backend returns it.
///
/// The backend owns this shape and the client does not validate it beyond
/// existence: every descriptive field is optional and renders as placeholder
/// text when missing. Unknown fields are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Regulation {
    /// Opaque identifier, stable across fetches. Some deployments send it
    /// as a JSON number; it is carried as text either way.
    #[serde(default, deserialize_with = "id_as_string")]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub jurisdiction: Option<String>,
    #[serde(default)]
    pub agency: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, alias = "raw_text")]
    pub content: Option<String>,
    #[serde(default)]
    pub source_url: Option<String>,
    /// ISO 8601 timestamp string.
    #[serde(default, alias = "scraped_at")]
    pub publication_date: Option<String>,
}

fn id_as_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(serde_json::Number),
    }

    let raw = Option::<RawId>::deserialize(deserializer)?;
    Ok(raw.map(|id| match id {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    }))
}

/// The response shapes the list endpoint is known to produce.
///
/// Older backend builds return a bare array; newer ones wrap it under a
/// `data` or `regulations` key. Anything else lands in `Unrecognized`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Payload {
    List(Vec<Regulation>),
    Data { data: Vec<Regulation> },
    Regulations { regulations: Vec<Regulation> },
    Unrecognized(serde_json::Value),
}

/// Flatten a [`Payload`] into an ordered list of records.
///
/// Unrecognized shapes collapse to the empty list rather than an error, so
/// a surprising response degrades the feed instead of breaking it.
pub fn normalize(payload: Payload) -> Vec<Regulation> {
    match payload {
        Payload::List(records) => records,
        Payload::Data { data } => data,
        Payload::Regulations { regulations } => regulations,
        Payload::Unrecognized(_) => Vec::new(),
    }
}

/// A scraping job accepted by the backend.
///
/// Only the identifier is exposed; the client has no way to observe
/// progress or completion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeJob {
    pub job_id: String,
}

/// Body of a job-creation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeRequest {
    /// Site the backend should scrape.
    pub url: String,
    /// Jurisdiction code, e.g. "US" or "EU".
    pub jurisdiction: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Vec<Regulation> {
        normalize(serde_json::from_str(json).unwrap())
    }

    #[test]
    fn bare_list_payload() {
        let records = parse(r#"[{"id": "r1", "title": "GDPR Update"}]"#);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id.as_deref(), Some("r1"));
        assert_eq!(records[0].title.as_deref(), Some("GDPR Update"));
    }

    #[test]
    fn data_wrapped_payload() {
        let records = parse(r#"{"data": [{"id": "r1"}, {"id": "r2"}]}"#);
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].id.as_deref(), Some("r2"));
    }

    #[test]
    fn regulations_wrapped_payload() {
        let records = parse(r#"{"regulations": [{"id": "r1"}]}"#);
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn unrecognized_object_is_empty() {
        assert!(parse(r#"{"message": "maintenance"}"#).is_empty());
        assert!(parse(r#""just a string""#).is_empty());
        assert!(parse("42").is_empty());
    }

    #[test]
    fn wrapped_non_array_is_empty() {
        assert!(parse(r#"{"data": "oops"}"#).is_empty());
    }

    #[test]
    fn preserves_backend_order() {
        let records = parse(r#"[{"id": "b"}, {"id": "a"}, {"id": "c"}]"#);
        let ids: Vec<_> = records.iter().filter_map(|r| r.id.as_deref()).collect();
        assert_eq!(ids, ["b", "a", "c"]);
    }

    #[test]
    fn numeric_id_carried_as_text() {
        let records = parse(r#"[{"id": 17, "title": "Tax Notice"}]"#);
        assert_eq!(records[0].id.as_deref(), Some("17"));
    }

    #[test]
    fn missing_fields_default_to_none() {
        let records = parse(r#"[{}]"#);
        assert_eq!(records.len(), 1);
        assert!(records[0].id.is_none());
        assert!(records[0].title.is_none());
        assert!(records[0].content.is_none());
    }

    #[test]
    fn content_accepts_raw_text_alias() {
        let records = parse(r#"[{"id": "r1", "raw_text": "full text"}]"#);
        assert_eq!(records[0].content.as_deref(), Some("full text"));
    }

    #[test]
    fn publication_date_accepts_scraped_at_alias() {
        let records = parse(r#"[{"id": "r1", "scraped_at": "2026-07-01T00:00:00Z"}]"#);
        assert_eq!(
            records[0].publication_date.as_deref(),
            Some("2026-07-01T00:00:00Z")
        );
    }

    #[test]
    fn unknown_fields_ignored() {
        let records = parse(r#"[{"id": "r1", "embedding": [0.1, 0.2]}]"#);
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn scrape_request_omits_absent_category() {
        let req = ScrapeRequest {
            url: "https://www.federalregister.gov".into(),
            jurisdiction: "US".into(),
            category: None,
        };
        let json = serde_json::to_string(&req).unwrap();
        assert!(!json.contains("category"));

        let req = ScrapeRequest {
            category: Some("privacy".into()),
            ..req
        };
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains(r#""category":"privacy""#));
    }

    #[test]
    fn scrape_job_requires_job_id() {
        let job: ScrapeJob = serde_json::from_str(r#"{"job_id": "abc123"}"#).unwrap();
        assert_eq!(job.job_id, "abc123");
        assert!(serde_json::from_str::<ScrapeJob>(r#"{"status": "queued"}"#).is_err());
    }
}
