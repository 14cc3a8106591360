use serde::{Deserialize, Deserializer, Serialize};

/// One page of results from the document search endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PageResponse {
    /// Total number of documents matching the query across all pages.
    #[serde(default)]
    pub count: u64,
    #[serde(default, deserialize_with = "nullable_string")]
    pub description: String,
    #[serde(default)]
    pub total_pages: u64,
    /// Link to the following page. Absent on the last page.
    #[serde(default)]
    pub next_page_url: Option<String>,
    #[serde(default)]
    pub results: Vec<RawRecord>,
}

impl PageResponse {
    /// Returns the continuation link when the server supplied a usable one.
    /// Empty or blank links are treated the same as a missing field.
    pub fn next_page(&self) -> Option<&str> {
        self.next_page_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}

/// President attached to an executive order.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct President {
    #[serde(default, deserialize_with = "nullable_string")]
    pub identifier: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub name: String,
}

/// One executive order as returned by the API.
///
/// Older documents frequently carry `null` for the citation or signing date,
/// so every attribute reads `null` as an empty string.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct RawRecord {
    #[serde(default, deserialize_with = "nullable_string")]
    pub title: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub citation: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub document_number: String,
    #[serde(default)]
    pub president: Option<President>,
    #[serde(default, deserialize_with = "nullable_string")]
    pub signing_date: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub publication_date: String,
}

/// Output row. Field order matches [`FlatRecord::COLUMNS`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatRecord {
    pub title: String,
    pub citation: String,
    pub document_number: String,
    pub president: String,
    pub signing_date: String,
    pub publication_date: String,
}

impl FlatRecord {
    /// Header row written at the top of every CSV file.
    pub const COLUMNS: [&'static str; 6] = [
        "title",
        "citation",
        "document_number",
        "president",
        "signing_date",
        "publication_date",
    ];
}

fn nullable_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
