use reqwest::Url;

use crate::error::{Result, ToolError};
use crate::model::FlatRecord;

/// Document search endpoint of the Federal Register API.
pub const DOCUMENTS_ENDPOINT: &str = "https://www.federalregister.gov/api/v1/documents.json";

/// Largest page size the API accepts.
pub const MAX_PER_PAGE: u32 = 1000;

/// Search request for presidential executive orders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentQuery {
    pub per_page: u32,
    pub order: String,
    pub fields: Vec<String>,
    pub document_type: String,
    pub presidential_document_type: String,
    pub include_pre_1994_docs: bool,
}

impl Default for DocumentQuery {
    fn default() -> Self {
        Self {
            per_page: MAX_PER_PAGE,
            order: "newest".to_string(),
            fields: FlatRecord::COLUMNS.iter().map(|c| c.to_string()).collect(),
            document_type: "PRESDOCU".to_string(),
            presidential_document_type: "executive_order".to_string(),
            include_pre_1994_docs: true,
        }
    }
}

impl DocumentQuery {
    /// Renders the query as the first-page URL against `endpoint`.
    pub fn to_url(&self, endpoint: &str) -> Result<Url> {
        let mut url = Url::parse(endpoint).map_err(|err| ToolError::InvalidUrl {
            url: endpoint.to_string(),
            reason: err.to_string(),
        })?;

        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("per_page", &self.per_page.clamp(1, MAX_PER_PAGE).to_string());
            for field in &self.fields {
                pairs.append_pair("fields[]", field);
            }
            pairs.append_pair("order", &self.order);
            pairs.append_pair("conditions[type][]", &self.document_type);
            pairs.append_pair(
                "include_pre_1994_docs",
                if self.include_pre_1994_docs { "true" } else { "false" },
            );
            pairs.append_pair(
                "conditions[presidential_document_type][]",
                &self.presidential_document_type,
            );
        }

        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_query_targets_executive_orders() {
        let url = DocumentQuery::default()
            .to_url(DOCUMENTS_ENDPOINT)
            .expect("url built");
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        let expected = [
            ("per_page", "1000"),
            ("fields[]", "title"),
            ("fields[]", "citation"),
            ("fields[]", "document_number"),
            ("fields[]", "president"),
            ("fields[]", "signing_date"),
            ("fields[]", "publication_date"),
            ("order", "newest"),
            ("conditions[type][]", "PRESDOCU"),
            ("include_pre_1994_docs", "true"),
            ("conditions[presidential_document_type][]", "executive_order"),
        ];
        let expected: Vec<(String, String)> = expected
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        assert_eq!(url.host_str(), Some("www.federalregister.gov"));
        assert_eq!(url.path(), "/api/v1/documents.json");
        assert_eq!(pairs, expected);
    }

    #[test]
    fn page_size_is_clamped_to_api_limit() {
        let query = DocumentQuery {
            per_page: 5000,
            ..DocumentQuery::default()
        };
        let url = query.to_url(DOCUMENTS_ENDPOINT).expect("url built");
        assert!(url.query_pairs().any(|(k, v)| k == "per_page" && v == "1000"));
    }

    #[test]
    fn invalid_endpoint_is_rejected() {
        let err = DocumentQuery::default().to_url("not a url").unwrap_err();
        assert!(matches!(err, ToolError::InvalidUrl { .. }));
    }
}
