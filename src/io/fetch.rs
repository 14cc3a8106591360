use futures::stream::{self, Stream};
use reqwest::{Client, StatusCode};
use tracing::{debug, info, instrument};

use crate::error::{Result, ToolError};
use crate::model::PageResponse;

/// Issues the GET requests for individual result pages.
#[derive(Debug, Clone)]
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    /// Builds a fetcher with a fresh client identifying itself as `user_agent`.
    /// Requests rely on the client's default timeouts.
    pub fn new(user_agent: &str) -> Result<Self> {
        let client = Client::builder().user_agent(user_agent).build()?;
        Ok(Self::with_client(client))
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Fetches and decodes a single page. Anything other than `200 OK` is
    /// fatal, as is a body that does not match the page schema.
    #[instrument(level = "debug", skip(self))]
    pub async fn fetch_page(&self, url: &str) -> Result<PageResponse> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ToolError::UnexpectedStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

struct Cursor {
    fetcher: PageFetcher,
    next: Option<String>,
    page: usize,
}

/// Lazily walks the result pages starting at `start_url`, following each
/// page's `next_page_url` until the server stops sending one.
///
/// Requests are strictly sequential: the next page is only requested when the
/// consumer polls for it, after the previous body was fully decoded. The
/// stream ends after yielding the first error.
pub fn page_stream(
    fetcher: PageFetcher,
    start_url: impl Into<String>,
) -> impl Stream<Item = Result<PageResponse>> {
    let cursor = Cursor {
        fetcher,
        next: Some(start_url.into()),
        page: 0,
    };
    stream::try_unfold(cursor, advance)
}

async fn advance(mut cursor: Cursor) -> Result<Option<(PageResponse, Cursor)>> {
    let Some(url) = cursor.next.take() else {
        return Ok(None);
    };

    cursor.page += 1;
    let page = cursor.fetcher.fetch_page(&url).await?;
    let records = page.results.len();
    info!(
        page = cursor.page,
        records,
        "Fetched page {} ({} records)",
        cursor.page,
        records
    );
    if cursor.page == 1 {
        debug!(
            count = page.count,
            total_pages = page.total_pages,
            "search matched documents"
        );
    }

    cursor.next = page.next_page().map(str::to_string);
    Ok(Some((page, cursor)))
}
