use std::path::Path;
use std::pin::pin;

use futures::TryStreamExt;
use tracing::{debug, info, instrument};

use crate::error::Result;
use crate::flatten::flatten_pages;
use crate::io::csv_write::CsvSink;
use crate::io::fetch::{PageFetcher, page_stream};
use crate::io::query::{DOCUMENTS_ENDPOINT, DocumentQuery};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Where and what to download.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Document search endpoint the first request is sent to.
    pub endpoint: String,
    pub query: DocumentQuery,
    pub user_agent: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            endpoint: DOCUMENTS_ENDPOINT.to_string(),
            query: DocumentQuery::default(),
            user_agent: USER_AGENT.to_string(),
        }
    }
}

/// Totals for a finished export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportSummary {
    pub pages: usize,
    pub records: usize,
}

/// Downloads every executive order matching `config` and writes them to
/// `output` as CSV.
///
/// The output file is opened before any request is made, so an unwritable
/// destination fails without touching the network. Any error aborts the run;
/// rows written up to that point stay in the file.
#[instrument(
    level = "info",
    skip_all,
    fields(endpoint = %config.endpoint, output = %output.display())
)]
pub async fn export_to_csv(config: &ExportConfig, output: &Path) -> Result<ExportSummary> {
    let mut sink = CsvSink::create(output)?;
    debug!("output file created");

    let start_url = config.query.to_url(&config.endpoint)?;
    let fetcher = PageFetcher::new(&config.user_agent)?;

    let mut pages = 0;
    {
        let fetched = page_stream(fetcher, start_url.as_str()).inspect_ok(|_| pages += 1);
        let mut rows = pin!(flatten_pages(fetched));
        while let Some(record) = rows.try_next().await? {
            sink.write(&record)?;
        }
    }

    let records = sink.finish()?;
    info!(pages, records, "export complete");
    Ok(ExportSummary { pages, records })
}
