use futures::stream::{self, Stream, StreamExt, TryStreamExt};

use crate::error::Result;
use crate::model::{FlatRecord, PageResponse, RawRecord};

/// Replaces the nested president object with the president's name. Every
/// other attribute is carried over unchanged.
pub fn flatten_record(record: RawRecord) -> FlatRecord {
    FlatRecord {
        title: record.title,
        citation: record.citation,
        document_number: record.document_number,
        president: record.president.map(|president| president.name).unwrap_or_default(),
        signing_date: record.signing_date,
        publication_date: record.publication_date,
    }
}

/// Turns a sequence of pages into a sequence of flat rows, keeping page order
/// and the order of results inside each page. Errors pass through untouched
/// and end the sequence where the page stream ends it.
pub fn flatten_pages<S>(pages: S) -> impl Stream<Item = Result<FlatRecord>>
where
    S: Stream<Item = Result<PageResponse>>,
{
    pages
        .map_ok(|page| stream::iter(page.results.into_iter().map(flatten_record).map(Ok)))
        .try_flatten()
}
