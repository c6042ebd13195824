// ============================================================
// SECTION PIPELINE
// ============================================================
// The one shape every board section follows: fetch CSV, keep the
// rows tagged for this section, normalize them into value objects,
// sort, and hand the ordered result to a renderer. Sections never
// share state or fetch results; a failure here is terminal for the
// owning section only.

use tracing::debug;

use crate::domain::error::{AppError, Result};
use crate::domain::record::RawRecord;
use crate::infrastructure::fetch::CsvSource;

/// Ordered render set for one section, plus drop diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOutput<T> {
    pub items: Vec<T>,
    /// Rows matching the section tag that failed the domain's
    /// required-field predicate. Dropping is silent by design; the
    /// count exists for diagnostics.
    pub dropped: usize,
}

/// Run the generic pipeline for one section.
///
/// `normalize` returns None to drop an invalid row; `sort` must be
/// stable so equal keys keep their input order. An empty result is
/// reported as `NoData` with the section's own message, distinct
/// from any fetch failure.
pub async fn run_section<T, N, S>(
    source: &dyn CsvSource,
    url: &str,
    section_key: &str,
    empty_message: &str,
    normalize: N,
    sort: S,
) -> Result<PipelineOutput<T>>
where
    N: Fn(&RawRecord) -> Option<T>,
    S: FnOnce(&mut Vec<T>),
{
    let records = source.fetch(url).await?;

    let tagged: Vec<&RawRecord> = records
        .iter()
        .filter(|r| r.section_tag() == section_key)
        .collect();

    let mut dropped = 0;
    let mut items: Vec<T> = Vec::with_capacity(tagged.len());
    for record in tagged {
        match normalize(record) {
            Some(item) => items.push(item),
            None => dropped += 1,
        }
    }

    if dropped > 0 {
        debug!(section_key, dropped, "Dropped rows failing required fields");
    }

    sort(&mut items);

    if items.is_empty() {
        return Err(AppError::NoData(empty_message.to_string()));
    }

    Ok(PipelineOutput { items, dropped })
}
