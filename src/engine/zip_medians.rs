use std::collections::HashMap;

use crate::median::RunningMedian;
use crate::records::ContributionRecord;
use crate::reports::ReportRow;

/// Aggregation context for the running medians-by-zip report.
///
/// One `RunningMedian` per postal code seen so far. Groups are created on
/// first sighting and accumulate for the rest of the run; the context is an
/// ordinary value, so independent runs in one process share nothing.
#[derive(Debug, Default)]
pub struct ZipMedianEngine {
    groups: HashMap<String, RunningMedian>,
}

impl ZipMedianEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one contribution into its postal-code group and reports the
    /// group's statistics as of this record.
    ///
    /// The emitted row carries the recipient id of the record that triggered
    /// it, not an id canonical to the group: a zip shared by several
    /// committees reports one recipient-agnostic pool, attributed to
    /// whichever committee this record names.
    pub fn observe(&mut self, record: &ContributionRecord) -> Option<ReportRow> {
        let amount = record.amount?;
        let group = self.groups.entry(record.postal_code.clone()).or_default();
        group.push(amount);
        Some(ReportRow::new(
            record.recipient_id.clone(),
            record.postal_code.clone(),
            group.median(),
            group.len(),
            group.sum(),
        ))
    }
}

/// Streams the summable sequence through a fresh engine, emitting one row
/// per record in arrival order
pub fn running_medians_by_zip(records: &[ContributionRecord]) -> Vec<ReportRow> {
    let mut engine = ZipMedianEngine::new();
    records
        .iter()
        .filter_map(|record| engine.observe(record))
        .collect()
}
