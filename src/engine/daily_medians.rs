use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::median::batch_median;
use crate::records::ContributionRecord;
use crate::reports::ReportRow;

/// Groups the dateable batch by recipient, then by contribution date, and
/// reports each day's median, count, and sum.
///
/// The `BTreeMap` keys supply the output order directly: recipients in
/// lexicographic order, dates in calendar order within a recipient. A pure
/// batch aggregation, so the whole group is known before any statistic is
/// computed.
pub fn daily_medians_by_recipient(records: &[ContributionRecord]) -> Vec<ReportRow> {
    let mut groups: BTreeMap<&str, BTreeMap<NaiveDate, Vec<Decimal>>> = BTreeMap::new();
    for record in records {
        let (Some(amount), Some(date)) = (record.amount, record.parsed_date) else {
            continue;
        };
        groups
            .entry(&record.recipient_id)
            .or_default()
            .entry(date)
            .or_default()
            .push(amount);
    }

    let mut rows = Vec::new();
    for (recipient, days) in groups {
        for (date, mut amounts) in days {
            let count = amounts.len();
            let sum: Decimal = amounts.iter().copied().sum();
            let median = batch_median(&mut amounts);
            rows.push(ReportRow::new(
                recipient.to_string(),
                date.format("%m%d%Y").to_string(),
                median,
                count,
                sum,
            ));
        }
    }
    rows
}
