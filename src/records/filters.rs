use super::ContributionRecord;

/// Contributions that count toward either report: addressed to a committee,
/// carrying a usable non-zero amount, and received directly rather than via
/// another filer (a non-empty OTHER_ID marks a committee-to-committee
/// transfer, which would double-count the money).
pub fn is_summable(record: &ContributionRecord) -> bool {
    !record.recipient_id.is_empty()
        && record.amount.is_some_and(|amount| !amount.is_zero())
        && record.other_id.is_empty()
}

/// Summable contributions that also carry a valid transaction date
pub fn is_dateable(record: &ContributionRecord) -> bool {
    is_summable(record) && record.parsed_date.is_some()
}
