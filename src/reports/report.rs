use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};

/// One output line: two group keys plus the group's statistics at the time
/// the line was emitted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub group: String,
    pub subgroup: String,
    pub median: Decimal,
    pub count: usize,
    pub sum: Decimal,
}

impl ReportRow {
    /// Builds a row, rounding the median to the nearest whole dollar with
    /// ties going away from zero
    pub fn new(
        group: String,
        subgroup: String,
        median: Decimal,
        count: usize,
        sum: Decimal,
    ) -> Self {
        Self {
            group,
            subgroup,
            median: median
                .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
                .normalize(),
            count,
            sum: sum.normalize(),
        }
    }
}

impl fmt::Display for ReportRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Pipe-joined, no quoting: the wire format has no escape mechanism
        write!(
            f,
            "{}|{}|{}|{}|{}",
            self.group, self.subgroup, self.median, self.count, self.sum
        )
    }
}

/// Renders a report as newline-joined rows with no trailing separator; an
/// empty report renders as the empty string
pub fn render_report(rows: &[ReportRow]) -> String {
    rows.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn row(median: Decimal, sum: Decimal) -> ReportRow {
        ReportRow::new(
            "C00177436".to_string(),
            "30004".to_string(),
            median,
            2,
            sum,
        )
    }

    #[test]
    fn renders_five_pipe_joined_fields() {
        assert_eq!(
            row(dec!(200), dec!(400)).to_string(),
            "C00177436|30004|200|2|400"
        );
    }

    #[test]
    fn median_rounds_to_the_nearest_dollar() {
        assert_eq!(row(dec!(229.6), dec!(400)).median, dec!(230));
        assert_eq!(row(dec!(229.4), dec!(400)).median, dec!(229));
    }

    #[test]
    fn median_ties_round_away_from_zero() {
        assert_eq!(row(dec!(200.5), dec!(400)).median, dec!(201));
        assert_eq!(row(dec!(-200.5), dec!(-400)).median, dec!(-201));
    }

    #[test]
    fn sum_drops_insignificant_trailing_zeros() {
        assert_eq!(row(dec!(200), dec!(400.00)).to_string(), "C00177436|30004|200|2|400");
        assert_eq!(row(dec!(200), dec!(400.50)).to_string(), "C00177436|30004|200|2|400.5");
    }

    #[test]
    fn report_rows_join_with_newlines_and_no_trailing_one() {
        let rows = vec![row(dec!(100), dec!(100)), row(dec!(200), dec!(400))];
        assert_eq!(
            render_report(&rows),
            "C00177436|30004|100|2|100\nC00177436|30004|200|2|400"
        );
    }

    #[test]
    fn empty_report_renders_as_empty_string() {
        assert_eq!(render_report(&[]), "");
    }
}
