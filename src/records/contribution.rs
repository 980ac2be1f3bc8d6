use chrono::NaiveDate;
use csv::ReaderBuilder;
use rust_decimal::Decimal;
use serde::Deserialize;

/// Column layout of the FEC individual-contributions feed, which carries no
/// header line of its own
pub const FEC_HEADER: &str = "CMTE_ID|AMNDT_IND|RPT_TP|TRANSACTION_PGI|IMAGE_NUM|TRANSACTION_TP|ENTITY_TP|NAME|CITY|STATE|ZIP_CODE|EMPLOYER|OCCUPATION|TRANSACTION_DT|TRANSACTION_AMT|OTHER_ID|TRAN_ID|FILE_NUM|MEMO_CD|MEMO_TEXT|SUB_ID";

/// The columns the reports read, straight off the wire
#[derive(Debug, Deserialize)]
struct ContributionRow {
    #[serde(rename = "CMTE_ID")]
    cmte_id: String,
    #[serde(rename = "ZIP_CODE")]
    zip_code: String,
    #[serde(rename = "TRANSACTION_DT")]
    transaction_dt: String,
    #[serde(rename = "TRANSACTION_AMT")]
    transaction_amt: String,
    #[serde(rename = "OTHER_ID")]
    other_id: String,
}

/// One contribution after normalization: typed fields, truncated postal
/// code, and the transaction date parsed into a comparable calendar value
#[derive(Debug, Clone)]
pub struct ContributionRecord {
    pub recipient_id: String,
    pub postal_code: String,
    pub amount: Option<Decimal>,
    pub other_id: String,
    pub transaction_dt: String,
    pub parsed_date: Option<NaiveDate>,
}

impl From<ContributionRow> for ContributionRecord {
    fn from(row: ContributionRow) -> Self {
        let postal_code = row.zip_code.chars().take(5).collect();
        let amount = row.transaction_amt.parse().ok();
        let parsed_date = parse_transaction_date(&row.transaction_dt);
        Self {
            recipient_id: row.cmte_id,
            postal_code,
            amount,
            other_id: row.other_id,
            transaction_dt: row.transaction_dt,
            parsed_date,
        }
    }
}

// Dates arrive as MMDDYYYY; anything else degrades to None rather than
// failing the run. Downstream filtering drops the record from the date
// report only.
fn parse_transaction_date(raw: &str) -> Option<NaiveDate> {
    if raw.len() != 8 {
        return None;
    }
    NaiveDate::parse_from_str(raw, "%m%d%Y").ok()
}

/// Parses the raw feed into normalized records, supplying the synthetic
/// header so rows deserialize by column name.
///
/// Field positions are fixed; a row with a different number of columns than
/// the header is a parse error for the whole input.
pub fn parse_contributions(input: &str) -> Result<Vec<ContributionRecord>, csv::Error> {
    let feed = format!("{FEC_HEADER}\n{input}");
    let mut rdr = ReaderBuilder::new()
        .delimiter(b'|')
        .from_reader(feed.as_bytes());

    let mut records = Vec::new();
    for row in rdr.deserialize() {
        let row: ContributionRow = row?;
        records.push(row.into());
    }
    Ok(records)
}
