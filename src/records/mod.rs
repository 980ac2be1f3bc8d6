mod contribution;
mod filters;

pub use contribution::{ContributionRecord, FEC_HEADER, parse_contributions};
pub use filters::{is_dateable, is_summable};
