mod daily_medians;
mod zip_medians;

pub use daily_medians::daily_medians_by_recipient;
pub use zip_medians::{ZipMedianEngine, running_medians_by_zip};
