mod running_median;

pub use running_median::{RunningMedian, batch_median};
