pub mod engine;
pub mod median;
pub mod orchestrator;
pub mod records;
pub mod reports;

pub use engine::ZipMedianEngine;
pub use median::RunningMedian;
pub use orchestrator::run;
pub use records::ContributionRecord;
