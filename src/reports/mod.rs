mod report;

pub use report::{ReportRow, render_report};
