use std::error::Error;
use std::fs;
use std::thread;
use std::time::Instant;

use log::info;

use crate::engine::{daily_medians_by_recipient, running_medians_by_zip};
use crate::records::{is_dateable, is_summable, parse_contributions};
use crate::reports::render_report;

/// Reads the contribution feed, computes both median reports, and writes
/// them to the given paths.
///
/// Either both reports are computed and written or the run fails. The two
/// aggregations read the same batch, share no mutable state, and run on
/// their own threads.
pub fn run(
    input_path: &str,
    zip_output_path: &str,
    date_output_path: &str,
) -> Result<(), Box<dyn Error>> {
    let started = Instant::now();

    let raw = fs::read_to_string(input_path)?;
    let records = parse_contributions(&raw)?;
    info!("parsed {} contribution records", records.len());

    let summable: Vec<_> = records.into_iter().filter(is_summable).collect();
    let dateable: Vec<_> = summable
        .iter()
        .filter(|record| is_dateable(record))
        .cloned()
        .collect();
    info!(
        "{} records qualify for the zip report, {} for the date report",
        summable.len(),
        dateable.len()
    );

    let (by_zip, by_date) = thread::scope(|scope| {
        let by_zip = scope.spawn(|| render_report(&running_medians_by_zip(&summable)));
        let by_date = scope.spawn(|| render_report(&daily_medians_by_recipient(&dateable)));
        (by_zip.join(), by_date.join())
    });
    let by_zip = by_zip.map_err(|_| "medians-by-zip aggregation panicked")?;
    let by_date = by_date.map_err(|_| "medians-by-date aggregation panicked")?;

    fs::write(zip_output_path, by_zip)?;
    fs::write(date_output_path, by_date)?;
    info!("finished writing reports in {:?}", started.elapsed());

    Ok(())
}
