// src/io/reporting.rs

use crate::io::view::SimulationView;
use crate::simulation::engine::Trace;
use crate::simulation::scenarios::ScenarioSet;
use log::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Writes the day records as CSV, one row per day with a header row.
pub fn write_trace<W: Write>(writer: W, trace: &Trace) -> csv::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for record in trace {
        wtr.serialize(record)?;
    }
    // Flush the buffer to ensure all data is written
    wtr.flush()?;
    Ok(())
}

/// Writes the simulation trace to a CSV file.
///
/// # Arguments
/// * `file_path` - The path to save the file (e.g., "results/run_1.csv").
/// * `trace` - The trace produced by the simulation engine.
pub fn write_trace_csv<P: AsRef<Path>>(file_path: P, trace: &Trace) -> csv::Result<()> {
    let path = file_path.as_ref();
    write_trace(File::create(path)?, trace)?;

    info!("exported {} rows to '{}'", trace.len(), path.display());
    Ok(())
}

/// Writes the reference curves to a CSV file, one row per day.
pub fn write_scenarios_csv<P: AsRef<Path>>(file_path: P, scenarios: &ScenarioSet) -> csv::Result<()> {
    let path = file_path.as_ref();
    let mut wtr = csv::Writer::from_path(path)?;
    for row in scenarios.rows() {
        wtr.serialize(row)?;
    }
    wtr.flush()?;

    info!("exported {} scenario rows to '{}'", scenarios.len(), path.display());
    Ok(())
}

/// Serializes a view as a single line of JSON followed by a newline.
pub fn write_view_json<W: Write>(mut writer: W, view: &SimulationView) -> std::io::Result<()> {
    serde_json::to_writer(&mut writer, view)?;
    writeln!(writer)
}
