// src/output.rs
use crate::mc::EnsembleSummary;
use std::fs::File;
use std::io::{self, Write};

pub fn write_curve_to_csv(filename: &str, times: &[f64], fluxes: &[f64]) -> io::Result<()> {
    let mut file = File::create(filename)?;
    writeln!(
        file,
        "# generated: {}",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    )?;
    writeln!(file, "time,flux")?;
    for (t, f) in times.iter().zip(fluxes) {
        writeln!(file, "{},{}", t, f)?;
    }
    Ok(())
}

pub fn write_summary_to_csv(
    filename: &str,
    times: &[f64],
    summary: &EnsembleSummary,
) -> io::Result<()> {
    let mut file = File::create(filename)?;
    writeln!(
        file,
        "# generated: {}",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    )?;

    let mut header = vec!["time"];
    if summary.mean.is_some() {
        header.push("mean");
    }
    if summary.median.is_some() {
        header.push("median");
    }
    if summary.stddev.is_some() {
        header.push("stddev");
    }
    writeln!(file, "{}", header.join(","))?;

    for (i, t) in times.iter().enumerate() {
        let mut row = vec![t.to_string()];
        if let Some(mean) = &summary.mean {
            row.push(mean[i].to_string());
        }
        if let Some(median) = &summary.median {
            row.push(median[i].to_string());
        }
        if let Some(stddev) = &summary.stddev {
            row.push(stddev[i].to_string());
        }
        writeln!(file, "{}", row.join(","))?;
    }
    Ok(())
}
