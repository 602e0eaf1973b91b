use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::path::Path;

use crate::source::JobListing;

const ESCAPE: u8 = b'\\';

/// Append listings to the results file, creating it when absent.
///
/// Every field is quoted and embedded quotes are backslash-escaped, so
/// fields holding commas, newlines or quotes survive a round trip. The
/// header row is written only when the file is new or empty.
pub fn append_listings(listings: &[JobListing], path: &Path) -> Result<()> {
    let is_fresh = fs::metadata(path).map(|m| m.len() == 0).unwrap_or(true);

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open results file {}", path.display()))?;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(is_fresh)
        .quote_style(csv::QuoteStyle::Always)
        .double_quote(false)
        .escape(ESCAPE)
        .from_writer(file);

    for listing in listings {
        writer.serialize(listing)?;
    }

    writer
        .flush()
        .with_context(|| format!("Failed to write to {}", path.display()))?;
    Ok(())
}

/// Read a results file back with the same quoting and escaping rules.
pub fn read_listings(path: &Path) -> Result<Vec<JobListing>> {
    let mut reader = csv::ReaderBuilder::new()
        .double_quote(false)
        .escape(Some(ESCAPE))
        .from_path(path)
        .with_context(|| format!("Failed to open results file {}", path.display()))?;

    let mut listings = Vec::new();
    for result in reader.deserialize() {
        listings.push(result?);
    }
    Ok(listings)
}
