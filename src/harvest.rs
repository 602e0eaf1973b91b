use anyhow::Result;
use log::info;
use std::path::Path;

use crate::config::HarvestConfig;
use crate::source::{JobListing, JobQuery, JobSource};
use crate::writer::append_listings;

/// How many leading records are shown after each fetch.
const PREVIEW_ROWS: usize = 5;
const PREVIEW_WIDTH: usize = 100;

/// Fetch every configured search term in order, appending each batch to
/// the results file before the next term is requested.
///
/// Returns the total number of records appended. The first fetch or
/// append error aborts the remaining terms; batches already appended
/// stay in the file.
pub fn run<S: JobSource>(source: &S, config: &HarvestConfig, results_file: &Path) -> Result<usize> {
    let mut total = 0;

    for term in &config.search_terms {
        let query = JobQuery::from_config(config, term);
        let batch = source.fetch(&query)?;

        info!("Found {} jobs for \"{}\"", batch.len(), term);
        print_preview(&batch);

        append_listings(&batch, results_file)?;
        total += batch.len();
    }

    info!(
        "Harvested {} listings across {} search terms into {}",
        total,
        config.search_terms.len(),
        results_file.display()
    );

    Ok(total)
}

fn print_preview(batch: &[JobListing]) {
    for (index, listing) in batch.iter().take(PREVIEW_ROWS).enumerate() {
        let location = listing.location.as_deref().unwrap_or("-");
        println!(
            "{}. {} at {} ({})",
            index + 1,
            truncate(&listing.title),
            listing.company,
            location
        );
        println!("   URL: {}", listing.job_url);
    }
    if batch.len() > PREVIEW_ROWS {
        println!("   ... and {} more", batch.len() - PREVIEW_ROWS);
    }
}

fn truncate(text: &str) -> String {
    if text.chars().count() > PREVIEW_WIDTH {
        format!("{}...", text.chars().take(PREVIEW_WIDTH).collect::<String>())
    } else {
        text.to_string()
    }
}
