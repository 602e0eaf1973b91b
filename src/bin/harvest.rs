use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use job_harvester::{
    archive_existing, harvest, logger, DescriptionFormat, HarvestConfig, HttpJobSource,
};

/// Harvest job listings from a scraping service into a CSV file.
#[derive(Parser)]
#[command(name = "harvest", version, about)]
struct Args {
    /// Results file the harvested listings are appended to
    #[arg(long, default_value = "jobs.csv")]
    output: PathBuf,

    /// Directory pre-existing results are moved into before the run
    #[arg(long, default_value = "../databackup")]
    backup_dir: PathBuf,

    /// Skip archiving a pre-existing results file
    #[arg(long)]
    no_backup: bool,

    /// Base URL of the scraping service
    #[arg(long, default_value = "http://127.0.0.1:8530")]
    source_url: String,

    /// Search terms, in request order (defaults to the built-in list)
    #[arg(long = "term")]
    terms: Vec<String>,

    /// Job board identifiers to query
    #[arg(long = "site")]
    sites: Vec<String>,

    /// Maximum results requested per search term
    #[arg(long)]
    results_wanted: Option<usize>,

    /// Only request listings posted within this many hours
    #[arg(long)]
    hours_old: Option<u32>,

    /// Country qualifier passed to the scraping service
    #[arg(long)]
    country: Option<String>,

    /// How job descriptions should be rendered
    #[arg(long, value_enum)]
    description_format: Option<DescriptionFormat>,
}

impl Args {
    fn into_config(self) -> (HarvestConfig, PathBuf, PathBuf, bool, String) {
        let mut config = HarvestConfig::default();
        if !self.terms.is_empty() {
            config.search_terms = self.terms;
        }
        if !self.sites.is_empty() {
            config.sites = self.sites;
        }
        if let Some(n) = self.results_wanted {
            config.results_wanted = n;
        }
        if let Some(hours) = self.hours_old {
            config.hours_old = hours;
        }
        if let Some(country) = self.country {
            config.country = country;
        }
        if let Some(format) = self.description_format {
            config.description_format = format;
        }
        (
            config,
            self.output,
            self.backup_dir,
            self.no_backup,
            self.source_url,
        )
    }
}

fn main() -> Result<()> {
    logger::init();

    let (config, output, backup_dir, no_backup, source_url) = Args::parse().into_config();

    if !no_backup {
        archive_existing(&output, &backup_dir)?;
    }

    let source = HttpJobSource::new(&source_url);
    harvest::run(&source, &config, &output)?;

    Ok(())
}
