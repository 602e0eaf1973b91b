use anyhow::{Context, Result};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use crate::config::{DescriptionFormat, HarvestConfig};

/// One request to the scraping service.
#[derive(Debug, Clone, Serialize)]
pub struct JobQuery {
    pub sites: Vec<String>,
    pub search_term: String,
    pub results_wanted: usize,
    pub hours_old: u32,
    pub country: String,
    pub description_format: DescriptionFormat,
}

impl JobQuery {
    pub fn from_config(config: &HarvestConfig, search_term: &str) -> Self {
        Self {
            sites: config.sites.clone(),
            search_term: search_term.to_string(),
            results_wanted: config.results_wanted,
            hours_old: config.hours_old,
            country: config.country.clone(),
            description_format: config.description_format,
        }
    }
}

/// A job listing as returned by the scraping service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobListing {
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub date_posted: Option<String>,
    pub job_url: String,
    pub description: Option<String>,
}

/// The external source of job listings.
///
/// The production implementation talks to a scraping service over HTTP;
/// tests substitute a stub so harvesting logic runs without network I/O.
pub trait JobSource {
    fn fetch(&self, query: &JobQuery) -> Result<Vec<JobListing>>;
}

/// Wire shape of the scraping service's search response.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    pub(crate) jobs: Vec<JobListing>,
}

/// Fetches listings from a scraping service speaking JSON over HTTP.
pub struct HttpJobSource {
    client: Client,
    search_url: String,
}

impl HttpJobSource {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            search_url: format!("{}/search", base_url.trim_end_matches('/')),
        }
    }
}

impl JobSource for HttpJobSource {
    fn fetch(&self, query: &JobQuery) -> Result<Vec<JobListing>> {
        let response = self
            .client
            .post(&self.search_url)
            .json(query)
            .send()
            .with_context(|| format!("Failed to reach scraping service at {}", self.search_url))?
            .error_for_status()
            .context("Scraping service returned an error status")?;

        let parsed: SearchResponse = response
            .json()
            .context("Failed to parse scraping service response")?;

        Ok(parsed.jobs)
    }
}
