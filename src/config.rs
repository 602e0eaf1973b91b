use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How the scraping service should render job descriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DescriptionFormat {
    Plain,
    Html,
}

/// Parameters for one harvesting run.
///
/// Search terms are requested in order; a listing matching several terms
/// will appear once per matching term in the output.
#[derive(Debug, Clone)]
pub struct HarvestConfig {
    /// Job board identifiers understood by the scraping service.
    pub sites: Vec<String>,
    pub search_terms: Vec<String>,
    /// Maximum number of results requested per search term.
    pub results_wanted: usize,
    /// Only listings posted within this many hours are requested.
    pub hours_old: u32,
    pub country: String,
    pub description_format: DescriptionFormat,
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self {
            sites: vec!["indeed".to_string()],
            search_terms: [
                "software",
                "hardware",
                "tester",
                "QA",
                "automation",
                "software manager",
                "project",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            results_wanted: 100,
            hours_old: 24,
            country: "China".to_string(),
            description_format: DescriptionFormat::Html,
        }
    }
}
