use anyhow::Result;
use std::cell::RefCell;
use std::collections::VecDeque;

use crate::source::{JobListing, JobQuery, JobSource};

pub mod source_tests;

/// In-memory job source that hands out canned batches in order and
/// records every query it receives.
pub struct StubSource {
    batches: RefCell<VecDeque<Result<Vec<JobListing>>>>,
    pub queries: RefCell<Vec<JobQuery>>,
}

impl StubSource {
    pub fn new(batches: Vec<Result<Vec<JobListing>>>) -> Self {
        Self {
            batches: RefCell::new(batches.into()),
            queries: RefCell::new(Vec::new()),
        }
    }

    pub fn recorded_terms(&self) -> Vec<String> {
        self.queries
            .borrow()
            .iter()
            .map(|q| q.search_term.clone())
            .collect()
    }
}

impl JobSource for StubSource {
    fn fetch(&self, query: &JobQuery) -> Result<Vec<JobListing>> {
        self.queries.borrow_mut().push(query.clone());
        self.batches
            .borrow_mut()
            .pop_front()
            .expect("no batch queued for this query")
    }
}

/// Build a listing with the fields tests care about.
pub fn listing(title: &str, company: &str) -> JobListing {
    JobListing {
        title: title.to_string(),
        company: company.to_string(),
        location: Some("Beijing".to_string()),
        date_posted: Some("2025-01-14".to_string()),
        job_url: format!("https://jobs.example.com/{}", title.replace(' ', "-")),
        description: None,
    }
}
