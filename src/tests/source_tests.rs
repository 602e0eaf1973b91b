use crate::config::HarvestConfig;
use crate::source::{JobQuery, SearchResponse};

#[test]
fn query_serializes_with_the_service_field_names() {
    let config = HarvestConfig::default();
    let query = JobQuery::from_config(&config, "software");

    let json = serde_json::to_value(&query).unwrap();

    assert_eq!(json["sites"], serde_json::json!(["indeed"]));
    assert_eq!(json["search_term"], "software");
    assert_eq!(json["results_wanted"], 100);
    assert_eq!(json["hours_old"], 24);
    assert_eq!(json["country"], "China");
    assert_eq!(json["description_format"], "html");
}

#[test]
fn response_parses_listings_and_ignores_unknown_fields() {
    let payload = r#"{
        "jobs": [
            {
                "title": "Software Engineer",
                "company": "Acme",
                "location": "Beijing",
                "date_posted": "2025-01-14",
                "job_url": "https://jobs.example.com/1",
                "description": "<p>build things</p>",
                "salary": "negotiable"
            },
            {
                "title": "QA Engineer",
                "company": "Bolt",
                "location": null,
                "date_posted": null,
                "job_url": "https://jobs.example.com/2",
                "description": null
            }
        ],
        "count": 2
    }"#;

    let parsed: SearchResponse = serde_json::from_str(payload).unwrap();

    assert_eq!(parsed.jobs.len(), 2);
    assert_eq!(parsed.jobs[0].title, "Software Engineer");
    assert_eq!(parsed.jobs[0].location.as_deref(), Some("Beijing"));
    assert_eq!(parsed.jobs[1].company, "Bolt");
    assert!(parsed.jobs[1].description.is_none());
}
