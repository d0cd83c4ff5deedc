use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScraperError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Serialize)]
struct ScrapeRequest<'a> {
    prompt: &'a str,
    total: &'a str,
}

/// One business entity returned by the scrape endpoint. The backend uses
/// spreadsheet-style column names as JSON keys.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ResultRecord {
    #[serde(rename = "Business Name")]
    pub business_name: String,
    #[serde(rename = "Coordinates")]
    pub coordinates: Option<String>,
    #[serde(rename = "Phone Number")]
    pub phone_number: Option<String>,
    #[serde(rename = "Description")]
    pub description: Option<String>,
    #[serde(rename = "Job Suggestions")]
    pub job_suggestions: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ScrapeReport {
    pub business_type: String,
    pub location: String,
    pub results: Vec<ResultRecord>,
}

/// The two shapes the scrape endpoint can answer with.
#[derive(Debug, Clone, PartialEq)]
pub enum ScrapeResponse {
    Failure(String),
    Report(ScrapeReport),
}

impl ScrapeResponse {
    /// Decodes a response body. A non-empty string `error` field wins over
    /// everything else; any other body must decode as a full report.
    pub fn decode(body: &str) -> Result<Self, ScraperError> {
        let value: serde_json::Value = serde_json::from_str(body)?;
        if let Some(error) = value.get("error").and_then(|e| e.as_str()) {
            if !error.is_empty() {
                return Ok(ScrapeResponse::Failure(error.to_string()));
            }
        }
        let report: ScrapeReport = serde_json::from_value(value)?;
        Ok(ScrapeResponse::Report(report))
    }
}

#[derive(Clone)]
pub struct ScraperClient {
    client: Client,
    base_url: String,
}

impl ScraperClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// Issues a single POST to the scrape endpoint. The status code is not
    /// inspected: a 5xx with a JSON `{error}` body still decodes as a
    /// structured failure, same as a 200 with one.
    pub async fn scrape(&self, prompt: &str, total: &str) -> Result<ScrapeResponse, ScraperError> {
        let url = format!("{}/scrape", self.base_url);
        let request = ScrapeRequest { prompt, total };

        let body = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await?
            .text()
            .await?;

        ScrapeResponse::decode(&body)
    }
}
