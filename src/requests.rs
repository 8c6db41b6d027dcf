use reqwest::{Client, ClientBuilder};

use crate::config::ScrapeConfig;
use crate::error::Result;

// Fixed form fields the consulta_oferta endpoint expects alongside the
// term/campus/course-code values. dispp = display mode, ordenp = ordering,
// mostrarp = max rows returned.
const DISPLAY_MODE: &str = "D";
const ORDERING: &str = "0";
const MAX_ROWS: &str = "100";

pub struct RequestClient {
    client: Client,
}

impl RequestClient {
    pub fn new() -> Result<Self> {
        let client = ClientBuilder::new().build()?;
        Ok(Self { client })
    }

    /// POST the offerings query form for one course code and return the raw
    /// HTML body. No retry and no per-request timeout beyond reqwest's
    /// default; a non-success status is a transport error.
    pub async fn fetch_offerings(&self, config: &ScrapeConfig, course_key: &str) -> Result<String> {
        let form = [
            ("ciclop", config.term.as_str()),
            ("cup", config.campus.as_str()),
            ("majrp", ""),
            ("crsep", course_key),
            ("dispp", DISPLAY_MODE),
            ("ordenp", ORDERING),
            ("mostrarp", MAX_ROWS),
        ];
        let response = self
            .client
            .post(&config.offerings_url)
            .form(&form)
            .send()
            .await?
            .error_for_status()?;
        let body = response.text().await?;
        Ok(body)
    }
}
