use anyhow::Context;
use serde::{Deserialize, de::DeserializeOwned};

/// The env vars the scraper reads, all optional. Defaults match the SIIAU
/// production endpoint and the course list the tool was written for.
#[derive(Debug, Deserialize)]
struct OfferingsEnv {
    #[serde(default = "default_offerings_url")]
    offerings_url: String,
    #[serde(default = "default_term")]
    term: String,
    #[serde(default = "default_campus")]
    campus: String,
    #[serde(default = "default_course_keys")]
    course_keys: String,
}

fn default_offerings_url() -> String {
    "http://consulta.siiau.udg.mx/wco/sspseca.consulta_oferta".to_string()
}

fn default_term() -> String {
    "202220".to_string()
}

fn default_campus() -> String {
    "D".to_string()
}

fn default_course_keys() -> String {
    "I5899,I7029,I7042".to_string()
}

pub struct ScrapeConfig {
    pub offerings_url: String,
    pub term: String,
    pub campus: String,
    pub course_keys: Vec<String>,
}

impl ScrapeConfig {
    pub fn new() -> anyhow::Result<Self> {
        let env = OfferingsEnv::load_from_env()?;
        Ok(Self {
            offerings_url: env.offerings_url,
            term: env.term,
            campus: env.campus,
            course_keys: parse_course_keys(&env.course_keys),
        })
    }
}

fn parse_course_keys(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|key| key.trim().to_string())
        .filter(|key| !key.is_empty())
        .collect()
}

// Extension trait.
pub trait LoadFromEnv: DeserializeOwned {
    fn load_from_env() -> anyhow::Result<Self> {
        // Don't throw an error if .env file doesn't exist.
        let _ = dotenv::dotenv();
        let config = envy::prefixed("SIIAU_")
            .from_env::<Self>()
            .context("failed to load env variables into config struct")?;
        Ok(config)
    }
}

impl<T: DeserializeOwned> LoadFromEnv for T {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn course_keys_are_split_and_trimmed() {
        assert_eq!(
            parse_course_keys("I5899, I7029 ,,I7042"),
            vec!["I5899", "I7029", "I7042"]
        );
    }

    #[test]
    fn empty_course_key_list_stays_empty() {
        assert!(parse_course_keys("").is_empty());
    }
}
