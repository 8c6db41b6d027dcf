use dotenv::dotenv;
use scraper::Html;

use oferta::{RequestClient, ScrapeConfig, render_table, scrape_offerings};

extern crate env_logger;
extern crate log;

use log::LevelFilter;

use log::{error, info};

async fn run() -> anyhow::Result<()> {
    let config = ScrapeConfig::new()?;
    let client = RequestClient::new()?;

    // One course code at a time, in list order. Any failure aborts the
    // remaining codes; the run loop has no per-course isolation.
    for course_key in &config.course_keys {
        info!("Fetching offerings for {course_key}");
        let html = client.fetch_offerings(&config, course_key).await?;
        let document = Html::parse_document(&html);
        let offerings = scrape_offerings(&document)?;
        info!("Extracted {} offerings for {course_key}", offerings.len());
        println!("{}", render_table(&offerings, course_key));
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .init();
    if let Err(error) = run().await {
        error!("Run aborted: {error:#}");
        std::process::exit(1);
    }
}
