mod config;
mod dom;
mod error;
mod offering_scraper;
mod requests;
mod table;

pub use config::ScrapeConfig;
pub use error::{Result, ScrapeError};
pub use offering_scraper::{SubjectData, scrape_offerings};
pub use requests::RequestClient;
pub use table::render_table;
