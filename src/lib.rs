pub mod config;
pub mod messages;
pub mod render;
pub mod scraper;
pub mod session;
pub mod transcript;

pub use config::Config;
pub use scraper::{ResultRecord, ScrapeReport, ScrapeResponse, ScraperClient, ScraperError};
pub use session::{ChatSession, InputState};
pub use transcript::{Bubble, Transcript};
