use crate::config::Config;
use crate::messages;
use crate::render::{self, Renderer};
use crate::scraper::{ScrapeResponse, ScraperClient};
use crate::transcript::Transcript;
use indicatif::ProgressBar;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};

/// The two input fields of the chat surface: the prompt being composed and
/// the free-form result-count text sent alongside it.
#[derive(Debug, Clone)]
pub struct InputState {
    pub prompt: String,
    pub total: String,
}

/// Interactive chat session against the scrape service. Owns the input
/// fields, the append-only transcript, and the renderer drawing it.
pub struct ChatSession {
    config: Config,
    scraper: ScraperClient,
    pub inputs: InputState,
    pub transcript: Transcript,
    renderer: Renderer,
}

impl ChatSession {
    pub fn new(config: Config) -> Self {
        let scraper = ScraperClient::new(config.scrape_url.clone());
        let inputs = InputState {
            prompt: String::new(),
            total: config.default_total.clone(),
        };

        Self {
            config,
            scraper,
            inputs,
            transcript: Transcript::new(),
            renderer: Renderer::new(),
        }
    }

    /// Handle one submit action: validate the prompt, append the user
    /// bubble, reset the inputs, call the scrape endpoint, and append
    /// whatever bubbles the outcome calls for. Every failure path ends in a
    /// rendered bubble; nothing here is fatal to the session.
    pub async fn submit(&mut self) {
        let prompt = self.inputs.prompt.trim().to_string();
        if prompt.is_empty() {
            render::warn(messages::EMPTY_PROMPT_WARNING);
            return;
        }
        let total = self.inputs.total.clone();

        self.transcript.push_user(prompt.clone());
        self.renderer.scroll_to_end(&self.transcript);

        // Inputs reset as soon as their values are captured, before the
        // request settles.
        self.inputs.prompt.clear();
        self.inputs.total = self.config.default_total.clone();

        let spinner = ProgressBar::new_spinner().with_message("Contacting scrape service...");
        spinner.enable_steady_tick(Duration::from_millis(120));
        let outcome = self.scraper.scrape(&prompt, &total).await;
        spinner.finish_and_clear();

        match outcome {
            Ok(ScrapeResponse::Failure(error)) => {
                self.transcript.push_bot(messages::server_error_message(&error));
            }
            Ok(ScrapeResponse::Report(report)) => {
                self.transcript.push_bot(messages::analysis_message(
                    &report.business_type,
                    &report.location,
                ));
                for record in report.results {
                    self.transcript.push_result(record);
                }
            }
            Err(_) => {
                self.transcript.push_bot(messages::GENERIC_ERROR.to_string());
            }
        }

        self.renderer.scroll_to_end(&self.transcript);
    }

    /// Read prompts from stdin until EOF or `/quit`. Each submit is awaited
    /// to completion before the next line is read, so responses always land
    /// in submission order.
    pub async fn run(&mut self) {
        render::banner();
        render::note(&format!(
            "Endpoint: {}  (results per prompt: {})",
            self.config.scrape_url, self.inputs.total
        ));
        render::note("Type a prompt and press enter. `/total <n>` sets the result count, `/quit` exits.");
        println!();

        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        loop {
            render::prompt_marker();
            let line = match lines.next_line().await {
                Ok(Some(line)) => line,
                _ => break,
            };

            let trimmed = line.trim();
            if trimmed == "/quit" || trimmed == "/exit" {
                break;
            }
            if let Some(total) = trimmed.strip_prefix("/total") {
                self.inputs.total = total.trim().to_string();
                render::note(&format!("Result count set to {}", self.inputs.total));
                continue;
            }

            self.inputs.prompt = line;
            self.submit().await;
        }
    }
}
