use crate::scraper::ResultRecord;

/// A single rendered chat entry.
#[derive(Debug, Clone, PartialEq)]
pub enum Bubble {
    User(String),
    Bot(String),
    Result(ResultRecord),
}

/// Ordered, append-only chat log. Bubbles are never removed or mutated
/// after creation.
#[derive(Debug, Default)]
pub struct Transcript {
    bubbles: Vec<Bubble>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_user(&mut self, text: String) {
        self.bubbles.push(Bubble::User(text));
    }

    pub fn push_bot(&mut self, text: String) {
        self.bubbles.push(Bubble::Bot(text));
    }

    pub fn push_result(&mut self, record: ResultRecord) {
        self.bubbles.push(Bubble::Result(record));
    }

    pub fn bubbles(&self) -> &[Bubble] {
        &self.bubbles
    }

    pub fn len(&self) -> usize {
        self.bubbles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bubbles.is_empty()
    }
}
