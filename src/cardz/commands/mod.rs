use crate::config::CardzConfig;
use crate::model::{Card, CardId, Forest};
use crate::search::SearchOutcome;
use serde::Serialize;
use std::path::PathBuf;

pub mod config;
pub mod create;
pub mod delete;
pub mod doctor;
pub mod helpers;
pub mod list;
pub mod search;
pub mod update;
pub mod view;

#[derive(Debug, Clone)]
pub struct CardzPaths {
    pub data_file: PathBuf,
}

impl CardzPaths {
    pub fn new(data_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
        }
    }

    /// config.json lives next to the card store.
    pub fn config_dir(&self) -> PathBuf {
        self.data_file
            .parent()
            .map(PathBuf::from)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// What a mutation did to the forest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationOutcome {
    Created(CardId),
    Updated(CardId),
    /// `removed` counts the card and all of its descendants.
    Deleted { id: CardId, removed: usize },
    NotFound(CardId),
}

impl MutationOutcome {
    pub fn is_success(&self) -> bool {
        !matches!(self, MutationOutcome::NotFound(_))
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_cards: Vec<Card>,
    pub listed_cards: Vec<Card>,
    pub forest: Option<Forest>,
    pub path: Option<String>,
    pub search: Option<SearchOutcome>,
    pub outcome: Option<MutationOutcome>,
    pub config: Option<CardzConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_cards(mut self, cards: Vec<Card>) -> Self {
        self.affected_cards = cards;
        self
    }

    pub fn with_listed_cards(mut self, cards: Vec<Card>) -> Self {
        self.listed_cards = cards;
        self
    }

    pub fn with_forest(mut self, forest: Forest) -> Self {
        self.forest = Some(forest);
        self
    }

    pub fn with_search(mut self, outcome: SearchOutcome) -> Self {
        self.search = Some(outcome);
        self
    }

    pub fn with_outcome(mut self, outcome: MutationOutcome) -> Self {
        self.outcome = Some(outcome);
        self
    }

    pub fn with_config(mut self, config: CardzConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// The `{success, card?, error?}` shape handed to non-Rust callers.
    pub fn reply(&self) -> MutationReply {
        match &self.outcome {
            Some(MutationOutcome::NotFound(_)) => MutationReply {
                success: false,
                card: None,
                error: Some("not found".to_string()),
            },
            Some(MutationOutcome::Created(_)) => MutationReply {
                success: true,
                card: self.affected_cards.first().cloned(),
                error: None,
            },
            _ => MutationReply {
                success: true,
                card: None,
                error: None,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MutationReply {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<Card>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
