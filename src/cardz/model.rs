use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

pub type CardId = u64;

/// What a card represents. Purely a display hint: any kind may hold children.
///
/// Unknown tags found in a document are kept verbatim so a load/save cycle
/// never rewrites them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CardKind {
    #[default]
    Card,
    File,
    Other(String),
}

impl CardKind {
    pub fn as_str(&self) -> &str {
        match self {
            CardKind::Card => "card",
            CardKind::File => "file",
            CardKind::Other(tag) => tag,
        }
    }

    pub fn is_file(&self) -> bool {
        matches!(self, CardKind::File)
    }
}

impl From<String> for CardKind {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "card" => CardKind::Card,
            "file" => CardKind::File,
            _ => CardKind::Other(tag),
        }
    }
}

impl From<CardKind> for String {
    fn from(kind: CardKind) -> Self {
        match kind {
            CardKind::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for CardKind {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(CardKind::from(s.to_string()))
    }
}

impl fmt::Display for CardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub name: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub link: String,
    #[serde(rename = "type", default)]
    pub kind: CardKind,
    // Mirrors tree position; the tree itself is authoritative.
    #[serde(default)]
    pub parent_id: Option<CardId>,
    #[serde(default)]
    pub children: Vec<Card>,
}

impl Card {
    pub fn new(id: CardId, draft: CardDraft) -> Self {
        Self {
            id,
            name: draft.name,
            subtitle: draft.subtitle,
            link: draft.link,
            kind: draft.kind,
            parent_id: draft.parent_id,
            children: Vec::new(),
        }
    }

    /// The text the search index sees for this card.
    pub fn searchable_content(&self) -> String {
        searchable_content(&self.name, &self.subtitle)
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

pub(crate) fn searchable_content(name: &str, subtitle: &str) -> String {
    format!("{} {}", name, subtitle).to_lowercase()
}

/// The whole persisted document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Forest {
    #[serde(default)]
    pub cards: Vec<Card>,
    /// Only present when ids come from a persisted counter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_id: Option<CardId>,
}

impl Forest {
    pub fn new(cards: Vec<Card>) -> Self {
        Self {
            cards,
            next_id: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Input for creating a card.
#[derive(Debug, Clone, Default)]
pub struct CardDraft {
    pub parent_id: Option<CardId>,
    pub name: String,
    pub subtitle: String,
    pub link: String,
    pub kind: CardKind,
}

impl CardDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn under(mut self, parent_id: CardId) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = subtitle.into();
        self
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = link.into();
        self
    }

    pub fn with_kind(mut self, kind: CardKind) -> Self {
        self.kind = kind;
        self
    }
}

/// Partial update: only the fields that are `Some` are written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CardPatch {
    pub name: Option<String>,
    pub subtitle: Option<String>,
    pub link: Option<String>,
}

impl CardPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.subtitle.is_none() && self.link.is_none()
    }

    pub fn apply(&self, card: &mut Card) {
        if let Some(name) = &self.name {
            card.name = name.clone();
        }
        if let Some(subtitle) = &self.subtitle {
            card.subtitle = subtitle.clone();
        }
        if let Some(link) = &self.link {
            card.link = link.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_defaults_for_sparse_json() {
        let json = r#"{"id": 7, "name": "Reports"}"#;
        let card: Card = serde_json::from_str(json).unwrap();

        assert_eq!(card.id, 7);
        assert_eq!(card.subtitle, "");
        assert_eq!(card.link, "");
        assert_eq!(card.kind, CardKind::Card);
        assert_eq!(card.parent_id, None);
        assert!(card.children.is_empty());
    }

    #[test]
    fn test_kind_is_serialized_as_type() {
        let card = Card::new(1, CardDraft::new("Doc").with_kind(CardKind::File));
        let value = serde_json::to_value(&card).unwrap();

        assert_eq!(value["type"], "file");
        assert!(value["parent_id"].is_null());
        assert_eq!(value["children"], serde_json::json!([]));
    }

    #[test]
    fn test_unknown_kind_survives_roundtrip() {
        let json = r#"{"id": 3, "name": "Clip", "type": "video"}"#;
        let card: Card = serde_json::from_str(json).unwrap();
        assert_eq!(card.kind, CardKind::Other("video".to_string()));

        let back = serde_json::to_value(&card).unwrap();
        assert_eq!(back["type"], "video");
    }

    #[test]
    fn test_forest_omits_counter_when_unused() {
        let forest = Forest::default();
        let json = serde_json::to_string(&forest).unwrap();
        assert_eq!(json, r#"{"cards":[]}"#);
    }

    #[test]
    fn test_patch_only_touches_given_fields() {
        let mut card = Card::new(
            1,
            CardDraft::new("Old")
                .with_subtitle("keep me")
                .with_link("/a"),
        );
        let patch = CardPatch {
            name: Some("New".to_string()),
            link: Some(String::new()),
            ..CardPatch::default()
        };
        patch.apply(&mut card);

        assert_eq!(card.name, "New");
        assert_eq!(card.subtitle, "keep me");
        assert_eq!(card.link, "");
    }

    #[test]
    fn test_searchable_content_joins_and_folds() {
        let card = Card::new(1, CardDraft::new("Budget Report").with_subtitle("Annual 2024"));
        assert_eq!(card.searchable_content(), "budget report annual 2024");
    }
}
