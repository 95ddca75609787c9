use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a story within a catalog.
///
/// Serialized as a bare JSON integer so persisted id lists stay `[1,2,3]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoryId(pub u32);

impl fmt::Display for StoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for StoryId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// A full-screen content card in the story carousel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    /// Unique id within the catalog.
    pub id: StoryId,
    /// Headline shown over the card.
    pub title: String,
    /// One-paragraph teaser below the headline.
    pub description: String,
    /// Background image URL.
    pub image: String,
}

impl Story {
    /// Create a story from its parts.
    pub fn new(
        id: impl Into<StoryId>,
        title: impl Into<String>,
        description: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            image: image.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn story_json_keys() {
        let story = Story::new(7, "Title", "Desc", "https://example.com/a.jpg");
        let json = serde_json::to_string(&story).unwrap();
        assert_eq!(
            json,
            r#"{"id":7,"title":"Title","description":"Desc","image":"https://example.com/a.jpg"}"#
        );
    }

    #[test]
    fn story_id_is_transparent() {
        let ids = vec![StoryId(1), StoryId(3)];
        assert_eq!(serde_json::to_string(&ids).unwrap(), "[1,3]");
        let back: Vec<StoryId> = serde_json::from_str("[2,5]").unwrap();
        assert_eq!(back, vec![StoryId(2), StoryId(5)]);
    }

    #[test]
    fn story_id_display() {
        assert_eq!(StoryId(42).to_string(), "42");
    }
}
