use serde::{Deserialize, Serialize};

use crate::story::Story;

/// Number of chunks every story expands into.
pub const CHUNKS_PER_STORY: usize = 5;

/// One sub-section of a story, shown full-screen in the chunk viewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// 1-based position within the story.
    pub id: u32,
    /// Short heading.
    pub title: String,
    /// Body text.
    pub content: String,
    /// Background image URL (shared with the story).
    pub image: String,
}

/// Heading and body template for each chunk slot. `{}` is the story title.
const TEMPLATES: [(&str, &str); CHUNKS_PER_STORY] = [
    (
        "Key Insight #1",
        "Discover the fundamental concepts behind {}. This chunk explores the basics and sets the foundation for deeper understanding.",
    ),
    (
        "Historical Context",
        "Learn about the evolution and background of {}. Understanding the past helps illuminate the present.",
    ),
    (
        "Expert Perspective",
        "Industry leaders share their insights on {}. Gain valuable knowledge from those at the forefront.",
    ),
    (
        "Real-World Application",
        "See how {} manifests in everyday life. Practical examples that bring theory to reality.",
    ),
    (
        "Deep Dive",
        "An in-depth exploration of the most fascinating aspects of {}. For those who want to go further.",
    ),
];

/// Derive the fixed chunk sequence for a story.
///
/// Pure function of the story: the same story always yields the same chunks.
pub fn derive_chunks(story: &Story) -> Vec<Chunk> {
    TEMPLATES
        .iter()
        .zip(1u32..)
        .map(|(&(title, body), id)| Chunk {
            id,
            title: title.to_string(),
            content: body.replacen("{}", &story.title, 1),
            image: story.image.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn story() -> Story {
        Story::new(4, "Music That Moves Us", "desc", "https://img.example/4.jpg")
    }

    #[test]
    fn five_chunks_with_sequential_ids() {
        let chunks = derive_chunks(&story());
        assert_eq!(chunks.len(), CHUNKS_PER_STORY);
        let ids: Vec<u32> = chunks.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn chunks_share_story_image() {
        for chunk in derive_chunks(&story()) {
            assert_eq!(chunk.image, "https://img.example/4.jpg");
        }
    }

    #[test]
    fn every_chunk_mentions_title() {
        for chunk in derive_chunks(&story()) {
            assert!(chunk.content.contains("Music That Moves Us"), "{}", chunk.title);
            assert!(!chunk.content.contains("{}"));
        }
    }

    #[test]
    fn derivation_is_deterministic() {
        assert_eq!(derive_chunks(&story()), derive_chunks(&story()));
    }

    #[test]
    fn first_chunk_text() {
        let chunks = derive_chunks(&story());
        assert_eq!(chunks[0].title, "Key Insight #1");
        insta::assert_snapshot!(
            &chunks[0].content,
            @"Discover the fundamental concepts behind Music That Moves Us. This chunk explores the basics and sets the foundation for deeper understanding."
        );
    }

    #[test]
    fn last_chunk_is_deep_dive() {
        let chunks = derive_chunks(&story());
        assert_eq!(chunks[4].title, "Deep Dive");
    }
}
