use std::collections::HashSet;
use std::path::Path;

use crate::chunk::{Chunk, derive_chunks};
use crate::error::{CoreError, CoreResult};
use crate::quiz::{QuizQuestion, derive_questions};
use crate::story::{Story, StoryId};

/// Source of browsable content.
///
/// Screens only ever see content through this trait. The default chunk and
/// quiz derivations are the built-in templates; providers may override them.
pub trait ContentProvider {
    /// All stories, in browsing order.
    fn stories(&self) -> &[Story];

    /// Chunks for the chunk viewer.
    fn chunks_for(&self, story: &Story) -> Vec<Chunk> {
        derive_chunks(story)
    }

    /// Quiz questions for the quiz screen.
    fn questions_for(&self, story: &Story) -> Vec<QuizQuestion> {
        derive_questions(&story.title)
    }

    /// Look up a story by id.
    fn story(&self, id: StoryId) -> Option<&Story> {
        self.stories().iter().find(|s| s.id == id)
    }

    /// Whether the catalog contains `id`.
    fn contains(&self, id: StoryId) -> bool {
        self.story(id).is_some()
    }
}

/// An ordered, validated list of stories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    stories: Vec<Story>,
}

impl Catalog {
    /// Build a catalog, rejecting empty lists and duplicate ids.
    pub fn from_stories(stories: Vec<Story>) -> CoreResult<Self> {
        if stories.is_empty() {
            return Err(CoreError::EmptyCatalog);
        }
        let mut seen = HashSet::new();
        for story in &stories {
            if !seen.insert(story.id) {
                return Err(CoreError::DuplicateStory(story.id));
            }
        }
        Ok(Self { stories })
    }

    /// Parse a catalog from a JSON array of stories.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let stories: Vec<Story> = serde_json::from_str(json)?;
        Self::from_stories(stories)
    }

    /// Load a catalog from a JSON file.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| CoreError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// The built-in five-story catalog.
    pub fn builtin() -> Self {
        Self {
            stories: builtin_stories(),
        }
    }

    /// Number of stories.
    pub fn len(&self) -> usize {
        self.stories.len()
    }

    /// Whether the catalog has no stories.
    pub fn is_empty(&self) -> bool {
        self.stories.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ContentProvider for Catalog {
    fn stories(&self) -> &[Story] {
        &self.stories
    }
}

fn builtin_stories() -> Vec<Story> {
    vec![
        Story::new(
            1,
            "The Future of AI",
            "Explore the cutting-edge developments in artificial intelligence and how they are shaping our world. From machine learning to neural networks, discover what's next.",
            "https://images.unsplash.com/photo-1568952433726-3896e3881c65?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080",
        ),
        Story::new(
            2,
            "Hidden Gems of Southeast Asia",
            "Dive into the world of travel and adventure. Discover breathtaking destinations, local cultures, and unforgettable experiences across Southeast Asia.",
            "https://images.unsplash.com/photo-1528543606781-2f6e6857f318?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080",
        ),
        Story::new(
            3,
            "The Art of Modern Cuisine",
            "Explore culinary innovations and food trends that are revolutionizing how we eat. From farm to table, discover the stories behind your favorite dishes.",
            "https://images.unsplash.com/photo-1763256340688-cbd3614c9a56?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080",
        ),
        Story::new(
            4,
            "Music That Moves Us",
            "Dive into the world of music and performance. Learn about emerging artists, iconic concerts, and the sounds that define our generation.",
            "https://images.unsplash.com/photo-1524368535928-5b5e00ddc76b?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080",
        ),
        Story::new(
            5,
            "Abstract Expressions",
            "Discover the vibrant world of contemporary art. From abstract paintings to digital installations, explore the creative minds shaping visual culture.",
            "https://images.unsplash.com/photo-1705254613735-1abb457f8a60?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_five_ordered_stories() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 5);
        let ids: Vec<u32> = catalog.stories().iter().map(|s| s.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert_eq!(catalog.stories()[0].title, "The Future of AI");
    }

    #[test]
    fn builtin_validates() {
        let stories = Catalog::builtin().stories().to_vec();
        assert!(Catalog::from_stories(stories).is_ok());
    }

    #[test]
    fn empty_rejected() {
        assert!(matches!(
            Catalog::from_stories(Vec::new()),
            Err(CoreError::EmptyCatalog)
        ));
    }

    #[test]
    fn duplicate_rejected() {
        let result = Catalog::from_stories(vec![
            Story::new(1, "a", "", ""),
            Story::new(1, "b", "", ""),
        ]);
        assert!(matches!(result, Err(CoreError::DuplicateStory(StoryId(1)))));
    }

    #[test]
    fn lookup_by_id() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.story(StoryId(3)).unwrap().title, "The Art of Modern Cuisine");
        assert!(catalog.contains(StoryId(5)));
        assert!(!catalog.contains(StoryId(99)));
    }

    #[test]
    fn from_json_array() {
        let catalog = Catalog::from_json(
            r#"[{"id":10,"title":"Fixture","description":"d","image":"i"}]"#,
        )
        .unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.stories()[0].id, StoryId(10));
    }

    #[test]
    fn from_json_malformed() {
        assert!(matches!(Catalog::from_json("{not json"), Err(CoreError::Json(_))));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(
            &path,
            r#"[{"id":1,"title":"One","description":"","image":""},
                {"id":2,"title":"Two","description":"","image":""}]"#,
        )
        .unwrap();
        let catalog = Catalog::load(&path).unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn load_missing_file() {
        let result = Catalog::load(Path::new("/definitely/not/here.json"));
        assert!(matches!(result, Err(CoreError::Io { .. })));
    }

    #[test]
    fn default_derivations() {
        let catalog = Catalog::builtin();
        let story = &catalog.stories()[1];
        assert_eq!(catalog.chunks_for(story).len(), 5);
        assert_eq!(catalog.questions_for(story).len(), 5);
    }
}
