use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub nsfw: bool,
}

impl Category {
    pub fn new(id: &str, name: &str, nsfw: bool) -> Self {
        Self { id: id.to_string(), name: name.to_string(), nsfw }
    }
}

macro_rules! category_list {
    ($(($id:literal, $name:literal, $nsfw:literal)),* $(,)?) => {
        vec![$(Category::new($id, $name, $nsfw)),*]
    };
}

/// Ordered list of the known categories. The order drives the generation
/// order of the per category playlists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCatalog {
    categories: Vec<Category>,
}

impl CategoryCatalog {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    pub fn iter(&self) -> impl Iterator<Item=&Category> {
        self.categories.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item=&str> {
        self.categories.iter().map(|c| c.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn is_nsfw(&self, id: &str) -> bool {
        self.categories.iter().any(|c| c.nsfw && c.id == id)
    }
}

impl Default for CategoryCatalog {
    fn default() -> Self {
        Self::new(category_list![
            ("auto", "Auto", false),
            ("business", "Business", false),
            ("classic", "Classic", false),
            ("comedy", "Comedy", false),
            ("documentary", "Documentary", false),
            ("education", "Education", false),
            ("entertainment", "Entertainment", false),
            ("family", "Family", false),
            ("fashion", "Fashion", false),
            ("food", "Food", false),
            ("general", "General", false),
            ("health", "Health", false),
            ("history", "History", false),
            ("hobby", "Hobby", false),
            ("kids", "Kids", false),
            ("legislative", "Legislative", false),
            ("lifestyle", "Lifestyle", false),
            ("local", "Local", false),
            ("movies", "Movies", false),
            ("music", "Music", false),
            ("news", "News", false),
            ("quiz", "Quiz", false),
            ("religious", "Religious", false),
            ("sci-fi", "Sci-Fi", false),
            ("shop", "Shop", false),
            ("sport", "Sport", false),
            ("travel", "Travel", false),
            ("weather", "Weather", false),
            ("xxx", "XXX", true),
        ])
    }
}
