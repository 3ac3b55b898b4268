use crate::error::CatalogError;
use crate::model::{CatalogStats, CategoryCatalog, Channel, Playlist, PlaylistSource};
use crate::utils::{OTHER_CATEGORY_ID, UNDEFINED_KEY};
use indexmap::IndexMap;
use log::info;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Grouping {
    Country,
    Language,
    Category,
}

type Buckets = IndexMap<String, Vec<usize>>;

/// In memory groupings of all parsed channels.
///
/// Buckets store indices into `all`, a channel with several countries or
/// languages is referenced from several buckets but stored once.
#[derive(Debug, Clone)]
pub struct GroupingCatalog {
    all: Vec<Channel>,
    countries: Buckets,
    languages: Buckets,
    categories: Buckets,
}

fn add_to_bucket(buckets: &mut Buckets, key: &str, index: usize) {
    buckets.entry(key.to_string()).or_default().push(index);
}

fn bucket_key(code: &str) -> &str {
    if code.is_empty() { UNDEFINED_KEY } else { code }
}

impl GroupingCatalog {
    /// Creates an empty catalog with one bucket per known category plus `other`.
    pub fn new(category_catalog: &CategoryCatalog) -> Self {
        let mut categories = Buckets::new();
        for id in category_catalog.ids() {
            categories.insert(id.to_string(), vec![]);
        }
        categories.insert(OTHER_CATEGORY_ID.to_string(), vec![]);
        Self {
            all: vec![],
            countries: Buckets::new(),
            languages: Buckets::new(),
            categories,
        }
    }

    /// Loads every source with `load` and adds its channels in parse order.
    pub fn build<F>(category_catalog: &CategoryCatalog, sources: &[PlaylistSource], mut load: F) -> Result<Self, CatalogError>
    where
        F: FnMut(&PlaylistSource) -> Result<Playlist, CatalogError>,
    {
        let mut catalog = Self::new(category_catalog);
        for source in sources {
            let playlist = load(source)?;
            for channel in playlist.channels {
                catalog.add_channel(channel);
            }
        }
        info!("Parsed {} channels from {} playlists", catalog.all.len(), sources.len());
        Ok(catalog)
    }

    pub fn add_channel(&mut self, channel: Channel) {
        let index = self.all.len();

        if channel.countries.is_empty() {
            add_to_bucket(&mut self.countries, UNDEFINED_KEY, index);
        } else {
            for country in &channel.countries {
                add_to_bucket(&mut self.countries, bucket_key(&country.code), index);
            }
        }

        if channel.languages.is_empty() {
            add_to_bucket(&mut self.languages, UNDEFINED_KEY, index);
        } else {
            for language in &channel.languages {
                add_to_bucket(&mut self.languages, bucket_key(&language.code), index);
            }
        }

        let category_id = channel.category.to_lowercase();
        match self.categories.get_mut(&category_id) {
            Some(bucket) => bucket.push(index),
            None => add_to_bucket(&mut self.categories, OTHER_CATEGORY_ID, index),
        }

        self.all.push(channel);
    }

    pub fn all(&self) -> &[Channel] {
        &self.all
    }

    fn buckets_for(&self, grouping: Grouping) -> &Buckets {
        match grouping {
            Grouping::Country => &self.countries,
            Grouping::Language => &self.languages,
            Grouping::Category => &self.categories,
        }
    }

    fn resolve(&self, indices: &[usize]) -> Vec<&Channel> {
        indices.iter().filter_map(|&idx| self.all.get(idx)).collect()
    }

    /// Channels of one bucket in insertion order, `None` for unknown keys.
    pub fn bucket(&self, grouping: Grouping, key: &str) -> Option<Vec<&Channel>> {
        self.buckets_for(grouping).get(key).map(|indices| self.resolve(indices))
    }

    /// Bucket keys in first seen order (categories: catalog order, then `other`).
    pub fn keys(&self, grouping: Grouping) -> impl Iterator<Item=&str> {
        self.buckets_for(grouping).keys().map(String::as_str)
    }

    pub fn buckets(&self, grouping: Grouping) -> impl Iterator<Item=(&str, Vec<&Channel>)> {
        self.buckets_for(grouping).iter().map(|(key, indices)| (key.as_str(), self.resolve(indices)))
    }

    pub fn stats(&self) -> CatalogStats {
        CatalogStats {
            countries: self.countries.len(),
            languages: self.languages.len(),
            categories: self.categories.len(),
            channels: self.all.len(),
        }
    }
}
