use crate::model::{CategoryCatalog, Channel};
use std::cmp::Ordering;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Url,
    Category,
    TvgCountry,
    TvgLanguage,
}

impl SortKey {
    fn value(self, channel: &Channel) -> &str {
        match self {
            SortKey::Name => &channel.name,
            SortKey::Url => &channel.url,
            SortKey::Category => &channel.category,
            SortKey::TvgCountry => &channel.tvg_country,
            SortKey::TvgLanguage => &channel.tvg_language,
        }
    }
}

fn channel_comparator(keys: &[SortKey], a: &Channel, b: &Channel) -> Ordering {
    for key in keys {
        let ordering = key.value(a).cmp(key.value(b));
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    Ordering::Equal
}

/// Ascending sort by the given keys. The sort is stable, channels equal on
/// all keys keep their relative order.
pub fn sort_by<'a, I>(channels: I, keys: &[SortKey]) -> Vec<&'a Channel>
where
    I: IntoIterator<Item=&'a Channel>,
{
    let mut sorted: Vec<&Channel> = channels.into_iter().collect();
    sorted.sort_by(|a, b| channel_comparator(keys, a, b));
    sorted
}

pub fn is_nsfw(channel: &Channel, catalog: &CategoryCatalog) -> bool {
    catalog.is_nsfw(&channel.category.to_lowercase())
}

/// Drops channels of an NSFW category, the order of the remaining channels is kept.
pub fn filter_nsfw<'a>(channels: &[&'a Channel], catalog: &CategoryCatalog) -> Vec<&'a Channel> {
    channels.iter()
        .copied()
        .filter(|channel| !is_nsfw(channel, catalog))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{filter_nsfw, sort_by, SortKey};
    use crate::model::{CategoryCatalog, Channel, Country};

    fn channel(name: &str, url: &str, category: &str) -> Channel {
        Channel::new(name, url, category, vec![], vec![])
    }

    fn names(channels: &[&Channel]) -> Vec<String> {
        channels.iter().map(|c| format!("{}|{}", c.name, c.url)).collect()
    }

    #[test]
    fn test_sort_by_name_url() {
        let channels = vec![
            channel("b", "2", "News"),
            channel("a", "2", "News"),
            channel("b", "1", "News"),
            channel("A", "3", "News"),
        ];
        let sorted = sort_by(&channels, &[SortKey::Name, SortKey::Url]);
        assert_eq!(names(&sorted), vec!["A|3", "a|2", "b|1", "b|2"]);
        // input untouched
        assert_eq!(channels[0].name, "b");
    }

    #[test]
    fn test_sort_is_stable() {
        let mut first = channel("same", "url", "News");
        first.logo = "first".to_string();
        let mut second = channel("same", "url", "News");
        second.logo = "second".to_string();
        let mut third = channel("same", "url", "News");
        third.logo = "third".to_string();
        let channels = vec![first, channel("aaa", "url", "News"), second, third];

        let sorted = sort_by(&channels, &[SortKey::Name, SortKey::Url]);
        let logos: Vec<&str> = sorted.iter().filter(|c| c.name == "same").map(|c| c.logo.as_str()).collect();
        assert_eq!(logos, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_sort_by_tvg_country() {
        let channels = vec![
            Channel::new("x", "1", "", vec![Country::new("us", "US")], vec![]),
            Channel::new("y", "2", "", vec![Country::new("de", "DE")], vec![]),
            Channel::new("a", "3", "", vec![], vec![]),
        ];
        let sorted = sort_by(&channels, &[SortKey::TvgCountry, SortKey::Name, SortKey::Url]);
        assert_eq!(sorted.iter().map(|c| c.name.as_str()).collect::<Vec<_>>(), vec!["a", "y", "x"]);
    }

    #[test]
    fn test_sort_by_category() {
        let channels = vec![channel("a", "1", "Sport"), channel("b", "2", "Music"), channel("c", "3", "Music")];
        let sorted = sort_by(&channels, &[SortKey::Category, SortKey::Name, SortKey::Url]);
        assert_eq!(sorted.iter().map(|c| c.name.as_str()).collect::<Vec<_>>(), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_filter_nsfw() {
        let catalog = CategoryCatalog::default();
        let channels = vec![
            channel("d", "1", "News"),
            channel("c", "2", "XXX"),
            channel("b", "3", "xxx"),
            channel("a", "4", "Unknown"),
        ];
        let refs: Vec<&Channel> = channels.iter().collect();
        let filtered = filter_nsfw(&refs, &catalog);
        assert_eq!(filtered.iter().map(|c| c.name.as_str()).collect::<Vec<_>>(), vec!["d", "a"]);
        assert!(filtered.len() <= refs.len());
        assert!(filter_nsfw(&[], &catalog).is_empty());
    }
}
