use std::fmt::{Display, Formatter};

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct CatalogStats {
    pub countries: usize,
    pub languages: usize,
    pub categories: usize,
    pub channels: usize,
}

impl Display for CatalogStats {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Countries: {}. Languages: {}. Categories: {}. Channels: {}.",
               self.countries, self.languages, self.categories, self.channels)
    }
}
