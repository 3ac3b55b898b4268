use crate::error::CatalogError;
use crate::model::{CatalogStats, CategoryCatalog, Channel, Config, GroupTitle};
use crate::processing::parser::{load_index, load_playlist};
use crate::processing::processor::{filter_nsfw, sort_by, Grouping, GroupingCatalog, SortKey};
use crate::repository::{json_write_channels, m3u_write_playlist};
use crate::utils::{create_dir, create_file, InputFetcher, StepMeasure};
use log::info;
use std::path::{Path, PathBuf};

const NAME_URL: &[SortKey] = &[SortKey::Name, SortKey::Url];

/// Writes all playlist views of a built [`GroupingCatalog`] below `output_dir`.
pub struct Generator<'a> {
    output_dir: PathBuf,
    category_catalog: &'a CategoryCatalog,
    catalog: &'a GroupingCatalog,
}

impl<'a> Generator<'a> {
    pub fn new(output_dir: &Path, category_catalog: &'a CategoryCatalog, catalog: &'a GroupingCatalog) -> Self {
        Self {
            output_dir: output_dir.to_path_buf(),
            category_catalog,
            catalog,
        }
    }

    pub fn generate(&self) -> Result<CatalogStats, CatalogError> {
        let mut step_measure = StepMeasure::new("generate");
        self.create_root_directory()?;
        self.create_no_jekyll_file()?;
        self.generate_index()?;
        step_measure.tick("index.m3u");
        self.generate_sfw_index()?;
        step_measure.tick("index.sfw.m3u");
        self.generate_channels_json()?;
        step_measure.tick("channels.json");
        self.generate_country_index()?;
        step_measure.tick("index.country.m3u");
        self.generate_language_index()?;
        step_measure.tick("index.language.m3u");
        self.generate_category_index()?;
        step_measure.tick("index.category.m3u");
        self.generate_countries()?;
        step_measure.tick("countries");
        self.generate_languages()?;
        step_measure.tick("languages");
        self.generate_categories()?;
        step_measure.tick("categories");
        step_measure.stop();
        Ok(self.finish())
    }

    fn sorted_all(&self, keys: &[SortKey]) -> Vec<&'a Channel> {
        sort_by(self.catalog.all(), keys)
    }

    fn create_root_directory(&self) -> Result<(), CatalogError> {
        info!("Creating root directory...");
        create_dir(&self.output_dir)
    }

    fn create_no_jekyll_file(&self) -> Result<(), CatalogError> {
        info!("Creating .nojekyll...");
        create_file(&self.output_dir.join(".nojekyll"), "")
    }

    fn generate_index(&self) -> Result<(), CatalogError> {
        info!("Generating index.m3u...");
        let channels = self.sorted_all(NAME_URL);
        m3u_write_playlist(&self.output_dir.join("index.m3u"), &channels, GroupTitle::Category)
    }

    fn generate_sfw_index(&self) -> Result<(), CatalogError> {
        info!("Generating index.sfw.m3u...");
        let sorted = self.sorted_all(NAME_URL);
        let channels = filter_nsfw(&sorted, self.category_catalog);
        m3u_write_playlist(&self.output_dir.join("index.sfw.m3u"), &channels, GroupTitle::Category)
    }

    fn generate_channels_json(&self) -> Result<(), CatalogError> {
        info!("Generating channels.json...");
        let channels = self.sorted_all(NAME_URL);
        json_write_channels(&self.output_dir.join("channels.json"), &channels)
    }

    fn generate_country_index(&self) -> Result<(), CatalogError> {
        info!("Generating index.country.m3u...");
        let channels = self.sorted_all(&[SortKey::TvgCountry, SortKey::Name, SortKey::Url]);
        m3u_write_playlist(&self.output_dir.join("index.country.m3u"), &channels, GroupTitle::TvgCountry)
    }

    fn generate_language_index(&self) -> Result<(), CatalogError> {
        info!("Generating index.language.m3u...");
        let channels = self.sorted_all(&[SortKey::TvgLanguage, SortKey::Name, SortKey::Url]);
        m3u_write_playlist(&self.output_dir.join("index.language.m3u"), &channels, GroupTitle::TvgLanguage)
    }

    fn generate_category_index(&self) -> Result<(), CatalogError> {
        info!("Generating index.category.m3u...");
        let channels = self.sorted_all(&[SortKey::Category, SortKey::Name, SortKey::Url]);
        m3u_write_playlist(&self.output_dir.join("index.category.m3u"), &channels, GroupTitle::Category)
    }

    fn generate_grouping(&self, grouping: Grouping, dir_name: &str) -> Result<(), CatalogError> {
        info!("Generating /{dir_name}...");
        let output_dir = self.output_dir.join(dir_name);
        create_dir(&output_dir)?;
        for (key, channels) in self.catalog.buckets(grouping) {
            let channels = sort_by(channels, NAME_URL);
            m3u_write_playlist(&output_dir.join(format!("{key}.m3u")), &channels, GroupTitle::Category)?;
        }
        Ok(())
    }

    fn generate_countries(&self) -> Result<(), CatalogError> {
        self.generate_grouping(Grouping::Country, "countries")
    }

    fn generate_languages(&self) -> Result<(), CatalogError> {
        self.generate_grouping(Grouping::Language, "languages")
    }

    // catalog order, `other` last
    fn generate_categories(&self) -> Result<(), CatalogError> {
        info!("Generating /categories...");
        let output_dir = self.output_dir.join("categories");
        create_dir(&output_dir)?;
        for id in self.catalog.keys(Grouping::Category) {
            let channels = sort_by(self.catalog.bucket(Grouping::Category, id).unwrap_or_default(), NAME_URL);
            m3u_write_playlist(&output_dir.join(format!("{id}.m3u")), &channels, GroupTitle::Category)?;
        }
        Ok(())
    }

    fn finish(&self) -> CatalogStats {
        info!("Done.");
        let stats = self.catalog.stats();
        info!("{stats}");
        stats
    }
}

/// Runs the whole pipeline: index, playlists, grouping, output.
pub fn exec_processing(cfg: &Config) -> Result<CatalogStats, CatalogError> {
    let category_catalog = cfg.category_catalog();
    let mut fetcher = InputFetcher::new(&cfg.working_dir);

    info!("Parsing index...");
    let sources = load_index(&mut fetcher, &cfg.index)?;
    let catalog = GroupingCatalog::build(&category_catalog, &sources, |source| load_playlist(&mut fetcher, source))?;

    Generator::new(&cfg.output_path(), &category_catalog, &catalog).generate()
}

#[cfg(test)]
mod tests {
    use super::{exec_processing, Generator};
    use crate::model::{CategoryCatalog, Channel, Config, Country, Language};
    use crate::processing::processor::GroupingCatalog;
    use std::fs;
    use std::path::Path;

    fn read(path: &Path) -> String {
        fs::read_to_string(path).unwrap()
    }

    fn entry_names(content: &str) -> Vec<String> {
        content.lines()
            .filter(|l| l.starts_with("#EXTINF"))
            .filter_map(|l| l.rsplit_once(',').map(|(_, name)| name.to_string()))
            .collect()
    }

    fn example_catalog(category_catalog: &CategoryCatalog) -> GroupingCatalog {
        let mut catalog = GroupingCatalog::new(category_catalog);
        catalog.add_channel(Channel::new("News2", "http://news2.test", "Unknown", vec![], vec![Language::new("en", "English")]));
        catalog.add_channel(Channel::new("News1", "http://news1.test", "News", vec![Country::new("US", "US")], vec![]));
        catalog
    }

    #[test]
    fn test_generate_example() {
        let tmp = tempfile::tempdir().unwrap();
        let out = tmp.path().join("public");
        let category_catalog = CategoryCatalog::default();
        let catalog = example_catalog(&category_catalog);

        let stats = Generator::new(&out, &category_catalog, &catalog).generate().unwrap();

        assert_eq!(entry_names(&read(&out.join("countries/US.m3u"))), vec!["News1"]);
        assert_eq!(entry_names(&read(&out.join("countries/undefined.m3u"))), vec!["News2"]);
        assert_eq!(entry_names(&read(&out.join("languages/en.m3u"))), vec!["News2"]);
        assert_eq!(entry_names(&read(&out.join("languages/undefined.m3u"))), vec!["News1"]);
        assert_eq!(entry_names(&read(&out.join("categories/news.m3u"))), vec!["News1"]);
        assert_eq!(entry_names(&read(&out.join("categories/other.m3u"))), vec!["News2"]);
        assert_eq!(entry_names(&read(&out.join("index.m3u"))), vec!["News1", "News2"]);

        assert_eq!(read(&out.join(".nojekyll")), "");
        assert_eq!(stats.channels, 2);
        assert_eq!(stats.countries, 2);
        assert_eq!(stats.languages, 2);
        assert_eq!(stats.categories, category_catalog.len() + 1);
    }

    #[test]
    fn test_every_category_has_a_file() {
        let tmp = tempfile::tempdir().unwrap();
        let category_catalog = CategoryCatalog::default();
        let catalog = GroupingCatalog::new(&category_catalog);
        Generator::new(tmp.path(), &category_catalog, &catalog).generate().unwrap();

        for id in category_catalog.ids().chain(std::iter::once("other")) {
            assert_eq!(read(&tmp.path().join("categories").join(format!("{id}.m3u"))), "#EXTM3U\n");
        }
        assert_eq!(read(&tmp.path().join("index.m3u")), "#EXTM3U\n");
        assert_eq!(read(&tmp.path().join("channels.json")), "[]");
        assert_eq!(fs::read_dir(tmp.path().join("countries")).unwrap().count(), 0);
    }

    #[test]
    fn test_index_views() {
        let tmp = tempfile::tempdir().unwrap();
        let category_catalog = CategoryCatalog::default();
        let mut catalog = GroupingCatalog::new(&category_catalog);
        catalog.add_channel(Channel::new("Zeta", "http://z.test", "News", vec![Country::new("de", "DE")], vec![Language::new("deu", "German")]));
        catalog.add_channel(Channel::new("Alpha", "http://a.test", "XXX", vec![Country::new("us", "US")], vec![Language::new("eng", "English")]));
        catalog.add_channel(Channel::new("Beta", "http://b.test", "Music", vec![Country::new("us", "US")], vec![Language::new("eng", "English")]));
        Generator::new(tmp.path(), &category_catalog, &catalog).generate().unwrap();

        assert_eq!(entry_names(&read(&tmp.path().join("index.m3u"))), vec!["Alpha", "Beta", "Zeta"]);
        assert_eq!(entry_names(&read(&tmp.path().join("index.sfw.m3u"))), vec!["Beta", "Zeta"]);

        let country_index = read(&tmp.path().join("index.country.m3u"));
        assert_eq!(entry_names(&country_index), vec!["Zeta", "Alpha", "Beta"]);
        assert!(country_index.contains("group-title=\"DE\",Zeta"));

        let language_index = read(&tmp.path().join("index.language.m3u"));
        assert_eq!(entry_names(&language_index), vec!["Alpha", "Beta", "Zeta"]);
        assert!(language_index.contains("group-title=\"German\",Zeta"));

        assert_eq!(entry_names(&read(&tmp.path().join("index.category.m3u"))), vec!["Beta", "Zeta", "Alpha"]);
    }

    #[test]
    fn test_channels_json_matches_index() {
        let tmp = tempfile::tempdir().unwrap();
        let category_catalog = CategoryCatalog::default();
        let catalog = example_catalog(&category_catalog);
        Generator::new(tmp.path(), &category_catalog, &catalog).generate().unwrap();

        let json: serde_json::Value = serde_json::from_str(&read(&tmp.path().join("channels.json"))).unwrap();
        let index = read(&tmp.path().join("index.m3u"));
        let lines: Vec<&str> = index.lines().collect();
        for channel in json.as_array().unwrap() {
            let name = channel["name"].as_str().unwrap();
            let url = channel["url"].as_str().unwrap();
            let found = lines.windows(2).any(|w| w[0].ends_with(&format!(",{name}")) && w[1] == url);
            assert!(found, "{name} {url} missing in index.m3u");
        }
    }

    #[test]
    fn test_exec_processing() {
        let tmp = tempfile::tempdir().unwrap();
        let channels_dir = tmp.path().join("channels");
        fs::create_dir_all(&channels_dir).unwrap();
        fs::write(tmp.path().join("index.m3u"), "#EXTM3U\n#EXTINF:-1,United States\nchannels/us.m3u\n#EXTINF:-1,Germany\nchannels/de.m3u\n").unwrap();
        fs::write(channels_dir.join("us.m3u"), "#EXTM3U\n\
            #EXTINF:-1 tvg-country=\"US\" tvg-language=\"English\" group-title=\"News\",News1\n\
            http://news1.test\n\
            #EXTINF:-1 tvg-country=\"US;CA\" tvg-language=\"English;French\" group-title=\"Kids\",Toons\n\
            http://toons.test\n").unwrap();
        fs::write(channels_dir.join("de.m3u"), "#EXTM3U\n\
            #EXTINF:-1 tvg-country=\"DE\" tvg-language=\"German\" group-title=\"Sport\",Sport1\n\
            http://sport1.test\n").unwrap();

        let mut config = Config { working_dir: tmp.path().to_string_lossy().to_string(), output_dir: "out".to_string(), ..Default::default() };
        config.prepare().unwrap();
        let stats = exec_processing(&config).unwrap();
        assert_eq!(stats.channels, 3);
        assert_eq!(stats.countries, 3);
        assert_eq!(stats.languages, 3);

        let out = tmp.path().join("out");
        assert_eq!(entry_names(&read(&out.join("countries/us.m3u"))), vec!["News1", "Toons"]);
        assert_eq!(entry_names(&read(&out.join("countries/ca.m3u"))), vec!["Toons"]);
        assert_eq!(entry_names(&read(&out.join("languages/fra.m3u"))), vec!["Toons"]);
        assert_eq!(entry_names(&read(&out.join("categories/sport.m3u"))), vec!["Sport1"]);
        assert_eq!(entry_names(&read(&out.join("index.m3u"))), vec!["News1", "Sport1", "Toons"]);
    }

    #[test]
    fn test_exec_processing_missing_playlist() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("index.m3u"), "#EXTM3U\n#EXTINF:-1,Missing\nchannels/missing.m3u\n").unwrap();
        let mut config = Config { working_dir: tmp.path().to_string_lossy().to_string(), ..Default::default() };
        config.prepare().unwrap();
        assert!(exec_processing(&config).is_err());
        assert!(!tmp.path().join(".gh-pages").exists());
    }
}
