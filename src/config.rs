//! Loads the site configuration: a JSON object mapping string keys to string
//! values, e.g.
//!
//! ```json
//! {
//!     "siteName": "Rafall",
//!     "subtitle": "Random stuff",
//!     "description": "hi, my name is rafall",
//!     "disqusShortname": "rafall"
//! }
//! ```

use crate::util;
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::Path;

/// The config file used when none is given on the command line.
pub const DEFAULT_PATH: &str = "etc/rafall.conf";

/// Parses `content` as a JSON object of strings.
pub fn read_config(content: &[u8]) -> Result<HashMap<String, String>> {
    serde_json::from_slice(content).context("Parsing configuration")
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Config {
    values: HashMap<String, String>,
}

impl Config {
    pub fn from_file(path: &Path) -> Result<Config> {
        let content = util::read(path, "config")?;
        let values = read_config(&content).with_context(|| {
            format!("Loading configuration from `{}`", path.display())
        })?;
        Ok(Config { values })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn site_name(&self) -> Option<&str> {
        self.get("siteName")
    }

    pub fn subtitle(&self) -> Option<&str> {
        self.get("subtitle")
    }

    pub fn description(&self) -> Option<&str> {
        self.get("description")
    }

    pub fn disqus_shortname(&self) -> Option<&str> {
        self.get("disqusShortname")
    }
}

impl From<HashMap<String, String>> for Config {
    fn from(values: HashMap<String, String>) -> Config {
        Config { values }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::path::PathBuf;

    fn testdata(name: &str) -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("testdata").join(name)
    }

    fn expected() -> HashMap<String, String> {
        vec![
            ("siteName", "Rafall"),
            ("subtitle", "Random stuff"),
            ("description", "hi, my name is rafall"),
            ("disqusShortname", "rafall"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_owned(), v.to_owned()))
        .collect()
    }

    #[test]
    fn test_read_config() -> Result<()> {
        let content = std::fs::read(testdata("config"))?;
        assert_eq!(expected(), read_config(&content)?);
        Ok(())
    }

    #[test]
    fn test_read_config_invalid_json() {
        assert!(read_config(b"invalid;json:").is_err());
        assert!(read_config(br#"{"siteName": 1}"#).is_err());
    }

    #[test]
    fn test_from_file() -> Result<()> {
        let config = Config::from_file(&testdata("config"))?;
        assert_eq!(Some("Rafall"), config.site_name());
        assert_eq!(Some("Random stuff"), config.subtitle());
        assert_eq!(Some("hi, my name is rafall"), config.description());
        assert_eq!(Some("rafall"), config.disqus_shortname());
        assert_eq!(None, config.get("missing"));
        Ok(())
    }

    #[test]
    fn test_from_file_missing() {
        let missing = Path::new("something/that/does/not/exist");
        let err = Config::from_file(missing).unwrap_err();
        assert!(err.to_string().contains("something/that/does/not/exist"));
    }
}
