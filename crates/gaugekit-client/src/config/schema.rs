use serde::Deserialize;

use gaugekit_core::error::{GaugeError, Result};
use gaugekit_core::Tag;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClientConfig {
    pub version: u32,

    #[serde(default)]
    pub flush: FlushSection,

    /// Tags attached to gauges owned by the agent itself.
    #[serde(default)]
    pub tags: Vec<TagConfig>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            version: 1,
            flush: FlushSection::default(),
            tags: Vec::new(),
        }
    }
}

impl ClientConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(GaugeError::UnsupportedVersion);
        }
        self.flush.validate()?;
        for t in &self.tags {
            if t.category.trim().is_empty() {
                return Err(GaugeError::BadConfig("tags[].category must not be empty".into()));
            }
        }
        Ok(())
    }

    pub fn stream_tags(&self) -> Vec<Tag> {
        self.tags
            .iter()
            .map(|t| Tag::new(t.category.as_str(), t.value.as_str()))
            .collect()
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FlushSection {
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,

    #[serde(default)]
    pub pretty: bool,

    #[serde(default = "default_isolate_panics")]
    pub isolate_panics: bool,
}

impl Default for FlushSection {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
            pretty: false,
            isolate_panics: default_isolate_panics(),
        }
    }
}

impl FlushSection {
    pub fn validate(&self) -> Result<()> {
        if !(1000..=300000).contains(&self.interval_ms) {
            return Err(GaugeError::BadConfig(
                "flush.interval_ms must be between 1000 and 300000".into(),
            ));
        }
        Ok(())
    }
}

fn default_interval_ms() -> u64 {
    10000
}
fn default_isolate_panics() -> bool {
    true
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TagConfig {
    pub category: String,
    #[serde(default)]
    pub value: String,
}
