use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

pub const DEFAULT_SITE_URL: &str = "https://ourworldindata.org";
pub const DEFAULT_EMBED_HEIGHT_PX: u32 = 600;

/// How rows with a missing value in any bound column are exported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NullPolicy {
    /// Keep the row and write an explicit JSON `null` for the missing cell.
    #[default]
    KeepNull,
    /// Drop the whole row.
    DropRow,
}

/// Where the hosted grapher application lives and how large the embed is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedConfig {
    #[serde(default = "default_site_url")]
    pub site_url: String,
    #[serde(default = "default_embed_height_px")]
    pub height_px: u32,
}

impl Default for EmbedConfig {
    fn default() -> Self {
        Self {
            site_url: default_site_url(),
            height_px: default_embed_height_px(),
        }
    }
}

/// Crate-level configuration attached to a `Chart`.
///
/// Serializable so notebooks and host applications can keep a shared setup in a
/// JSON file. Every field has a default, so partial documents are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrapherConfig {
    #[serde(default)]
    pub null_policy: NullPolicy,
    #[serde(default = "default_temporal_name_hints")]
    pub temporal_name_hints: Vec<String>,
    #[serde(default)]
    pub embed: EmbedConfig,
}

impl Default for GrapherConfig {
    fn default() -> Self {
        Self {
            null_policy: NullPolicy::default(),
            temporal_name_hints: default_temporal_name_hints(),
            embed: EmbedConfig::default(),
        }
    }
}

impl GrapherConfig {
    #[must_use]
    pub fn with_null_policy(mut self, policy: NullPolicy) -> Self {
        self.null_policy = policy;
        self
    }

    #[must_use]
    pub fn with_temporal_name_hints<S: Into<String>>(
        mut self,
        hints: impl IntoIterator<Item = S>,
    ) -> Self {
        self.temporal_name_hints = hints.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_site_url(mut self, site_url: impl Into<String>) -> Self {
        self.embed.site_url = site_url.into();
        self
    }

    #[must_use]
    pub fn with_embed_height_px(mut self, height_px: u32) -> Self {
        self.embed.height_px = height_px;
        self
    }

    pub fn validate(self) -> ChartResult<Self> {
        if self.embed.height_px == 0 {
            return Err(ChartError::InvalidOption(
                "embed height_px must be > 0".to_owned(),
            ));
        }
        if self.embed.site_url.trim().is_empty() {
            return Err(ChartError::InvalidOption(
                "embed site_url must not be empty".to_owned(),
            ));
        }
        if self
            .temporal_name_hints
            .iter()
            .any(|hint| hint.trim().is_empty())
        {
            return Err(ChartError::InvalidOption(
                "temporal name hints must not be empty strings".to_owned(),
            ));
        }
        Ok(self)
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse grapher config json: {e}"))
        })?;
        config.validate()
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize grapher config json: {e}"))
        })
    }
}

fn default_site_url() -> String {
    DEFAULT_SITE_URL.to_owned()
}

fn default_embed_height_px() -> u32 {
    DEFAULT_EMBED_HEIGHT_PX
}

/// Year-like names only. Integer `time`/`day` columns stay numeric.
fn default_temporal_name_hints() -> Vec<String> {
    ["year", "date"].into_iter().map(str::to_owned).collect()
}
