use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{MarkKind, Role};

/// Mark-specific options accepted by `Chart::mark`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkOptions {
    /// Stack bar segments by the color role. Only valid for bar marks.
    #[serde(default)]
    pub stacked: bool,
    /// Open the chart showing each value as a share of the total (bars) or
    /// as relative change (lines) instead of absolute values.
    #[serde(default)]
    pub relative: bool,
}

impl MarkOptions {
    #[must_use]
    pub fn stacked() -> Self {
        Self {
            stacked: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_relative(mut self, relative: bool) -> Self {
        self.relative = relative;
        self
    }

    #[must_use]
    pub fn stack_mode(self) -> StackMode {
        if self.relative {
            StackMode::Relative
        } else {
            StackMode::Absolute
        }
    }
}

/// Initial value mode of the viewer, exported as `stackMode`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StackMode {
    #[default]
    Absolute,
    Relative,
}

/// Chart labels. Empty strings are treated as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Labels {
    pub title: String,
    pub subtitle: String,
    pub source_desc: String,
    pub note: String,
}

impl Labels {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = subtitle.into();
        self
    }

    #[must_use]
    pub fn with_source_desc(mut self, source_desc: impl Into<String>) -> Self {
        self.source_desc = source_desc.into();
        self
    }

    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Viewer controls. `None` leaves the hosted viewer's default in place and is
/// omitted from the exported document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionOptions {
    pub allow_relative: Option<bool>,
    pub scale_control: Option<bool>,
    pub entity_control: Option<bool>,
    pub enable_map: Option<bool>,
}

impl InteractionOptions {
    /// Flag names accepted by `Chart::interact_named`, in document order.
    pub const FLAG_NAMES: [&'static str; 4] =
        ["allow_relative", "scale_control", "entity_control", "enable_map"];

    #[must_use]
    pub fn with_allow_relative(mut self, enabled: bool) -> Self {
        self.allow_relative = Some(enabled);
        self
    }

    #[must_use]
    pub fn with_scale_control(mut self, enabled: bool) -> Self {
        self.scale_control = Some(enabled);
        self
    }

    #[must_use]
    pub fn with_entity_control(mut self, enabled: bool) -> Self {
        self.entity_control = Some(enabled);
        self
    }

    #[must_use]
    pub fn with_enable_map(mut self, enabled: bool) -> Self {
        self.enable_map = Some(enabled);
        self
    }

    /// Overlays the flags set in `other` onto `self`.
    #[must_use]
    pub fn merged(self, other: Self) -> Self {
        Self {
            allow_relative: other.allow_relative.or(self.allow_relative),
            scale_control: other.scale_control.or(self.scale_control),
            entity_control: other.entity_control.or(self.entity_control),
            enable_map: other.enable_map.or(self.enable_map),
        }
    }

    /// Set flags keyed by their camelCase document name.
    #[must_use]
    pub fn to_flag_map(self) -> IndexMap<String, bool> {
        [
            ("allowRelative", self.allow_relative),
            ("scaleControl", self.scale_control),
            ("entityControl", self.entity_control),
            ("enableMap", self.enable_map),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.map(|value| (name.to_owned(), value)))
        .collect()
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self == Self::default()
    }
}

/// One end of a selected timespan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TimeBound {
    Year(i32),
    Date(NaiveDate),
}

/// Initial viewer selection: which color-role entities are shown and the
/// visible time window.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub entities: Option<Vec<String>>,
    pub min_time: Option<TimeBound>,
    pub max_time: Option<TimeBound>,
}

impl Selection {
    #[must_use]
    pub fn entities<S: Into<String>>(entities: impl IntoIterator<Item = S>) -> Self {
        Self {
            entities: Some(entities.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_timespan(mut self, min_time: Option<TimeBound>, max_time: Option<TimeBound>) -> Self {
        self.min_time = min_time;
        self.max_time = max_time;
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_none() && self.min_time.is_none() && self.max_time.is_none()
    }
}

/// Mutable builder state accumulated by the fluent calls.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub mark: MarkKind,
    pub mark_options: MarkOptions,
    pub encoding: IndexMap<Role, String>,
    pub labels: Labels,
    pub interaction: InteractionOptions,
    pub selection: Selection,
}

impl ChartSpec {
    #[must_use]
    pub fn binding(&self, role: Role) -> Option<&str> {
        self.encoding.get(&role).map(String::as_str)
    }
}
