use tracing::debug;

use crate::core::{DataTable, MarkKind, Role};
use crate::error::ChartResult;

use super::config_document::{FieldType, SelectionConfig};
use super::json_contract::CONFIG_DOCUMENT_JSON_SCHEMA_V1;
use super::validation::{
    parse_interaction_flags, validate_mark_options, validate_selection,
    validate_selection_timespan,
};
use super::{
    ChartSpec, ColumnBindings, ConfigDocument, GrapherConfig, InteractionOptions, Labels,
    MarkOptions, Selection, resolve_encodings, serialize_rows,
};

/// Fluent chart builder over a borrowed tidy table.
///
/// Calls accumulate into a [`ChartSpec`] and may come in any order; column
/// names are only checked by [`Chart::validate`] / [`Chart::export`]. Calls that
/// take options the viewer cannot honour (`stacked` on a line, unknown flag
/// names) fail immediately instead.
///
/// ```
/// use grapher_rs::api::Chart;
/// use grapher_rs::core::{Column, DataTable, Role};
///
/// let table = DataTable::new([
///     Column::new("year", [2019, 2020, 2021]),
///     Column::new("gdp", [1.5, 1.7, 1.6]),
/// ])?;
/// let document = Chart::new(&table)
///     .mark_line()
///     .encode([(Role::X, "year"), (Role::Y, "gdp")])
///     .label("GDP", None)
///     .export()?;
/// assert_eq!(document.data.len(), 3);
/// # Ok::<(), grapher_rs::ChartError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Chart<'a> {
    table: &'a DataTable,
    spec: ChartSpec,
    config: GrapherConfig,
}

impl<'a> Chart<'a> {
    #[must_use]
    pub fn new(table: &'a DataTable) -> Self {
        Self {
            table,
            spec: ChartSpec::default(),
            config: GrapherConfig::default(),
        }
    }

    /// Replaces the crate configuration used for inference, serialization and
    /// embedding.
    pub fn with_config(mut self, config: GrapherConfig) -> ChartResult<Self> {
        self.config = config.validate()?;
        Ok(self)
    }

    /// Sets the mark kind. Options that do not apply to the new kind are reset.
    pub fn mark(mut self, kind: MarkKind, options: MarkOptions) -> ChartResult<Self> {
        let options = validate_mark_options(kind, options)?;
        self.spec.mark = kind;
        self.spec.mark_options = options;
        Ok(self)
    }

    /// Switching marks keeps `relative`, which applies to every mark kind.
    #[must_use]
    pub fn mark_line(mut self) -> Self {
        self.spec.mark = MarkKind::Line;
        self.spec.mark_options.stacked = false;
        self
    }

    #[must_use]
    pub fn mark_bar(mut self) -> Self {
        self.spec.mark = MarkKind::Bar;
        self.spec.mark_options.stacked = false;
        self
    }

    #[must_use]
    pub fn mark_bar_stacked(mut self) -> Self {
        self.spec.mark = MarkKind::Bar;
        self.spec.mark_options.stacked = true;
        self
    }

    /// Opens the chart in relative mode (share of total, or relative change
    /// for lines). Independent of `interact`'s `allow_relative` toggle.
    #[must_use]
    pub fn relative(mut self, enabled: bool) -> Self {
        self.spec.mark_options.relative = enabled;
        self
    }

    /// Merges role bindings; a later binding for the same role wins.
    #[must_use]
    pub fn encode<S: Into<String>>(mut self, bindings: impl IntoIterator<Item = (Role, S)>) -> Self {
        for (role, column) in bindings {
            self.spec.encoding.insert(role, column.into());
        }
        self
    }

    /// Same as [`Chart::encode`] with role names (`x`, `y`, `c`/`color`).
    pub fn encode_named<'n, S: Into<String>>(
        self,
        bindings: impl IntoIterator<Item = (&'n str, S)>,
    ) -> ChartResult<Self> {
        let mut parsed = Vec::new();
        for (role, column) in bindings {
            parsed.push((role.parse::<Role>()?, column));
        }
        Ok(self.encode(parsed))
    }

    /// Sets title and subtitle. Passing `None` clears the subtitle.
    #[must_use]
    pub fn label(mut self, title: impl Into<String>, subtitle: Option<&str>) -> Self {
        self.spec.labels.title = title.into();
        self.spec.labels.subtitle = subtitle.unwrap_or_default().to_owned();
        self
    }

    /// Replaces every label field, including source description and note.
    #[must_use]
    pub fn with_labels(mut self, labels: Labels) -> Self {
        self.spec.labels = labels;
        self
    }

    /// Overlays the set flags of `options` onto the current interaction state.
    #[must_use]
    pub fn interact(mut self, options: InteractionOptions) -> Self {
        self.spec.interaction = self.spec.interaction.merged(options);
        self
    }

    /// Named-flag variant of [`Chart::interact`]; unknown names are rejected.
    pub fn interact_named<'n>(
        self,
        flags: impl IntoIterator<Item = (&'n str, bool)>,
    ) -> ChartResult<Self> {
        let options = parse_interaction_flags(flags)?;
        Ok(self.interact(options))
    }

    /// Sets the initial entity/time selection. Timespan ordering is checked
    /// here; entity names and granularity are checked at export.
    pub fn select(mut self, selection: Selection) -> ChartResult<Self> {
        validate_selection_timespan(&selection)?;
        self.spec.selection = selection;
        Ok(self)
    }

    #[must_use]
    pub fn spec(&self) -> &ChartSpec {
        &self.spec
    }

    #[must_use]
    pub fn table(&self) -> &'a DataTable {
        self.table
    }

    #[must_use]
    pub fn config(&self) -> &GrapherConfig {
        &self.config
    }

    /// First export phase: resolves every encoding against the table.
    pub fn validate(&self) -> ChartResult<ColumnBindings> {
        let bindings = resolve_encodings(
            self.spec.mark,
            &self.spec.encoding,
            self.table,
            &self.config.temporal_name_hints,
        )?;
        validate_selection(&self.spec.selection, &bindings, self.table)?;
        Ok(bindings)
    }

    /// Validates and serializes into a fresh [`ConfigDocument`].
    ///
    /// Never mutates the builder; repeated exports of the same state yield equal
    /// documents.
    pub fn export(&self) -> ChartResult<ConfigDocument> {
        debug!(
            mark = %self.spec.mark,
            roles = self.spec.encoding.len(),
            rows = self.table.row_count(),
            "exporting chart config"
        );
        let bindings = self.validate()?;
        let data = serialize_rows(self.table, &bindings, self.config.null_policy)?;

        let mut field_types = indexmap::IndexMap::new();
        for binding in &bindings {
            field_types
                .entry(binding.column.clone())
                .or_insert(FieldType {
                    column_type: binding.column_type,
                    granularity: binding.granularity,
                });
        }
        let time_type = bindings
            .iter()
            .find(|binding| binding.role == Role::X)
            .and_then(|binding| binding.granularity);

        let labels = &self.spec.labels;
        let selection = &self.spec.selection;
        let document = ConfigDocument {
            schema_version: CONFIG_DOCUMENT_JSON_SCHEMA_V1,
            mark: self.spec.mark,
            stacked: (self.spec.mark == MarkKind::Bar).then_some(self.spec.mark_options.stacked),
            stack_mode: self.spec.mark_options.stack_mode(),
            encoding: bindings
                .iter()
                .map(|binding| (binding.role, binding.column.clone()))
                .collect(),
            field_types,
            time_type,
            title: non_empty(&labels.title),
            subtitle: non_empty(&labels.subtitle),
            source_desc: non_empty(&labels.source_desc),
            note: non_empty(&labels.note),
            interaction: self.spec.interaction.to_flag_map(),
            selection: SelectionConfig {
                entities: selection.entities.clone(),
                min_time: selection.min_time,
                max_time: selection.max_time,
            },
            data,
        };
        debug!(
            mark = %document.mark,
            rows = document.data.len(),
            "exported chart config"
        );
        Ok(document)
    }
}

fn non_empty(text: &str) -> Option<String> {
    (!text.is_empty()).then(|| text.to_owned())
}
