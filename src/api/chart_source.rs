//! Source generation for builder chains.
//!
//! `Chart::to_source` prints the Rust calls that rebuild the current chart
//! state, which is handy for sharing a chart tuned in a notebook. Sections left
//! at their defaults are omitted.

use std::fmt::Write as _;

use crate::core::MarkKind;

use super::{Chart, ChartSpec, GrapherConfig, NullPolicy, TimeBound};

const INDENT: &str = "    ";

impl Chart<'_> {
    /// Renders the builder chain that recreates this chart over a table bound to
    /// `data`.
    #[must_use]
    pub fn to_source(&self) -> String {
        spec_to_source(self.spec(), self.config())
    }
}

/// A non-default `config` is emitted as a leading `with_config(..)?` call.
#[must_use]
pub fn spec_to_source(spec: &ChartSpec, config: &GrapherConfig) -> String {
    let mut out = String::from("Chart::new(&data)");
    if let Some(call) = config_call(config) {
        push_call(&mut out, &call);
    }
    push_call(&mut out, &mark_call(spec));
    if spec.mark_options.relative {
        push_call(&mut out, "relative(true)");
    }
    if let Some(call) = encode_call(spec) {
        push_call(&mut out, &call);
    }
    if let Some(call) = labels_call(spec) {
        push_call(&mut out, &call);
    }
    if let Some(call) = interaction_call(spec) {
        push_call(&mut out, &call);
    }
    if let Some(call) = selection_call(spec) {
        push_call(&mut out, &call);
    }
    out
}

fn push_call(out: &mut String, call: &str) {
    out.push('\n');
    out.push_str(INDENT);
    out.push('.');
    out.push_str(call);
}

fn config_call(config: &GrapherConfig) -> Option<String> {
    let defaults = GrapherConfig::default();
    if *config == defaults {
        return None;
    }
    let mut call = "with_config(GrapherConfig::default()".to_owned();
    if config.null_policy != defaults.null_policy {
        let policy = match config.null_policy {
            NullPolicy::KeepNull => "KeepNull",
            NullPolicy::DropRow => "DropRow",
        };
        let _ = write!(call, ".with_null_policy(NullPolicy::{policy})");
    }
    if config.temporal_name_hints != defaults.temporal_name_hints {
        if config.temporal_name_hints.is_empty() {
            call.push_str(".with_temporal_name_hints(Vec::<String>::new())");
        } else {
            let hints: Vec<String> = config
                .temporal_name_hints
                .iter()
                .map(|hint| format!("{hint:?}"))
                .collect();
            let _ = write!(call, ".with_temporal_name_hints([{}])", hints.join(", "));
        }
    }
    if config.embed.site_url != defaults.embed.site_url {
        let _ = write!(call, ".with_site_url({:?})", config.embed.site_url);
    }
    if config.embed.height_px != defaults.embed.height_px {
        let _ = write!(call, ".with_embed_height_px({})", config.embed.height_px);
    }
    call.push_str(")?");
    Some(call)
}

fn mark_call(spec: &ChartSpec) -> String {
    match (spec.mark, spec.mark_options.stacked) {
        (MarkKind::Bar, true) => "mark_bar_stacked()".to_owned(),
        (MarkKind::Bar, false) => "mark_bar()".to_owned(),
        (MarkKind::Line, _) => "mark_line()".to_owned(),
    }
}

fn encode_call(spec: &ChartSpec) -> Option<String> {
    if spec.encoding.is_empty() {
        return None;
    }
    let mut roles: Vec<_> = spec.encoding.iter().collect();
    roles.sort_by_key(|(role, _)| **role);
    let pairs: Vec<String> = roles
        .into_iter()
        .map(|(role, column)| format!("(Role::{role:?}, {column:?})"))
        .collect();
    Some(format!("encode([{}])", pairs.join(", ")))
}

fn labels_call(spec: &ChartSpec) -> Option<String> {
    let labels = &spec.labels;
    if labels.is_empty() {
        return None;
    }
    if labels.source_desc.is_empty() && labels.note.is_empty() {
        let subtitle = if labels.subtitle.is_empty() {
            "None".to_owned()
        } else {
            format!("Some({:?})", labels.subtitle)
        };
        return Some(format!("label({:?}, {subtitle})", labels.title));
    }

    let mut call = format!("with_labels(Labels::new({:?})", labels.title);
    for (method, value) in [
        ("with_subtitle", &labels.subtitle),
        ("with_source_desc", &labels.source_desc),
        ("with_note", &labels.note),
    ] {
        if !value.is_empty() {
            let _ = write!(call, ".{method}({value:?})");
        }
    }
    call.push(')');
    Some(call)
}

fn interaction_call(spec: &ChartSpec) -> Option<String> {
    let options = spec.interaction;
    if options.is_empty() {
        return None;
    }
    let mut call = "interact(InteractionOptions::default()".to_owned();
    for (method, value) in [
        ("with_allow_relative", options.allow_relative),
        ("with_scale_control", options.scale_control),
        ("with_entity_control", options.entity_control),
        ("with_enable_map", options.enable_map),
    ] {
        if let Some(value) = value {
            let _ = write!(call, ".{method}({value})");
        }
    }
    call.push(')');
    Some(call)
}

fn selection_call(spec: &ChartSpec) -> Option<String> {
    let selection = &spec.selection;
    if selection.is_empty() {
        return None;
    }
    let mut call = match &selection.entities {
        Some(entities) => {
            let names: Vec<String> = entities.iter().map(|name| format!("{name:?}")).collect();
            format!("select(Selection::entities([{}])", names.join(", "))
        }
        None => "select(Selection::default()".to_owned(),
    };
    if selection.min_time.is_some() || selection.max_time.is_some() {
        let _ = write!(
            call,
            ".with_timespan({}, {})",
            bound_source(selection.min_time),
            bound_source(selection.max_time)
        );
    }
    call.push_str(")?");
    Some(call)
}

fn bound_source(bound: Option<TimeBound>) -> String {
    match bound {
        None => "None".to_owned(),
        Some(TimeBound::Year(year)) => format!("Some(TimeBound::Year({year}))"),
        Some(TimeBound::Date(date)) => {
            format!("Some(TimeBound::Date(\"{}\".parse()?))", date.format("%Y-%m-%d"))
        }
    }
}
