use grapher_rs::api::{
    Chart, GrapherConfig, InteractionOptions, Labels, NullPolicy, Selection, TimeBound,
};
use grapher_rs::core::{Column, DataTable, Role};

fn table() -> DataTable {
    DataTable::new([
        Column::new("year", [2015, 2016]),
        Column::new("value", [1.9, 2.0]),
        Column::new("entity", ["Lars", "Lars"]),
    ])
    .expect("valid table")
}

#[test]
fn minimal_chart_source() {
    let table = table();
    let source = Chart::new(&table)
        .encode([(Role::Y, "value"), (Role::X, "year")])
        .to_source();
    let expected = r#"
Chart::new(&data)
    .mark_line()
    .encode([(Role::X, "year"), (Role::Y, "value")])
"#
    .trim();
    assert_eq!(source, expected);
}

#[test]
fn chart_source_includes_labels_interaction_and_selection() {
    let table = table();
    let source = Chart::new(&table)
        .mark_bar_stacked()
        .encode([(Role::X, "value"), (Role::Y, "entity")])
        .with_labels(
            Labels::new("Lars does not get taller")
                .with_source_desc("An elusive \"source\"")
                .with_note("Perhaps not reliable"),
        )
        .interact(
            InteractionOptions::default()
                .with_entity_control(true)
                .with_allow_relative(false),
        )
        .select(
            Selection::entities(["Lars"]).with_timespan(Some(TimeBound::Year(2015)), None),
        )
        .expect("selection")
        .to_source();

    let expected = r#"
Chart::new(&data)
    .mark_bar_stacked()
    .encode([(Role::X, "value"), (Role::Y, "entity")])
    .with_labels(Labels::new("Lars does not get taller").with_source_desc("An elusive \"source\"").with_note("Perhaps not reliable"))
    .interact(InteractionOptions::default().with_allow_relative(false).with_entity_control(true))
    .select(Selection::entities(["Lars"]).with_timespan(Some(TimeBound::Year(2015)), None))?
"#
    .trim();
    assert_eq!(source, expected);
}

#[test]
fn title_and_subtitle_use_label_shorthand() {
    let table = table();
    let source = Chart::new(&table).label("Title", Some("Sub")).to_source();
    assert!(source.ends_with(".label(\"Title\", Some(\"Sub\"))"));

    let date = "2021-05-03".parse().expect("date");
    let source = Chart::new(&table)
        .select(Selection::default().with_timespan(None, Some(TimeBound::Date(date))))
        .expect("selection")
        .to_source();
    assert!(source.ends_with(
        ".select(Selection::default().with_timespan(None, Some(TimeBound::Date(\"2021-05-03\".parse()?))))?"
    ));
}

#[test]
fn relative_mode_is_emitted_after_the_mark() {
    let table = table();
    let source = Chart::new(&table)
        .relative(true)
        .mark_bar_stacked()
        .encode([(Role::X, "entity"), (Role::Y, "value")])
        .to_source();
    let expected = r#"
Chart::new(&data)
    .mark_bar_stacked()
    .relative(true)
    .encode([(Role::X, "entity"), (Role::Y, "value")])
"#
    .trim();
    assert_eq!(source, expected);
}

#[test]
fn non_default_config_is_emitted_first() {
    let table = table();
    let config = GrapherConfig::default()
        .with_null_policy(NullPolicy::DropRow)
        .with_temporal_name_hints(["anno"])
        .with_embed_height_px(420);
    let source = Chart::new(&table)
        .with_config(config)
        .expect("valid config")
        .encode([(Role::X, "year"), (Role::Y, "value")])
        .to_source();
    let expected = r#"
Chart::new(&data)
    .with_config(GrapherConfig::default().with_null_policy(NullPolicy::DropRow).with_temporal_name_hints(["anno"]).with_embed_height_px(420))?
    .mark_line()
    .encode([(Role::X, "year"), (Role::Y, "value")])
"#
    .trim();
    assert_eq!(source, expected);

    let default_source = Chart::new(&table)
        .with_config(GrapherConfig::default())
        .expect("default config")
        .to_source();
    assert!(!default_source.contains("with_config"));
}
