use grapher_rs::ChartError;
use grapher_rs::api::{
    CONFIG_DOCUMENT_JSON_SCHEMA_V1, Chart, ConfigDocument, InteractionOptions, Selection,
    TimeBound,
};
use grapher_rs::core::{Column, ColumnType, DataTable, Role, TimeGranularity};
use serde_json::json;

fn table() -> DataTable {
    DataTable::new([
        Column::new("year", [2000, 2001, 2002]),
        Column::new("value", [1.25, 2.5, 3.75]),
        Column::new("entity", ["Chile", "Peru", "Chile"]),
    ])
    .expect("valid table")
}

fn document(table: &DataTable) -> ConfigDocument {
    Chart::new(table)
        .mark_line()
        .encode([(Role::X, "year"), (Role::Y, "value"), (Role::Color, "entity")])
        .label("Values", Some("by entity"))
        .interact(InteractionOptions::default().with_entity_control(true))
        .select(
            Selection::entities(["Chile"])
                .with_timespan(Some(TimeBound::Year(2000)), Some(TimeBound::Year(2001))),
        )
        .expect("ordered timespan")
        .export()
        .expect("export")
}

#[test]
fn document_json_has_expected_shape() {
    let table = table();
    let value = document(&table).to_json_value().expect("json");

    assert_eq!(value["schemaVersion"], json!(CONFIG_DOCUMENT_JSON_SCHEMA_V1));
    assert_eq!(value["mark"], json!("line"));
    assert_eq!(value["stackMode"], json!("absolute"));
    assert_eq!(value["timeType"], json!("year"));
    assert_eq!(value["title"], json!("Values"));
    assert_eq!(value["subtitle"], json!("by entity"));
    assert_eq!(value["interaction"], json!({"entityControl": true}));
    assert_eq!(
        value["selection"],
        json!({"entities": ["Chile"], "minTime": 2000, "maxTime": 2001})
    );
    assert_eq!(
        value["fieldTypes"],
        json!({
            "year": {"type": "temporal", "granularity": "year"},
            "value": {"type": "numeric"},
            "entity": {"type": "categorical"}
        })
    );
    assert_eq!(value["data"][0], json!({"year": 2000, "value": 1.25, "entity": "Chile"}));
    assert!(value.get("sourceDesc").is_none());
    assert!(value.get("stacked").is_none());
}

#[test]
fn document_round_trips_through_json() {
    let table = table();
    let original = document(&table);
    let json = original.to_json_pretty().expect("pretty json");
    let parsed = ConfigDocument::from_json_str(&json).expect("parse");
    assert_eq!(parsed, original);
    assert_eq!(
        parsed.field_types["year"].column_type,
        ColumnType::Temporal
    );
    assert_eq!(parsed.time_type, Some(TimeGranularity::Year));
}

#[test]
fn serialization_is_byte_identical_across_exports() {
    let table = table();
    let first = document(&table).to_json_string().expect("json");
    let second = document(&table).to_json_string().expect("json");
    assert_eq!(first, second);
}

#[test]
fn unsupported_schema_version_is_rejected() {
    let table = table();
    let mut value = document(&table).to_json_value().expect("json");
    value["schemaVersion"] = json!(99);
    let err = ConfigDocument::from_json_str(&value.to_string()).expect_err("future schema");
    assert!(matches!(err, ChartError::InvalidData(message) if message.contains("99")));
}

#[test]
fn missing_schema_version_is_rejected() {
    let err = ConfigDocument::from_json_str(r#"{"mark":"line"}"#).expect_err("no version");
    assert!(matches!(err, ChartError::InvalidData(_)));

    let err = ConfigDocument::from_json_str("not json").expect_err("garbage");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn date_selection_serializes_as_iso_strings() {
    let table = DataTable::new([
        Column::new("date", ["2021-01-01", "2021-01-02", "2021-01-03"]),
        Column::new("value", [1, 2, 3]),
    ])
    .expect("table");
    let min = "2021-01-02".parse().expect("date");
    let document = Chart::new(&table)
        .encode([(Role::X, "date"), (Role::Y, "value")])
        .select(Selection::default().with_timespan(Some(TimeBound::Date(min)), None))
        .expect("selection")
        .export()
        .expect("export");
    let value = document.to_json_value().expect("json");
    assert_eq!(value["timeType"], json!("day"));
    assert_eq!(value["selection"], json!({"minTime": "2021-01-02"}));
}

#[test]
fn selection_is_validated_against_bindings() {
    let table = table();

    let err = Chart::new(&table)
        .encode([(Role::X, "year"), (Role::Y, "value")])
        .select(Selection::entities(["Chile"]))
        .expect("stored")
        .export()
        .expect_err("no color role");
    assert!(matches!(err, ChartError::InvalidOption(_)));

    let err = Chart::new(&table)
        .encode([(Role::X, "year"), (Role::Y, "value"), (Role::Color, "entity")])
        .select(Selection::entities(["Atlantis"]))
        .expect("stored")
        .export()
        .expect_err("unknown entity");
    assert!(matches!(err, ChartError::InvalidOption(message) if message.contains("Atlantis")));

    let date = "2001-01-01".parse().expect("date");
    let err = Chart::new(&table)
        .encode([(Role::X, "year"), (Role::Y, "value")])
        .select(Selection::default().with_timespan(Some(TimeBound::Date(date)), None))
        .expect("stored")
        .export()
        .expect_err("date bound on year axis");
    assert!(matches!(err, ChartError::InvalidOption(_)));

    let err = Chart::new(&table)
        .select(
            Selection::default()
                .with_timespan(Some(TimeBound::Year(2005)), Some(TimeBound::Year(2001))),
        )
        .expect_err("reversed timespan");
    assert!(matches!(err, ChartError::InvalidOption(_)));
}
