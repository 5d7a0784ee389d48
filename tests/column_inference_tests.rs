use chrono::NaiveDate;
use grapher_rs::api::GrapherConfig;
use grapher_rs::core::{
    Column, ColumnType, TimeGranularity, Value, infer_column_profile, is_missing,
};

fn default_hints() -> Vec<String> {
    GrapherConfig::default().temporal_name_hints
}

#[test]
fn integer_year_column_with_hint_is_temporal_year() {
    let column = Column::new("year", 2000..=2010);
    let profile = infer_column_profile(&column, &default_hints());
    assert_eq!(profile.column_type, ColumnType::Temporal);
    assert_eq!(profile.granularity, Some(TimeGranularity::Year));
    assert!(profile.is_year());
}

#[test]
fn hint_matches_case_insensitive_name_tokens() {
    for name in ["Year", "start_year", "report-date", "Fiscal Year"] {
        let column = Column::new(name, [1990, 1991]);
        let profile = infer_column_profile(&column, &default_hints());
        assert_eq!(profile.column_type, ColumnType::Temporal, "column {name}");
    }
}

#[test]
fn small_integers_without_hint_stay_numeric() {
    let column = Column::new("population", [2000, 2001, 2002]);
    let profile = infer_column_profile(&column, &default_hints());
    assert_eq!(profile.column_type, ColumnType::Numeric);
    assert_eq!(profile.granularity, None);
}

#[test]
fn duration_and_day_number_columns_stay_numeric() {
    for (name, values) in [
        ("response_time", [120, 95, 240]),
        ("time_spent", [30, 45, 60]),
        ("day", [1, 2, 3]),
        ("Day of Month", [28, 29, 30]),
    ] {
        let column = Column::new(name, values);
        let profile = infer_column_profile(&column, &default_hints());
        assert_eq!(profile.column_type, ColumnType::Numeric, "column {name}");
        assert_eq!(profile.granularity, None, "column {name}");
    }
}

#[test]
fn whole_number_floats_and_integer_text_count_as_years() {
    let floats = Column::new("year", [2000.0, 2001.0]);
    assert!(infer_column_profile(&floats, &default_hints()).is_year());

    let text = Column::new("year", ["1990", "1991"]);
    assert!(infer_column_profile(&text, &default_hints()).is_year());
}

#[test]
fn hinted_column_outside_year_range_stays_numeric() {
    let column = Column::new("year", [2000, 123_456]);
    let profile = infer_column_profile(&column, &default_hints());
    assert_eq!(profile.column_type, ColumnType::Numeric);

    let fractional = Column::new("year", [2000.5, 2001.0]);
    let profile = infer_column_profile(&fractional, &default_hints());
    assert_eq!(profile.column_type, ColumnType::Numeric);
}

#[test]
fn custom_hints_replace_defaults() {
    let column = Column::new("anno", [2001, 2002]);
    let profile = infer_column_profile(&column, &["anno".to_owned()]);
    assert_eq!(profile.column_type, ColumnType::Temporal);

    let column = Column::new("year", [2001, 2002]);
    let profile = infer_column_profile(&column, &["anno".to_owned()]);
    assert_eq!(profile.column_type, ColumnType::Numeric);
}

#[test]
fn numeric_text_is_numeric() {
    let column = Column::new("value", ["1.5", "2", " 3.25 "]);
    let profile = infer_column_profile(&column, &default_hints());
    assert_eq!(profile.column_type, ColumnType::Numeric);
}

#[test]
fn dates_and_iso_text_are_temporal_day() {
    let day = NaiveDate::from_ymd_opt(2021, 3, 1).expect("date");
    let column = Column::new("when", [Value::Date(day), Value::from("2021-03-02"), Value::Null]);
    let profile = infer_column_profile(&column, &default_hints());
    assert_eq!(profile.column_type, ColumnType::Temporal);
    assert_eq!(profile.granularity, Some(TimeGranularity::Day));
    assert_eq!(profile.null_count, 1);
}

#[test]
fn mixed_and_free_text_columns_are_categorical() {
    let mixed = Column::new("mixed", [Value::from(1), Value::from("two")]);
    assert_eq!(
        infer_column_profile(&mixed, &default_hints()).column_type,
        ColumnType::Categorical
    );

    let text = Column::new("country", ["Chile", "Peru"]);
    assert_eq!(
        infer_column_profile(&text, &default_hints()).column_type,
        ColumnType::Categorical
    );
}

#[test]
fn nulls_and_non_finite_floats_are_ignored_but_counted() {
    let column = Column::new("value", [Some(1.0), None, Some(f64::NAN), Some(4.0)]);
    let profile = infer_column_profile(&column, &default_hints());
    assert_eq!(profile.column_type, ColumnType::Numeric);
    assert_eq!(profile.null_count, 2);
    assert!(is_missing(&Value::Float(f64::INFINITY)));
    assert!(!is_missing(&Value::Float(0.0)));
}

#[test]
fn empty_and_all_null_columns_are_numeric() {
    let empty = Column::new("value", Vec::<f64>::new());
    assert_eq!(
        infer_column_profile(&empty, &default_hints()).column_type,
        ColumnType::Numeric
    );

    let nulls = Column::new("year", [Option::<i64>::None, None]);
    let profile = infer_column_profile(&nulls, &default_hints());
    assert_eq!(profile.column_type, ColumnType::Numeric);
    assert_eq!(profile.null_count, 2);
}
