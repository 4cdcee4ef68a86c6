use crate::database::row::{
    decimal_value, float_value, format_date, format_time, format_timestamp, format_timestamptz,
    unsupported_type,
};
use crate::database::DbErrorKind;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde_json::{json, Value};
use std::str::FromStr;

#[test]
fn test_dates_are_iso() {
    let date = NaiveDate::from_ymd_opt(2024, 3, 8).unwrap();
    assert_eq!(format_date(date), "2024-03-08");
}

#[test]
fn test_timestamps_drop_zero_fraction() {
    let whole = NaiveDateTime::parse_from_str("2019-01-01 08:30:00", "%Y-%m-%d %H:%M:%S").unwrap();
    assert_eq!(format_timestamp(whole), "2019-01-01T08:30:00");

    let fractional =
        NaiveDateTime::parse_from_str("2019-01-01 08:30:00.25", "%Y-%m-%d %H:%M:%S%.f").unwrap();
    assert_eq!(format_timestamp(fractional), "2019-01-01T08:30:00.250000");
}

#[test]
fn test_numerics_become_json_numbers() {
    assert_eq!(decimal_value(Decimal::from_str("150.50").unwrap()), json!(150.5));
    assert_eq!(decimal_value(Decimal::from(1200)), json!(1200));
    assert_eq!(decimal_value(Decimal::from_str("-2.5").unwrap()), json!(-2.5));
}

#[test]
fn test_non_finite_floats_fall_back_to_text() {
    assert_eq!(float_value(2.5), json!(2.5));
    assert_eq!(float_value(f64::NAN), Value::String("NaN".into()));
    assert_eq!(float_value(f64::INFINITY), Value::String("inf".into()));
}

#[test]
fn test_times_drop_zero_fraction() {
    let whole = NaiveTime::from_hms_opt(8, 30, 0).unwrap();
    assert_eq!(format_time(whole), "08:30:00");

    let fractional = NaiveTime::from_hms_micro_opt(8, 30, 0, 500_000).unwrap();
    assert_eq!(format_time(fractional), "08:30:00.500000");
}

#[test]
fn test_timestamptz_carries_utc_offset() {
    let timestamp: DateTime<Utc> = DateTime::parse_from_rfc3339("2024-03-08T10:00:00-03:00")
        .unwrap()
        .with_timezone(&Utc);

    assert_eq!(format_timestamptz(timestamp), "2024-03-08T13:00:00+00:00");
}

// e.g. INTERVAL: refused outright instead of reading wire bytes as text
#[test]
fn test_unlisted_types_are_decode_errors() {
    let err = unsupported_type("INTERVAL");

    assert!(matches!(err, sqlx::Error::Decode(_)));
    assert!(err.to_string().contains("INTERVAL"));
    assert_eq!(DbErrorKind::classify(&err), DbErrorKind::Decode);
}
