//! Turns untyped result rows into JSON objects.
//!
//! The query's column types are owned by an external schema, so decoding goes
//! by the type name Postgres reports for each column instead of a fixed struct.

use crate::domain::DadosRow;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, Timelike, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde_json::{Number, Value};
use sqlx::postgres::PgRow;
use sqlx::types::Uuid;
use sqlx::{Column, Row, TypeInfo, ValueRef};

pub fn row_to_json(row: &PgRow) -> Result<DadosRow, sqlx::Error> {
    let mut object = DadosRow::with_capacity(row.len());

    for column in row.columns() {
        let value = column_to_json(row, column.ordinal(), column.type_info().name())?;
        object.insert(column.name().to_string(), value);
    }

    Ok(object)
}

fn column_to_json(row: &PgRow, index: usize, type_name: &str) -> Result<Value, sqlx::Error> {
    if row.try_get_raw(index)?.is_null() {
        return Ok(Value::Null);
    }

    let value = match type_name {
        "BOOL" => Value::Bool(row.try_get::<bool, _>(index)?),
        "INT2" => Value::from(row.try_get::<i16, _>(index)?),
        "INT4" => Value::from(row.try_get::<i32, _>(index)?),
        "INT8" => Value::from(row.try_get::<i64, _>(index)?),
        "FLOAT4" => float_value(f64::from(row.try_get::<f32, _>(index)?)),
        "FLOAT8" => float_value(row.try_get::<f64, _>(index)?),
        "NUMERIC" => decimal_value(row.try_get::<Decimal, _>(index)?),
        "DATE" => Value::String(format_date(row.try_get::<NaiveDate, _>(index)?)),
        "TIMESTAMP" => Value::String(format_timestamp(row.try_get::<NaiveDateTime, _>(index)?)),
        "TIMESTAMPTZ" => Value::String(format_timestamptz(row.try_get::<DateTime<Utc>, _>(index)?)),
        "TIME" => Value::String(format_time(row.try_get::<NaiveTime, _>(index)?)),
        "UUID" => Value::String(row.try_get::<Uuid, _>(index)?.to_string()),
        "JSON" | "JSONB" => row.try_get::<Value, _>(index)?,
        "TEXT" | "VARCHAR" | "BPCHAR" | "NAME" | "UNKNOWN" | "CITEXT" => {
            Value::String(row.try_get::<String, _>(index)?)
        }
        _ => return Err(unsupported_type(type_name)),
    };

    Ok(value)
}

pub fn float_value(value: f64) -> Value {
    match Number::from_f64(value) {
        Some(number) => Value::Number(number),
        // NaN and the infinities have no JSON number form
        None => Value::String(value.to_string()),
    }
}

pub fn decimal_value(value: Decimal) -> Value {
    if value.scale() == 0 {
        if let Some(int) = value.to_i64() {
            return Value::from(int);
        }
    }

    match value.to_f64().and_then(Number::from_f64) {
        Some(number) => Value::Number(number),
        None => Value::String(value.to_string()),
    }
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn format_timestamp(timestamp: NaiveDateTime) -> String {
    if timestamp.nanosecond() == 0 {
        timestamp.format("%Y-%m-%dT%H:%M:%S").to_string()
    } else {
        timestamp.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
    }
}

// the binary wire format gives no safe text fallback for other types
pub fn unsupported_type(type_name: &str) -> sqlx::Error {
    sqlx::Error::Decode(format!("unsupported column type {}", type_name).into())
}

pub fn format_time(time: NaiveTime) -> String {
    if time.nanosecond() == 0 {
        time.format("%H:%M:%S").to_string()
    } else {
        time.format("%H:%M:%S%.6f").to_string()
    }
}

// binary results always arrive in UTC, the session time zone never reaches us
pub fn format_timestamptz(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::AutoSi, false)
}
