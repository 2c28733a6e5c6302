//! Tolerant unwrapping of the coaching API's response envelope.
//!
//! The API wraps list responses inconsistently: some endpoints return
//! `{"data": [...]}`, others `{"data": {"data": [...]}}` or
//! `{"data": {"rows": [...]}}`. Instead of re-implementing defensive
//! unwrapping at every call site, the body is parsed exactly once into
//! [`Envelope`] — a tagged union of the known shapes plus an explicit
//! `Unrecognized` variant — and everything downstream consumes only the
//! normalized row sequence.
//!
//! Parsing never fails: a missing `data` field, a scalar where a sequence
//! was expected, or any other malformed body degrades to `Unrecognized`,
//! whose row sequence is empty. Callers decide how loudly to report that
//! (the pages log a console warning and render the empty state).

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// The known nesting shapes of a list response body.
#[derive(Debug, Clone, PartialEq)]
pub enum Envelope {
    /// `{"data": [...]}`
    Direct(Vec<Value>),
    /// `{"data": {"data": [...]}}`
    NestedData(Vec<Value>),
    /// `{"data": {"rows": [...]}}`
    NestedRows(Vec<Value>),
    /// Anything else. Carries no rows.
    Unrecognized,
}

impl Envelope {
    /// Classify `body` by inspecting `body.data`. When the inner object
    /// carries both `data` and `rows`, `data` wins.
    pub fn parse(body: &Value) -> Self {
        match body.get("data") {
            Some(Value::Array(rows)) => Envelope::Direct(rows.clone()),
            Some(Value::Object(inner)) => {
                if let Some(Value::Array(rows)) = inner.get("data") {
                    Envelope::NestedData(rows.clone())
                } else if let Some(Value::Array(rows)) = inner.get("rows") {
                    Envelope::NestedRows(rows.clone())
                } else {
                    Envelope::Unrecognized
                }
            }
            _ => Envelope::Unrecognized,
        }
    }

    pub fn recognized(&self) -> bool {
        !matches!(self, Envelope::Unrecognized)
    }

    pub fn rows(&self) -> &[Value] {
        match self {
            Envelope::Direct(rows) | Envelope::NestedData(rows) | Envelope::NestedRows(rows) => {
                rows
            }
            Envelope::Unrecognized => &[],
        }
    }

    pub fn into_rows(self) -> Vec<Value> {
        match self {
            Envelope::Direct(rows) | Envelope::NestedData(rows) | Envelope::NestedRows(rows) => {
                rows
            }
            Envelope::Unrecognized => Vec::new(),
        }
    }
}

/// Decode envelope rows into typed records. Rows that fail to decode are
/// skipped rather than failing the whole list; the second element counts
/// how many were dropped so the caller can log it.
pub fn decode_rows<T: DeserializeOwned>(rows: Vec<Value>) -> (Vec<T>, usize) {
    let total = rows.len();
    let items: Vec<T> = rows
        .into_iter()
        .filter_map(|row| serde_json::from_value(row).ok())
        .collect();
    let dropped = total - items.len();
    (items, dropped)
}

/// Single-record endpoints wrap one object with the same inconsistency:
/// `{"data": {...}}` or `{"data": {"data": {...}}}`. Returns `None` for
/// anything else.
pub fn single_record(body: &Value) -> Option<Value> {
    let data = body.get("data")?;
    if !data.is_object() {
        return None;
    }
    match data.get("data") {
        Some(inner) if inner.is_object() => Some(inner.clone()),
        _ => Some(data.clone()),
    }
}

/// One flat record within a fetched list, field order preserved (wire
/// order survives thanks to serde_json's `preserve_order`).
pub type Row = IndexMap<String, FieldValue>;

/// A scalar cell of a [`Row`]. Nested objects and arrays are opaque to the
/// client and kept as their compact JSON text.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Bool(bool),
    Null,
}

impl FieldValue {
    pub fn display(&self) -> String {
        match self {
            FieldValue::Text(text) => text.clone(),
            FieldValue::Number(number) => {
                if number.fract() == 0.0 && number.abs() < 1e15 {
                    format!("{}", *number as i64)
                } else {
                    format!("{number}")
                }
            }
            FieldValue::Bool(value) => value.to_string(),
            FieldValue::Null => String::new(),
        }
    }
}

/// Flatten one JSON row object into a [`Row`]. Non-object rows produce an
/// empty row rather than an error.
pub fn flatten_row(row: &Value) -> Row {
    let mut flat = Row::new();
    if let Value::Object(fields) = row {
        for (name, value) in fields {
            let field = match value {
                Value::Null => FieldValue::Null,
                Value::Bool(b) => FieldValue::Bool(*b),
                Value::Number(n) => FieldValue::Number(n.as_f64().unwrap_or(0.0)),
                Value::String(s) => FieldValue::Text(s.clone()),
                nested => FieldValue::Text(nested.to_string()),
            };
            flat.insert(name.clone(), field);
        }
    }
    flat
}

/// Pagination metadata, when the endpoint provides any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    pub total: u64,
    pub page: u32,
    #[serde(alias = "page_size")]
    pub page_size: u32,
    pub pages: u32,
}

impl Meta {
    /// Meta lives either beside `data` at the top level or inside the
    /// nested object, depending on the endpoint.
    pub fn from_body(body: &Value) -> Option<Meta> {
        let candidate = body
            .get("meta")
            .or_else(|| body.get("data").and_then(|data| data.get("meta")))?;
        serde_json::from_value(candidate.clone()).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row_ids(envelope: &Envelope) -> Vec<i64> {
        envelope
            .rows()
            .iter()
            .map(|row| row["id"].as_i64().unwrap())
            .collect()
    }

    #[test]
    fn direct_array_is_used_as_is() {
        let body = json!({ "data": [{ "id": 1 }, { "id": 2 }, { "id": 3 }] });
        let envelope = Envelope::parse(&body);
        assert!(matches!(envelope, Envelope::Direct(_)));
        assert_eq!(row_ids(&envelope), vec![1, 2, 3]);
    }

    #[test]
    fn nested_data_is_unwrapped_order_preserved() {
        let body = json!({ "data": { "data": [{ "id": 9 }, { "id": 4 }, { "id": 7 }] } });
        let envelope = Envelope::parse(&body);
        assert!(matches!(envelope, Envelope::NestedData(_)));
        assert_eq!(row_ids(&envelope), vec![9, 4, 7]);
    }

    #[test]
    fn nested_rows_is_unwrapped() {
        let body = json!({ "data": { "rows": [{ "id": 5 }] } });
        let envelope = Envelope::parse(&body);
        assert!(matches!(envelope, Envelope::NestedRows(_)));
        assert_eq!(row_ids(&envelope), vec![5]);
    }

    #[test]
    fn nested_data_wins_over_rows() {
        let body = json!({ "data": { "data": [{ "id": 1 }], "rows": [{ "id": 2 }] } });
        assert_eq!(row_ids(&Envelope::parse(&body)), vec![1]);
    }

    #[test]
    fn missing_data_degrades_to_empty() {
        let envelope = Envelope::parse(&json!({ "message": "ok" }));
        assert_eq!(envelope, Envelope::Unrecognized);
        assert!(envelope.rows().is_empty());
    }

    #[test]
    fn scalar_data_degrades_to_empty() {
        for body in [json!({ "data": 42 }), json!({ "data": "nope" }), json!(null)] {
            let envelope = Envelope::parse(&body);
            assert_eq!(envelope, Envelope::Unrecognized);
            assert!(envelope.into_rows().is_empty());
        }
    }

    #[test]
    fn nested_object_without_sequence_degrades_to_empty() {
        let body = json!({ "data": { "total": 3 } });
        assert_eq!(Envelope::parse(&body), Envelope::Unrecognized);
    }

    #[test]
    fn decode_skips_undecodable_rows() {
        #[derive(serde::Deserialize)]
        struct Item {
            id: u64,
        }
        let rows = Envelope::parse(&json!({ "data": [{ "id": 1 }, { "id": "oops" }, { "id": 3 }] }))
            .into_rows();
        let (items, dropped) = decode_rows::<Item>(rows);
        assert_eq!(items.iter().map(|i| i.id).collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(dropped, 1);
    }

    #[test]
    fn flatten_keeps_field_order_and_scalars() {
        let row = json!({ "id": 7, "name": "Mia", "done": false, "note": null, "tags": ["a"] });
        let flat = flatten_row(&row);
        let keys: Vec<&str> = flat.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["id", "name", "done", "note", "tags"]);
        assert_eq!(flat["id"], FieldValue::Number(7.0));
        assert_eq!(flat["name"], FieldValue::Text("Mia".to_string()));
        assert_eq!(flat["done"], FieldValue::Bool(false));
        assert_eq!(flat["note"], FieldValue::Null);
        assert_eq!(flat["tags"], FieldValue::Text("[\"a\"]".to_string()));
    }

    #[test]
    fn single_record_unwraps_both_nestings() {
        let direct = json!({ "data": { "id": 3 } });
        let nested = json!({ "data": { "data": { "id": 3 } } });
        for body in [direct, nested] {
            assert_eq!(single_record(&body).unwrap()["id"], 3);
        }
        assert_eq!(single_record(&json!({ "data": 5 })), None);
        assert_eq!(single_record(&json!({ "message": "ok" })), None);
    }

    #[test]
    fn meta_is_found_at_either_level() {
        let top = json!({ "data": [], "meta": { "total": 40, "page": 2, "pageSize": 20, "pages": 2 } });
        let nested = json!({ "data": { "rows": [], "meta": { "total": 40, "page": 2, "pageSize": 20, "pages": 2 } } });
        for body in [top, nested] {
            let meta = Meta::from_body(&body).unwrap();
            assert_eq!(meta.total, 40);
            assert_eq!(meta.page_size, 20);
        }
        assert_eq!(Meta::from_body(&json!({ "data": [] })), None);
    }

    #[test]
    fn number_display_drops_integral_fraction() {
        assert_eq!(FieldValue::Number(42.0).display(), "42");
        assert_eq!(FieldValue::Number(3.5).display(), "3.5");
        assert_eq!(FieldValue::Null.display(), "");
    }
}
