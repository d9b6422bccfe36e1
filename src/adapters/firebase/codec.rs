//! Firestore typed-value codec.
//!
//! Firestore's REST surface wraps every value in a one-key object naming
//! its type (`{"stringValue": "x"}`, `{"mapValue": {"fields": {..}}}`).
//! These functions convert between that form and plain JSON so documents
//! can go through serde.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::models::{Account, Role};
use crate::traits::BackendError;

/// Wrap a plain JSON value in Firestore's typed form.
pub fn encode_value(value: &Value) -> Value {
    match value {
        Value::Null => json!({ "nullValue": null }),
        Value::Bool(b) => json!({ "booleanValue": b }),
        Value::Number(n) => match n.as_i64() {
            Some(i) => json!({ "integerValue": i.to_string() }),
            None => json!({ "doubleValue": n.as_f64().unwrap_or_default() }),
        },
        Value::String(s) => json!({ "stringValue": s }),
        Value::Array(items) => {
            let values: Vec<Value> = items.iter().map(encode_value).collect();
            json!({ "arrayValue": { "values": values } })
        }
        Value::Object(map) => json!({ "mapValue": { "fields": encode_fields(map) } }),
    }
}

/// Encode every entry of an object as a Firestore field.
pub fn encode_fields(map: &Map<String, Value>) -> Map<String, Value> {
    map.iter()
        .map(|(key, value)| (key.clone(), encode_value(value)))
        .collect()
}

/// Unwrap a Firestore typed value into plain JSON.
pub fn decode_value(value: &Value) -> Result<Value, BackendError> {
    let object = value
        .as_object()
        .ok_or_else(|| BackendError::Decode(format!("typed value is not an object: {}", value)))?;
    let (kind, inner) = object
        .iter()
        .next()
        .ok_or_else(|| BackendError::Decode("empty typed value".to_string()))?;

    match kind.as_str() {
        "nullValue" => Ok(Value::Null),
        "booleanValue" | "stringValue" | "doubleValue" | "timestampValue" | "referenceValue" => {
            Ok(inner.clone())
        }
        "integerValue" => {
            // Integers travel as decimal strings
            let parsed = match inner {
                Value::String(s) => s.parse::<i64>().ok(),
                other => other.as_i64(),
            };
            parsed
                .map(Value::from)
                .ok_or_else(|| BackendError::Decode(format!("bad integerValue: {}", inner)))
        }
        "arrayValue" => {
            let values = match inner.get("values") {
                Some(Value::Array(values)) => values.iter().map(decode_value).collect(),
                Some(other) => Err(BackendError::Decode(format!("bad arrayValue: {}", other))),
                None => Ok(Vec::new()),
            }?;
            Ok(Value::Array(values))
        }
        "mapValue" => match inner.get("fields") {
            Some(fields) => decode_fields(fields).map(Value::Object),
            None => Ok(Value::Object(Map::new())),
        },
        other => Err(BackendError::Decode(format!(
            "unsupported Firestore value type {}",
            other
        ))),
    }
}

/// Decode a document's `fields` object.
pub fn decode_fields(fields: &Value) -> Result<Map<String, Value>, BackendError> {
    let fields = fields
        .as_object()
        .ok_or_else(|| BackendError::Decode("document fields are not an object".to_string()))?;
    fields
        .iter()
        .map(|(key, value)| decode_value(value).map(|v| (key.clone(), v)))
        .collect()
}

/// Serialize `value` into a Firestore `fields` object.
pub fn to_fields<T: Serialize>(value: &T) -> Result<Map<String, Value>, BackendError> {
    match serde_json::to_value(value) {
        Ok(Value::Object(map)) => Ok(encode_fields(&map)),
        Ok(other) => Err(BackendError::Decode(format!(
            "document must serialize to an object, got {}",
            other
        ))),
        Err(e) => Err(BackendError::Decode(e.to_string())),
    }
}

/// Deserialize a Firestore document's `fields` into `T`.
pub fn from_document<T: DeserializeOwned>(document: &Value) -> Result<T, BackendError> {
    let fields = match document.get("fields") {
        Some(fields) => decode_fields(fields)?,
        None => Map::new(),
    };
    serde_json::from_value(Value::Object(fields)).map_err(|e| BackendError::Decode(e.to_string()))
}

/// The document id: the last segment of its resource name.
pub fn document_id(document: &Value) -> Result<String, BackendError> {
    document
        .get("name")
        .and_then(Value::as_str)
        .and_then(|name| name.rsplit('/').next())
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .ok_or_else(|| BackendError::Decode("document has no name".to_string()))
}

/// Account document fields as stored. Missing fields read as empty and an
/// unknown role reads as the read-only one.
#[derive(Debug, Deserialize)]
struct AccountFields {
    #[serde(default)]
    nome: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    senha: String,
    #[serde(default)]
    role: String,
}

/// Decode an account document from the `users` collection.
pub fn account_from_document(document: &Value) -> Result<Account, BackendError> {
    let fields: AccountFields = from_document(document)?;
    Ok(Account {
        id: document_id(document)?,
        nome: fields.nome,
        email: fields.email,
        senha: fields.senha,
        role: Role::from_wire(&fields.role),
    })
}
