use std::fmt;

use serde::{Deserialize, Serialize};

/// Record identifier. The backend may send either a number or a string.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum UserId {
    Number(i64),
    Text(String),
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserId::Number(n) => write!(f, "{n}"),
            UserId::Text(s) => f.write_str(s),
        }
    }
}

/// Display-only field. Whatever JSON the backend sends is kept and shown as is.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum FieldValue {
    Number(serde_json::Number),
    Text(String),
    Other(serde_json::Value),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Number(n) => write!(f, "{n}"),
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Other(v) => write!(f, "{v}"),
        }
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        FieldValue::Number(value.into())
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct User {
    pub id: UserId,
    pub nombre: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edad: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ciudad: Option<FieldValue>,
}

impl User {
    pub fn new(id: i64, nombre: &str, edad: u32, ciudad: &str) -> Self {
        Self {
            id: UserId::Number(id),
            nombre: nombre.to_string(),
            edad: Some(edad.into()),
            ciudad: Some(ciudad.into()),
        }
    }
}
