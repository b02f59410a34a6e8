//! Employee Model

use serde::{Deserialize, Deserializer, Serialize};

/// Employee record
///
/// Wire and column names are camelCase: `id`, `firstName`, `lastName`, `emailId`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[cfg_attr(feature = "db", sqlx(rename_all = "camelCase"))]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email_id: String,
}

/// Create employee payload
///
/// Any `id` sent by the client is ignored; the store assigns one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeCreate {
    #[serde(default, deserialize_with = "nullable_string")]
    pub first_name: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub last_name: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub email_id: String,
}

/// Update employee payload
///
/// Empty (or absent) fields keep the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeUpdate {
    #[serde(default, deserialize_with = "nullable_string")]
    pub first_name: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub last_name: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub email_id: String,
}

impl Employee {
    /// Build a record from a create payload and a store-assigned id
    pub fn from_create(id: i64, data: EmployeeCreate) -> Self {
        Self {
            id,
            first_name: data.first_name,
            last_name: data.last_name,
            email_id: data.email_id,
        }
    }

    /// Apply a partial update (overwrite only non-empty fields)
    pub fn apply(&mut self, data: EmployeeUpdate) {
        if !data.first_name.is_empty() {
            self.first_name = data.first_name;
        }
        if !data.last_name.is_empty() {
            self.last_name = data.last_name;
        }
        if !data.email_id.is_empty() {
            self.email_id = data.email_id;
        }
    }
}

/// `null` decodes to the empty string
fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
