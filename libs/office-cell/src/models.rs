use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Office {
    pub id: i64,
    pub number: i64,
    pub floor: i64,
}

impl Office {
    /// A missing or zero number/floor leaves the stored value in place.
    pub fn apply_update(self, update: UpdateOfficeRequest) -> Self {
        Self {
            id: self.id,
            number: merge_number(self.number, update.number),
            floor: merge_number(self.floor, update.floor),
        }
    }
}

fn merge_number(current: i64, replacement: Option<i64>) -> i64 {
    match replacement {
        Some(value) if value != 0 => value,
        _ => current,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOfficeRequest {
    pub number: i64,
    #[serde(default)]
    pub floor: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOfficeRequest {
    pub number: Option<i64>,
    pub floor: Option<i64>,
}
