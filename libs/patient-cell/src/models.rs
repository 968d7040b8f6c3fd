use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use shared_utils::validation::merge_text;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: i64,
    pub name: String,
    pub phone_number: String,
    pub email: String,
    pub insurance: String,
}

impl Patient {
    /// Applies a partial edit: absent or blank fields keep their stored value.
    pub fn apply_update(self, update: UpdatePatientRequest) -> Self {
        Self {
            id: self.id,
            name: merge_text(self.name, update.name),
            phone_number: merge_text(self.phone_number, update.phone_number),
            email: merge_text(self.email, update.email),
            insurance: merge_text(self.insurance, update.insurance),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePatientRequest {
    pub name: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub insurance: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePatientRequest {
    pub name: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub insurance: Option<String>,
}
