use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use shared_utils::validation::merge_text;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    pub id: i64,
    pub name: String,
    pub phone_number: String,
    pub email: String,
    pub specialization: String,
}

impl Doctor {
    pub fn apply_update(self, update: UpdateDoctorRequest) -> Self {
        Self {
            id: self.id,
            name: merge_text(self.name, update.name),
            phone_number: merge_text(self.phone_number, update.phone_number),
            email: merge_text(self.email, update.email),
            specialization: merge_text(self.specialization, update.specialization),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDoctorRequest {
    pub name: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub specialization: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDoctorRequest {
    pub name: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub specialization: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_update_keeps_blank_fields() {
        let doctor = Doctor {
            id: 1,
            name: "Oleg Sidorov".to_string(),
            phone_number: "101".to_string(),
            email: "oleg@clinic.org".to_string(),
            specialization: "Cardiology".to_string(),
        };

        let updated = doctor.clone().apply_update(UpdateDoctorRequest {
            name: Some(String::new()),
            specialization: Some("Neurology".to_string()),
            ..Default::default()
        });

        assert_eq!(updated.name, doctor.name);
        assert_eq!(updated.email, doctor.email);
        assert_eq!(updated.specialization, "Neurology");
    }
}
