use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use shared_utils::validation::merge_text;

/// Stored columns are nullable; they are read back as empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct MedicalHistory {
    pub id: i64,
    pub patient_id: i64,
    pub chronic_diseases: String,
    pub allergies: String,
    pub blood_type: String,
    pub vaccination: String,
}

impl MedicalHistory {
    pub fn new(patient_id: i64, request: MedicalHistoryRequest) -> Self {
        Self {
            id: 0,
            patient_id,
            chronic_diseases: request.chronic_diseases.unwrap_or_default(),
            allergies: request.allergies.unwrap_or_default(),
            blood_type: request.blood_type.unwrap_or_default(),
            vaccination: request.vaccination.unwrap_or_default(),
        }
    }

    pub fn apply_update(self, update: MedicalHistoryRequest) -> Self {
        Self {
            id: self.id,
            patient_id: self.patient_id,
            chronic_diseases: merge_text(self.chronic_diseases, update.chronic_diseases),
            allergies: merge_text(self.allergies, update.allergies),
            blood_type: merge_text(self.blood_type, update.blood_type),
            vaccination: merge_text(self.vaccination, update.vaccination),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicalHistoryRequest {
    pub chronic_diseases: Option<String>,
    pub allergies: Option<String>,
    pub blood_type: Option<String>,
    pub vaccination: Option<String>,
}
