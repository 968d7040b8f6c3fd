use serde::{Deserialize, Serialize};

use doctor_cell::CreateDoctorRequest;
use patient_cell::CreatePatientRequest;
use shared_models::auth::Role;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub login: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doctor_id: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegisterRequest {
    pub name: String,
    pub phone_number: String,
    pub email: String,
    pub insurance: String,
    pub specialization: String,
    pub login: String,
    pub password: String,
    pub role: Option<Role>,
}

/// The entity a new account is attached to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Profile {
    Admin,
    Patient(CreatePatientRequest),
    Doctor(CreateDoctorRequest),
}

impl Profile {
    pub fn role(&self) -> Role {
        match self {
            Profile::Admin => Role::Admin,
            Profile::Patient(_) => Role::Patient,
            Profile::Doctor(_) => Role::Doctor,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub login: String,
    pub password_hash: String,
    pub profile: Profile,
}

impl RegisterRequest {
    /// Splits the flat registration form into the profile for `role`.
    pub fn profile(&self, role: Role) -> Profile {
        match role {
            Role::Admin => Profile::Admin,
            Role::Patient => Profile::Patient(CreatePatientRequest {
                name: self.name.clone(),
                phone_number: self.phone_number.clone(),
                email: self.email.clone(),
                insurance: self.insurance.clone(),
            }),
            Role::Doctor => Profile::Doctor(CreateDoctorRequest {
                name: self.name.clone(),
                phone_number: self.phone_number.clone(),
                email: self.email.clone(),
                specialization: self.specialization.clone(),
            }),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub login: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub jwt_token: String,
    pub user: User,
}
