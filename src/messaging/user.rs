//! Static User Identities
//!
//! The service hosts exactly two fixed users, one patient and one doctor.
//! They are looked up once per session and never mutated by the client.

use serde::{Deserialize, Serialize};

/// Role of a participant in the pair
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// The patient side of the pair
    Patient,
    /// The doctor side of the pair
    Doctor,
}

impl UserRole {
    /// Wire representation of the role (`user_type` / `sender_type` values)
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Patient => "patient",
            UserRole::Doctor => "doctor",
        }
    }

    /// The opposite side of the pair
    pub fn other(&self) -> UserRole {
        match self {
            UserRole::Patient => UserRole::Doctor,
            UserRole::Doctor => UserRole::Patient,
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user identity supplied by the remote API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// Server-assigned user id
    pub id: String,
    /// Display name
    pub name: String,
    /// Email address
    pub email: String,
    /// Patient or doctor
    pub role: UserRole,
}

/// The fixed patient/doctor pair
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StaticUsers {
    pub patient: User,
    pub doctor: User,
}

impl StaticUsers {
    /// The user holding the given role
    pub fn for_role(&self, role: UserRole) -> &User {
        match role {
            UserRole::Patient => &self.patient,
            UserRole::Doctor => &self.doctor,
        }
    }

    /// The other participant, from the given role's point of view
    pub fn other(&self, role: UserRole) -> &User {
        self.for_role(role.other())
    }
}

/// Response for the static user lookup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaticUsersResponse {
    pub users: StaticUsers,
}
