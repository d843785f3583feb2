use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Role {
    pub id: i64,
    pub role_name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// A role assignment as read back from storage.
///
/// `user_email` and `role_detail` are joined from the referenced records on
/// every read; they are never written alongside the assignment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserRole {
    pub id: i64,
    pub user: i64,
    pub user_email: String,
    pub role: i64,
    pub role_detail: Role,
    pub assigned_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Disease {
    pub id: i64,
    pub disease_name: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Location {
    pub id: i64,
    pub district_name: String,
    pub area_name: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewRole {
    pub role_name: String,
    pub description: Option<String>,
}

/// Fields to change on an existing role. `None` leaves the stored value as is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleChanges {
    pub role_name: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewDisease {
    pub disease_name: String,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiseaseChanges {
    pub disease_name: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewLocation {
    pub district_name: String,
    pub area_name: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub is_active: Option<bool>,
}

/// Changes to a location. The nullable columns use a nested `Option`:
/// `Some(None)` clears the stored value, `None` keeps it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocationChanges {
    pub district_name: Option<String>,
    pub area_name: Option<Option<String>>,
    pub latitude: Option<Option<f64>>,
    pub longitude: Option<Option<f64>>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleFilter {
    pub role_name: Option<String>,
    pub search: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserRoleFilter {
    pub user: Option<i64>,
    pub role: Option<i64>,
    pub search: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiseaseFilter {
    pub is_active: Option<bool>,
    pub search: Option<String>,
}
