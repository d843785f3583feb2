use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::entities::{Disease, Location, Role, UserRole};

#[derive(Debug, Clone, FromRow)]
pub struct RoleRow {
    pub id: i64,
    pub role_name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// One `user_roles` row joined with its user's email and its role.
#[derive(Debug, Clone, FromRow)]
pub struct UserRoleRow {
    pub id: i64,
    pub user_id: i64,
    pub user_email: String,
    pub role_id: i64,
    pub role_name: String,
    pub role_description: String,
    pub role_created_at: DateTime<Utc>,
    pub assigned_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow)]
pub struct DiseaseRow {
    pub id: i64,
    pub disease_name: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow)]
pub struct LocationRow {
    pub id: i64,
    pub district_name: String,
    pub area_name: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<RoleRow> for Role {
    fn from(row: RoleRow) -> Self {
        Role {
            id: row.id,
            role_name: row.role_name,
            description: row.description,
            created_at: row.created_at,
        }
    }
}

impl From<UserRoleRow> for UserRole {
    fn from(row: UserRoleRow) -> Self {
        UserRole {
            id: row.id,
            user: row.user_id,
            user_email: row.user_email,
            role: row.role_id,
            role_detail: Role {
                id: row.role_id,
                role_name: row.role_name,
                description: row.role_description,
                created_at: row.role_created_at,
            },
            assigned_at: row.assigned_at,
        }
    }
}

impl From<DiseaseRow> for Disease {
    fn from(row: DiseaseRow) -> Self {
        Disease {
            id: row.id,
            disease_name: row.disease_name,
            is_active: row.is_active,
            created_at: row.created_at,
        }
    }
}

impl From<LocationRow> for Location {
    fn from(row: LocationRow) -> Self {
        Location {
            id: row.id,
            district_name: row.district_name,
            area_name: row.area_name,
            latitude: row.latitude,
            longitude: row.longitude,
            is_active: row.is_active,
            created_at: row.created_at,
        }
    }
}
