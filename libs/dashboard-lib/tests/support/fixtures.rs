use chrono::{DateTime, Duration, TimeZone, Utc};

use dashboard_lib::repository::models::{DiseaseRow, LocationRow, RoleRow, UserRoleRow};

pub fn at(minutes: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 1, 8, 0, 0).unwrap() + Duration::minutes(minutes)
}

pub fn role_row(id: i64, role_name: &str) -> RoleRow {
    RoleRow {
        id,
        role_name: role_name.to_string(),
        description: String::new(),
        created_at: at(0),
    }
}

pub fn user_role_row(id: i64, user_id: i64, email: &str, role: &RoleRow, minutes: i64) -> UserRoleRow {
    UserRoleRow {
        id,
        user_id,
        user_email: email.to_string(),
        role_id: role.id,
        role_name: role.role_name.clone(),
        role_description: role.description.clone(),
        role_created_at: role.created_at,
        assigned_at: at(minutes),
    }
}

pub fn disease_row(id: i64, disease_name: &str) -> DiseaseRow {
    DiseaseRow {
        id,
        disease_name: disease_name.to_string(),
        is_active: true,
        created_at: at(0),
    }
}

pub fn location_row(id: i64, district_name: &str) -> LocationRow {
    LocationRow {
        id,
        district_name: district_name.to_string(),
        area_name: None,
        latitude: None,
        longitude: None,
        is_active: true,
        created_at: at(0),
    }
}
