use async_trait::async_trait;
use sqlx::{query, query_as, MySqlPool};

use crate::entities::{LocationChanges, NewLocation};
use crate::repository::errors::{map_sqlx_error, RepositoryError};
use crate::repository::models::LocationRow;
use crate::repository::traits::LocationRepositoryTrait;

const SELECT_LOCATION: &str = r#"
    SELECT id, district_name, area_name, latitude, longitude, is_active, created_at
    FROM locations
"#;

#[derive(Debug, Clone)]
pub struct LocationRepository {
    pub pool: MySqlPool,
}

impl LocationRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    async fn fetch_location(&self, location_id: i64) -> Result<Option<LocationRow>, RepositoryError> {
        let sql = format!("{SELECT_LOCATION} WHERE id = ?");
        let location = query_as::<_, LocationRow>(&sql)
            .bind(location_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        Ok(location)
    }
}

fn apply_changes(mut row: LocationRow, changes: LocationChanges) -> LocationRow {
    if let Some(district_name) = changes.district_name {
        row.district_name = district_name;
    }
    if let Some(area_name) = changes.area_name {
        row.area_name = area_name;
    }
    if let Some(latitude) = changes.latitude {
        row.latitude = latitude;
    }
    if let Some(longitude) = changes.longitude {
        row.longitude = longitude;
    }
    if let Some(is_active) = changes.is_active {
        row.is_active = is_active;
    }
    row
}

#[async_trait]
impl LocationRepositoryTrait for LocationRepository {
    async fn create_location(&self, location: NewLocation) -> Result<LocationRow, RepositoryError> {
        let result = query(
            r#"
            INSERT INTO locations (district_name, area_name, latitude, longitude, is_active)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&location.district_name)
        .bind(location.area_name)
        .bind(location.latitude)
        .bind(location.longitude)
        .bind(location.is_active.unwrap_or(true))
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        let location_id = result.last_insert_id() as i64;
        tracing::debug!(location_id, district_name = %location.district_name, "location inserted");

        self.fetch_location(location_id)
            .await?
            .ok_or(RepositoryError::NotFound)
    }

    async fn get_location(&self, location_id: i64) -> Result<Option<LocationRow>, RepositoryError> {
        self.fetch_location(location_id).await
    }

    async fn update_location(&self, location_id: i64, changes: LocationChanges) -> Result<LocationRow, RepositoryError> {
        // Nullable columns can be cleared, so the row is merged in Rust under a row lock
        // instead of with COALESCE.
        let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;

        let sql = format!("{SELECT_LOCATION} WHERE id = ? FOR UPDATE");
        let current = query_as::<_, LocationRow>(&sql)
            .bind(location_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(map_sqlx_error)?
            .ok_or(RepositoryError::NotFound)?;

        let updated = apply_changes(current, changes);

        query(
            r#"
            UPDATE locations
            SET district_name = ?, area_name = ?, latitude = ?, longitude = ?, is_active = ?
            WHERE id = ?
            "#,
        )
        .bind(&updated.district_name)
        .bind(&updated.area_name)
        .bind(updated.latitude)
        .bind(updated.longitude)
        .bind(updated.is_active)
        .bind(location_id)
        .execute(&mut *tx)
        .await
        .map_err(map_sqlx_error)?;

        tx.commit().await.map_err(map_sqlx_error)?;
        Ok(updated)
    }

    async fn delete_location(&self, location_id: i64) -> Result<(), RepositoryError> {
        let result = query("DELETE FROM locations WHERE id = ?")
            .bind(location_id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn get_locations(&self) -> Result<Vec<LocationRow>, RepositoryError> {
        let sql = format!("{SELECT_LOCATION} ORDER BY district_name ASC, id ASC");
        let locations = query_as::<_, LocationRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        Ok(locations)
    }
}
