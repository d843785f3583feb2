use async_trait::async_trait;
use sqlx::{query, query_as, MySql, MySqlPool, QueryBuilder};

use crate::entities::{NewRole, RoleChanges, RoleFilter};
use crate::repository::errors::{map_sqlx_error, RepositoryError};
use crate::repository::models::RoleRow;
use crate::repository::search::push_search;
use crate::repository::traits::RoleRepositoryTrait;

const SELECT_ROLE: &str = "SELECT id, role_name, description, created_at FROM roles";

#[derive(Debug, Clone)]
pub struct RoleRepository {
    pub pool: MySqlPool,
}

impl RoleRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    async fn fetch_role(&self, role_id: i64) -> Result<Option<RoleRow>, RepositoryError> {
        let sql = format!("{SELECT_ROLE} WHERE id = ?");
        let role = query_as::<_, RoleRow>(&sql)
            .bind(role_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        Ok(role)
    }
}

#[async_trait]
impl RoleRepositoryTrait for RoleRepository {
    async fn create_role(&self, role: NewRole) -> Result<RoleRow, RepositoryError> {
        // The unique key on role_name decides between concurrent inserts.
        let result = query(
            r#"
            INSERT INTO roles (role_name, description)
            VALUES (?, ?)
            "#,
        )
        .bind(&role.role_name)
        .bind(role.description.unwrap_or_default())
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        let role_id = result.last_insert_id() as i64;
        tracing::debug!(role_id, role_name = %role.role_name, "role inserted");

        self.fetch_role(role_id).await?.ok_or(RepositoryError::NotFound)
    }

    async fn get_role(&self, role_id: i64) -> Result<Option<RoleRow>, RepositoryError> {
        self.fetch_role(role_id).await
    }

    async fn update_role(&self, role_id: i64, changes: RoleChanges) -> Result<RoleRow, RepositoryError> {
        query(
            r#"
            UPDATE roles
            SET role_name = COALESCE(?, role_name),
                description = COALESCE(?, description)
            WHERE id = ?
            "#,
        )
        .bind(changes.role_name)
        .bind(changes.description)
        .bind(role_id)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        // MySQL reports unchanged rows as unaffected, so existence is checked by re-reading.
        self.fetch_role(role_id).await?.ok_or(RepositoryError::NotFound)
    }

    async fn delete_role(&self, role_id: i64) -> Result<(), RepositoryError> {
        // user_roles rows go with it through ON DELETE CASCADE.
        let result = query("DELETE FROM roles WHERE id = ?")
            .bind(role_id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn get_roles(&self, filter: RoleFilter) -> Result<Vec<RoleRow>, RepositoryError> {
        let mut qb = QueryBuilder::<MySql>::new(SELECT_ROLE);
        qb.push(" WHERE 1 = 1");

        if let Some(role_name) = filter.role_name {
            qb.push(" AND role_name = ").push_bind(role_name);
        }
        push_search(&mut qb, &["role_name", "description"], filter.search.as_deref());

        qb.push(" ORDER BY role_name ASC");

        let roles = qb
            .build_query_as::<RoleRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        Ok(roles)
    }
}
