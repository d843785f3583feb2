use async_trait::async_trait;
use sqlx::{query, query_as, MySql, MySqlPool, QueryBuilder};

use crate::entities::UserRoleFilter;
use crate::repository::errors::{map_sqlx_error, RepositoryError};
use crate::repository::models::UserRoleRow;
use crate::repository::search::push_search;
use crate::repository::traits::UserRoleRepositoryTrait;

// Email and role detail are joined in on every read, never copied into user_roles.
const SELECT_USER_ROLE: &str = r#"
    SELECT ur.id,
           ur.user_id,
           u.email AS user_email,
           ur.role_id,
           r.role_name,
           r.description AS role_description,
           r.created_at AS role_created_at,
           ur.assigned_at
    FROM user_roles ur
    INNER JOIN users u ON u.id = ur.user_id
    INNER JOIN roles r ON r.id = ur.role_id
"#;

const ORDER_BY_ASSIGNED: &str = " ORDER BY ur.assigned_at DESC, ur.id DESC";

#[derive(Debug, Clone)]
pub struct UserRoleRepository {
    pub pool: MySqlPool,
}

impl UserRoleRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRoleRepositoryTrait for UserRoleRepository {
    async fn assign_role(&self, user_id: i64, role_id: i64) -> Result<UserRoleRow, RepositoryError> {
        // Duplicates and dangling references are rejected by the table's constraints.
        let result = query(
            r#"
            INSERT INTO user_roles (user_id, role_id)
            VALUES (?, ?)
            "#,
        )
        .bind(user_id)
        .bind(role_id)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        let user_role_id = result.last_insert_id() as i64;
        tracing::debug!(user_role_id, user_id, role_id, "role assigned");

        self.get_user_role(user_role_id)
            .await?
            .ok_or(RepositoryError::NotFound)
    }

    async fn get_user_role(&self, user_role_id: i64) -> Result<Option<UserRoleRow>, RepositoryError> {
        let sql = format!("{SELECT_USER_ROLE} WHERE ur.id = ?");
        let user_role = query_as::<_, UserRoleRow>(&sql)
            .bind(user_role_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        Ok(user_role)
    }

    async fn delete_user_role(&self, user_role_id: i64) -> Result<(), RepositoryError> {
        let result = query("DELETE FROM user_roles WHERE id = ?")
            .bind(user_role_id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn get_user_roles(&self, filter: UserRoleFilter) -> Result<Vec<UserRoleRow>, RepositoryError> {
        let mut qb = QueryBuilder::<MySql>::new(SELECT_USER_ROLE);
        qb.push(" WHERE 1 = 1");

        if let Some(user_id) = filter.user {
            qb.push(" AND ur.user_id = ").push_bind(user_id);
        }
        if let Some(role_id) = filter.role {
            qb.push(" AND ur.role_id = ").push_bind(role_id);
        }
        push_search(
            &mut qb,
            &["u.email", "u.full_name", "r.role_name"],
            filter.search.as_deref(),
        );

        qb.push(ORDER_BY_ASSIGNED);

        let user_roles = qb
            .build_query_as::<UserRoleRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        Ok(user_roles)
    }

    async fn get_user_roles_for_user(&self, user_id: i64) -> Result<Vec<UserRoleRow>, RepositoryError> {
        let sql = format!("{SELECT_USER_ROLE} WHERE ur.user_id = ?{ORDER_BY_ASSIGNED}");
        let user_roles = query_as::<_, UserRoleRow>(&sql)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        Ok(user_roles)
    }
}
