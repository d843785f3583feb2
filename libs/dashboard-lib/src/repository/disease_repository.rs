use async_trait::async_trait;
use sqlx::{query, query_as, MySql, MySqlPool, QueryBuilder};

use crate::entities::{DiseaseChanges, DiseaseFilter, NewDisease};
use crate::repository::errors::{map_sqlx_error, RepositoryError};
use crate::repository::models::DiseaseRow;
use crate::repository::search::push_search;
use crate::repository::traits::DiseaseRepositoryTrait;

const SELECT_DISEASE: &str = "SELECT id, disease_name, is_active, created_at FROM diseases";

#[derive(Debug, Clone)]
pub struct DiseaseRepository {
    pub pool: MySqlPool,
}

impl DiseaseRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    async fn fetch_disease(&self, disease_id: i64) -> Result<Option<DiseaseRow>, RepositoryError> {
        let sql = format!("{SELECT_DISEASE} WHERE id = ?");
        let disease = query_as::<_, DiseaseRow>(&sql)
            .bind(disease_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        Ok(disease)
    }
}

#[async_trait]
impl DiseaseRepositoryTrait for DiseaseRepository {
    async fn create_disease(&self, disease: NewDisease) -> Result<DiseaseRow, RepositoryError> {
        let result = query(
            r#"
            INSERT INTO diseases (disease_name, is_active)
            VALUES (?, ?)
            "#,
        )
        .bind(&disease.disease_name)
        .bind(disease.is_active.unwrap_or(true))
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        let disease_id = result.last_insert_id() as i64;
        tracing::debug!(disease_id, disease_name = %disease.disease_name, "disease inserted");

        self.fetch_disease(disease_id)
            .await?
            .ok_or(RepositoryError::NotFound)
    }

    async fn get_disease(&self, disease_id: i64) -> Result<Option<DiseaseRow>, RepositoryError> {
        self.fetch_disease(disease_id).await
    }

    async fn update_disease(&self, disease_id: i64, changes: DiseaseChanges) -> Result<DiseaseRow, RepositoryError> {
        query(
            r#"
            UPDATE diseases
            SET disease_name = COALESCE(?, disease_name),
                is_active = COALESCE(?, is_active)
            WHERE id = ?
            "#,
        )
        .bind(changes.disease_name)
        .bind(changes.is_active)
        .bind(disease_id)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        self.fetch_disease(disease_id)
            .await?
            .ok_or(RepositoryError::NotFound)
    }

    async fn delete_disease(&self, disease_id: i64) -> Result<(), RepositoryError> {
        let result = query("DELETE FROM diseases WHERE id = ?")
            .bind(disease_id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn get_diseases(&self, filter: DiseaseFilter) -> Result<Vec<DiseaseRow>, RepositoryError> {
        let mut qb = QueryBuilder::<MySql>::new(SELECT_DISEASE);
        qb.push(" WHERE 1 = 1");

        if let Some(is_active) = filter.is_active {
            qb.push(" AND is_active = ").push_bind(is_active);
        }
        push_search(&mut qb, &["disease_name"], filter.search.as_deref());

        qb.push(" ORDER BY disease_name ASC");

        let diseases = qb
            .build_query_as::<DiseaseRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        Ok(diseases)
    }
}
