use crate::repository::errors::RepositoryError;

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ServiceError {
    #[error("role name already exists")]
    RoleNameAlreadyExists,

    #[error("disease name already exists")]
    DiseaseNameAlreadyExists,

    #[error("user already has this role")]
    UserAlreadyHasRole,

    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ServiceError {
    pub fn not_found(entity: &'static str, id: i64) -> Self {
        ServiceError::NotFound { entity, id }
    }

    /// Uniqueness violations, surfaced separately from plain validation failures.
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            ServiceError::RoleNameAlreadyExists
                | ServiceError::DiseaseNameAlreadyExists
                | ServiceError::UserAlreadyHasRole
        )
    }
}

/// Maps a repository failure for a single `entity` row identified by `id`.
pub(crate) fn from_repository(err: RepositoryError, entity: &'static str, id: i64) -> ServiceError {
    match err {
        RepositoryError::RoleNameAlreadyExists => ServiceError::RoleNameAlreadyExists,
        RepositoryError::DiseaseNameAlreadyExists => ServiceError::DiseaseNameAlreadyExists,
        RepositoryError::UserAlreadyHasRole => ServiceError::UserAlreadyHasRole,
        RepositoryError::UnknownUser => {
            ServiceError::Validation("invalid user: object does not exist".to_string())
        }
        RepositoryError::UnknownRole => {
            ServiceError::Validation("invalid role: object does not exist".to_string())
        }
        RepositoryError::NotFound => ServiceError::not_found(entity, id),
        RepositoryError::Sqlx(e) => ServiceError::Internal(e.into()),
    }
}

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => {
                ServiceError::Internal(anyhow::anyhow!("record vanished during the request"))
            }
            other => from_repository(other, "record", 0),
        }
    }
}
