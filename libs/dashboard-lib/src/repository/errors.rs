#[derive(Debug)]
pub enum RepositoryError {
    RoleNameAlreadyExists,
    DiseaseNameAlreadyExists,
    UserAlreadyHasRole,
    UnknownUser,
    UnknownRole,
    NotFound,
    Sqlx(sqlx::Error),
}

impl std::fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RepositoryError::RoleNameAlreadyExists => write!(f, "role name already exists"),
            RepositoryError::DiseaseNameAlreadyExists => write!(f, "disease name already exists"),
            RepositoryError::UserAlreadyHasRole => write!(f, "user already has role"),
            RepositoryError::UnknownUser => write!(f, "referenced user does not exist"),
            RepositoryError::UnknownRole => write!(f, "referenced role does not exist"),
            RepositoryError::NotFound => write!(f, "not found"),
            RepositoryError::Sqlx(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for RepositoryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RepositoryError::Sqlx(e) => Some(e),
            _ => None,
        }
    }
}

impl From<sqlx::Error> for RepositoryError {
    fn from(value: sqlx::Error) -> Self {
        map_sqlx_error(value)
    }
}

// Constraint names as declared in the migrations.
const ROLE_NAME_UNIQUE: &str = "role_name_unique";
const DISEASE_NAME_UNIQUE: &str = "disease_name_unique";
const UNIQUE_USER_ROLE: &str = "unique_user_role";
const FK_USER_ROLES_USER: &str = "fk_user_roles_user";
const FK_USER_ROLES_ROLE: &str = "fk_user_roles_role";

/// SQLSTATE MySQL reports for both duplicate keys and foreign key failures.
const INTEGRITY_CONSTRAINT_VIOLATION: &str = "23000";

fn extract_between<'a>(msg: &'a str, marker: &str, close: char) -> Option<&'a str> {
    let start = msg.find(marker)? + marker.len();
    let rest = &msg[start..];
    let end = rest.find(close)?;
    Some(&rest[..end])
}

/// Key name from "Duplicate entry '...' for key 'table.key_name'".
fn extract_mysql_key_name(msg_lower: &str) -> Option<&str> {
    extract_between(msg_lower, "for key '", '\'')
}

/// Constraint name from "... a foreign key constraint fails (..., CONSTRAINT `name` FOREIGN KEY ...)".
fn extract_mysql_constraint_name(msg_lower: &str) -> Option<&str> {
    extract_between(msg_lower, "constraint `", '`')
}

/// Classifies an integrity violation by the constraint it names.
/// Returns `None` for anything that is not one of ours.
pub(crate) fn classify_database_error(code: Option<&str>, message: &str) -> Option<RepositoryError> {
    if code != Some(INTEGRITY_CONSTRAINT_VIOLATION) {
        return None;
    }

    let msg = message.to_lowercase();

    if msg.contains("duplicate entry") {
        // MySQL may prefix the key with the table name, e.g. "roles.role_name_unique".
        let key = extract_mysql_key_name(&msg).unwrap_or_default();
        if key.ends_with(ROLE_NAME_UNIQUE) {
            return Some(RepositoryError::RoleNameAlreadyExists);
        }
        if key.ends_with(DISEASE_NAME_UNIQUE) {
            return Some(RepositoryError::DiseaseNameAlreadyExists);
        }
        if key.ends_with(UNIQUE_USER_ROLE) {
            return Some(RepositoryError::UserAlreadyHasRole);
        }
        return None;
    }

    if msg.contains("foreign key constraint fails") {
        match extract_mysql_constraint_name(&msg) {
            Some(FK_USER_ROLES_USER) => return Some(RepositoryError::UnknownUser),
            Some(FK_USER_ROLES_ROLE) => return Some(RepositoryError::UnknownRole),
            _ => return None,
        }
    }

    None
}

pub fn map_sqlx_error(err: sqlx::Error) -> RepositoryError {
    if let sqlx::Error::Database(db_err) = &err {
        let code = db_err.code();
        if let Some(mapped) = classify_database_error(code.as_deref(), db_err.message()) {
            tracing::debug!(error = %db_err, mapped = %mapped, "integrity constraint violation");
            return mapped;
        }
    }

    RepositoryError::Sqlx(err)
}
