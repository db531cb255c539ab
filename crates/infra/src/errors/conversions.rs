//! Conversions from external infrastructure errors into domain errors.

use linkfolio_domain::constants::MSG_USERNAME_TAKEN;
use linkfolio_domain::LinkfolioError;
use reqwest::Error as HttpError;
use rusqlite::Error as SqlError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub LinkfolioError);

impl From<InfraError> for LinkfolioError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<LinkfolioError> for InfraError {
    fn from(value: LinkfolioError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoLinkfolioError {
    fn into_linkfolio(self) -> LinkfolioError;
}

/* -------------------------------------------------------------------------- */
/* rusqlite::Error → LinkfolioError */
/* -------------------------------------------------------------------------- */

/// `SQLITE_CONSTRAINT_UNIQUE`
const UNIQUE_CONSTRAINT: i32 = 2067;

impl IntoLinkfolioError for SqlError {
    fn into_linkfolio(self) -> LinkfolioError {
        use rusqlite::ffi::ErrorCode;
        use rusqlite::Error as RE;

        match self {
            RE::SqliteFailure(err, maybe_message) => {
                let message = maybe_message.unwrap_or_default();
                match (err.code, err.extended_code) {
                    (ErrorCode::DatabaseBusy, _) => {
                        LinkfolioError::Database("database is busy".into())
                    }
                    (ErrorCode::DatabaseLocked, _) => {
                        LinkfolioError::Database("database is locked".into())
                    }
                    // profiles.username is the only unique column besides the id
                    (ErrorCode::ConstraintViolation, UNIQUE_CONSTRAINT)
                        if message.contains("username") =>
                    {
                        LinkfolioError::Conflict(MSG_USERNAME_TAKEN.into())
                    }
                    (ErrorCode::ConstraintViolation, UNIQUE_CONSTRAINT) => {
                        LinkfolioError::Database("unique constraint violation".into())
                    }
                    _ => LinkfolioError::Database(format!(
                        "sqlite failure {:?} (code {}): {}",
                        err.code, err.extended_code, message
                    )),
                }
            }
            RE::QueryReturnedNoRows => {
                LinkfolioError::NotFound("no rows returned by query".into())
            }
            RE::FromSqlConversionFailure(_, _, cause) => {
                LinkfolioError::Database(format!("failed to convert sqlite value: {cause}"))
            }
            RE::InvalidColumnType(_, _, ty) => {
                LinkfolioError::Database(format!("invalid column type: {ty}"))
            }
            RE::Utf8Error(_) => {
                LinkfolioError::Database("invalid UTF-8 returned from sqlite".into())
            }
            RE::InvalidPath(path) => LinkfolioError::Database(format!(
                "invalid database path: {}",
                path.to_string_lossy()
            )),
            other => LinkfolioError::Database(other.to_string()),
        }
    }
}

impl From<SqlError> for InfraError {
    fn from(value: SqlError) -> Self {
        InfraError(value.into_linkfolio())
    }
}

/* -------------------------------------------------------------------------- */
/* r2d2::Error → LinkfolioError */
/* -------------------------------------------------------------------------- */

impl IntoLinkfolioError for r2d2::Error {
    fn into_linkfolio(self) -> LinkfolioError {
        LinkfolioError::Database(format!("connection pool error: {self}"))
    }
}

impl From<r2d2::Error> for InfraError {
    fn from(value: r2d2::Error) -> Self {
        InfraError(value.into_linkfolio())
    }
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → LinkfolioError */
/* -------------------------------------------------------------------------- */

impl IntoLinkfolioError for HttpError {
    fn into_linkfolio(self) -> LinkfolioError {
        if self.is_timeout() {
            return LinkfolioError::Network("HTTP request timed out".into());
        }

        if self.is_connect() {
            return LinkfolioError::Network("HTTP connection failure".into());
        }

        if let Some(status) = self.status() {
            return LinkfolioError::Network(format!(
                "HTTP {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("unknown status")
            ));
        }

        if self.is_decode() {
            return LinkfolioError::Network(format!("invalid response body: {self}"));
        }

        LinkfolioError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_linkfolio())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
