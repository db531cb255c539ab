//! Profile repository implementation using SQLite
//!
//! Each profile is one row in `profiles`; social links are kept as a JSON
//! text column. Read-then-write operations take the write lock up front
//! (`BEGIN IMMEDIATE`) so concurrent writers wait on `busy_timeout` instead
//! of failing the lock upgrade.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use linkfolio_core::ProfileRepository as ProfileRepositoryPort;
use linkfolio_domain::{
    fold_username, LinkfolioError, Profile, ProfileFilter, ProfileReplacement,
    Result as DomainResult, SocialLinks,
};
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Row, ToSql, TransactionBehavior};
use tokio::task;
use uuid::Uuid;

use super::manager::{map_sql_error, DbManager};

const SELECT_COLUMNS: &str = "id, username, name, job_title, profile_image, header_image,
        phone, email, is_verified, is_company, social_links, created_at, updated_at";

/// SQLite-backed implementation of `ProfileRepository`
pub struct SqliteProfileRepository {
    db: Arc<DbManager>,
}

impl SqliteProfileRepository {
    /// Create a new repository instance
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProfileRepositoryPort for SqliteProfileRepository {
    async fn find_one(&self, filter: &ProfileFilter) -> DomainResult<Option<Profile>> {
        let db = Arc::clone(&self.db);
        let filter = filter.clone();

        task::spawn_blocking(move || -> DomainResult<Option<Profile>> {
            let conn = db.get_connection()?;
            select_one(&conn, &filter)
        })
        .await
        .map_err(map_join_error)?
    }

    async fn insert(&self, profile: Profile) -> DomainResult<Profile> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<Profile> {
            let conn = db.get_connection()?;
            insert_profile(&conn, &profile)?;
            Ok(profile)
        })
        .await
        .map_err(map_join_error)?
    }

    async fn find_one_and_update(
        &self,
        filter: &ProfileFilter,
        replacement: ProfileReplacement,
    ) -> DomainResult<Option<Profile>> {
        let db = Arc::clone(&self.db);
        let filter = filter.clone();

        task::spawn_blocking(move || -> DomainResult<Option<Profile>> {
            let mut conn = db.get_connection()?;
            let tx = conn
                .transaction_with_behavior(TransactionBehavior::Immediate)
                .map_err(map_sql_error)?;

            let Some(stored) = select_one(&tx, &filter)? else {
                return Ok(None);
            };

            let data = replacement.into_data(&stored.username);
            let updated = stored.replace(data, Utc::now());
            update_profile(&tx, &updated)?;
            tx.commit().map_err(map_sql_error)?;

            Ok(Some(updated))
        })
        .await
        .map_err(map_join_error)?
    }

    async fn find_one_and_delete(&self, filter: &ProfileFilter) -> DomainResult<Option<Profile>> {
        let db = Arc::clone(&self.db);
        let filter = filter.clone();

        task::spawn_blocking(move || -> DomainResult<Option<Profile>> {
            let mut conn = db.get_connection()?;
            let tx = conn
                .transaction_with_behavior(TransactionBehavior::Immediate)
                .map_err(map_sql_error)?;

            let Some(stored) = select_one(&tx, &filter)? else {
                return Ok(None);
            };

            tx.execute("DELETE FROM profiles WHERE id = ?1", params![stored.id.to_string()])
                .map_err(map_sql_error)?;
            tx.commit().map_err(map_sql_error)?;

            Ok(Some(stored))
        })
        .await
        .map_err(map_join_error)?
    }

    async fn health_check(&self) -> DomainResult<()> {
        let db = Arc::clone(&self.db);
        task::spawn_blocking(move || db.health_check()).await.map_err(map_join_error)?
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Earliest-inserted row matching `filter`.
fn select_one(conn: &Connection, filter: &ProfileFilter) -> DomainResult<Option<Profile>> {
    let (predicate, value) = match filter {
        ProfileFilter::Username(v) => ("username = ?1", v.clone()),
        ProfileFilter::UsernameIgnoreCase(v) => ("username_folded = ?1", fold_username(v)),
    };

    let sql =
        format!("SELECT {SELECT_COLUMNS} FROM profiles WHERE {predicate} ORDER BY rowid LIMIT 1");

    conn.query_row(&sql, params![value], map_profile_row)
        .optional()
        .map_err(map_sql_error)
}

/// Map a row to a Profile
fn map_profile_row(row: &Row<'_>) -> rusqlite::Result<Profile> {
    let id: String = row.get(0)?;
    let social_links: Option<String> = row.get(10)?;
    let created_at: String = row.get(11)?;
    let updated_at: String = row.get(12)?;

    Ok(Profile {
        id: Uuid::parse_str(&id).map_err(|e| conversion_error(0, e))?,
        username: row.get(1)?,
        name: row.get(2)?,
        job_title: row.get(3)?,
        profile_image: row.get(4)?,
        header_image: row.get(5)?,
        phone: row.get(6)?,
        email: row.get(7)?,
        is_verified: int_to_bool(row.get(8)?),
        is_company: int_to_bool(row.get(9)?),
        social_links: social_links
            .map(|raw| serde_json::from_str::<SocialLinks>(&raw))
            .transpose()
            .map_err(|e| conversion_error(10, e))?,
        created_at: parse_timestamp(11, &created_at)?,
        updated_at: parse_timestamp(12, &updated_at)?,
    })
}

/// Insert a profile
fn insert_profile(conn: &Connection, profile: &Profile) -> DomainResult<()> {
    let columns = ProfileColumns::from_profile(profile)?;
    let params: [&dyn ToSql; 14] = [
        &columns.id,
        &profile.username,
        &columns.username_folded,
        &profile.name,
        &profile.job_title,
        &profile.profile_image,
        &profile.header_image,
        &profile.phone,
        &profile.email,
        &bool_to_int(profile.is_verified),
        &bool_to_int(profile.is_company),
        &columns.social_links,
        &columns.created_at,
        &columns.updated_at,
    ];

    conn.execute(
        "INSERT INTO profiles (
            id, username, username_folded, name, job_title, profile_image, header_image,
            phone, email, is_verified, is_company, social_links, created_at, updated_at
         ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)",
        params.as_slice(),
    )
    .map_err(map_sql_error)?;

    Ok(())
}

/// Overwrite every mutable column of a stored profile
fn update_profile(conn: &Connection, profile: &Profile) -> DomainResult<()> {
    let columns = ProfileColumns::from_profile(profile)?;
    let params: [&dyn ToSql; 13] = [
        &profile.username,
        &columns.username_folded,
        &profile.name,
        &profile.job_title,
        &profile.profile_image,
        &profile.header_image,
        &profile.phone,
        &profile.email,
        &bool_to_int(profile.is_verified),
        &bool_to_int(profile.is_company),
        &columns.social_links,
        &columns.updated_at,
        &columns.id, // WHERE clause
    ];

    conn.execute(
        "UPDATE profiles SET
            username = ?1, username_folded = ?2, name = ?3, job_title = ?4,
            profile_image = ?5, header_image = ?6, phone = ?7, email = ?8,
            is_verified = ?9, is_company = ?10, social_links = ?11, updated_at = ?12
         WHERE id = ?13",
        params.as_slice(),
    )
    .map_err(map_sql_error)?;

    Ok(())
}

/// Text encodings of the columns that are not stored as-is
struct ProfileColumns {
    id: String,
    username_folded: String,
    social_links: Option<String>,
    created_at: String,
    updated_at: String,
}

impl ProfileColumns {
    fn from_profile(profile: &Profile) -> DomainResult<Self> {
        let social_links = profile
            .social_links
            .as_ref()
            .map(serde_json::to_string)
            .transpose()
            .map_err(|e| LinkfolioError::Internal(format!("Failed to encode socialLinks: {e}")))?;

        Ok(Self {
            id: profile.id.to_string(),
            username_folded: fold_username(&profile.username),
            social_links,
            created_at: format_timestamp(profile.created_at),
            updated_at: format_timestamp(profile.updated_at),
        })
    }
}

// =============================================================================
// Error Mapping
// =============================================================================

fn conversion_error<E>(index: usize, err: E) -> rusqlite::Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    rusqlite::Error::FromSqlConversionFailure(index, Type::Text, Box::new(err))
}

fn map_join_error(err: task::JoinError) -> LinkfolioError {
    LinkfolioError::Internal(format!("Task join error: {err}"))
}

// =============================================================================
// Utility Functions
// =============================================================================

fn format_timestamp(value: DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

fn parse_timestamp(index: usize, raw: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|value| value.with_timezone(&Utc))
        .map_err(|e| conversion_error(index, e))
}

fn bool_to_int(value: bool) -> i64 {
    i64::from(value)
}

fn int_to_bool(value: i64) -> bool {
    value != 0
}

// =============================================================================
// Tests
// =============================================================================
