#![allow(dead_code)]

use std::sync::Arc;

use chrono::Utc;
use linkfolio_domain::{Profile, ProfileData};
use linkfolio_infra::database::{DbManager, SqliteProfileRepository};
use tempfile::TempDir;

/// Temporary database wrapper that keeps the underlying file alive for the
/// duration of a test run.
pub struct TestDatabase {
    pub manager: Arc<DbManager>,
    _temp_dir: TempDir,
}

impl TestDatabase {
    /// Create a new temporary database with migrations applied.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("temp dir should be created");
        let db_path = temp_dir.path().join("linkfolio-test.db");

        let manager = DbManager::new(&db_path, 4).expect("db manager should be created");
        manager.run_migrations().expect("schema migrations should apply");

        Self { manager: Arc::new(manager), _temp_dir: temp_dir }
    }

    pub fn repository(&self) -> SqliteProfileRepository {
        SqliteProfileRepository::new(Arc::clone(&self.manager))
    }

    /// Count rows in the profiles table.
    pub fn profile_count(&self) -> i64 {
        let conn = self.manager.get_connection().expect("connection should be available");
        conn.query_row("SELECT COUNT(*) FROM profiles", [], |row| row.get(0))
            .expect("count query should succeed")
    }
}

impl Default for TestDatabase {
    fn default() -> Self {
        Self::new()
    }
}

/// Minimal valid profile for `username`.
pub fn profile(username: &str) -> Profile {
    Profile::create(
        ProfileData {
            username: username.to_string(),
            name: "Test User".to_string(),
            job_title: "Engineer".to_string(),
            ..ProfileData::default()
        },
        Utc::now(),
    )
}
