//! Environment/runtime helpers
//!
//! Sanity checks run once at startup, before the database is opened.

use std::path::Path;

use tracing::{info, warn};

/// Make sure the directory holding a file-backed SQLite database exists.
///
/// Postgres URLs and in-memory SQLite URLs are left alone.
pub async fn ensure_database_dir(database_url: &str) -> anyhow::Result<()> {
    let Some(file) = sqlite_file_path(database_url) else {
        return Ok(());
    };
    let Some(parent) = Path::new(&file).parent().filter(|p| !p.as_os_str().is_empty()) else {
        return Ok(());
    };
    if tokio::fs::metadata(parent).await.is_err() {
        warn!(dir = %parent.display(), "database directory missing; creating it");
    }
    tokio::fs::create_dir_all(parent)
        .await
        .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", parent.display()))?;
    info!(dir = %parent.display(), "database directory ready");
    Ok(())
}

/// Extract the file path of a SQLite URL, `None` for other schemes or `:memory:`.
pub fn sqlite_file_path(database_url: &str) -> Option<String> {
    let rest = database_url
        .strip_prefix("sqlite://")
        .or_else(|| database_url.strip_prefix("sqlite:"))?;
    let path = rest.split('?').next().unwrap_or_default();
    if path.is_empty() || path == ":memory:" {
        return None;
    }
    Some(path.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sqlite_paths_are_extracted() {
        assert_eq!(sqlite_file_path("sqlite://data/movies.db?mode=rwc").as_deref(), Some("data/movies.db"));
        assert_eq!(sqlite_file_path("sqlite:movies.db").as_deref(), Some("movies.db"));
        assert_eq!(sqlite_file_path("sqlite::memory:"), None);
        assert_eq!(sqlite_file_path("postgres://localhost/movies"), None);
    }

    #[tokio::test]
    async fn creates_missing_parent_dir() {
        let dir = std::env::temp_dir().join(format!("movieinfo-{}", uuid::Uuid::new_v4()));
        let url = format!("sqlite://{}/movies.db?mode=rwc", dir.display());
        ensure_database_dir(&url).await.unwrap();
        assert!(tokio::fs::metadata(&dir).await.unwrap().is_dir());
        let _ = tokio::fs::remove_dir_all(&dir).await;
    }
}
