//! Environment/runtime helpers
//!
//! Sanity checks run before the store is opened.

use std::path::Path;

use tracing::info;

/// Create the parent directory of a file-backed SQLite URL if it is missing.
/// In-memory URLs are left alone.
pub async fn ensure_sqlite_parent(url: &str) -> anyhow::Result<()> {
    let Some(file) = sqlite_file_path(url) else { return Ok(()) };
    let Some(parent) = Path::new(&file).parent().filter(|p| !p.as_os_str().is_empty()) else {
        return Ok(());
    };
    if tokio::fs::metadata(parent).await.is_err() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", parent.display()))?;
        info!(dir = %parent.display(), "created database directory");
    }
    Ok(())
}

/// Extract the file path from a `sqlite:` URL, `None` for in-memory stores.
pub fn sqlite_file_path(url: &str) -> Option<String> {
    let rest = url.strip_prefix("sqlite://").or_else(|| url.strip_prefix("sqlite:"))?;
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
    fn file_path_strips_scheme_and_query() {
        assert_eq!(
            sqlite_file_path("sqlite://data/parking.db?mode=rwc").as_deref(),
            Some("data/parking.db")
        );
        assert_eq!(sqlite_file_path("sqlite:parking.db").as_deref(), Some("parking.db"));
    }

    #[test]
    fn memory_urls_have_no_path() {
        assert_eq!(sqlite_file_path("sqlite::memory:"), None);
        assert_eq!(sqlite_file_path("postgres://x"), None);
    }
}
