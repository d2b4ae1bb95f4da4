use anyhow::Result;
use chrono::Utc;
use log::{debug, warn};
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::config::DebugConfig;

/// Write a value as pretty-printed JSON, creating the parent directory if
/// needed.
pub async fn save_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(dir) = path.parent() {
        tokio::fs::create_dir_all(dir).await?;
    }

    let pretty = serde_json::to_string_pretty(value)?;
    tokio::fs::write(path, pretty).await?;

    debug!("Saved debug file: {}", path.display());
    Ok(())
}

/// Filename-safe timestamp, e.g. "2026-08-23 14-05-09".
pub fn timestamp() -> String {
    Utc::now().format("%Y-%m-%d %H-%M-%S").to_string()
}

/// Debug filenames interpolate caller-supplied values (wallet addresses,
/// mint lists); strip path separators so the file cannot land outside the
/// output directory.
fn sanitize_file_name(name: &str) -> String {
    name.replace(['/', '\\'], "-")
}

/// Best-effort debug dump. Does nothing unless debug persistence is
/// enabled; a failed write is logged and swallowed so it can never affect
/// the response.
pub async fn save_debug_file<T: Serialize>(config: &DebugConfig, file_name: &str, value: &T) {
    if !config.save_debug_files {
        return;
    }

    let path = PathBuf::from(&config.output_dir).join(sanitize_file_name(file_name));
    if let Err(e) = save_json(&path, value).await {
        warn!("Failed to save debug file {}: {}", path.display(), e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_save_json_creates_directories() {
        let dir = std::env::temp_dir().join(format!("wallet-dashboard-test-{}", std::process::id()));
        let path = dir.join("nested").join("out.json");

        save_json(&path, &json!({"status": "ok"})).await.unwrap();

        let contents = tokio::fs::read_to_string(&path).await.unwrap();
        assert!(contents.contains("\"status\": \"ok\""));

        tokio::fs::remove_dir_all(&dir).await.unwrap();
    }

    #[tokio::test]
    async fn test_save_debug_file_disabled_writes_nothing() {
        let dir = std::env::temp_dir().join(format!("wallet-dashboard-off-{}", std::process::id()));
        let config = DebugConfig {
            save_debug_files: false,
            output_dir: dir.to_string_lossy().into_owned(),
        };

        save_debug_file(&config, "never.json", &json!([1, 2, 3])).await;

        assert!(!dir.exists());
    }

    #[tokio::test]
    async fn test_save_debug_file_confines_writes_to_output_dir() {
        let dir =
            std::env::temp_dir().join(format!("wallet-dashboard-confine-{}", std::process::id()));
        let config = DebugConfig {
            save_debug_files: true,
            output_dir: dir.to_string_lossy().into_owned(),
        };

        save_debug_file(&config, "balance-../../escape.json", &json!({"ok": true})).await;

        assert!(dir.join("balance-..-..-escape.json").exists());
        assert!(!dir.parent().unwrap().join("escape.json").exists());

        tokio::fs::remove_dir_all(&dir).await.unwrap();
    }

    #[test]
    fn test_sanitize_file_name() {
        assert_eq!(
            sanitize_file_name("token-prices-a/b\\c.json"),
            "token-prices-a-b-c.json"
        );
        assert_eq!(sanitize_file_name("plain.json"), "plain.json");
    }

    #[test]
    fn test_timestamp_is_filename_safe() {
        let ts = timestamp();
        assert!(!ts.contains(':'));
        assert!(!ts.contains('T'));
    }
}
