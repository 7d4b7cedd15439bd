//! One-shot loader that seeds employees through the running API.
//!
//! Reads `{"characters": [{"characterName": "..."}]}` and POSTs each name to
//! `/emp`. Every item is logged as added or failed; nothing is retried.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use serde::Deserialize;
use thiserror::Error;
use tracing::{error, info, warn};

#[derive(Parser, Debug)]
#[command(name = "load-employees", about = "Seed employees from a JSON character list")]
struct Args {
    /// JSON document with a `characters` array
    #[arg(long, default_value = "app/characters.json")]
    file: PathBuf,

    /// Base URL of the parking management API
    #[arg(long, env = "API_URL", default_value = "http://127.0.0.1:8000")]
    api_url: String,
}

#[derive(Debug, Default, Deserialize)]
struct CharacterFile {
    #[serde(default)]
    characters: Vec<Character>,
}

#[derive(Debug, Deserialize)]
struct Character {
    #[serde(rename = "characterName", default)]
    character_name: Option<String>,
}

#[derive(Debug, Error)]
enum LoadError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("status code: {status}, message: {body}")]
    Rejected { status: reqwest::StatusCode, body: String },
}

#[derive(Debug, Default, PartialEq, Eq)]
struct Summary {
    added: usize,
    failed: usize,
}

/// Names to submit, in document order; entries without a name are skipped.
fn names(doc: &CharacterFile) -> Vec<&str> {
    doc.characters
        .iter()
        .filter_map(|c| c.character_name.as_deref())
        .filter(|n| !n.is_empty())
        .collect()
}

async fn add_employee(client: &reqwest::Client, endpoint: &str, name: &str) -> Result<(), LoadError> {
    let res = client
        .post(endpoint)
        .json(&serde_json::json!({ "name": name }))
        .send()
        .await?;
    let status = res.status();
    if status == reqwest::StatusCode::CREATED {
        return Ok(());
    }
    let body = res.text().await.unwrap_or_default();
    Err(LoadError::Rejected { status, body })
}

async fn load(args: &Args) -> anyhow::Result<Summary> {
    let raw = tokio::fs::read_to_string(&args.file)
        .await
        .with_context(|| format!("reading {}", args.file.display()))?;
    let doc: CharacterFile = serde_json::from_str(&raw).context("parsing character list")?;

    let endpoint = format!("{}/emp", args.api_url.trim().trim_end_matches('/'));
    let client = reqwest::Client::new();
    let mut summary = Summary::default();
    for name in names(&doc) {
        match add_employee(&client, &endpoint, name).await {
            Ok(()) => {
                summary.added += 1;
                info!(%name, "added employee");
            }
            Err(e) => {
                summary.failed += 1;
                warn!(%name, error = %e, "failed to add employee");
            }
        }
    }
    Ok(summary)
}

#[tokio::main]
async fn main() -> std::process::ExitCode {
    dotenvy::dotenv().ok();
    common::utils::logging::init_logging_from_env();
    let args = Args::parse();

    match load(&args).await {
        Ok(summary) => {
            info!(added = summary.added, failed = summary.failed, "load finished");
            std::process::ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %format!("{e:#}"), "load aborted");
            std::process::ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_skip_missing_and_empty() {
        let doc: CharacterFile = serde_json::from_str(
            r#"{"characters": [
                {"characterName": "Frodo Baggins"},
                {"house": "Stark"},
                {"characterName": ""},
                {"characterName": "Arya Stark"}
            ]}"#,
        )
        .unwrap();
        assert_eq!(names(&doc), vec!["Frodo Baggins", "Arya Stark"]);
    }

    #[test]
    fn missing_characters_key_is_empty() {
        let doc: CharacterFile = serde_json::from_str("{}").unwrap();
        assert!(names(&doc).is_empty());
    }

    #[test]
    fn rejected_error_reports_status_and_body() {
        let e = LoadError::Rejected {
            status: reqwest::StatusCode::UNPROCESSABLE_ENTITY,
            body: "too short".into(),
        };
        assert_eq!(e.to_string(), "status code: 422 Unprocessable Entity, message: too short");
    }

    async fn start_api() -> anyhow::Result<String> {
        use migration::MigratorTrait;

        let db = models::db::connect_with_config(&configs::DatabaseConfig::in_memory()).await?;
        migration::Migrator::up(&db, None).await?;
        let app = server::routes::build_router(
            server::state::ServerState::new(db),
            server::startup::build_cors(),
        );
        let listener = tokio::net::TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
        let addr = listener.local_addr()?;
        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
        });
        Ok(format!("http://{addr}/"))
    }

    #[tokio::test]
    async fn load_counts_added_and_rejected_and_keeps_going() -> anyhow::Result<()> {
        let api_url = start_api().await?;
        let file = std::env::temp_dir().join(format!("characters-{}.json", uuid::Uuid::new_v4()));
        tokio::fs::write(
            &file,
            r#"{"characters": [
                {"characterName": "A"},
                {"house": "Baggins"},
                {"characterName": "Frodo Baggins"}
            ]}"#,
        )
        .await?;

        let summary = load(&Args { file: file.clone(), api_url: api_url.clone() }).await;
        tokio::fs::remove_file(&file).await?;
        assert_eq!(summary?, Summary { added: 1, failed: 1 });

        let listed: serde_json::Value = reqwest::get(format!("{api_url}emp")).await?.json().await?;
        assert_eq!(listed, serde_json::json!([{"id": 1, "name": "Frodo Baggins"}]));
        Ok(())
    }

    #[tokio::test]
    async fn unreadable_file_aborts_load() {
        let args = Args {
            file: PathBuf::from("/nonexistent/characters.json"),
            api_url: "http://127.0.0.1:9".into(),
        };
        let err = load(&args).await.unwrap_err();
        assert!(format!("{err:#}").contains("reading /nonexistent/characters.json"));
    }
}
