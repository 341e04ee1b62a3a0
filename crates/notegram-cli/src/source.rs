use anyhow::{bail, Context, Result};
use sqlx::mysql::MySqlPoolOptions;
use std::fs;
use tracing::{debug, info};

/// Bulk read of all non-empty text values from the selected source.
/// Exactly one of `db_url` / `input` must be set; a failed or partial
/// fetch is fatal to the run.
pub async fn fetch_corpus(
    db_url: Option<&str>,
    input: Option<&str>,
    table: &str,
    column: &str,
    max_rows: Option<u64>,
) -> Result<Vec<String>> {
    match (db_url, input) {
        (Some(_), Some(_)) => bail!("--db-url and --input are mutually exclusive"),
        (None, None) => bail!("no corpus source: pass --db-url or --input"),
        (Some(url), None) => fetch_mysql(url, table, column, max_rows).await,
        (None, Some(path)) => fetch_file(path, max_rows),
    }
}

async fn fetch_mysql(
    url: &str,
    table: &str,
    column: &str,
    max_rows: Option<u64>,
) -> Result<Vec<String>> {
    validate_identifier(table)?;
    validate_identifier(column)?;

    info!("🔌 Connecting to MySQL...");
    let pool = MySqlPoolOptions::new()
        .max_connections(1)
        .connect(url)
        .await
        .context("database connection failed")?;

    // Identifiers cannot be bound as parameters; they are validated above.
    let mut sql = format!(
        "SELECT `{column}` FROM `{table}` WHERE `{column}` IS NOT NULL AND `{column}` <> ''"
    );
    if let Some(limit) = max_rows {
        sql.push_str(&format!(" LIMIT {limit}"));
    }
    debug!("Corpus query: {}", sql);

    let rows: Vec<String> = sqlx::query_scalar(&sql)
        .fetch_all(&pool)
        .await
        .context("corpus query failed")?;

    Ok(rows)
}

fn fetch_file(path: &str, max_rows: Option<u64>) -> Result<Vec<String>> {
    info!("📂 Reading corpus file: {}", path);
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path))?;

    let mut rows: Vec<String> = content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect();

    if let Some(limit) = max_rows {
        rows.truncate(limit as usize);
    }
    Ok(rows)
}

fn validate_identifier(name: &str) -> Result<()> {
    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        bail!("invalid identifier '{}': expected [A-Za-z0-9_]+", name);
    }
    Ok(())
}
