use anyhow::{Context, Result};
use rusqlite::Connection;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};

/// Compute the cache key for a (source text, target language) pair.
///
/// The key is a SHA-256 digest over a canonical JSON object, so the cache
/// is a pure memoization layer: two lookups with the same pair always
/// address the same row, regardless of provider or model.
fn cache_key(source_text: &str, target_language: &str) -> String {
    let cache_input = serde_json::json!({
        "source_text": source_text,
        "target_language": target_language,
    });

    let mut hasher = Sha256::new();
    hasher.update(cache_input.to_string().as_bytes());
    hex::encode(hasher.finalize())
}

/// On-disk translation cache shared across runs.
pub struct CacheManager {
    db_path: PathBuf,
}

impl CacheManager {
    /// Opens (creating if needed) the cache database under the XDG cache
    /// directory.
    pub fn new() -> Result<Self> {
        let cache_dir = crate::paths::cache_dir();

        std::fs::create_dir_all(&cache_dir).with_context(|| {
            format!("Failed to create cache directory: {}", cache_dir.display())
        })?;

        Self::open_at(&cache_dir.join("translations.db"))
    }

    /// Opens (creating if needed) a cache database at an explicit path.
    pub fn open_at(db_path: &Path) -> Result<Self> {
        let manager = Self {
            db_path: db_path.to_path_buf(),
        };

        manager.init_db()?;

        Ok(manager)
    }

    fn init_db(&self) -> Result<()> {
        let conn = self.connect()?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS translations (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                cache_key TEXT UNIQUE NOT NULL,
                source_text TEXT NOT NULL,
                target_language TEXT NOT NULL,
                translated_text TEXT NOT NULL,
                created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
                accessed_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
            )",
            [],
        )
        .context("Failed to create translations table")?;

        conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_cache_key ON translations(cache_key)",
            [],
        )
        .context("Failed to create index")?;

        Ok(())
    }

    fn connect(&self) -> Result<Connection> {
        Connection::open(&self.db_path)
            .with_context(|| format!("Failed to open cache database: {}", self.db_path.display()))
    }

    /// Look up a cached translation.
    pub fn get(&self, source_text: &str, target_language: &str) -> Result<Option<String>> {
        let cache_key = cache_key(source_text, target_language);
        let conn = self.connect()?;

        let mut stmt =
            conn.prepare("SELECT translated_text FROM translations WHERE cache_key = ?1")?;

        let result: Option<String> = stmt.query_row([&cache_key], |row| row.get(0)).ok();

        if result.is_some() {
            conn.execute(
                "UPDATE translations SET accessed_at = CURRENT_TIMESTAMP WHERE cache_key = ?1",
                [&cache_key],
            )?;
        }

        Ok(result)
    }

    /// Store a translation.
    pub fn put(
        &self,
        source_text: &str,
        target_language: &str,
        translated_text: &str,
    ) -> Result<()> {
        let cache_key = cache_key(source_text, target_language);
        let conn = self.connect()?;

        conn.execute(
            "INSERT OR REPLACE INTO translations
             (cache_key, source_text, target_language, translated_text)
             VALUES (?1, ?2, ?3, ?4)",
            [
                cache_key.as_str(),
                source_text,
                target_language,
                translated_text,
            ],
        )
        .context("Failed to insert translation into cache")?;

        Ok(())
    }
}
