//! Content Library Engine
//!
//! SQLite-backed document store for content items. The payload is kept
//! as a JSON column so the schema never changes when the generation
//! service returns richer data; id, owner, kind and timestamp are
//! first-class columns for filtering.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};
use std::path::PathBuf;
use tokio::sync::Mutex;

use super::error::{StoreError, StoreResult};
use super::types::{ContentBody, ContentItem, ContentKind};

/// Content library configuration
#[derive(Debug, Clone)]
pub struct LibraryConfig {
    /// Directory holding the SQLite database file
    pub data_dir: PathBuf,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        let data_dir = dirs::data_local_dir()
            .map(|p| p.join("storycrafter"))
            .unwrap_or_else(|| PathBuf::from("./storycrafter_data"));
        Self { data_dir }
    }
}

impl LibraryConfig {
    /// Create a config rooted at the given directory
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }
}

/// SQLite-backed store for content items
///
/// The connection sits behind an async mutex; all operations are short
/// single-statement transactions, so contention is not a concern at
/// this scale.
pub struct ContentLibrary {
    conn: Mutex<Connection>,
}

impl ContentLibrary {
    /// Open (or create) the library at the configured data directory
    pub fn open(config: &LibraryConfig) -> StoreResult<Self> {
        std::fs::create_dir_all(&config.data_dir)?;
        let path = config.data_dir.join("content.db");
        let conn = Connection::open(path)?;
        Self::init_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open an in-memory library (tests)
    pub fn open_in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory()?;
        Self::init_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn init_schema(conn: &Connection) -> StoreResult<()> {
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS content (
                id         TEXT PRIMARY KEY,
                owner      TEXT NOT NULL,
                kind       TEXT NOT NULL,
                data       TEXT NOT NULL,
                created_at INTEGER NOT NULL
            );
            CREATE INDEX IF NOT EXISTS idx_content_owner ON content(owner);",
        )?;
        Ok(())
    }

    /// Insert a new item for the owner, assigning id and timestamp
    pub async fn insert(
        &self,
        owner: &str,
        kind: ContentKind,
        body: ContentBody,
    ) -> StoreResult<ContentItem> {
        let item = ContentItem {
            id: uuid::Uuid::new_v4().to_string(),
            kind,
            data: body,
            created_at: Utc::now(),
        };

        let data = serde_json::to_string(&item.data)?;
        let conn = self.conn.lock().await;
        conn.execute(
            "INSERT INTO content (id, owner, kind, data, created_at) VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                item.id,
                owner,
                item.kind.as_str(),
                data,
                item.created_at.timestamp_millis()
            ],
        )?;

        Ok(item)
    }

    /// List all items belonging to the owner, in insertion order
    pub async fn list_for_owner(&self, owner: &str) -> StoreResult<Vec<ContentItem>> {
        let conn = self.conn.lock().await;
        let mut stmt = conn.prepare(
            "SELECT id, kind, data, created_at FROM content WHERE owner = ?1 ORDER BY rowid",
        )?;

        let rows = stmt.query_map(params![owner], |row| {
            let id: String = row.get(0)?;
            let kind: String = row.get(1)?;
            let data: String = row.get(2)?;
            let created_at: i64 = row.get(3)?;
            Ok((id, kind, data, created_at))
        })?;

        let mut items = Vec::new();
        for row in rows {
            let (id, kind, data, created_at) = row?;
            // Rows with an unknown kind would only appear after a schema
            // rollback; skip them rather than failing the whole list.
            let Some(kind) = ContentKind::parse(&kind) else {
                tracing::warn!(item_id = %id, kind = %kind, "Skipping item with unknown kind");
                continue;
            };
            let data: ContentBody = serde_json::from_str(&data)?;
            items.push(ContentItem {
                id,
                kind,
                data,
                created_at: millis_to_datetime(created_at),
            });
        }

        Ok(items)
    }

    /// Delete one item by id; errors if the id is absent for this owner
    pub async fn delete(&self, owner: &str, id: &str) -> StoreResult<()> {
        let conn = self.conn.lock().await;
        let affected = conn.execute(
            "DELETE FROM content WHERE owner = ?1 AND id = ?2",
            params![owner, id],
        )?;

        if affected == 0 {
            return Err(StoreError::NotFound(id.to_string()));
        }
        Ok(())
    }

    /// Number of items the owner holds
    pub async fn count_for_owner(&self, owner: &str) -> StoreResult<u64> {
        let conn = self.conn.lock().await;
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM content WHERE owner = ?1",
            params![owner],
            |row| row.get(0),
        )?;
        Ok(count as u64)
    }

    /// Total item count across all owners (health reporting)
    pub async fn total_count(&self) -> StoreResult<u64> {
        let conn = self.conn.lock().await;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM content", [], |row| row.get(0))?;
        Ok(count as u64)
    }
}

fn millis_to_datetime(millis: i64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(millis).unwrap_or_else(Utc::now)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(prompt: &str, response: &str) -> ContentBody {
        ContentBody {
            prompt: prompt.to_string(),
            response: response.to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_and_list() {
        let lib = ContentLibrary::open_in_memory().unwrap();

        let created = lib
            .insert("alice", ContentKind::Script, body("intro", "Once upon..."))
            .await
            .unwrap();

        let items = lib.list_for_owner("alice").await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, created.id);
        assert_eq!(items[0].kind, ContentKind::Script);
        assert_eq!(items[0].data.prompt, "intro");
    }

    #[tokio::test]
    async fn test_insertion_order_preserved() {
        let lib = ContentLibrary::open_in_memory().unwrap();
        for i in 0..5 {
            lib.insert("alice", ContentKind::Title, body(&format!("p{}", i), "r"))
                .await
                .unwrap();
        }

        let items = lib.list_for_owner("alice").await.unwrap();
        let prompts: Vec<&str> = items.iter().map(|i| i.data.prompt.as_str()).collect();
        assert_eq!(prompts, vec!["p0", "p1", "p2", "p3", "p4"]);
    }

    #[tokio::test]
    async fn test_owner_isolation() {
        let lib = ContentLibrary::open_in_memory().unwrap();
        lib.insert("alice", ContentKind::Seo, body("a", "1"))
            .await
            .unwrap();
        lib.insert("bob", ContentKind::Seo, body("b", "2"))
            .await
            .unwrap();

        let alice = lib.list_for_owner("alice").await.unwrap();
        assert_eq!(alice.len(), 1);
        assert_eq!(alice[0].data.prompt, "a");
        assert_eq!(lib.count_for_owner("bob").await.unwrap(), 1);
        assert_eq!(lib.total_count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_delete() {
        let lib = ContentLibrary::open_in_memory().unwrap();
        let item = lib
            .insert("alice", ContentKind::Script, body("p", "r"))
            .await
            .unwrap();

        lib.delete("alice", &item.id).await.unwrap();
        assert!(lib.list_for_owner("alice").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_unknown_id_errors() {
        let lib = ContentLibrary::open_in_memory().unwrap();
        let err = lib.delete("alice", "no-such-id").await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_scoped_to_owner() {
        let lib = ContentLibrary::open_in_memory().unwrap();
        let item = lib
            .insert("alice", ContentKind::Script, body("p", "r"))
            .await
            .unwrap();

        // Bob cannot delete Alice's item
        let err = lib.delete("bob", &item.id).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
        assert_eq!(lib.count_for_owner("alice").await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_open_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let config = LibraryConfig::new(dir.path());
        let lib = ContentLibrary::open(&config).unwrap();

        lib.insert("alice", ContentKind::Title, body("p", "r"))
            .await
            .unwrap();
        drop(lib);

        // Reopen and confirm persistence
        let lib = ContentLibrary::open(&config).unwrap();
        assert_eq!(lib.count_for_owner("alice").await.unwrap(), 1);
    }
}
