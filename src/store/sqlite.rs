use std::path::Path;
use std::time::Duration;
use anyhow::{Context, Result};
use rusqlite::Connection;

use crate::types::{HistoryTurn, KnowledgeEntry, Sender};

pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    pub fn open(db_path: &Path) -> Result<Self> {
        let conn = Connection::open(db_path)
            .with_context(|| format!("opening {}", db_path.display()))?;
        conn.busy_timeout(Duration::from_secs(5))?;
        Ok(Self { conn })
    }

    pub fn migrate(&self) -> Result<()> {
        self.conn.execute_batch("
            CREATE TABLE IF NOT EXISTS user_profile (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS chat_history (
                id INTEGER PRIMARY KEY,
                sender TEXT NOT NULL,
                message TEXT NOT NULL,
                timestamp TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS knowledge_base (
                id INTEGER PRIMARY KEY,
                keyword TEXT NOT NULL,
                response TEXT NOT NULL,
                source TEXT NOT NULL
            );
        ")?;
        Ok(())
    }

    // knowledge

    pub fn knowledge_count(&self) -> Result<usize> {
        let n: i64 = self.conn.query_row(
            "SELECT count(*) FROM knowledge_base",
            [],
            |row| row.get(0),
        )?;
        Ok(n as usize)
    }

    /// Insert `entries` only if the table is empty. Returns the number of
    /// rows inserted (0 when already seeded).
    pub fn seed_if_empty(&self, entries: &[(&str, &str, &str)]) -> Result<usize> {
        let tx = self.conn.unchecked_transaction()?;
        let existing: i64 = tx.query_row(
            "SELECT count(*) FROM knowledge_base",
            [],
            |row| row.get(0),
        )?;
        if existing > 0 {
            return Ok(0);
        }

        {
            let mut stmt = tx.prepare(
                "INSERT INTO knowledge_base (keyword, response, source) \
                 VALUES (?1, ?2, ?3)"
            )?;
            for (keyword, response, source) in entries {
                stmt.execute(rusqlite::params![keyword, response, source])?;
            }
        }
        tx.commit()?;
        Ok(entries.len())
    }

    pub fn all_entries(&self) -> Result<Vec<KnowledgeEntry>> {
        let mut stmt = self.conn.prepare(
            "SELECT keyword, response, source FROM knowledge_base ORDER BY id"
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(KnowledgeEntry {
                keyword: row.get(0)?,
                response: row.get(1)?,
                source: row.get(2)?,
            })
        })?;

        let mut results = Vec::new();
        for row in rows {
            results.push(row?);
        }
        Ok(results)
    }

    /// Every entry whose keyword occurs somewhere in `text`, compared
    /// case-insensitively, in insertion order.
    pub fn find_matches(&self, text: &str) -> Result<Vec<(String, String)>> {
        let probe = text.to_lowercase();
        Ok(self
            .all_entries()?
            .into_iter()
            .filter(|e| probe.contains(&e.keyword.to_lowercase()))
            .map(|e| (e.response, e.source))
            .collect())
    }

    pub fn entry_for_keyword(&self, keyword: &str) -> Result<Option<KnowledgeEntry>> {
        let mut stmt = self.conn.prepare(
            "SELECT keyword, response, source FROM knowledge_base \
             WHERE keyword = ?1 ORDER BY id LIMIT 1"
        )?;

        let mut rows = stmt.query_map(rusqlite::params![keyword], |row| {
            Ok(KnowledgeEntry {
                keyword: row.get(0)?,
                response: row.get(1)?,
                source: row.get(2)?,
            })
        })?;

        match rows.next() {
            Some(row) => Ok(Some(row?)),
            None => Ok(None),
        }
    }

    // profile

    pub fn get_name(&self) -> Result<Option<String>> {
        let mut stmt = self.conn.prepare("SELECT name FROM user_profile LIMIT 1")?;
        let mut rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
        match rows.next() {
            Some(row) => Ok(Some(row?)),
            None => Ok(None),
        }
    }

    pub fn set_name(&self, name: &str) -> Result<()> {
        let tx = self.conn.unchecked_transaction()?;
        tx.execute("DELETE FROM user_profile", [])?;
        tx.execute(
            "INSERT INTO user_profile (name) VALUES (?1)",
            rusqlite::params![name],
        )?;
        tx.commit()?;
        Ok(())
    }

    // history

    pub fn append_turn(&self, sender: Sender, message: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO chat_history (sender, message, timestamp) VALUES (?1, ?2, ?3)",
            rusqlite::params![
                sender.as_str(),
                message,
                chrono::Utc::now().to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    /// Up to `limit` most recent turns, oldest first.
    pub fn recent_turns(&self, limit: usize) -> Result<Vec<HistoryTurn>> {
        let mut stmt = self.conn.prepare(
            "SELECT sender, message, timestamp FROM chat_history \
             ORDER BY id DESC LIMIT ?1"
        )?;

        let rows = stmt.query_map(rusqlite::params![limit as i64], |row| {
            Ok(HistoryTurn {
                sender: parse_sender(row.get::<_, String>(0)?),
                message: row.get(1)?,
                timestamp: parse_dt(row.get::<_, String>(2)?),
            })
        })?;

        let mut results = Vec::new();
        for row in rows {
            results.push(row?);
        }
        results.reverse();
        Ok(results)
    }

    pub fn turn_count(&self) -> Result<usize> {
        let n: i64 = self.conn.query_row(
            "SELECT count(*) FROM chat_history",
            [],
            |row| row.get(0),
        )?;
        Ok(n as usize)
    }
}

fn parse_dt(s: String) -> chrono::DateTime<chrono::Utc> {
    chrono::DateTime::parse_from_rfc3339(&s)
        .map(|dt| dt.with_timezone(&chrono::Utc))
        .unwrap_or_else(|_| chrono::Utc::now())
}

fn parse_sender(s: String) -> Sender {
    Sender::from_str(&s).unwrap_or(Sender::Bot)
}
