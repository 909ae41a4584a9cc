use anyhow::Result;
use crate::server::{ChatServer, StartResponse};

/// Turns returned to the widget when it loads.
pub const HISTORY_LIMIT: usize = 10;

impl ChatServer {
    pub async fn do_start(&self) -> Result<StartResponse> {
        let db = self.store.connect()?;
        let name = db.get_name()?;
        let history = db
            .recent_turns(HISTORY_LIMIT)?
            .into_iter()
            .map(|turn| (turn.sender.as_str().to_string(), turn.message))
            .collect();

        Ok(StartResponse { name, history })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Store;
    use crate::types::Sender;

    #[tokio::test]
    async fn start_returns_name_and_last_turns() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::init(&dir.path().join("chat.db")).unwrap();
        {
            let db = store.connect().unwrap();
            db.set_name("Robin").unwrap();
            for i in 0..15 {
                db.append_turn(Sender::User, &format!("turn {}", i)).unwrap();
            }
        }

        let server = ChatServer { store };
        let start = server.do_start().await.unwrap();
        assert_eq!(start.name.as_deref(), Some("Robin"));
        assert_eq!(start.history.len(), HISTORY_LIMIT);
        assert_eq!(start.history[0], ("user".to_string(), "turn 5".to_string()));
        assert_eq!(start.history[9].1, "turn 14");
    }
}
