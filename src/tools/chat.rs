use anyhow::{Context, Result};
use rand::Rng;

use crate::responder;
use crate::server::ChatServer;
use crate::store::sqlite::SqliteStore;
use crate::types::{Reply, Sender};

impl ChatServer {
    /// Answer one message and record both sides of the exchange.
    pub async fn do_chat(&self, message: &str) -> Result<String> {
        let db = self.store.connect()?;

        db.append_turn(Sender::User, message)?;
        let reply = respond(&db, message, &mut rand::thread_rng())?;
        let rendered = reply.render();
        db.append_turn(Sender::Bot, &rendered)?;

        tracing::debug!(branch = reply.branch(), "chat reply");
        Ok(rendered)
    }
}

/// Pick a reply. Order matters: crisis, then name learning, then the
/// knowledge table, then the fallback prompt.
pub fn respond<R: Rng + ?Sized>(db: &SqliteStore, message: &str, rng: &mut R) -> Result<Reply> {
    let text = message.to_lowercase();

    if responder::is_crisis(&text) {
        tracing::warn!("crisis keyword detected");
        let entry = db
            .entry_for_keyword(responder::CRISIS_ENTRY)?
            .context("crisis entry missing from knowledge base")?;
        return Ok(Reply::Crisis {
            response: entry.response,
            source: entry.source,
        });
    }

    if let Some(name) = responder::extract_name(&text) {
        db.set_name(&name)?;
        return Ok(Reply::NameLearned { name });
    }

    let matches = db.find_matches(&text)?;
    if let Some((response, source)) = responder::choose_match(&matches, rng) {
        return Ok(Reply::Knowledge { response, source });
    }

    Ok(Reply::Fallback {
        name: responder::display_name(db.get_name()?),
    })
}
