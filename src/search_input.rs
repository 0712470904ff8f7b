use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use log::debug;
use tokio::sync::mpsc::Sender;
use tokio::task::JoinHandle;

pub const DEBOUNCE: Duration = Duration::from_millis(300);

/// Turns raw edits of the search box into search terms.
///
/// Edits are debounced; Enter and clear go out right away and cancel whatever
/// edit was still waiting. Each term is emitted at most once: Enter after the
/// debounce already fired for the same edit sends nothing.
pub struct SearchInput {
    term: String,
    delay: Duration,
    tx: Sender<String>,
    pending: Option<JoinHandle<()>>,
    // Bumped on every edit. A term is sent only by whoever claims its
    // generation first in `emitted`.
    generation: u64,
    emitted: Arc<AtomicU64>,
}

impl SearchInput {
    pub fn new(tx: Sender<String>) -> Self {
        SearchInput {
            term: String::new(),
            delay: DEBOUNCE,
            tx,
            pending: None,
            generation: 0,
            emitted: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Must be called from inside a tokio runtime.
    pub fn on_change(&mut self, value: impl Into<String>) {
        self.set_term(value.into());

        let tx = self.tx.clone();
        let term = self.term.clone();
        let delay = self.delay;
        let generation = self.generation;
        let emitted = Arc::clone(&self.emitted);
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if claim(&emitted, generation) {
                debug!("Debounced search: {:?}", term);
                let _ = tx.send(term).await;
            }
        }));
    }

    pub async fn on_enter(&mut self) {
        self.cancel_pending();
        if claim(&self.emitted, self.generation) {
            let _ = self.tx.send(self.term.clone()).await;
        } else {
            debug!("Search {:?} already sent", self.term);
        }
    }

    /// Replace the whole term and press Enter.
    pub async fn submit(&mut self, value: impl Into<String>) {
        self.set_term(value.into());
        self.on_enter().await;
    }

    pub async fn on_clear(&mut self) {
        self.set_term(String::new());
        self.on_enter().await;
    }

    fn set_term(&mut self, term: String) {
        self.cancel_pending();
        self.term = term;
        self.generation += 1;
    }

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

/// True for the first caller to claim `generation`.
fn claim(emitted: &AtomicU64, generation: u64) -> bool {
    emitted.fetch_max(generation, Ordering::SeqCst) < generation
}

impl Drop for SearchInput {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}
