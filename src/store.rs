use tokio::sync::watch;

/// Snapshot of the current test session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub is_loading: bool,
    pub error: Option<String>,
}

/// Observable holder for [`SessionState`]. Clones share the same state;
/// subscribers see every change in order.
#[derive(Debug, Clone)]
pub struct SessionStore {
    tx: watch::Sender<SessionState>,
}

impl SessionStore {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(SessionState::default());
        Self { tx }
    }

    pub fn set_loading(&self, is_loading: bool) {
        self.tx.send_modify(|state| state.is_loading = is_loading);
    }

    pub fn set_error(&self, error: Option<String>) {
        self.tx.send_modify(|state| state.error = error);
    }

    #[allow(dead_code)]
    pub fn state(&self) -> SessionState {
        self.tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.tx.subscribe()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle_without_error() {
        let store = SessionStore::new();

        assert_eq!(
            store.state(),
            SessionState {
                is_loading: false,
                error: None,
            }
        );
    }

    #[test]
    fn setters_update_the_snapshot() {
        let store = SessionStore::new();

        store.set_loading(true);
        store.set_error(Some("boom".to_string()));
        assert_eq!(
            store.state(),
            SessionState {
                is_loading: true,
                error: Some("boom".to_string()),
            }
        );

        store.set_loading(false);
        store.set_error(None);
        assert_eq!(store.state(), SessionState::default());
    }

    #[tokio::test]
    async fn subscribers_observe_changes() {
        let store = SessionStore::new();
        let mut updates = store.subscribe();

        store.set_loading(true);
        updates.changed().await.expect("sender alive");
        assert!(updates.borrow_and_update().is_loading);

        store.set_error(Some("request failed".to_string()));
        updates.changed().await.expect("sender alive");
        assert_eq!(
            updates.borrow_and_update().error.as_deref(),
            Some("request failed")
        );
    }
}
