//! Message processing: runs the TEA update loop and dispatches actions

use std::sync::Arc;

use tokio::sync::mpsc;

use dbview_api::TableApi;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function, following up on
/// chained messages and spawning any returned actions
pub fn process_message<C>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    api: &Arc<C>,
) where
    C: TableApi + Send + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, api, msg_tx);
        }

        // Continue with follow-up message
        msg = result.message;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presenter::{DataPanel, Loadable};
    use dbview_api::test_utils::{test_snapshot, FakeTableApi};
    use serde_json::json;

    /// Feed every message the background tasks send back until `expected`
    /// messages have been processed
    async fn drain(
        state: &mut AppState,
        rx: &mut mpsc::Receiver<Message>,
        tx: &mpsc::Sender<Message>,
        api: &Arc<FakeTableApi>,
        expected: usize,
    ) {
        for _ in 0..expected {
            let msg = rx.recv().await.unwrap();
            process_message(state, msg, tx, api);
        }
    }

    #[tokio::test]
    async fn test_startup_auto_selects_first_table() {
        let api = Arc::new(
            FakeTableApi::new()
                .with_table(
                    "alpha",
                    test_snapshot(&[("id", "INTEGER")], vec![json!({"id": 1})]),
                )
                .with_table("beta", test_snapshot(&[], vec![])),
        );
        let (tx, mut rx) = mpsc::channel(16);
        let mut state = AppState::new();

        process_message(&mut state, Message::Startup, &tx, &api);
        // database info + tables, then table info + rows of the first table
        drain(&mut state, &mut rx, &tx, &api, 4).await;

        assert!(matches!(state.database, Loadable::Loaded(_)));
        assert_eq!(state.table_names(), ["alpha", "beta"]);
        assert_eq!(state.active_table.as_deref(), Some("alpha"));
        assert!(matches!(state.table_info, Some(Loadable::Loaded(_))));
        assert!(matches!(state.data, DataPanel::Populated { .. }));
        assert_eq!(state.data.record_count_label(), "1 条记录");
    }

    #[tokio::test]
    async fn test_empty_table_list_selects_nothing() {
        let api = Arc::new(FakeTableApi::new());
        let (tx, mut rx) = mpsc::channel(16);
        let mut state = AppState::new();

        process_message(&mut state, Message::Startup, &tx, &api);
        drain(&mut state, &mut rx, &tx, &api, 2).await;

        assert!(state.active_table.is_none());
        assert!(matches!(state.data, DataPanel::Idle));
        assert_eq!(api.calls().len(), 2);
    }

    #[tokio::test]
    async fn test_refresh_refetches_rows_only() {
        let api = Arc::new(FakeTableApi::new().with_table(
            "users",
            test_snapshot(&[("id", "INTEGER")], vec![json!({"id": 1})]),
        ));
        let (tx, mut rx) = mpsc::channel(16);
        let mut state = AppState::new();

        process_message(&mut state, Message::SelectTable("users".into()), &tx, &api);
        drain(&mut state, &mut rx, &tx, &api, 2).await;

        process_message(&mut state, Message::Refresh, &tx, &api);
        assert!(state.data.is_loading());
        drain(&mut state, &mut rx, &tx, &api, 1).await;

        assert!(matches!(state.data, DataPanel::Populated { .. }));
        let calls = api.calls();
        assert_eq!(
            calls
                .iter()
                .filter(|c| c.starts_with("table_rows:users"))
                .count(),
            2
        );
        assert_eq!(
            calls
                .iter()
                .filter(|c| c.starts_with("table_info:users"))
                .count(),
            1
        );
    }
}
