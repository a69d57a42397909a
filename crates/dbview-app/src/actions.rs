//! Action handlers: UpdateAction dispatch and background task spawning

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, warn};

use dbview_api::TableApi;

use crate::handler::UpdateAction;
use crate::message::Message;
use crate::state::RequestId;

/// Execute an action by spawning background fetch tasks.
///
/// Each task sends exactly one result message back on `msg_tx`.
pub fn handle_action<C>(action: UpdateAction, api: &Arc<C>, msg_tx: &mpsc::Sender<Message>)
where
    C: TableApi + Send + Sync + 'static,
{
    match action {
        UpdateAction::LoadStartup => {
            spawn_database_info(api.clone(), msg_tx.clone());
            spawn_list_tables(api.clone(), msg_tx.clone());
        }

        UpdateAction::LoadTable {
            table,
            limit,
            info_request,
            rows_request,
        } => {
            spawn_table_info(api.clone(), msg_tx.clone(), table.clone(), info_request);
            spawn_table_rows(api.clone(), msg_tx.clone(), table, limit, rows_request);
        }

        UpdateAction::LoadRows {
            table,
            limit,
            request_id,
        } => {
            spawn_table_rows(api.clone(), msg_tx.clone(), table, limit, request_id);
        }
    }
}

async fn send(msg_tx: &mpsc::Sender<Message>, message: Message) {
    if msg_tx.send(message).await.is_err() {
        warn!("Message channel closed, dropping fetch result");
    }
}

fn spawn_database_info<C>(api: Arc<C>, msg_tx: mpsc::Sender<Message>)
where
    C: TableApi + Send + Sync + 'static,
{
    tokio::spawn(async move {
        let result = api.database_info().await;
        send(&msg_tx, Message::DatabaseInfoLoaded(result)).await;
    });
}

fn spawn_list_tables<C>(api: Arc<C>, msg_tx: mpsc::Sender<Message>)
where
    C: TableApi + Send + Sync + 'static,
{
    tokio::spawn(async move {
        let result = api.list_tables().await;
        send(&msg_tx, Message::TablesLoaded(result)).await;
    });
}

fn spawn_table_info<C>(
    api: Arc<C>,
    msg_tx: mpsc::Sender<Message>,
    table: String,
    request_id: RequestId,
) where
    C: TableApi + Send + Sync + 'static,
{
    tokio::spawn(async move {
        debug!("Fetching info of '{}' ({:?})", table, request_id);
        let result = api.table_info(&table).await;
        send(
            &msg_tx,
            Message::TableInfoLoaded {
                request_id,
                table,
                result,
            },
        )
        .await;
    });
}

fn spawn_table_rows<C>(
    api: Arc<C>,
    msg_tx: mpsc::Sender<Message>,
    table: String,
    limit: u32,
    request_id: RequestId,
) where
    C: TableApi + Send + Sync + 'static,
{
    tokio::spawn(async move {
        debug!("Fetching rows of '{}' limit={} ({:?})", table, limit, request_id);
        let result = api.table_rows(&table, limit).await;
        send(
            &msg_tx,
            Message::RowsLoaded {
                request_id,
                table,
                result,
            },
        )
        .await;
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use dbview_api::test_utils::{test_snapshot, FakeTableApi};
    use serde_json::json;

    #[tokio::test]
    async fn test_load_startup_sends_both_results() {
        let api = Arc::new(FakeTableApi::new().with_table("users", test_snapshot(&[], vec![])));
        let (tx, mut rx) = mpsc::channel(8);

        handle_action(UpdateAction::LoadStartup, &api, &tx);

        let mut got_info = false;
        let mut got_tables = false;
        for _ in 0..2 {
            match rx.recv().await.unwrap() {
                Message::DatabaseInfoLoaded(result) => got_info = result.is_ok(),
                Message::TablesLoaded(result) => {
                    got_tables = result.map(|l| l.tables == vec!["users"]).unwrap_or(false)
                }
                other => panic!("unexpected message {:?}", other),
            }
        }
        assert!(got_info && got_tables);
    }

    #[tokio::test]
    async fn test_load_rows_carries_request_id() {
        let api = Arc::new(FakeTableApi::new().with_table(
            "users",
            test_snapshot(&[("id", "INTEGER")], vec![json!({"id": 1})]),
        ));
        let (tx, mut rx) = mpsc::channel(8);

        handle_action(
            UpdateAction::LoadRows {
                table: "users".into(),
                limit: 50,
                request_id: RequestId(7),
            },
            &api,
            &tx,
        );

        match rx.recv().await.unwrap() {
            Message::RowsLoaded {
                request_id,
                table,
                result,
            } => {
                assert_eq!(request_id, RequestId(7));
                assert_eq!(table, "users");
                assert_eq!(result.unwrap().data.len(), 1);
            }
            other => panic!("unexpected message {:?}", other),
        }
        assert_eq!(api.calls(), vec!["table_rows:users:50"]);
    }
}
