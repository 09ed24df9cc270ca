//! LISTEN/NOTIFY subscription plumbing.
//!
//! Each synced table has an after-row trigger that publishes the change on
//! the `<table>_changes` channel (payload format in [`crate::event`]). A
//! [`Subscription`] holds a dedicated connection, drains its message stream
//! on a driver task, and forwards decoded events over a bounded channel.
//! Events emitted between a feed's initial fetch and `LISTEN` taking effect
//! are not replayed; that small race window is accepted.

use futures_util::{StreamExt, stream};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_postgres::{AsyncMessage, Client, NoTls};
use tracing::{info, warn};

use crate::error::RealtimeError;
use crate::event::ChangeEvent;

/// Notification channel the change triggers publish on for `table`.
pub fn channel(table: &str) -> String {
    format!("{table}_changes")
}

pub struct Subscription {
    events: mpsc::Receiver<ChangeEvent>,
    driver: JoinHandle<()>,
    // Dropping the client would end the LISTEN, so the guard owns it.
    _client: Client,
}

impl Subscription {
    /// Connect, start draining the connection, and `LISTEN` on the channel
    /// for `table`.
    pub async fn open(database_url: &str, table: &str) -> Result<Self, RealtimeError> {
        let (client, mut connection) = tokio_postgres::connect(database_url, NoTls)
            .await
            .map_err(|e| RealtimeError::Connection(e.to_string()))?;

        let (tx, events) = mpsc::channel(64);
        let channel_name = channel(table);
        let listen_channel = channel_name.clone();

        let driver = tokio::spawn(async move {
            let mut messages = stream::poll_fn(move |cx| connection.poll_message(cx));
            while let Some(message) = messages.next().await {
                match message {
                    Ok(AsyncMessage::Notification(notification)) => {
                        if notification.channel() != listen_channel {
                            continue;
                        }
                        match ChangeEvent::decode(notification.payload()) {
                            Ok(event) => {
                                if tx.send(event).await.is_err() {
                                    break;
                                }
                            }
                            Err(error) => {
                                warn!(%error, "discarding undecodable change event");
                            }
                        }
                    }
                    Ok(_) => {}
                    Err(error) => {
                        warn!(%error, "change feed connection lost");
                        break;
                    }
                }
            }
        });

        client
            .batch_execute(&format!("LISTEN {channel_name}"))
            .await
            .map_err(|e| RealtimeError::Query(e.to_string()))?;
        info!(channel = %channel_name, "change feed subscribed");

        Ok(Self {
            events,
            driver,
            _client: client,
        })
    }

    /// Next change event; `None` once the feed connection is gone.
    pub async fn recv(&mut self) -> Option<ChangeEvent> {
        self.events.recv().await
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.driver.abort();
    }
}
