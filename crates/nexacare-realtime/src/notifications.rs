use std::sync::Arc;

use chrono::{DateTime, Utc};
use deadpool_postgres::Pool;
use serde::{Deserialize, Serialize};
use tokio::sync::{Mutex, watch};
use tokio::task::JoinHandle;
use tracing::warn;
use uuid::Uuid;

use crate::config::RealtimeConfig;
use crate::error::RealtimeError;
use crate::event::RowChange;
use crate::subscription::Subscription;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: Uuid,
    pub user_id: Uuid,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub title: String,
    pub message: String,
    pub priority: Option<String>,
    #[serde(default)]
    pub is_read: bool,
    pub action_url: Option<String>,
    pub scheduled_for: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// All notifications for the user, newest first.
pub async fn fetch_notifications(
    pool: &Pool,
    user_id: Uuid,
) -> Result<Vec<Notification>, RealtimeError> {
    let client = pool
        .get()
        .await
        .map_err(|e| RealtimeError::Connection(e.to_string()))?;

    let rows = client
        .query(
            r#"
            SELECT id, user_id, "type", title, message, priority, is_read,
                   action_url, scheduled_for, created_at
            FROM notifications
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
            &[&user_id],
        )
        .await
        .map_err(|e| RealtimeError::Query(e.to_string()))?;

    Ok(rows
        .iter()
        .map(|row| Notification {
            id: row.get(0),
            user_id: row.get(1),
            kind: row.get(2),
            title: row.get(3),
            message: row.get(4),
            priority: row.get(5),
            is_read: row.get(6),
            action_url: row.get(7),
            scheduled_for: row.get(8),
            created_at: row.get(9),
        })
        .collect())
}

pub fn unread_count(notifications: &[Notification]) -> usize {
    notifications.iter().filter(|n| !n.is_read).count()
}

/// Merge one change into the local list, keeping `unread` in step. INSERT
/// prepends (newest first); rows can arrive already read, and only unread
/// ones bump the counter. UPDATE replaces by id and decrements when the
/// local copy was unread and the new row is read; an id not in local state
/// is dropped. The portal never deletes notification rows, so DELETE events
/// are ignored. Returns whether the list changed.
pub fn apply_change(
    notifications: &mut Vec<Notification>,
    unread: &mut usize,
    change: RowChange<Notification>,
    user_id: Uuid,
) -> bool {
    match change {
        RowChange::Insert(notification) => {
            if notification.user_id != user_id {
                return false;
            }
            if !notification.is_read {
                *unread += 1;
            }
            notifications.insert(0, notification);
            true
        }
        RowChange::Update(notification) => {
            if notification.user_id != user_id {
                return false;
            }
            match notifications.iter_mut().find(|n| n.id == notification.id) {
                Some(slot) => {
                    if !slot.is_read && notification.is_read {
                        *unread = unread.saturating_sub(1);
                    }
                    *slot = notification;
                    true
                }
                None => false,
            }
        }
        RowChange::Delete(_) => false,
    }
}

/// Flip a notification to read. The counter update arrives back through the
/// change feed rather than being applied locally.
pub async fn mark_as_read(pool: &Pool, notification_id: Uuid) -> Result<(), RealtimeError> {
    let client = pool
        .get()
        .await
        .map_err(|e| RealtimeError::Connection(e.to_string()))?;

    client
        .execute(
            "UPDATE notifications SET is_read = TRUE WHERE id = $1",
            &[&notification_id],
        )
        .await
        .map_err(|e| RealtimeError::Query(e.to_string()))?;
    Ok(())
}

struct FeedState {
    notifications: Vec<Notification>,
    unread: usize,
}

/// Live notification list for one user, newest first, with an unread count.
pub struct NotificationFeed {
    pool: Pool,
    state: Arc<Mutex<FeedState>>,
    revision: watch::Receiver<u64>,
    merger: JoinHandle<()>,
}

impl NotificationFeed {
    /// Fetch the current rows, then subscribe and start merging. Changes
    /// emitted between the fetch and `LISTEN` taking effect are missed.
    pub async fn open(
        pool: &Pool,
        config: &RealtimeConfig,
        user_id: Uuid,
    ) -> Result<Self, RealtimeError> {
        let notifications = fetch_notifications(pool, user_id).await?;
        let mut subscription = Subscription::open(&config.database_url, "notifications").await?;

        let unread = unread_count(&notifications);
        let state = Arc::new(Mutex::new(FeedState {
            notifications,
            unread,
        }));
        let (revision_tx, revision) = watch::channel(0u64);

        let merge_state = Arc::clone(&state);
        let merger = tokio::spawn(async move {
            while let Some(event) = subscription.recv().await {
                let change = match event.row_change::<Notification>() {
                    Ok(change) => change,
                    Err(error) => {
                        warn!(%error, "skipping undecodable notification change");
                        continue;
                    }
                };
                let mut feed = merge_state.lock().await;
                let FeedState {
                    notifications,
                    unread,
                } = &mut *feed;
                if apply_change(notifications, unread, change, user_id) {
                    revision_tx.send_modify(|rev| *rev += 1);
                }
            }
        });

        Ok(Self {
            pool: pool.clone(),
            state,
            revision,
            merger,
        })
    }

    /// Current notification list, newest first.
    pub async fn snapshot(&self) -> Vec<Notification> {
        self.state.lock().await.notifications.clone()
    }

    pub async fn unread(&self) -> usize {
        self.state.lock().await.unread
    }

    /// Watch channel bumped on every applied change.
    pub fn revision(&self) -> watch::Receiver<u64> {
        self.revision.clone()
    }

    pub async fn mark_as_read(&self, notification_id: Uuid) -> Result<(), RealtimeError> {
        mark_as_read(&self.pool, notification_id).await
    }
}

impl Drop for NotificationFeed {
    fn drop(&mut self) {
        self.merger.abort();
    }
}
