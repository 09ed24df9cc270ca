use std::sync::Arc;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
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

/// One appointment row. `kind` and `status` stay as the database's text
/// values (`in_person`/`telehealth`/`phone`, `pending`/`scheduled`/...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub provider_id: Uuid,
    #[serde(rename = "type")]
    pub kind: String,
    pub status: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub reason: String,
    pub notes: Option<String>,
    pub meeting_link: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Appointment {
    pub fn involves(&self, user_id: Uuid) -> bool {
        self.patient_id == user_id || self.provider_id == user_id
    }
}

/// All appointments where the user sits on either side, soonest first.
pub async fn fetch_appointments(
    pool: &Pool,
    user_id: Uuid,
) -> Result<Vec<Appointment>, RealtimeError> {
    let client = pool
        .get()
        .await
        .map_err(|e| RealtimeError::Connection(e.to_string()))?;

    let rows = client
        .query(
            r#"
            SELECT id, patient_id, provider_id, "type", status, date, start_time,
                   end_time, reason, notes, meeting_link, created_at, updated_at
            FROM appointments
            WHERE patient_id = $1 OR provider_id = $1
            ORDER BY date ASC, start_time ASC
            "#,
            &[&user_id],
        )
        .await
        .map_err(|e| RealtimeError::Query(e.to_string()))?;

    Ok(rows
        .iter()
        .map(|row| Appointment {
            id: row.get(0),
            patient_id: row.get(1),
            provider_id: row.get(2),
            kind: row.get(3),
            status: row.get(4),
            date: row.get(5),
            start_time: row.get(6),
            end_time: row.get(7),
            reason: row.get(8),
            notes: row.get(9),
            meeting_link: row.get(10),
            created_at: row.get(11),
            updated_at: row.get(12),
        })
        .collect())
}

/// Merge one change into the local list. Events for rows that do not involve
/// `user_id` are discarded, mirroring the row filter a scoped feed would
/// apply. An UPDATE whose id is not in local state is dropped, not upserted.
/// Returns whether the list changed.
pub fn apply_change(
    appointments: &mut Vec<Appointment>,
    change: RowChange<Appointment>,
    user_id: Uuid,
) -> bool {
    match change {
        RowChange::Insert(appointment) => {
            if !appointment.involves(user_id) {
                return false;
            }
            appointments.push(appointment);
            true
        }
        RowChange::Update(appointment) => {
            if !appointment.involves(user_id) {
                return false;
            }
            match appointments.iter_mut().find(|a| a.id == appointment.id) {
                Some(slot) => {
                    *slot = appointment;
                    true
                }
                None => false,
            }
        }
        RowChange::Delete(id) => {
            let before = appointments.len();
            appointments.retain(|a| a.id != id);
            appointments.len() != before
        }
    }
}

/// Live appointment list for one user: initial fetch plus change-feed merge.
pub struct AppointmentFeed {
    state: Arc<Mutex<Vec<Appointment>>>,
    revision: watch::Receiver<u64>,
    merger: JoinHandle<()>,
}

impl AppointmentFeed {
    /// Fetch the current rows, then subscribe and start merging. Changes
    /// emitted between the fetch and `LISTEN` taking effect are missed.
    pub async fn open(
        pool: &Pool,
        config: &RealtimeConfig,
        user_id: Uuid,
    ) -> Result<Self, RealtimeError> {
        let appointments = fetch_appointments(pool, user_id).await?;
        let mut subscription = Subscription::open(&config.database_url, "appointments").await?;

        let state = Arc::new(Mutex::new(appointments));
        let (revision_tx, revision) = watch::channel(0u64);

        let merge_state = Arc::clone(&state);
        let merger = tokio::spawn(async move {
            while let Some(event) = subscription.recv().await {
                let change = match event.row_change::<Appointment>() {
                    Ok(change) => change,
                    Err(error) => {
                        warn!(%error, "skipping undecodable appointment change");
                        continue;
                    }
                };
                let mut appointments = merge_state.lock().await;
                if apply_change(&mut appointments, change, user_id) {
                    revision_tx.send_modify(|rev| *rev += 1);
                }
            }
        });

        Ok(Self {
            state,
            revision,
            merger,
        })
    }

    /// Current appointment list.
    pub async fn snapshot(&self) -> Vec<Appointment> {
        self.state.lock().await.clone()
    }

    /// Watch channel bumped on every applied change.
    pub fn revision(&self) -> watch::Receiver<u64> {
        self.revision.clone()
    }
}

impl Drop for AppointmentFeed {
    fn drop(&mut self) {
        self.merger.abort();
    }
}
