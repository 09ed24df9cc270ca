use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

use crate::error::RealtimeError;

/// Row-change notification as emitted by the portal's table triggers:
/// `pg_notify('<table>_changes', json_build_object('table', TG_TABLE_NAME,
/// 'type', TG_OP, 'old', row_to_json(OLD), 'new', row_to_json(NEW))::text)`.
#[derive(Debug, Clone, Deserialize)]
pub struct ChangeEvent {
    pub table: String,
    #[serde(rename = "type")]
    pub kind: ChangeKind,
    #[serde(default)]
    pub old: Value,
    #[serde(default)]
    pub new: Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ChangeKind {
    Insert,
    Update,
    Delete,
}

/// One change, decoded for a concrete row type. DELETE events carry only the
/// old row, which always includes the id.
#[derive(Debug)]
pub enum RowChange<T> {
    Insert(T),
    Update(T),
    Delete(Uuid),
}

#[derive(Debug, Deserialize)]
struct RowKey {
    id: Uuid,
}

impl ChangeEvent {
    pub fn decode(payload: &str) -> Result<Self, RealtimeError> {
        Ok(serde_json::from_str(payload)?)
    }

    pub fn row_change<T>(&self) -> Result<RowChange<T>, RealtimeError>
    where
        T: serde::de::DeserializeOwned,
    {
        match self.kind {
            ChangeKind::Insert => Ok(RowChange::Insert(serde_json::from_value(self.new.clone())?)),
            ChangeKind::Update => Ok(RowChange::Update(serde_json::from_value(self.new.clone())?)),
            ChangeKind::Delete => {
                let key: RowKey = serde_json::from_value(self.old.clone())?;
                Ok(RowChange::Delete(key.id))
            }
        }
    }
}
