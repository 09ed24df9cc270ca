use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::Mutex;

use nexacare_core::models::analysis::AnalysisResult;

struct CacheEntry {
    result: AnalysisResult,
    expires_at: Instant,
}

/// Server-side holding area for generated reports, keyed by report id, so a
/// result outlives the submitting page until the TTL runs out.
#[derive(Clone)]
pub struct ReportCache {
    ttl: Duration,
    entries: Arc<Mutex<HashMap<String, CacheEntry>>>,
}

impl ReportCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Store a result under its report id, dropping any expired entries
    /// along the way.
    pub async fn insert(&self, result: AnalysisResult) {
        let mut entries = self.entries.lock().await;
        let now = Instant::now();
        entries.retain(|_, entry| entry.expires_at > now);
        entries.insert(
            result.report_id.clone(),
            CacheEntry {
                result,
                expires_at: now + self.ttl,
            },
        );
    }

    pub async fn get(&self, report_id: &str) -> Option<AnalysisResult> {
        let mut entries = self.entries.lock().await;
        match entries.get(report_id) {
            Some(entry) if entry.expires_at > Instant::now() => Some(entry.result.clone()),
            Some(_) => {
                entries.remove(report_id);
                None
            }
            None => None,
        }
    }
}
