use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::envelope::ResponseEnvelope;
use crate::error::ClientError;
use crate::models::{FieldValue, Record, RecordId};
use crate::service::RecordService;

/// Number of calls made per operation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CallCounts {
    pub list: usize,
    pub get: usize,
    pub create: usize,
    pub update: usize,
    pub delete: usize,
}

impl CallCounts {
    pub fn total(&self) -> usize {
        self.list + self.get + self.create + self.update + self.delete
    }
}

#[derive(Debug, Default)]
struct Inner {
    records: BTreeMap<RecordId, Record>,
    next_id: i64,
    calls: CallCounts,
    offline: bool,
    fail_next: Option<ResponseEnvelope>,
}

/// In-memory RecordService, selected with `backend = "memory"` and used by tests.
///
/// Replies are shaped like the weight-tracker API's: create requires name,
/// email and weight goal; deleting a missing id fails with a non-success
/// envelope. Clones share the same data.
#[derive(Clone, Debug, Default)]
pub struct MemoryService {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed with records; ids already set are kept, the rest are assigned.
    pub fn with_records(records: Vec<Record>) -> Self {
        let service = Self::new();
        {
            let mut inner = service.lock();
            for mut record in records {
                let id = match record.id {
                    Some(id) => id,
                    None => inner.assign_id(),
                };
                record.id = Some(id);
                inner.next_id = inner.next_id.max(id.0);
                inner.records.insert(id, record);
            }
        }
        service
    }

    /// Every call fails with a network error until switched back.
    #[cfg(test)]
    pub fn set_offline(&self, offline: bool) {
        self.lock().offline = offline;
    }

    /// The next write replies with this failure envelope instead.
    #[cfg(test)]
    pub fn fail_next_write(&self, status: &str, data: &str) {
        self.lock().fail_next = Some(ResponseEnvelope::failure(status, data));
    }

    pub fn calls(&self) -> CallCounts {
        self.lock().calls
    }

    pub fn snapshot(&self) -> Vec<Record> {
        self.lock().records.values().cloned().collect()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // A panic while holding the lock can only come from a failing test.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Inner {
    fn assign_id(&mut self) -> RecordId {
        self.next_id += 1;
        RecordId(self.next_id)
    }

    fn reachable(&self) -> Result<(), ClientError> {
        if self.offline {
            Err(ClientError::Network("memory service is offline".to_string()))
        } else {
            Ok(())
        }
    }

    fn take_failure(&mut self) -> Option<ResponseEnvelope> {
        self.fail_next.take()
    }
}

fn missing_text(record: &Record, field: &str) -> bool {
    match record.get(field) {
        Some(FieldValue::Text(s)) => s.trim().is_empty(),
        Some(_) => false,
        None => true,
    }
}

impl RecordService for MemoryService {
    async fn list(&self) -> Result<Vec<Record>, ClientError> {
        let mut inner = self.lock();
        inner.calls.list += 1;
        inner.reachable()?;
        Ok(inner.records.values().cloned().collect())
    }

    async fn get(&self, id: RecordId) -> Result<Record, ClientError> {
        let mut inner = self.lock();
        inner.calls.get += 1;
        inner.reachable()?;
        inner.records.get(&id).cloned().ok_or(ClientError::NotFound(id))
    }

    async fn create(&self, record: &Record) -> Result<ResponseEnvelope, ClientError> {
        let mut inner = self.lock();
        inner.calls.create += 1;
        inner.reachable()?;
        if let Some(failure) = inner.take_failure() {
            return Ok(failure);
        }
        for field in ["email", "name", "weight_goal"] {
            if missing_text(record, field) {
                let field = field.replace('_', " ");
                return Ok(ResponseEnvelope::failure(
                    "failed",
                    &format!("user service - {field} required"),
                ));
            }
        }

        let id = inner.assign_id();
        let mut stored = record.clone();
        stored.id = Some(id);
        inner.records.insert(id, stored);
        Ok(ResponseEnvelope::success("user created").with_id(id))
    }

    async fn update(&self, id: RecordId, record: &Record) -> Result<ResponseEnvelope, ClientError> {
        let mut inner = self.lock();
        inner.calls.update += 1;
        inner.reachable()?;
        if let Some(failure) = inner.take_failure() {
            return Ok(failure);
        }
        if !inner.records.contains_key(&id) {
            return Ok(ResponseEnvelope::failure("failed", "sql: no rows in result set"));
        }

        let mut stored = record.clone();
        stored.id = Some(id);
        inner.records.insert(id, stored.clone());
        Ok(ResponseEnvelope::success("user updated").with_record(stored))
    }

    async fn delete(&self, id: RecordId) -> Result<ResponseEnvelope, ClientError> {
        let mut inner = self.lock();
        inner.calls.delete += 1;
        inner.reachable()?;
        if let Some(failure) = inner.take_failure() {
            return Ok(failure);
        }
        match inner.records.remove(&id) {
            Some(_) => Ok(ResponseEnvelope::success("user deleted").with_id(id)),
            None => Ok(ResponseEnvelope::failure(
                "failed",
                "user service - user with given id does not exist",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_then_get() {
        let service = MemoryService::new();
        assert!(service.list().await.unwrap().is_empty());

        let reply = service
            .create(
                &Record::new()
                    .with("name", "ann")
                    .with("email", "ann@example.com")
                    .with("weight_goal", "loose"),
            )
            .await
            .unwrap();
        assert!(reply.is_success());
        let id = reply.id.unwrap();

        let fetched = service.get(id).await.unwrap();
        assert_eq!(fetched.id, Some(id));
        assert_eq!(fetched.display("name"), "ann");
        assert_eq!(service.calls().create, 1);
        assert_eq!(service.calls().get, 1);
    }

    #[tokio::test]
    async fn test_create_requires_fields() {
        let service = MemoryService::new();
        let reply = service
            .create(&Record::new().with("email", "x@example.com").with("name", "x"))
            .await
            .unwrap();
        assert!(!reply.is_success());
        assert_eq!(
            reply.failure_message(),
            "failed because user service - weight goal required"
        );
    }

    #[tokio::test]
    async fn test_seeded_ids_are_kept() {
        let service = MemoryService::with_records(vec![
            Record::with_id(RecordId(5)),
            Record::new().with("name", "auto"),
        ]);
        let ids: Vec<RecordId> = service.snapshot().iter().filter_map(|r| r.id).collect();
        assert_eq!(ids, vec![RecordId(5), RecordId(6)]);
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let service = MemoryService::new();
        assert_eq!(
            service.get(RecordId(9)).await,
            Err(ClientError::NotFound(RecordId(9)))
        );
    }

    #[tokio::test]
    async fn test_offline_fails_every_call() {
        let service = MemoryService::with_records(vec![Record::with_id(RecordId(1))]);
        service.set_offline(true);
        assert!(service.list().await.unwrap_err().is_network());
        assert!(service.delete(RecordId(1)).await.unwrap_err().is_network());
        assert_eq!(service.snapshot().len(), 1);

        service.set_offline(false);
        assert_eq!(service.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_injected_failure_applies_once() {
        let service = MemoryService::with_records(vec![Record::with_id(RecordId(1))]);
        service.fail_next_write("error", "validation failed");

        let first = service.update(RecordId(1), &Record::new()).await.unwrap();
        assert_eq!(first.failure_message(), "error because validation failed");

        let second = service.update(RecordId(1), &Record::new()).await.unwrap();
        assert!(second.is_success());
        assert_eq!(second.record.unwrap().id, Some(RecordId(1)));
    }
}
