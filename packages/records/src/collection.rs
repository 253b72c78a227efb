use std::collections::BTreeMap;

use crate::envelope::ResponseEnvelope;
use crate::error::ClientError;
use crate::fields::USER_FIELDS;
use crate::models::{Record, RecordId};
use crate::service::RecordService;

/// The listing view's records, keyed and ordered by id.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordCollection {
    records: BTreeMap<RecordId, Record>,
}

impl RecordCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records without an id cannot be addressed and are skipped.
    pub fn from_records(records: Vec<Record>) -> Self {
        let mut collection = Self::new();
        for record in records {
            match record.id {
                Some(id) => {
                    collection.records.insert(id, record);
                }
                None => tracing::warn!("skipping listed user without an id"),
            }
        }
        collection
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: RecordId) -> Option<&Record> {
        self.records.get(&id)
    }

    pub fn ids(&self) -> Vec<RecordId> {
        self.records.keys().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Table columns: `id`, the known user fields that appear in any record (in
    /// form order), then any other keys the server sent, alphabetically.
    pub fn columns(&self) -> Vec<String> {
        let mut columns = vec!["id".to_string()];
        if self.records.is_empty() {
            return columns;
        }
        for spec in USER_FIELDS {
            if self.iter().any(|r| r.get(spec.name).is_some()) {
                columns.push(spec.name.to_string());
            }
        }
        let mut extra: Vec<&String> = self
            .iter()
            .flat_map(|r| r.fields.keys())
            .filter(|k| !USER_FIELDS.iter().any(|spec| spec.name == k.as_str()))
            .collect();
        extra.sort();
        extra.dedup();
        columns.extend(extra.into_iter().cloned());
        columns
    }

    /// Drop the entry if the server confirmed the delete; otherwise leave the
    /// collection untouched and return the failure.
    pub fn settle_delete(
        &mut self,
        id: RecordId,
        reply: Result<ResponseEnvelope, ClientError>,
    ) -> Result<(), ClientError> {
        reply.and_then(ResponseEnvelope::into_result)?;
        self.records.remove(&id);
        Ok(())
    }

    pub async fn delete<S: RecordService>(
        &mut self,
        id: RecordId,
        service: &S,
    ) -> Result<(), ClientError> {
        let reply = service.delete(id).await;
        self.settle_delete(id, reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryService;

    fn two_users() -> Vec<Record> {
        vec![
            Record::with_id(RecordId(1)).with("name", "ann").with("age", 31),
            Record::with_id(RecordId(2)).with("name", "bo").with("height", 180),
        ]
    }

    #[tokio::test]
    async fn test_successful_delete_removes_entry() {
        let service = MemoryService::with_records(two_users());
        let mut users = RecordCollection::from_records(service.list().await.unwrap());
        assert_eq!(users.ids(), vec![RecordId(1), RecordId(2)]);

        users.delete(RecordId(1), &service).await.unwrap();
        assert_eq!(users.ids(), vec![RecordId(2)]);
        assert_eq!(users.get(RecordId(2)).unwrap().display("name"), "bo");
    }

    #[tokio::test]
    async fn test_failed_delete_leaves_collection() {
        let service = MemoryService::with_records(two_users());
        let mut users = RecordCollection::from_records(two_users());
        let before = users.clone();

        service.fail_next_write("failed", "user service - user with given id does not exist");
        let err = users.delete(RecordId(1), &service).await.unwrap_err();
        assert!(err.to_string().contains("does not exist"));
        assert_eq!(users, before);

        service.set_offline(true);
        let err = users.delete(RecordId(2), &service).await.unwrap_err();
        assert!(err.is_network());
        assert_eq!(users, before);
    }

    #[test]
    fn test_columns() {
        let mut records = two_users();
        records.push(Record::with_id(RecordId(3)).with("created_at", "2022-01-01"));
        let users = RecordCollection::from_records(records);
        assert_eq!(users.columns(), ["id", "name", "age", "height", "created_at"]);

        assert_eq!(RecordCollection::new().columns(), ["id"]);
    }

    #[test]
    fn test_records_without_id_are_skipped() {
        let users = RecordCollection::from_records(vec![
            Record::new().with("name", "ghost"),
            Record::with_id(RecordId(4)),
        ]);
        assert_eq!(users.len(), 1);
        assert!(users.get(RecordId(4)).is_some());
    }
}
