use std::future::Future;

use crate::envelope::ResponseEnvelope;
use crate::error::ClientError;
use crate::models::{Record, RecordId};

/// Async access to the user collection.
///
/// Reads return data directly; writes return the server's
/// [`ResponseEnvelope`], which the caller must check before trusting its
/// `record` or `id`. An `Err` means no usable reply arrived at all.
pub trait RecordService {
    fn list(&self) -> impl Future<Output = Result<Vec<Record>, ClientError>>;

    fn get(&self, id: RecordId) -> impl Future<Output = Result<Record, ClientError>>;

    fn create(
        &self,
        record: &Record,
    ) -> impl Future<Output = Result<ResponseEnvelope, ClientError>>;

    fn update(
        &self,
        id: RecordId,
        record: &Record,
    ) -> impl Future<Output = Result<ResponseEnvelope, ClientError>>;

    fn delete(&self, id: RecordId) -> impl Future<Output = Result<ResponseEnvelope, ClientError>>;
}
