//! Reply interpretation, separated from transport.
//!
//! The user API is not strict about status codes: failed writes still carry an
//! envelope with a 4xx/5xx code, and a read of a missing id answers `400` with
//! a `null` body. These functions take the status and body text and decide what
//! the caller sees.

use records::{ClientError, Record, RecordId, ResponseEnvelope};

const NOT_FOUND: u16 = 404;

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

fn malformed(status: u16, what: &str, err: serde_json::Error) -> ClientError {
    ClientError::Server(format!("HTTP {status}: expected {what}: {err}"))
}

/// `GET` on the collection.
pub fn read_collection(status: u16, body: &str) -> Result<Vec<Record>, ClientError> {
    if !is_success(status) {
        return Err(ClientError::Server(format!("HTTP {status} listing users")));
    }
    // The API serializes an empty slice as `null`.
    let records: Option<Vec<Record>> =
        serde_json::from_str(body).map_err(|e| malformed(status, "a list of users", e))?;
    Ok(records.unwrap_or_default())
}

/// `GET` on one record.
pub fn read_record(id: RecordId, status: u16, body: &str) -> Result<Record, ClientError> {
    if status == NOT_FOUND {
        return Err(ClientError::NotFound(id));
    }
    let parsed: Result<Option<Record>, _> = serde_json::from_str(body);
    match parsed {
        Ok(None) => Err(ClientError::NotFound(id)),
        Ok(Some(_)) | Err(_) if !is_success(status) => {
            Err(ClientError::Server(format!("HTTP {status} reading user {id}")))
        }
        Ok(Some(record)) => Ok(record),
        Err(e) => Err(malformed(status, "a user", e)),
    }
}

/// Any write. The envelope is decoded whatever the status; success is judged
/// by the envelope alone.
pub fn read_envelope(status: u16, body: &str) -> Result<ResponseEnvelope, ClientError> {
    serde_json::from_str(body).map_err(|e| malformed(status, "a response envelope", e))
}
