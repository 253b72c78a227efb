//! # API crate: HTTP client for the weight-tracker user API
//!
//! [`RecordClient`] implements [`records::RecordService`] over `reqwest`, which
//! uses the browser's `fetch` (cross-origin `cors` mode) on wasm32 and hyper on
//! native targets.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | `RecordClient`: builds the request for each operation and hands the raw reply to `response`. |
//! | [`response`] | Pure functions from `(HTTP status, body)` to typed results, so reply handling is testable without a server. |
//!
//! ## Endpoints
//!
//! | Operation | Request | Reply |
//! |-----------|---------|-------|
//! | `list` | `GET {base}/v1/api/user` | array of records |
//! | `get` | `GET {base}/v1/api/user/{id}` | one record (`null` or 404 when absent) |
//! | `create` | `POST {base}/v1/api/user` | envelope with `id` |
//! | `update` | `PUT {base}/v1/api/user/{id}` | envelope with `record` |
//! | `delete` | `DELETE {base}/v1/api/user/{id}` | envelope with the deleted `id` |

pub mod client;
pub mod response;

pub use client::RecordClient;
pub use records::{ClientConfig, ClientError, Record, RecordId, ResponseEnvelope};
