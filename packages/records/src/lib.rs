pub mod collection;
pub mod config;
pub mod editor;
pub mod envelope;
pub mod error;
pub mod fields;
pub mod models;
pub mod service;

mod memory;
pub use memory::MemoryService;

pub use collection::RecordCollection;
pub use config::{Backend, ClientConfig};
pub use editor::{EditState, Editor, EditorMode, Submission, SubmitOutcome};
pub use envelope::ResponseEnvelope;
pub use error::ClientError;
pub use fields::{humanize, FieldChange, FieldKind, FieldSpec, USER_FIELDS};
pub use models::{FieldValue, Record, RecordId};
pub use service::RecordService;
