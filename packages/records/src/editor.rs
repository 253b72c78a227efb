//! # View/edit state machine for a single record
//!
//! [`Editor`] owns the record shown by one editor view and the state that
//! decides whether its fields are enabled.
//!
//! ```text
//!            edit (no request)
//!   Viewing ───────────────────▶ Editing
//!      ▲                            │
//!      └──── submit, success ───────┤
//!                                   └── submit, failure: stay in Editing
//! ```
//!
//! Create mode is the same machine without an id. It starts in `Editing`, and
//! a successful submit yields the id the server assigned.
//!
//! Submitting is split in two so a UI can release its state borrow while the
//! request is in flight: [`Editor::submission`] snapshots what to send, and
//! [`Editor::settle`] applies the reply. [`Editor::submit`] does both in one
//! call. The record only changes in `settle`, and only on a confirmed success.

use crate::envelope::ResponseEnvelope;
use crate::error::ClientError;
use crate::fields::FieldChange;
use crate::models::{Record, RecordId};
use crate::service::RecordService;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EditState {
    #[default]
    Viewing,
    Editing,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditorMode {
    Create,
    Update(RecordId),
}

/// A request the editor wants sent.
#[derive(Clone, Debug, PartialEq)]
pub enum Submission {
    Create(Record),
    Update(RecordId, Record),
}

impl Submission {
    /// HTTP method the request maps to.
    pub fn method(&self) -> &'static str {
        match self {
            Submission::Create(_) => "POST",
            Submission::Update(..) => "PUT",
        }
    }

    /// Record the request targets; `None` for the collection.
    pub fn target_id(&self) -> Option<RecordId> {
        match self {
            Submission::Create(_) => None,
            Submission::Update(id, _) => Some(*id),
        }
    }

    pub async fn send<S: RecordService>(
        &self,
        service: &S,
    ) -> Result<ResponseEnvelope, ClientError> {
        match self {
            Submission::Create(record) => service.create(record).await,
            Submission::Update(id, record) => service.update(*id, record).await,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
    Created(RecordId),
    Updated,
    Failed(ClientError),
    /// Submit while viewing; nothing was sent.
    Ignored,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Editor {
    mode: EditorMode,
    state: EditState,
    record: Record,
    error: Option<ClientError>,
}

impl Editor {
    /// Blank record in create mode, editable straight away.
    pub fn for_new() -> Self {
        Self {
            mode: EditorMode::Create,
            state: EditState::Editing,
            record: Record::new(),
            error: None,
        }
    }

    /// A fetched record, shown read-only until edit is requested.
    ///
    /// A record without an id cannot be updated, so it opens in create mode.
    pub fn for_existing(record: Record) -> Self {
        match record.id {
            Some(id) => Self {
                mode: EditorMode::Update(id),
                state: EditState::Viewing,
                record,
                error: None,
            },
            None => Self {
                record,
                ..Self::for_new()
            },
        }
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    pub fn state(&self) -> EditState {
        self.state
    }

    pub fn record(&self) -> &Record {
        &self.record
    }

    /// Last failure, cleared by the next successful submit.
    pub fn error(&self) -> Option<&ClientError> {
        self.error.as_ref()
    }

    pub fn fields_disabled(&self) -> bool {
        self.state == EditState::Viewing
    }

    /// Viewing → Editing. Returns whether the state changed.
    pub fn begin_edit(&mut self) -> bool {
        if self.state == EditState::Editing {
            return false;
        }
        self.state = EditState::Editing;
        true
    }

    /// Fold a field change into the record. Dropped while viewing.
    pub fn apply(&mut self, change: FieldChange) -> bool {
        if self.state != EditState::Editing {
            return false;
        }
        change.apply_to(&mut self.record);
        true
    }

    pub fn submission(&self) -> Option<Submission> {
        if self.state != EditState::Editing {
            return None;
        }
        Some(match self.mode {
            EditorMode::Create => Submission::Create(self.record.clone()),
            EditorMode::Update(id) => Submission::Update(id, self.record.clone()),
        })
    }

    /// Apply the reply to a submission made from this editor.
    pub fn settle(&mut self, reply: Result<ResponseEnvelope, ClientError>) -> SubmitOutcome {
        let envelope = match reply.and_then(ResponseEnvelope::into_result) {
            Ok(envelope) => envelope,
            Err(err) => return self.fail(err),
        };

        match self.mode {
            EditorMode::Create => {
                let Some(id) = envelope.id else {
                    return self.fail(ClientError::Server(
                        "server accepted the user without returning an id".to_string(),
                    ));
                };
                let mut record = envelope.record.unwrap_or_else(|| self.record.clone());
                record.id = Some(id);
                self.record = record;
                self.mode = EditorMode::Update(id);
                self.finish();
                SubmitOutcome::Created(id)
            }
            EditorMode::Update(_) => {
                if let Some(record) = envelope.record {
                    self.record = record;
                }
                self.finish();
                SubmitOutcome::Updated
            }
        }
    }

    /// Send the current record and settle the reply.
    pub async fn submit<S: RecordService>(&mut self, service: &S) -> SubmitOutcome {
        let Some(submission) = self.submission() else {
            return SubmitOutcome::Ignored;
        };
        let reply = submission.send(service).await;
        self.settle(reply)
    }

    fn finish(&mut self) {
        self.state = EditState::Viewing;
        self.error = None;
    }

    fn fail(&mut self, err: ClientError) -> SubmitOutcome {
        tracing::warn!("submit failed: {err}");
        self.error = Some(err.clone());
        SubmitOutcome::Failed(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryService;

    fn ann() -> Record {
        Record::with_id(RecordId(7))
            .with("name", "ann")
            .with("email", "ann@example.com")
            .with("weight_goal", "maintain")
    }

    #[tokio::test]
    async fn test_edit_makes_no_request() {
        let service = MemoryService::with_records(vec![ann()]);
        let mut editor = Editor::for_existing(ann());

        assert_eq!(editor.state(), EditState::Viewing);
        assert!(editor.fields_disabled());

        assert!(editor.begin_edit());
        assert_eq!(editor.state(), EditState::Editing);
        assert!(!editor.fields_disabled());
        assert_eq!(service.calls().total(), 0);

        // Already editing
        assert!(!editor.begin_edit());
    }

    #[tokio::test]
    async fn test_submit_issues_exactly_one_update() {
        let service = MemoryService::with_records(vec![ann()]);
        let mut editor = Editor::for_existing(ann());
        editor.begin_edit();
        editor.apply(FieldChange::set("age", 31));

        let outcome = editor.submit(&service).await;
        assert_eq!(outcome, SubmitOutcome::Updated);
        assert_eq!(service.calls().update, 1);
        assert_eq!(service.calls().total(), 1);
        assert_eq!(editor.state(), EditState::Viewing);
        assert_eq!(editor.record().get("age").unwrap().as_int(), Some(31));
    }

    #[test]
    fn test_submission_request_line() {
        let mut editor = Editor::for_existing(ann());
        assert_eq!(editor.submission(), None);
        editor.begin_edit();
        let update = editor.submission().unwrap();
        assert_eq!(update.method(), "PUT");
        assert_eq!(update.target_id(), ann().id);

        let create = Editor::for_new().submission().unwrap();
        assert_eq!(create.method(), "POST");
        assert_eq!(create.target_id(), None);
    }

    #[tokio::test]
    async fn test_submit_while_viewing_is_ignored() {
        let service = MemoryService::with_records(vec![ann()]);
        let mut editor = Editor::for_existing(ann());

        assert_eq!(editor.submit(&service).await, SubmitOutcome::Ignored);
        assert_eq!(service.calls().total(), 0);
    }

    #[test]
    fn test_success_replaces_record_wholesale() {
        let mut editor = Editor::for_existing(ann());
        editor.begin_edit();
        editor.apply(FieldChange::set("name", "Annie"));

        let server_record = Record::with_id(RecordId(7)).with("name", "Ann");
        let reply = ResponseEnvelope::success("user updated").with_record(server_record.clone());
        assert_eq!(editor.settle(Ok(reply)), SubmitOutcome::Updated);

        assert_eq!(editor.record(), &server_record);
        assert_eq!(editor.state(), EditState::Viewing);
    }

    #[test]
    fn test_failure_keeps_record_and_state() {
        let mut editor = Editor::for_existing(ann());
        editor.begin_edit();
        editor.apply(FieldChange::set("email", "taken@example.com"));
        let before = editor.record().clone();

        let reply = ResponseEnvelope::failure("error", "validation failed")
            .with_record(Record::with_id(RecordId(7)));
        let outcome = editor.settle(Ok(reply));

        let SubmitOutcome::Failed(err) = outcome else {
            panic!("expected failure, got {outcome:?}");
        };
        assert!(err.to_string().contains("validation failed"));
        assert_eq!(editor.record(), &before);
        assert_eq!(editor.state(), EditState::Editing);
        assert!(editor.error().is_some());
    }

    #[test]
    fn test_network_failure_keeps_editing() {
        let mut editor = Editor::for_existing(ann());
        editor.begin_edit();

        let outcome = editor.settle(Err(ClientError::Network("connection refused".into())));
        assert_eq!(
            outcome,
            SubmitOutcome::Failed(ClientError::Network("connection refused".into()))
        );
        assert_eq!(editor.record(), &ann());
        assert_eq!(editor.state(), EditState::Editing);
    }

    #[test]
    fn test_changes_while_viewing_are_dropped() {
        let mut editor = Editor::for_existing(ann());
        assert!(!editor.apply(FieldChange::set("name", "bob")));
        assert_eq!(editor.record(), &ann());
    }

    #[test]
    fn test_last_write_wins() {
        let mut editor = Editor::for_new();
        editor.apply(FieldChange::set("sex", "male"));
        editor.apply(FieldChange::set("sex", "female"));
        editor.apply(FieldChange::set("age", 20));
        editor.apply(FieldChange::clear("age"));

        assert_eq!(editor.record(), &Record::new().with("sex", "female"));
    }

    #[test]
    fn test_update_success_without_record_keeps_edits() {
        let mut editor = Editor::for_existing(ann());
        editor.begin_edit();
        editor.apply(FieldChange::set("height", 170));

        assert_eq!(
            editor.settle(Ok(ResponseEnvelope::success("user updated"))),
            SubmitOutcome::Updated
        );
        assert_eq!(editor.record().get("height").unwrap().as_int(), Some(170));
        assert_eq!(editor.state(), EditState::Viewing);
    }

    #[tokio::test]
    async fn test_create_yields_assigned_id() {
        let service = MemoryService::new();
        let mut editor = Editor::for_new();
        assert_eq!(editor.mode(), EditorMode::Create);
        assert_eq!(editor.state(), EditState::Editing);

        for change in [
            FieldChange::set("name", "cy"),
            FieldChange::set("email", "cy@example.com"),
            FieldChange::set("weight_goal", "gain"),
        ] {
            editor.apply(change);
        }

        let outcome = editor.submit(&service).await;
        let SubmitOutcome::Created(id) = outcome else {
            panic!("expected create, got {outcome:?}");
        };
        assert_eq!(service.calls().create, 1);
        assert_eq!(editor.mode(), EditorMode::Update(id));
        assert_eq!(editor.record().id, Some(id));
        assert_eq!(editor.state(), EditState::Viewing);
        assert!(service.snapshot().iter().any(|r| r.id == Some(id)));
    }

    #[tokio::test]
    async fn test_create_rejected_by_server() {
        let service = MemoryService::new();
        let mut editor = Editor::for_new();
        editor.apply(FieldChange::set("name", "dee"));

        let outcome = editor.submit(&service).await;
        let SubmitOutcome::Failed(err) = outcome else {
            panic!("expected failure, got {outcome:?}");
        };
        assert!(err.to_string().contains("email required"));
        assert_eq!(editor.mode(), EditorMode::Create);
        assert_eq!(editor.record().id, None);
        assert!(service.snapshot().is_empty());
    }

    #[test]
    fn test_create_success_without_id_is_malformed() {
        let mut editor = Editor::for_new();
        editor.apply(FieldChange::set("name", "eve"));

        let outcome = editor.settle(Ok(ResponseEnvelope::success("user created")));
        assert!(matches!(outcome, SubmitOutcome::Failed(ClientError::Server(_))));
        assert_eq!(editor.mode(), EditorMode::Create);
        assert_eq!(editor.state(), EditState::Editing);
    }
}
