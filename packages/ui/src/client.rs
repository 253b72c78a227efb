//! App-wide access to the user records, over HTTP or held in the page.

use api::RecordClient;
use dioxus::prelude::*;
use records::{
    Backend, ClientConfig, ClientError, MemoryService, Record, RecordId, RecordService,
    ResponseEnvelope,
};

/// The backend picked by `[api] backend` in the config.
#[derive(Clone, Debug)]
pub enum UserService {
    Remote(RecordClient),
    Local(MemoryService),
}

impl UserService {
    pub fn from_config(config: ClientConfig) -> Self {
        match config.api.backend {
            Backend::Http => Self::Remote(RecordClient::new(config)),
            Backend::Memory => Self::Local(MemoryService::new()),
        }
    }

    /// URL a request for `id` (or the collection) goes to, as shown in the request log.
    pub fn target(&self, id: Option<RecordId>) -> String {
        match (self, id) {
            (Self::Remote(client), None) => client.config().collection_url(),
            (Self::Remote(client), Some(id)) => client.config().record_url(id),
            (Self::Local(_), None) => "memory:/users".to_string(),
            (Self::Local(_), Some(id)) => format!("memory:/users/{id}"),
        }
    }
}

impl RecordService for UserService {
    async fn list(&self) -> Result<Vec<Record>, ClientError> {
        match self {
            Self::Remote(client) => client.list().await,
            Self::Local(memory) => memory.list().await,
        }
    }

    async fn get(&self, id: RecordId) -> Result<Record, ClientError> {
        match self {
            Self::Remote(client) => client.get(id).await,
            Self::Local(memory) => memory.get(id).await,
        }
    }

    async fn create(&self, record: &Record) -> Result<ResponseEnvelope, ClientError> {
        match self {
            Self::Remote(client) => client.create(record).await,
            Self::Local(memory) => memory.create(record).await,
        }
    }

    async fn update(&self, id: RecordId, record: &Record) -> Result<ResponseEnvelope, ClientError> {
        match self {
            Self::Remote(client) => client.update(id, record).await,
            Self::Local(memory) => memory.update(id, record).await,
        }
    }

    async fn delete(&self, id: RecordId) -> Result<ResponseEnvelope, ClientError> {
        match self {
            Self::Remote(client) => client.delete(id).await,
            Self::Local(memory) => memory.delete(id).await,
        }
    }
}

/// Get the shared [`UserService`].
pub fn use_record_client() -> UserService {
    use_context::<UserService>()
}

/// Provider component that builds the service once from `config`.
/// Wrap your app with this component before any view that reads users.
#[component]
pub fn ClientProvider(config: ClientConfig, children: Element) -> Element {
    use_context_provider(move || {
        let service = UserService::from_config(config);
        tracing::info!("user records at {}", service.target(None));
        service
    });

    rsx! {
        {children}
    }
}
