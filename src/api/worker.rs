//! Background gateway worker.
//!
//! The UI thread never blocks on HTTP. It pushes [`GatewayCommand`]s into a
//! bounded channel; the worker runs each one on its own tokio task and
//! posts a [`GatewayEvent`] back to the UI event channel. Requests are never
//! cancelled: a superseded request still completes and the list reducer
//! drops its result by [`RequestId`].

use std::sync::Arc;
use std::time::Instant;

use tokio::sync::mpsc;

use crate::api::client::ApiClient;
use crate::api::error::FetchFailure;
use crate::api::query::{ListRequest, RequestId};
use crate::api::types::{Character, ListResponse};

const GATEWAY_BUFFER: usize = 16;

/// Work item for the gateway worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayCommand {
    List { id: RequestId, request: ListRequest },
    Character { id: u32 },
}

/// Completion posted back to the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayEvent {
    ListLoaded {
        id: RequestId,
        result: Result<ListResponse, FetchFailure>,
    },
    CharacterLoaded {
        id: u32,
        result: Result<Character, String>,
    },
}

#[derive(Debug)]
pub enum GatewayError {
    Disconnected,
    Full,
}

impl std::fmt::Display for GatewayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GatewayError::Disconnected => write!(f, "gateway worker is not running"),
            GatewayError::Full => write!(f, "gateway queue is full"),
        }
    }
}

impl std::error::Error for GatewayError {}

/// Create the command channel shared by the UI and the worker.
pub fn gateway_channel() -> (GatewayHandle, mpsc::Receiver<GatewayCommand>) {
    let (sender, receiver) = mpsc::channel(GATEWAY_BUFFER);
    (GatewayHandle { sender }, receiver)
}

/// Sending side, owned by the UI.
#[derive(Clone)]
pub struct GatewayHandle {
    sender: mpsc::Sender<GatewayCommand>,
}

impl GatewayHandle {
    /// Queue a command without blocking the UI thread.
    pub fn submit(&self, command: GatewayCommand) -> Result<(), GatewayError> {
        self.sender.try_send(command).map_err(|err| match err {
            mpsc::error::TrySendError::Full(_) => GatewayError::Full,
            mpsc::error::TrySendError::Closed(_) => GatewayError::Disconnected,
        })
    }
}

pub struct GatewayWorker {
    receiver: mpsc::Receiver<GatewayCommand>,
}

impl GatewayWorker {
    pub fn new(receiver: mpsc::Receiver<GatewayCommand>) -> Self {
        Self { receiver }
    }

    /// Serve commands until every [`GatewayHandle`] is dropped.
    pub async fn run<E>(mut self, client: Arc<ApiClient>, events: std::sync::mpsc::Sender<E>)
    where
        E: From<GatewayEvent> + Send + 'static,
    {
        while let Some(command) = self.receiver.recv().await {
            let client = Arc::clone(&client);
            let events = events.clone();
            tokio::spawn(async move {
                let event = execute(&client, command).await;
                if events.send(E::from(event)).is_err() {
                    tracing::trace!("gateway: result dropped (UI gone)");
                }
            });
        }
        tracing::debug!("gateway: command channel closed");
    }
}

/// Perform one command and summarize its outcome.
pub async fn execute(client: &ApiClient, command: GatewayCommand) -> GatewayEvent {
    let started = Instant::now();
    match command {
        GatewayCommand::List { id, request } => {
            let result = client.fetch_list(&request).await;
            match &result {
                Ok(_) => tracing::info!(
                    request = %id,
                    filtered = request.is_filtered(),
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "listing loaded"
                ),
                Err(err) => tracing::warn!(
                    request = %id,
                    error_type = err.error_type(),
                    error = %err,
                    "listing failed"
                ),
            }
            GatewayEvent::ListLoaded {
                id,
                result: result.map_err(|err| FetchFailure::from(&err)),
            }
        }
        GatewayCommand::Character { id } => {
            let result = client.fetch_character(id).await;
            if let Err(err) = &result {
                tracing::warn!(character = id, error_type = err.error_type(), error = %err, "detail failed");
            }
            GatewayEvent::CharacterLoaded {
                id,
                result: result.map_err(|err| err.to_string()),
            }
        }
    }
}
