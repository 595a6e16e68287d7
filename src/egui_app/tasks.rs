//! Running API requests off the UI thread.
//!
//! Screens hand back an [`ApiRequest`]; the runner executes it on its tokio
//! runtime and delivers the matching [`ApiReply`] over a channel that the UI
//! polls once per frame. Each reply is tagged with the navigation generation
//! it was started under so replies for an unmounted screen can be dropped.

use std::future::Future;
use std::sync::mpsc::{channel, Receiver, Sender, TryRecvError};

use tokio::runtime::Runtime;

use crate::egui_app::api::ApiClient;
use crate::shared::error::ApiError;
use crate::shared::types::{
    LoginRequest, LoginResponse, Profile, RegisterRequest, RegisterResponse, VerifyOtpRequest,
    VerifyOtpResponse,
};

/// A request a screen wants to run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiRequest {
    Login(LoginRequest),
    Register(RegisterRequest),
    VerifyOtp(VerifyOtpRequest),
    FetchProfile { token: Option<String> },
}

impl ApiRequest {
    pub fn name(&self) -> &'static str {
        match self {
            ApiRequest::Login(_) => "login",
            ApiRequest::Register(_) => "register",
            ApiRequest::VerifyOtp(_) => "verify_otp",
            ApiRequest::FetchProfile { .. } => "fetch_profile",
        }
    }
}

/// Result of an [`ApiRequest`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiReply {
    Login(Result<LoginResponse, ApiError>),
    Register(Result<RegisterResponse, ApiError>),
    VerifyOtp(Result<VerifyOtpResponse, ApiError>),
    Profile(Result<Profile, ApiError>),
}

/// Run one request to completion
pub async fn execute(client: &ApiClient, request: ApiRequest) -> ApiReply {
    match request {
        ApiRequest::Login(body) => ApiReply::Login(client.login(&body).await),
        ApiRequest::Register(body) => ApiReply::Register(client.register(&body).await),
        ApiRequest::VerifyOtp(body) => ApiReply::VerifyOtp(client.verify_otp(&body).await),
        ApiRequest::FetchProfile { token } => {
            ApiReply::Profile(client.fetch_profile(token.as_deref()).await)
        }
    }
}

/// Reply tagged with the generation it was started under
pub type Delivery = (u64, ApiReply);

#[derive(Debug, thiserror::Error)]
#[error("failed to start async runtime: {0}")]
pub struct RuntimeError(#[from] std::io::Error);

/// Owns the runtime that executes requests
pub struct TaskRunner {
    runtime: Runtime,
    client: ApiClient,
    sender: Sender<Delivery>,
    receiver: Receiver<Delivery>,
    in_flight: usize,
}

impl TaskRunner {
    pub fn new(client: ApiClient) -> Result<Self, RuntimeError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()?;
        let (sender, receiver) = channel();
        Ok(Self {
            runtime,
            client,
            sender,
            receiver,
            in_flight: 0,
        })
    }

    /// Number of requests started but not yet polled
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Start `request`; its reply arrives through [`TaskRunner::poll`]
    pub fn spawn(&mut self, generation: u64, request: ApiRequest) {
        tracing::debug!(request = request.name(), generation, "Starting request");
        let client = self.client.clone();
        let sender = self.sender.clone();
        self.in_flight += 1;
        self.runtime.spawn(async move {
            let reply = execute(&client, request).await;
            if sender.send((generation, reply)).is_err() {
                tracing::debug!("UI went away before the reply arrived");
            }
        });
    }

    /// Next finished reply, without blocking
    pub fn poll(&mut self) -> Option<Delivery> {
        match self.receiver.try_recv() {
            Ok(delivery) => {
                self.in_flight = self.in_flight.saturating_sub(1);
                Some(delivery)
            }
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Run a short async job (session writes) to completion on the runtime
    pub fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }
}

/// Keep only replies started under `current`
pub fn accept(delivery: Delivery, current: u64) -> Option<ApiReply> {
    let (generation, reply) = delivery;
    if generation == current {
        Some(reply)
    } else {
        tracing::debug!(generation, current, "Discarding reply for an unmounted screen");
        None
    }
}
