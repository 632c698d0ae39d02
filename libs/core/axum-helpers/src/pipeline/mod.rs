//! Ordered, short-circuiting guard chains.
//!
//! A [`Guard`] inspects a request and returns an [`Outcome`]: forward to the
//! next stage, fail with an [`AppError`], or answer the request itself. A
//! [`GuardPipeline`] runs its guards in insertion order and stops at the
//! first non-forward outcome; failures are rendered by [`AppError`]'s
//! `IntoResponse`, never by the guard.
//!
//! The body is buffered only when the first guard that asks for it (see
//! [`Guard::reads_body`]) is reached, so header checks such as the API key
//! answer before an oversized or unreadable body is touched.
//!
//! # Example
//!
//! ```ignore
//! use axum::{middleware, routing::post, Router};
//! use axum_helpers::{ApiKeyGuard, GuardPipeline, guard_middleware};
//! use std::sync::Arc;
//!
//! let guards = GuardPipeline::new().guard(ApiKeyGuard::new(Some("secret".into())));
//!
//! let app = Router::new().route(
//!     "/",
//!     post(handler).route_layer(middleware::from_fn_with_state(
//!         Arc::new(guards),
//!         guard_middleware,
//!     )),
//! );
//! ```

use axum::{
    body::{Body, Bytes},
    extract::{Request, State},
    http::{HeaderValue, Method, request::Parts},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::fmt;
use std::sync::Arc;

use crate::errors::{AppError, messages};

/// Largest request body a pipeline will buffer.
pub const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Result of a single guard.
pub enum Outcome {
    /// Hand the request to the next stage.
    Forward,
    /// Stop the chain; the failure goes to the error responder.
    Fail(AppError),
    /// Stop the chain and answer with this response.
    Respond(Response),
}

impl Outcome {
    pub fn is_forward(&self) -> bool {
        matches!(self, Outcome::Forward)
    }
}

impl fmt::Debug for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Forward => f.write_str("Forward"),
            Outcome::Fail(err) => f.debug_tuple("Fail").field(err).finish(),
            Outcome::Respond(res) => f.debug_tuple("Respond").field(&res.status()).finish(),
        }
    }
}

/// Read-only view of a request as seen by guards.
///
/// Guards that declare [`Guard::reads_body`] see the fully buffered body;
/// the others see an empty one.
pub struct GuardRequest<'a> {
    parts: &'a Parts,
    body: &'a Bytes,
}

impl<'a> GuardRequest<'a> {
    pub fn new(parts: &'a Parts, body: &'a Bytes) -> Self {
        Self { parts, body }
    }

    pub fn method(&self) -> &Method {
        &self.parts.method
    }

    pub fn path(&self) -> &str {
        self.parts.uri.path()
    }

    pub fn header(&self, name: &str) -> Option<&HeaderValue> {
        self.parts.headers.get(name)
    }

    pub fn body(&self) -> &Bytes {
        self.body
    }

    /// Parse the body as JSON. An empty body yields `None`.
    pub fn json(&self) -> Result<Option<serde_json::Value>, serde_json::Error> {
        if self.body.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }
        serde_json::from_slice(self.body).map(Some)
    }
}

/// A single pipeline stage.
pub trait Guard: Send + Sync + 'static {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Whether this guard inspects the body. Guards ahead of the first one
    /// that does run before the body is buffered.
    fn reads_body(&self) -> bool {
        false
    }

    fn attempt(&self, request: &GuardRequest<'_>) -> Outcome;
}

/// Ordered list of guards.
#[derive(Clone, Default)]
pub struct GuardPipeline {
    guards: Vec<Arc<dyn Guard>>,
}

impl GuardPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a guard; guards run in the order they are added.
    pub fn guard<G: Guard>(mut self, guard: G) -> Self {
        self.guards.push(Arc::new(guard));
        self
    }

    pub fn len(&self) -> usize {
        self.guards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.guards.is_empty()
    }

    /// Names of the guards in execution order.
    pub fn names(&self) -> Vec<&'static str> {
        self.guards.iter().map(|g| g.name()).collect()
    }

    /// Run guards until one does not forward.
    pub fn run(&self, request: &GuardRequest<'_>) -> Outcome {
        run_guards(&self.guards, request)
    }

    /// Guards that never read the body, followed by the rest starting at the
    /// first body reader.
    fn split_at_body(&self) -> (&[Arc<dyn Guard>], &[Arc<dyn Guard>]) {
        let boundary = self
            .guards
            .iter()
            .position(|g| g.reads_body())
            .unwrap_or(self.guards.len());
        self.guards.split_at(boundary)
    }
}

fn run_guards(guards: &[Arc<dyn Guard>], request: &GuardRequest<'_>) -> Outcome {
    for guard in guards {
        let outcome = guard.attempt(request);
        if outcome.is_forward() {
            tracing::trace!(guard = guard.name(), "Guard forwarded");
            continue;
        }
        tracing::debug!(
            guard = guard.name(),
            method = %request.method(),
            path = request.path(),
            "Guard halted request"
        );
        return outcome;
    }
    Outcome::Forward
}

fn halt(outcome: Outcome) -> Option<Response> {
    match outcome {
        Outcome::Forward => None,
        Outcome::Fail(err) => Some(err.into_response()),
        Outcome::Respond(response) => Some(response),
    }
}

impl fmt::Debug for GuardPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GuardPipeline")
            .field("guards", &self.names())
            .finish()
    }
}

/// Axum middleware driving a [`GuardPipeline`].
///
/// Runs the header-only guards, buffers the body if a later guard needs it,
/// runs the remaining guards, and either forwards the request or converts the
/// halting outcome into a response. A body that was never buffered is passed
/// through untouched.
pub async fn guard_middleware(
    State(pipeline): State<Arc<GuardPipeline>>,
    request: Request,
    next: Next,
) -> Response {
    let (parts, body) = request.into_parts();
    let (header_guards, body_guards) = pipeline.split_at_body();

    let empty = Bytes::new();
    if let Some(response) = halt(run_guards(header_guards, &GuardRequest::new(&parts, &empty))) {
        return response;
    }

    if body_guards.is_empty() {
        return next.run(Request::from_parts(parts, body)).await;
    }

    let bytes = match axum::body::to_bytes(body, MAX_BODY_BYTES).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!("Failed to buffer request body: {}", e);
            return AppError::BadRequest(messages::BODY_UNREADABLE.to_string()).into_response();
        }
    };

    if let Some(response) = halt(run_guards(body_guards, &GuardRequest::new(&parts, &bytes))) {
        return response;
    }

    next.run(Request::from_parts(parts, Body::from(bytes))).await
}
