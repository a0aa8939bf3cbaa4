//! Scripted transport for exercising the gateway and session manager.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use futures::channel::oneshot;

use super::error::TransportError;
use super::transport::{HttpRequest, HttpResponse, Method, Transport};
use crate::config::ClientConfig;

pub(crate) const BASE_URL: &str = "http://api.test";

pub(crate) fn config() -> ClientConfig {
    ClientConfig::new(BASE_URL)
}

enum Reply {
    Respond(HttpResponse),
    Fail(String),
}

struct Scripted {
    reply: Reply,
    gate: Option<oneshot::Receiver<()>>,
}

/// Replies are queued per `(method, path)`; unscripted calls get a 404.
#[derive(Default)]
pub(crate) struct FakeTransport {
    routes: Mutex<HashMap<(Method, String), VecDeque<Scripted>>>,
    sent: Mutex<Vec<HttpRequest>>,
}

impl FakeTransport {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn push(&self, method: Method, path: &str, scripted: Scripted) {
        self.routes
            .lock()
            .unwrap()
            .entry((method, path.to_owned()))
            .or_default()
            .push_back(scripted);
    }

    pub(crate) fn respond(&self, method: Method, path: &str, status: u16, body: serde_json::Value) {
        let body = if body.is_null() { String::new() } else { body.to_string() };
        self.push(method, path, Scripted { reply: Reply::Respond(HttpResponse { status, body }), gate: None });
    }

    pub(crate) fn fail(&self, method: Method, path: &str, message: &str) {
        self.push(method, path, Scripted { reply: Reply::Fail(message.to_owned()), gate: None });
    }

    /// Queue a reply that is held back until the returned sender fires.
    pub(crate) fn respond_later(
        &self,
        method: Method,
        path: &str,
        status: u16,
        body: serde_json::Value,
    ) -> oneshot::Sender<()> {
        let (release, gate) = oneshot::channel();
        let body = body.to_string();
        self.push(
            method,
            path,
            Scripted { reply: Reply::Respond(HttpResponse { status, body }), gate: Some(gate) },
        );
        release
    }

    pub(crate) fn requests(&self) -> Vec<HttpRequest> {
        self.sent.lock().unwrap().clone()
    }

    pub(crate) fn requests_to(&self, path: &str) -> Vec<HttpRequest> {
        self.requests().into_iter().filter(|r| path_of(&r.url) == path).collect()
    }
}

fn path_of(url: &str) -> &str {
    url.strip_prefix(BASE_URL).unwrap_or(url).trim_start_matches('/')
}

#[async_trait(?Send)]
impl Transport for FakeTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let key = (request.method, path_of(&request.url).to_owned());
        self.sent.lock().unwrap().push(request);
        let scripted = self.routes.lock().unwrap().get_mut(&key).and_then(VecDeque::pop_front);
        let Some(scripted) = scripted else {
            return Ok(HttpResponse { status: 404, body: String::new() });
        };
        if let Some(gate) = scripted.gate {
            let _ = gate.await;
        }
        match scripted.reply {
            Reply::Respond(response) => Ok(response),
            Reply::Fail(message) => Err(TransportError(message)),
        }
    }
}
