//! Background worker for server requests
//!
//! Runs listing and deletion calls on a dedicated thread and sends results
//! back via channels, so the UI loop can keep drawing while a request is in
//! flight. Requests are handled strictly in the order they were sent.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use super::{SketchService, TransportError};
use crate::deletion::DeletionRequest;

/// Work for the background thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// Fetch the listing body.
    List,
    /// Delete a batch of sketches.
    Delete(DeletionRequest),
}

/// Outcome of a `Request`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    Listing(Result<String, TransportError>),
    Deleted {
        request: DeletionRequest,
        result: Result<(), TransportError>,
    },
}

/// Worker loop that serves requests until the request channel closes.
pub fn worker_loop<S: SketchService + ?Sized>(
    service: &S,
    request_rx: Receiver<Request>,
    response_tx: Sender<Response>,
) {
    while let Ok(request) = request_rx.recv() {
        let response = match request {
            Request::List => Response::Listing(service.fetch_listing()),
            Request::Delete(request) => {
                let result = service.delete(&request);
                Response::Deleted { request, result }
            }
        };
        // Ignore send errors (main thread may have exited)
        let _ = response_tx.send(response);
    }
    tracing::debug!("request worker exiting");
}

/// Handle to a request worker thread.
pub struct RequestWorker {
    request_tx: Sender<Request>,
    response_rx: Receiver<Response>,
    in_flight: usize,
}

impl RequestWorker {
    /// Spawn a worker thread serving requests against `service`.
    pub fn spawn(service: Arc<dyn SketchService>) -> Self {
        let (request_tx, request_rx) = mpsc::channel();
        let (response_tx, response_rx) = mpsc::channel();

        // A failed spawn drops the receiver, so later sends report WorkerGone.
        if let Err(e) = thread::Builder::new()
            .name("sketch-requests".to_string())
            .spawn(move || worker_loop(service.as_ref(), request_rx, response_tx))
        {
            tracing::error!("failed to spawn request worker: {}", e);
        }

        Self {
            request_tx,
            response_rx,
            in_flight: 0,
        }
    }

    /// Queue a request.
    pub fn send(&mut self, request: Request) -> Result<(), TransportError> {
        self.request_tx
            .send(request)
            .map_err(|_| TransportError::WorkerGone)?;
        self.in_flight += 1;
        Ok(())
    }

    /// Collect every response that is ready, without blocking.
    pub fn poll(&mut self) -> Vec<Response> {
        let mut ready = Vec::new();
        loop {
            match self.response_rx.try_recv() {
                Ok(response) => {
                    self.in_flight = self.in_flight.saturating_sub(1);
                    ready.push(response);
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    self.in_flight = 0;
                    break;
                }
            }
        }
        ready
    }

    /// Wait up to `timeout` for the next response.
    pub fn recv_timeout(&mut self, timeout: Duration) -> Option<Response> {
        let response = self.response_rx.recv_timeout(timeout).ok()?;
        self.in_flight = self.in_flight.saturating_sub(1);
        Some(response)
    }

    /// True while any request is waiting for a response.
    pub fn is_busy(&self) -> bool {
        self.in_flight > 0
    }
}
