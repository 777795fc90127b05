//! Integration tests for the HTTP services against a mock device

use std::sync::Arc;
use std::time::Duration;

use sketchlist::service::{HttpService, Request, RequestWorker, Response, ServerConfig};
use sketchlist::{DeletionRequest, SketchService, TransportError};

use crate::helpers::{filled, listing_body, percent_decode, MockDevice};

fn service_for(device: &MockDevice) -> HttpService {
    HttpService::new(ServerConfig {
        url: device.url(),
        timeout_secs: 5,
        ..ServerConfig::default()
    })
    .unwrap()
}

#[test]
fn fetch_listing_returns_body() {
    let body = listing_body(&[("/imgs/cat.txt", filled('A').as_str())]);
    let device = MockDevice::start(&body);

    let fetched = service_for(&device).fetch_listing().unwrap();

    assert_eq!(fetched, body);
    assert_eq!(device.requests(), vec!["/getList.html"]);
}

#[test]
fn delete_sends_comma_terminated_list() {
    let device = MockDevice::start("");
    let request = DeletionRequest::from_selected(["cat", "dog"]).unwrap();

    service_for(&device).delete(&request).unwrap();

    assert_eq!(
        device.requests(),
        vec!["/delete.html?sketchlist=cat,dog,"]
    );
}

#[test]
fn delete_escapes_unsafe_characters() {
    let device = MockDevice::start("");
    let request = DeletionRequest::from_selected(["my cat", "a&b"]).unwrap();

    service_for(&device).delete(&request).unwrap();

    let target = &device.requests()[0];
    assert_eq!(target, "/delete.html?sketchlist=my%20cat,a%26b,");
    assert_eq!(
        percent_decode(target),
        "/delete.html?sketchlist=my cat,a&b,"
    );
}

#[test]
fn error_status_is_transport_error() {
    let device = MockDevice::start_with_status("", 500);

    let err = service_for(&device).fetch_listing().unwrap_err();

    assert!(matches!(err, TransportError::Status { status: 500, .. }));
}

#[test]
fn worker_lists_then_deletes_in_order() {
    let body = listing_body(&[("/imgs/cat.txt", filled('A').as_str())]);
    let device = MockDevice::start(&body);
    let mut worker = RequestWorker::spawn(Arc::new(service_for(&device)));

    worker.send(Request::List).unwrap();
    let request = DeletionRequest::from_selected(["cat"]).unwrap();
    worker.send(Request::Delete(request.clone())).unwrap();
    assert!(worker.is_busy());

    let first = worker.recv_timeout(Duration::from_secs(5)).unwrap();
    assert_eq!(first, Response::Listing(Ok(body)));
    let second = worker.recv_timeout(Duration::from_secs(5)).unwrap();
    assert_eq!(
        second,
        Response::Deleted {
            request,
            result: Ok(())
        }
    );
    assert!(!worker.is_busy());
    assert_eq!(
        device.requests(),
        vec!["/getList.html", "/delete.html?sketchlist=cat,"]
    );
}
