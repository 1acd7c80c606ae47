#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use mailru_connect::client::MailruClient;
use mailru_connect::config::ClientConfig;
use mailru_connect::transport::{Transport, TransportError, TransportResponse};

/// Transport double that replays queued responses and records every URL it
/// was asked for. An empty queue behaves like a dropped connection.
#[derive(Default)]
pub struct RecordingTransport {
    responses: Mutex<VecDeque<TransportResponse>>,
    requests: Mutex<Vec<String>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_body(body: &str) -> Self {
        let transport = Self::new();
        transport.queue_body(body);
        transport
    }

    pub fn queue_body(&self, body: &str) {
        self.responses
            .lock()
            .expect("transport lock poisoned")
            .push_back(TransportResponse::ok(body.as_bytes().to_vec()));
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .expect("transport lock poisoned")
            .clone()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn get(&self, url: &str) -> Result<TransportResponse, TransportError> {
        self.requests
            .lock()
            .expect("transport lock poisoned")
            .push(url.to_string());
        self.responses
            .lock()
            .expect("transport lock poisoned")
            .pop_front()
            .ok_or_else(|| TransportError::new("no response available"))
    }
}

pub fn config() -> ClientConfig {
    ClientConfig::new(
        "APP_ID",
        "APP_SECRET",
        "APP_SERVER_KEY",
        "REDIRECT_URI",
        "PERMISSIONS",
    )
}

pub fn client_with(transport: Arc<RecordingTransport>) -> MailruClient {
    MailruClient::new(config()).with_transport(transport)
}

pub const SINGLE_USER: &str = r#"[{
    "uid": "15410773191172635989",
    "first_name": "Евгений",
    "last_name": "Маслов",
    "nick": "maslov",
    "email": "emaslov@mail.ru",
    "sex": 0,
    "birthday": "15.02.1980",
    "has_pic": 1,
    "pic": "http://avt.appsmail.ru/mail/emaslov/_avatar"
}]"#;

pub const TWO_USERS: &str = r#"[
    {"uid": "15410773191172635989", "first_name": "Евгений", "last_name": "Маслов"},
    {"uid": "15410773191172635989", "first_name": "Евгений", "last_name": "Маслов"}
]"#;
