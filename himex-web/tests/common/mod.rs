//! Shared fixtures for integration tests

#![allow(dead_code)]

use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum_test::TestServer;
use himex_web::config::{MailTransport, SiteConfig};
use himex_web::email::{Email, EmailError, EmailSender};
use himex_web::server;
use himex_web::state::AppState;

pub const OWNER_ADDRESS: &str = "info@himex.example";

/// Records every message instead of delivering it
#[derive(Clone, Default)]
pub struct RecordingSender {
    sent: Arc<Mutex<Vec<Email>>>,
}

impl RecordingSender {
    pub fn sent(&self) -> Vec<Email> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmailSender for RecordingSender {
    async fn send(&self, email: Email) -> Result<(), EmailError> {
        self.sent.lock().unwrap().push(email);
        Ok(())
    }
}

/// Fails every delivery the way an unreachable relay would
pub struct FailingSender;

#[async_trait]
impl EmailSender for FailingSender {
    async fn send(&self, _email: Email) -> Result<(), EmailError> {
        Err(EmailError::transport("connection refused"))
    }
}

pub fn site_config(static_dir: &Path) -> SiteConfig {
    let mut config = SiteConfig::default();
    config.mail.transport = MailTransport::Console;
    config.mail.address = Some(OWNER_ADDRESS.to_string());
    config.assets.static_dir = static_dir.to_path_buf();
    config
}

pub fn test_server(state: AppState) -> TestServer {
    TestServer::new(server::router(state).unwrap()).unwrap()
}

/// Poll until `expected` jobs have finished either way
pub async fn wait_for_jobs(state: &AppState, expected: u64) {
    for _ in 0..200 {
        if state.jobs().stats().finished() >= expected {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!(
        "expected {expected} finished jobs, stats: {:?}",
        state.jobs().stats()
    );
}
