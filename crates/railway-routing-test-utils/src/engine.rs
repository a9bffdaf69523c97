use parking_lot::Mutex;
use railway_routing::RoutingEngine;
use railway_routing::config::ConfigDocument;
use std::sync::Arc;

/// Engine that records every document it is initialized with.
#[derive(Clone, Debug, Default)]
pub struct RecordingEngine {
    documents: Arc<Mutex<Vec<ConfigDocument>>>,
}

impl RecordingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn documents(&self) -> Vec<ConfigDocument> {
        self.documents.lock().clone()
    }

    pub fn last_document(&self) -> Option<ConfigDocument> {
        self.documents.lock().last().cloned()
    }
}

impl RoutingEngine for RecordingEngine {
    fn initialize(&mut self, document: &ConfigDocument) -> anyhow::Result<()> {
        self.documents.lock().push(document.clone());
        Ok(())
    }
}

/// Engine that always fails to initialize.
#[derive(Clone, Debug)]
pub struct FailingEngine {
    message: String,
}

impl FailingEngine {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl RoutingEngine for FailingEngine {
    fn initialize(&mut self, _document: &ConfigDocument) -> anyhow::Result<()> {
        anyhow::bail!("{}", self.message)
    }
}
