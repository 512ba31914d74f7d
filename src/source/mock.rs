//! Mock item source for testing.

use std::collections::{HashMap, HashSet};

use crate::item::{Item, ItemDetails};
use crate::{ExportError, ExportResult};

use super::traits::ItemSource;

/// Configuration for mock source responses.
#[derive(Debug, Clone, Default)]
pub struct MockSourceConfig {
    /// Name to report
    pub name: String,
    /// Version to report; `None` simulates a missing binary
    pub version: Option<String>,
    /// Items returned by the listing
    pub items: Vec<Item>,
    /// Detail blocks by item uuid
    pub details: HashMap<String, ItemDetails>,
    /// Whether the listing should fail
    pub list_fails: bool,
    /// Uuids whose detail fetch should fail
    pub detail_failures: HashSet<String>,
}

impl MockSourceConfig {
    /// Create a new mock config with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        MockSourceConfig {
            name: name.into(),
            version: Some("mock-1.0.0".to_string()),
            ..Default::default()
        }
    }

    /// Add an item to the listing.
    pub fn with_item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }

    /// Register the detail block returned for an item uuid.
    pub fn with_details(mut self, uuid: impl Into<String>, details: ItemDetails) -> Self {
        self.details.insert(uuid.into(), details);
        self
    }

    /// Make the listing fail.
    pub fn list_fails(mut self) -> Self {
        self.list_fails = true;
        self
    }

    /// Make the detail fetch fail for one item uuid.
    pub fn details_fail_for(mut self, uuid: impl Into<String>) -> Self {
        self.detail_failures.insert(uuid.into());
        self
    }

    /// Report no version, simulating an uninstalled CLI.
    pub fn unavailable(mut self) -> Self {
        self.version = None;
        self
    }
}

/// Mock source for unit and integration testing.
///
/// Returns configurable fake items without spawning anything.
pub struct MockSource {
    config: MockSourceConfig,
}

impl MockSource {
    /// Create a new mock source with the given configuration.
    pub fn new(config: MockSourceConfig) -> Self {
        MockSource { config }
    }

    /// Create a mock source with an empty vault.
    pub fn default_mock() -> Self {
        Self::new(MockSourceConfig::new("mock"))
    }
}

impl ItemSource for MockSource {
    fn name(&self) -> &str {
        &self.config.name
    }

    fn version(&self) -> Option<String> {
        self.config.version.clone()
    }

    fn list_items(&self) -> ExportResult<Vec<Item>> {
        if self.config.list_fails {
            return Err(ExportError::Message("mock listing failed".into()));
        }
        Ok(self.config.items.clone())
    }

    fn fetch_details(&self, item: &mut Item) -> ExportResult<()> {
        if self.config.detail_failures.contains(&item.uuid) {
            return Err(ExportError::Message(format!(
                "mock detail fetch failed for {}",
                item.uuid
            )));
        }
        match self.config.details.get(&item.uuid) {
            Some(details) => {
                item.details = Some(details.clone());
                Ok(())
            }
            None => Err(ExportError::Message(format!(
                "no details configured for {}",
                item.uuid
            ))),
        }
    }
}
