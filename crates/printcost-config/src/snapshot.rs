//! Last-state persistence.
//!
//! The whole input record is saved under a single key after every change and
//! restored verbatim on the next start. Nothing else is persisted.

use printcost_core::types::{FieldValue, InputField, PricingInput};

use crate::defaults::default_input;
use crate::error::{ConfigError, ConfigResult, Validate};
use crate::validation::RULE_FINITE;
use crate::store::StateStore;

/// Key the input snapshot is stored under.
pub const STATE_KEY: &str = "calc3d_state_final";

/// Where a loaded record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotSource {
    /// Restored from the store.
    Stored,
    /// No snapshot existed; the defaults were used.
    Defaults,
}

/// Loads and saves the input snapshot through a [`StateStore`].
///
/// # Example
///
/// ```rust
/// use printcost_config::{InMemoryStore, SnapshotManager};
/// use printcost_core::InputField;
///
/// let manager = SnapshotManager::new(InMemoryStore::new());
/// let updated = manager.update_text(InputField::PartMass, "80").unwrap();
/// assert_eq!(manager.load_or_default().unwrap(), updated);
/// ```
#[derive(Debug)]
pub struct SnapshotManager<S> {
    store: S,
    key: String,
}

impl<S: StateStore> SnapshotManager<S> {
    /// Creates a manager using [`STATE_KEY`].
    pub fn new(store: S) -> Self {
        Self::with_key(store, STATE_KEY)
    }

    /// Creates a manager storing under a custom key.
    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// The key in use.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Loads the saved snapshot, if any.
    ///
    /// Fields missing from an older snapshot take their zero value.
    pub fn load(&self) -> ConfigResult<Option<PricingInput>> {
        let Some(value) = self.store.get(&self.key)? else {
            tracing::debug!(key = %self.key, backend = self.store.backend_name(), "no snapshot");
            return Ok(None);
        };
        let input: PricingInput = serde_json::from_value(value)?;
        tracing::debug!(key = %self.key, backend = self.store.backend_name(), "snapshot loaded");
        Ok(Some(input))
    }

    /// Loads the saved snapshot, falling back to the defaults.
    pub fn load_or_default(&self) -> ConfigResult<PricingInput> {
        self.load_with_source().map(|(input, _)| input)
    }

    /// Like [`load_or_default`](Self::load_or_default), also reporting the source.
    pub fn load_with_source(&self) -> ConfigResult<(PricingInput, SnapshotSource)> {
        Ok(match self.load()? {
            Some(input) => (input, SnapshotSource::Stored),
            None => (default_input(), SnapshotSource::Defaults),
        })
    }

    /// Saves `input` as the current snapshot.
    ///
    /// The record is stored as given and other validation findings are only
    /// logged. A value that is not a finite number is rejected, since JSON
    /// cannot represent it and the snapshot would no longer load.
    pub fn save(&self, input: &PricingInput) -> ConfigResult<()> {
        for finding in input.validate() {
            if finding.rule.as_deref() == Some(RULE_FINITE) {
                return Err(ConfigError::Validation {
                    field: finding.field,
                    message: finding.message,
                });
            }
            tracing::warn!(%finding, "saving questionable value");
        }
        let value = serde_json::to_value(input)?;
        self.store.put(&self.key, value)?;
        tracing::debug!(key = %self.key, backend = self.store.backend_name(), "snapshot saved");
        Ok(())
    }

    /// Applies one field change to the current snapshot and saves the result.
    pub fn update(&self, field: InputField, value: FieldValue) -> ConfigResult<PricingInput> {
        let next = self.load_or_default()?.with_value(field, value)?;
        self.save(&next)?;
        tracing::info!(field = field.key(), %value, "field updated");
        Ok(next)
    }

    /// Parses `text` for `field`, then behaves like [`update`](Self::update).
    pub fn update_text(&self, field: InputField, text: &str) -> ConfigResult<PricingInput> {
        let value = field.parse_value(text)?;
        self.update(field, value)
    }

    /// Deletes the snapshot. Returns true if one existed.
    pub fn reset(&self) -> ConfigResult<bool> {
        let removed = self.store.remove(&self.key)?;
        if removed {
            tracing::info!(key = %self.key, "snapshot reset");
        }
        Ok(removed)
    }
}
