//! # Printcost Config
//!
//! Defaults, validation and persistence for the Printcost calculator.
//!
//! - [`default_input`]: the documented starting values
//! - [`Validate`]: non-blocking checks on an input record
//! - [`StateStore`]: key-value storage with in-memory and JSON-file backends
//! - [`SnapshotManager`]: saves the whole input record after every change and
//!   restores it verbatim
//!
//! ## Example
//!
//! ```rust
//! use printcost_config::prelude::*;
//! use printcost_core::InputField;
//!
//! let manager = SnapshotManager::new(InMemoryStore::new());
//! let input = manager.load_or_default().unwrap();
//! assert_eq!(input, default_input());
//!
//! let input = manager.update_text(InputField::PrintTime, "6").unwrap();
//! assert_eq!(input.variable_costs.print_time_hours, 6.0);
//! assert!(input.is_valid());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::float_cmp)]
#![allow(clippy::module_name_repetitions)]

pub mod defaults;
pub mod error;
pub mod snapshot;
pub mod store;
pub mod validation;

pub use defaults::default_input;
pub use error::{ConfigError, ConfigResult, Validate, ValidationError};
pub use snapshot::{SnapshotManager, SnapshotSource, STATE_KEY};
pub use store::{InMemoryStore, JsonFileStore, StateStore};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::defaults::default_input;
    pub use crate::error::{ConfigError, ConfigResult, Validate, ValidationError};
    pub use crate::snapshot::{SnapshotManager, SnapshotSource, STATE_KEY};
    pub use crate::store::{InMemoryStore, JsonFileStore, StateStore};
}
