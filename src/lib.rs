pub mod app;
pub mod config;
pub mod core;
pub mod error;
pub mod runtime;
pub mod state;

pub use crate::core::FieldId;
pub use crate::core::value;

pub use error::{InvalidOperation, SchemaError, ScriptError};

pub use runtime::event;
pub use runtime::script;

pub use state::configuration;
pub use state::field;
pub use state::flow;
pub use state::schema;
pub use state::step;
pub use state::store;
pub use state::validation;
pub use state::view;
pub use state::wizard;
