pub mod event;
pub mod script;
