pub mod configuration;
pub mod field;
pub mod flow;
pub mod schema;
pub mod step;
pub mod store;
pub mod trading_bot;
pub mod validation;
pub mod view;
pub mod wizard;
