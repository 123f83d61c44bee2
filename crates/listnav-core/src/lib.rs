pub mod config;
pub mod logging;

pub mod behaviour;
pub mod context;
pub mod editor;
pub mod error;
pub mod events;
pub mod page;
pub mod query;
