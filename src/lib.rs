pub mod app;
pub mod auth;
pub mod config;
pub mod cursor;
pub mod deferred;
pub mod error;
pub mod forms;
pub mod handlers;
pub mod logging;
pub mod model;
pub mod navigation;
pub mod store;
pub mod ui;
