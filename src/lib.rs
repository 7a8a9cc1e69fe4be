pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod event;
pub mod logging;
pub mod model;
pub mod paths;
pub mod runtime;
pub mod session;
pub mod view;
pub mod watcher;
