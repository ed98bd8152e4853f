pub mod app;
pub mod catalog;
pub mod config;
pub mod gate;
pub mod logging;
pub mod navigator;
pub mod registry;
pub mod render;
