//! Configuration loading and validation.

pub mod logging;
pub mod notification;
pub mod settings;
pub mod telegram;
pub mod webhook;

pub use settings::Config;
