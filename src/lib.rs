pub mod analysis;
pub mod config;
pub mod error;
pub mod i18n;
pub mod security;
pub mod sources;
pub mod ui;
pub mod web;
