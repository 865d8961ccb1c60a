// ABOUTME: Library crate for snackbar exposing the notification core and TUI pieces for testing and reuse

pub mod app;
pub mod components;
pub mod config;
pub mod models;
pub mod notification;
