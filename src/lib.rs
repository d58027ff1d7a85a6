// ABOUTME: Library crate for deckmate exposing the wizard core, TUI state and CLI for testing

#![allow(missing_docs)]

pub mod app;
pub mod cli;
pub mod components;
pub mod config;
pub mod models;
pub mod wizard;
