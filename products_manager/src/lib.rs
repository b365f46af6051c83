//! Records product shipments and sales for users and reports stock to executives.
//!
//! User actions are sent as commands through a [notifier::DefaultNotifier];
//! command handlers publish [events::ProductEvent]s, and listeners write them to
//! storage, apply them to the catalog and ask the screen to redraw.

pub mod app;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod console;
pub mod events;
pub mod listeners;
pub mod models;
pub mod presenter;
pub mod queries;
pub mod store;
pub mod views;

#[cfg(test)]
mod testing;
