//! # dbview-app - Application State and Orchestration
//!
//! The TEA (The Elm Architecture) core of dbview: the [`AppState`] model,
//! [`Message`] enum, the [`handler::update()`] function, background fetch
//! actions, the presenter that maps fetch outcomes to panels, and
//! configuration loading.
//!
//! Depends on [`dbview_core`] for domain types and [`dbview_api`] for the
//! API client.
//!
//! ## Public API
//!
//! ### TEA Core
//! - [`AppState`] - Complete application state (the Model)
//! - [`Message`] - All possible events
//! - [`handler::update()`] - Message to state transition
//! - [`UpdateAction`] - Side effects the event loop performs
//! - [`process::process_message()`] - Update loop plus action dispatch
//!
//! ### Presentation
//! - [`presenter::DataPanel`] - Loading / populated / empty / failed data area
//! - [`presenter::ErrorPanel`] - Message or detailed API error
//!
//! ### Input
//! - [`InputKey`] - Terminal-independent key events
//!
//! ### Configuration
//! - [`config::Settings`] - `config.toml` contents
//! - [`config::load_settings()`] - Load with fallback to defaults

pub mod actions;
pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod presenter;
pub mod process;
pub mod signals;
pub mod state;

pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use presenter::{DataPanel, ErrorPanel, Loadable};
pub use state::{AppState, Focus, Modal, ModalScroll, RequestId};
