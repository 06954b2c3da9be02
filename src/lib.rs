//! Projectboard: a two-lane project board with drag-and-drop status changes.
//!
//! Users enter work items through a validated form. Items appear in the
//! active lane and are dragged into the finished lane (or back) to change
//! their status. Rendering happens against a host document port, so the
//! whole board runs headless against the in-memory document.
//!
//! # Architecture
//!
//! Projectboard follows hexagonal architecture principles:
//!
//! - **Domain**: Work items, statuses, events and transfer payloads
//! - **Ports**: Store observers, the host document, the notifier and the
//!   drag roles
//! - **Adapters**: The in-memory document and recording notifier
//!
//! # Modules
//!
//! - [`board`]: Work items and the observable store
//! - [`validation`]: Field rules and entry form evaluation
//! - [`ui`]: Host document contract, components and drag sessions
//! - [`config`]: Template ids, host id and form rules
//! - [`app`]: Composition root
//!
//! # Examples
//!
//! ```
//! use std::rc::Rc;
//!
//! use projectboard::app::BoardApp;
//! use projectboard::config::BoardConfig;
//! use projectboard::ui::adapters::memory::{InMemoryDocument, RecordingNotifier};
//! use projectboard::validation::RawFormInput;
//!
//! let config = BoardConfig::default();
//! let document = Rc::new(InMemoryDocument::for_board(&config));
//! let board = BoardApp::start(document, Rc::new(RecordingNotifier::new()), config)
//!     .expect("stock page has every template");
//!
//! board
//!     .form()
//!     .fill(&RawFormInput::new("Build API", "desc here", "3"))
//!     .expect("inputs exist");
//! let id = board.form().submit().expect("inputs exist");
//!
//! assert!(id.is_some());
//! assert_eq!(board.active().assigned_items().len(), 1);
//! ```

pub mod app;
pub mod board;
pub mod config;
pub mod ui;
pub mod validation;
