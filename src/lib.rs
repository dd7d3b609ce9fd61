//! Ecoleta
//!
//! Terminal client for finding recycling collection points: pick a
//! Brazilian state and city, browse the points registered there, and
//! contact one by e-mail or WhatsApp.
//!
//! Pure Core / Impure Shell:
//! - [`model`], [`state`], [`controller`] hold data and screen logic and
//!   perform no I/O
//! - [`api`], [`dispatch`], [`links`], [`view`] talk to the network, the
//!   desktop and the terminal

pub mod api;
pub mod config;
pub mod controller;
pub mod dispatch;
pub mod links;
pub mod logging;
pub mod model;
pub mod state;
pub mod view;
