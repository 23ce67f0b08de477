#![doc(test(attr(deny(warnings))))]

//! Bank Core provides the bookkeeping primitives behind a small demo bank:
//! an in-memory account store, login/transfer/loan/signup operations, and
//! the derived balance and summary calculations a presentation layer needs.

pub mod bank;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Bank Core tracing initialized.");
    });
}
