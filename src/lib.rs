//! Home security automation library.
//!
//! Per-opening reminder state machines and a security arming state
//! machine, coupled through a coordinator.  The core is pure logic:
//! time is passed in, outputs leave through the
//! [`EventSink`](app::ports::EventSink) port.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod channels;
pub mod config;
pub mod error;
pub mod reminder;
pub mod security;
pub mod timer;
