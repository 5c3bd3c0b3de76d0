//! Application core — pure domain logic, zero I/O.
//!
//! Wires the per-opening reminder state machines to the security
//! controller and exposes them to the host through commands, events and
//! the **port traits** defined in [`ports`].

pub mod commands;
pub mod events;
pub mod ports;
pub mod service;
