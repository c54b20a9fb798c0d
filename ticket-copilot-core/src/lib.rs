#![doc = "ticket-copilot-core: core types and formatting for the support ticket copilot runner."]

//! This crate holds the processor contract, the typed result record, strict
//! decoding of the processor's payload and the pure report formatting.
//! Argument parsing, configuration and transport live in the `ticket-copilot` crate.
//!
//! # Usage
//! Depend on this crate to implement a [`contract::TicketProcessor`] or to
//! render a [`contract::TicketResult`].

pub mod contract;
pub mod decode;
pub mod error;
pub mod report;

pub use contract::{Intent, TicketProcessor, TicketRequest, TicketResult, TicketStatus};
pub use error::{DecodeError, ProcessorError};
