//! # Domain Models
//!
//! This crate contains pure card configuration types with minimal dependencies (`serde`, `strum`).
//! Keep it lean: no I/O, no parsing of untyped payloads, no heavy logic—just data and simple helpers.

pub mod address;
pub mod card;
pub mod config;
pub mod visibility;
