//! # Card Configuration
//!
//! Turns a loosely-typed configuration payload, as delivered by a plugin bridge or a remote
//! config service, into the typed configurations of the card payment component.
//!
//! ## Architecture
//!
//! 1.  **Raw payload ([`raw`]):** an untyped JSON object with total, default-on-mismatch
//!     accessors.
//! 2.  **Parser ([`parser`]):** derives every typed field from the payload and assembles the
//!     component and drop-in configurations.
//! 3.  **Loader ([`loader`]):** reads a payload from a file layered with `PAYCARD__`
//!     environment overrides.
//!
//! ## Example
//!
//! ```rust
//! use paycard_card::{CardConfigurationParser, RawConfig};
//! use paycard_domain::address::{AddressLookupProvider, PostalAddress};
//!
//! #[derive(Debug)]
//! struct NoLookup;
//!
//! impl AddressLookupProvider for NoLookup {
//!     fn look_up(&self, _search_term: &str) -> Vec<PostalAddress> {
//!         Vec::new()
//!     }
//! }
//!
//! let raw = RawConfig::from_json(r#"{ "card": { "hideCvc": true, "supported": ["visa"] } }"#)
//!     .unwrap();
//! let parser = CardConfigurationParser::new(raw, &NoLookup);
//!
//! let component = parser.configuration();
//! assert!(!component.shows_security_code_field);
//! assert_eq!(component.allowed_card_types.map(|t| t.len()), Some(1));
//! ```

mod error;
pub mod keys;
pub mod loader;
pub mod parser;
pub mod raw;

pub use crate::error::{ConfigError, ConfigErrorExt, Result};
pub use crate::loader::load_raw_config;
pub use crate::parser::CardConfigurationParser;
pub use crate::raw::RawConfig;
