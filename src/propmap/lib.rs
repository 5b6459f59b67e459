//! # Propmap Architecture
//!
//! Propmap converts between the **generic** form a metadata store keeps a
//! classification in (a type name plus an untyped, self-describing property
//! bag) and the **typed** form business code wants to work with.
//!
//! The store is schema-flexible: a bag may be partial, stale, or carry
//! attributes this process has never heard of. Decoding is therefore lenient
//! about missing data and strict about identity (type names and enum values).
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (main.rs, args.rs, print.rs)                           │
//! │  - Reads JSON files, prints typed views and bags            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API (api.rs) over the registry (registry.rs)               │
//! │  - Type name → mapper, pass-through for unknown types       │
//! │  - Merges typed updates without touching foreign attributes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Mappers (mapper.rs, mappers/)                              │
//! │  - One per classification type, owns a fixed name list      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Values (property/, codec.rs, enums.rs)                     │
//! │  - Property value model, typed getters/setters, enum domains│
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing below the CLI writes to stdout or stderr; the registry and API
//! emit `tracing` events and leave installing a subscriber to the binary.
//!
//! ## Example
//!
//! ```ignore
//! let api = ClassificationApi::with_catalog(MapperContext::new("glossary"));
//! match api.decode_classification(&generic)? {
//!     ClassificationOutcome::Decoded { decoded, unrecognized } => { ... }
//!     ClassificationOutcome::Unrecognized(passthrough) => { ... }
//! }
//! ```

pub mod api;
pub mod codec;
pub mod config;
pub mod enums;
pub mod error;
pub mod mapper;
pub mod mappers;
pub mod model;
pub mod property;
pub mod registry;
