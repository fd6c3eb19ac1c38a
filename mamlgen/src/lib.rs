//! MAML help generation for `PowerShell` binary modules.
//!
//! `mamlgen` consumes a JSON module descriptor (command identities,
//! parameter-set memberships, descriptive annotations) and renders
//! schema-ordered MAML help documents, either one per command or one per
//! module. The descriptor is produced by an external introspection step;
//! this crate only transforms it.

pub mod describe;
pub mod error;
pub mod maml;
pub mod output;
pub mod resolve;
pub mod schema;
pub mod typename;
