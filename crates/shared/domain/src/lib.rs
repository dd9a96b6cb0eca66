//! # Domain Models
//!
//! Entities, their plain (JSON-compatible) records, the slot registry used by aspects to
//! contribute to shared extension points, and the configuration types.
//! Keep it lean: no I/O, just data and the mappings between its forms.

// Lets `hunt_derive` expansions refer to `::hunt_domain` from inside this crate.
extern crate self as hunt_domain;

pub mod aspect;
pub mod config;
pub mod constants;
pub mod entities;
pub mod entity;
pub mod ids;
pub mod plain;
pub mod registry;
pub mod slots;

pub use nanoid::nanoid;
