//! Domain layer for the route finder
//!
//! Contains the value objects and entities of a route lookup: addresses,
//! coordinates, transport modes, routes, and the styling table that decides
//! how markers and route overlays look on a map surface.
//! This layer has no I/O and defines the ubiquitous language.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
