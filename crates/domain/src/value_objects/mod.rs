//! Value Objects - Immutable, identity-less domain primitives

mod address;
mod bounding_region;
mod coordinate;
mod transport_mode;

pub use address::Address;
pub use bounding_region::BoundingRegion;
pub use coordinate::Coordinate;
pub use transport_mode::TransportMode;
