//! Adapters implementing application ports

mod directions_adapter;
mod geocoding_adapter;
mod in_memory_map_surface;

pub use directions_adapter::DirectionsAdapter;
pub use geocoding_adapter::GeocodingAdapter;
pub use in_memory_map_surface::InMemoryMapSurface;
