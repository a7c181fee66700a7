//! Application services - Use case implementations

mod route_display;
mod route_lookup_service;

pub use route_display::{
    DisplayedRoute, RouteSession, VIEWPORT_PADDING, present_failure, present_lookup,
};
pub use route_lookup_service::{LookupState, RouteLookupService};
