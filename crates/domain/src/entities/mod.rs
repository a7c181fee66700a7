//! Domain entities - Objects produced and consumed by a route lookup

mod lookup_result;
mod map_style;
mod route;

pub use lookup_result::LookupResult;
pub use map_style::{
    MARKER_ICON_SIZE_PX, MarkerRole, MarkerStyle, ROUTE_LINE_WIDTH, RouteStyle, StrokeColor,
};
pub use route::Route;
