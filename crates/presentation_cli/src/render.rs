//! Terminal rendering of lookup results

use domain::{Coordinate, LookupResult, RouteStyle};
use infrastructure::InMemoryMapSurface;
use serde::Serialize;

/// Names of the two endpoints as reported by reverse geocoding
#[derive(Debug, Default, Serialize)]
pub struct EndpointNames {
    pub origin: Option<String>,
    pub destination: Option<String>,
}

/// JSON document printed by `lookup --format json`
#[derive(Debug, Serialize)]
pub struct LookupReport<'a> {
    pub from: &'a str,
    pub to: &'a str,
    #[serde(flatten)]
    pub result: &'a LookupResult,
    pub style: RouteStyle,
    #[serde(skip_serializing_if = "is_unnamed")]
    pub names: &'a EndpointNames,
}

fn is_unnamed(names: &&EndpointNames) -> bool {
    names.origin.is_none() && names.destination.is_none()
}

fn endpoint_line(label: &str, address: &str, coordinate: Coordinate, name: Option<&str>) -> String {
    let mut line = format!("  {label:<7} {address} ({coordinate})");
    if let Some(name) = name {
        line.push_str(&format!("\n          {name}"));
    }
    line
}

/// Human-readable summary of a displayed lookup
pub fn text_summary(
    from: &str,
    to: &str,
    result: &LookupResult,
    names: &EndpointNames,
    surface: &InMemoryMapSurface,
) -> String {
    let mode = result.mode();
    let style = RouteStyle::for_mode(mode);

    [
        format!("{} {} route", mode.emoji(), mode.label()),
        endpoint_line("From:", from, result.origin, names.origin.as_deref()),
        endpoint_line("To:", to, result.destination, names.destination.as_deref()),
        format!("  Route:  {}", result.route.format_summary()),
        format!("  Direct: {:.1} km", result.direct_distance_km()),
        format!("  Points: {}", result.route.point_count()),
        format!("  Style:  {} line, width {}", style.stroke, style.line_width),
        format!(
            "  Map:    {} markers, {} overlay",
            surface.markers().len(),
            surface.overlay_count()
        ),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use application::RouteSession;
    use domain::{Route, TransportMode};

    use super::*;

    fn lookup() -> LookupResult {
        let route = Route::new(
            TransportMode::Walking,
            vec![Coordinate::ISTANBUL, Coordinate::ANKARA],
            452_300.0,
            16_680.0,
        )
        .unwrap();
        LookupResult::new(Coordinate::ISTANBUL, Coordinate::ANKARA, route)
    }

    fn drawn(result: &LookupResult) -> InMemoryMapSurface {
        let mut session = RouteSession::new(InMemoryMapSurface::new());
        session.apply(&Ok(result.clone()));
        session.into_surface()
    }

    #[test]
    fn text_summary_lists_route_and_map_state() {
        let result = lookup();
        let surface = drawn(&result);
        let text = text_summary(
            "Istanbul",
            "Ankara",
            &result,
            &EndpointNames::default(),
            &surface,
        );

        assert!(text.starts_with("🚶 Walking route"));
        assert!(text.contains("From:   Istanbul (41.008200, 28.978400)"));
        assert!(text.contains("walking 452.3 km, 4h 38min"));
        assert!(text.contains("red line, width 5"));
        assert!(text.contains("2 markers, 1 overlay"));
    }

    #[test]
    fn text_summary_includes_names() {
        let result = lookup();
        let surface = drawn(&result);
        let names = EndpointNames {
            origin: Some("Fatih, İstanbul".to_string()),
            destination: None,
        };

        let text = text_summary("Istanbul", "Ankara", &result, &names, &surface);
        assert!(text.contains("Fatih, İstanbul"));
    }

    #[test]
    fn json_report_omits_missing_names() {
        let result = lookup();
        let names = EndpointNames::default();
        let report = LookupReport {
            from: "Istanbul",
            to: "Ankara",
            result: &result,
            style: RouteStyle::for_mode(result.mode()),
            names: &names,
        };

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["from"], "Istanbul");
        assert_eq!(json["style"]["stroke"], "red");
        assert!(json.get("route").is_some());
        assert!(json.get("origin").is_some());
        assert!(json.get("names").is_none());
    }
}
