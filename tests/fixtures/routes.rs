//! Real route geometries for realistic test fixtures.
//!
//! Coordinates sourced from OpenStreetMap. Routes are given as
//! `(lat, lng)` waypoints in travel order.

use route_print::polyline::Polyline;

/// A named waypoint with coordinates.
#[derive(Debug, Clone)]
pub struct Waypoint {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Waypoint {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn coords(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }
}

pub fn polyline(waypoints: &[Waypoint]) -> Polyline {
    Polyline::new(waypoints.iter().map(Waypoint::coords).collect())
}

// ============================================================================
// Las Vegas Strip walking tour (north to south)
// ============================================================================

pub const STRIP_TOUR: &[Waypoint] = &[
    Waypoint::new("Encore at Wynn", 36.1289345, -115.1653620),
    Waypoint::new("Wynn Las Vegas", 36.1263781, -115.1658180),
    Waypoint::new("SW Steakhouse", 36.1262145, -115.1669146),
    Waypoint::new("Public House", 36.1219193, -115.1689317),
    Waypoint::new("Yard House", 36.1177147, -115.1691992),
    Waypoint::new("Caesars Palace", 36.1162, -115.1745),
    Waypoint::new("Bellagio", 36.1126, -115.1767),
    Waypoint::new("Gordon Ramsay BurGR", 36.1107195, -115.1720818),
    Waypoint::new("The Crack Shack", 36.1050709, -115.1735287),
    Waypoint::new("Hard Rock Cafe", 36.1041592, -115.1722166),
    Waypoint::new("MGM Grand", 36.1023654, -115.1688720),
];

// ============================================================================
// Oslo: Frognerseteren to Sognsvann, through Nordmarka
// ============================================================================

pub const NORDMARKA_HIKE: &[Waypoint] = &[
    Waypoint::new("Frognerseteren", 59.9791, 10.6786),
    Waypoint::new("Tryvannstua", 59.9946, 10.6680),
    Waypoint::new("Tryvann", 59.9860, 10.6640),
    Waypoint::new("Skjennungstua", 60.0052, 10.6858),
    Waypoint::new("Ullevålseter", 60.0296, 10.7027),
    Waypoint::new("Blankvann", 60.0487, 10.6743),
    Waypoint::new("Kikut", 60.0880, 10.6560),
    Waypoint::new("Bjørnholt", 60.0584, 10.6960),
    Waypoint::new("Kirkeby", 60.0412, 10.7289),
    Waypoint::new("Ullevålseter", 60.0296, 10.7027),
    Waypoint::new("Sognsvann north", 59.9838, 10.7310),
    Waypoint::new("Sognsvann", 59.9700, 10.7318),
];

// ============================================================================
// Western Norway: Bergen to Voss along the E16
// ============================================================================

pub const BERGEN_VOSS: &[Waypoint] = &[
    Waypoint::new("Bergen", 60.3913, 5.3221),
    Waypoint::new("Arna", 60.4197, 5.4660),
    Waypoint::new("Trengereid", 60.4614, 5.6093),
    Waypoint::new("Vaksdal", 60.4816, 5.7345),
    Waypoint::new("Stanghelle", 60.5493, 5.7327),
    Waypoint::new("Dale", 60.5886, 5.8153),
    Waypoint::new("Evanger", 60.6493, 6.1093),
    Waypoint::new("Bulken", 60.6324, 6.2880),
    Waypoint::new("Voss", 60.6280, 6.4150),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routes_are_in_plausible_areas() {
        for wp in STRIP_TOUR {
            assert!(wp.lat > 35.9 && wp.lat < 36.3, "{} lat out of range: {}", wp.name, wp.lat);
        }
        for wp in NORDMARKA_HIKE.iter().chain(BERGEN_VOSS) {
            assert!(wp.lat > 59.0 && wp.lat < 61.0, "{} lat out of range: {}", wp.name, wp.lat);
            assert!(wp.lng > 5.0 && wp.lng < 11.0, "{} lng out of range: {}", wp.name, wp.lng);
        }
    }
}
