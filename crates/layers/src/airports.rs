use foundation::math::Vec2;
use scene::Session;

/// Pixel-space marker for one airport.
#[derive(Debug, Clone, PartialEq)]
pub struct AirportMarker {
    pub airport_id: String,
    pub center: Vec2,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AirportsSnapshot {
    pub markers: Vec<AirportMarker>,
}

/// Places one marker per airport summary, projected through the session
/// configuration. Static per session, like the basemap.
pub fn extract_airports(session: &Session) -> AirportsSnapshot {
    let projection = session.projection();
    let markers = session
        .airports()
        .iter()
        .map(|airport| AirportMarker {
            airport_id: airport.airport_id.clone(),
            center: projection.project(airport.position),
        })
        .collect();
    AirportsSnapshot { markers }
}
