use compute::{count_by_airline, count_by_airport, AirlineSummary, AirportSummary};
use formats::{BoundarySet, Route};
use foundation::math::MercatorProjection;
use foundation::MapLayout;

/// Everything one visualization session owns: the loaded inputs, the
/// aggregations derived from them, and the single projection configuration.
///
/// Built once after both inputs have loaded, then only read. Holding the
/// projection here is what keeps the basemap, the airport markers and the
/// route endpoints aligned: they all project through this configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    routes: Vec<Route>,
    boundaries: BoundarySet,
    projection: MercatorProjection,
    airlines: Vec<AirlineSummary>,
    airports: Vec<AirportSummary>,
}

impl Session {
    pub fn new(routes: Vec<Route>, boundaries: BoundarySet, map: &MapLayout) -> Self {
        let airlines = count_by_airline(&routes);
        let airports = count_by_airport(&routes);
        Self {
            projection: MercatorProjection::for_layout(map),
            routes,
            boundaries,
            airlines,
            airports,
        }
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn boundaries(&self) -> &BoundarySet {
        &self.boundaries
    }

    pub fn projection(&self) -> MercatorProjection {
        self.projection
    }

    /// Airline summaries, descending by route count.
    pub fn airlines(&self) -> &[AirlineSummary] {
        &self.airlines
    }

    /// Airport summaries in first-encounter order.
    pub fn airports(&self) -> &[AirportSummary] {
        &self.airports
    }
}
