use std::collections::HashMap;

use formats::{Route, RouteEndpoint};
use foundation::math::GeoPoint;

/// Appearance count for one airport across both route roles.
#[derive(Debug, Clone, PartialEq)]
pub struct AirportSummary {
    pub airport_id: String,
    pub name: String,
    pub city: String,
    pub country: String,
    pub position: GeoPoint,
    pub count: usize,
}

/// Counts how often each airport appears as a route destination or source.
///
/// One summary exists per airport id no matter the mix of roles; the
/// descriptive fields and the position come from the first role seen. For
/// each route the destination is tallied before the source, and the output
/// keeps first-encounter order.
pub fn count_by_airport(routes: &[Route]) -> Vec<AirportSummary> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut summaries: Vec<AirportSummary> = Vec::new();

    for route in routes {
        tally(&mut index, &mut summaries, &route.dest);
        tally(&mut index, &mut summaries, &route.source);
    }

    summaries
}

fn tally<'a>(
    index: &mut HashMap<&'a str, usize>,
    summaries: &mut Vec<AirportSummary>,
    endpoint: &'a RouteEndpoint,
) {
    match index.get(endpoint.airport_id.as_str()) {
        Some(&at) => summaries[at].count += 1,
        None => {
            index.insert(endpoint.airport_id.as_str(), summaries.len());
            summaries.push(AirportSummary {
                airport_id: endpoint.airport_id.clone(),
                name: endpoint.name.clone(),
                city: endpoint.city.clone(),
                country: endpoint.country.clone(),
                position: endpoint.position,
                count: 1,
            });
        }
    }
}
