use std::collections::HashMap;

use formats::Route;

/// Route count for one airline; drives one chart bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AirlineSummary {
    pub airline_id: String,
    pub airline_name: String,
    pub count: usize,
}

/// Groups routes by airline id and counts them.
///
/// Ordering contract:
/// - Descending by count.
/// - Ties keep first-seen input order (stable sort over insertion order);
///   callers must not rely on any finer tie order.
///
/// The display name is taken from the first route seen for an id.
pub fn count_by_airline(routes: &[Route]) -> Vec<AirlineSummary> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut summaries: Vec<AirlineSummary> = Vec::new();

    for route in routes {
        match index.get(route.airline_id.as_str()) {
            Some(&at) => summaries[at].count += 1,
            None => {
                index.insert(route.airline_id.as_str(), summaries.len());
                summaries.push(AirlineSummary {
                    airline_id: route.airline_id.clone(),
                    airline_name: route.airline_name.clone(),
                    count: 1,
                });
            }
        }
    }

    summaries.sort_by(|a, b| b.count.cmp(&a.count));
    summaries
}
