use foundation::math::Vec2;
use scene::{SelectionController, Session};

/// One route line in pixel space, keyed by its route id.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteLine {
    pub route_id: String,
    pub from: Vec2,
    pub to: Vec2,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoutesSnapshot {
    pub lines: Vec<RouteLine>,
}

/// Lines for the currently selected airline's routes.
///
/// Recomputed on every selection transition. The stable per-route keys are
/// what lets the surface drop stale lines and add new ones without touching
/// anything else.
pub fn extract_routes(session: &Session, controller: &SelectionController) -> RoutesSnapshot {
    let projection = session.projection();
    let lines = controller
        .routes_for(session.routes())
        .into_iter()
        .map(|route| RouteLine {
            route_id: route.id.clone(),
            from: projection.project(route.source.position),
            to: projection.project(route.dest.position),
        })
        .collect();
    RoutesSnapshot { lines }
}
