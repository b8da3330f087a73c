use std::collections::BTreeSet;

use canvas::{
    Color, Element, ElementKey, HoverTarget, PointerEvent, PointerKind, Primitive, Style, Surface,
    SurfaceOp, TextAlign,
};
use foundation::ChartLayout;
use layers::{
    build_chart, extract_airports, extract_basemap, extract_routes, Axis, Bar, BoundaryShape,
    ChartSnapshot,
};
use scene::{SelectionController, Session};
use tracing::warn;

/// Chart bar fill and its hover replacement.
pub const BAR_FILL: Color = Color::rgb(0x2a, 0x55, 0x99);
pub const BAR_HOVER_FILL: Color = Color::rgb(0x99, 0x2a, 0x5b);
/// Basemap polygon styling.
pub const MAP_FILL: Color = Color::rgb(0xee, 0xee, 0xee);
pub const MAP_STROKE: Color = Color::rgb(0xcc, 0xcc, 0xcc);
/// Airport markers share the bar fill.
pub const AIRPORT_FILL: Color = Color::rgb(0x2a, 0x55, 0x99);
pub const AIRPORT_RADIUS_PX: f64 = 1.0;
/// Route lines are faint so dense bundles read as density.
pub const ROUTE_STROKE: Color = Color::rgb(0x99, 0x2a, 0x2a);
pub const ROUTE_OPACITY: f64 = 0.1;

const AXIS_COLOR: Color = Color::rgb(0x00, 0x00, 0x00);

/// Sequences all drawing and owns the interaction loop.
///
/// `init` draws the static scene once: basemap, airport markers, chart bars
/// (with hover registration) and axes, then the route set for the startup
/// selection. After that only route lines and bar fills ever change, and
/// every transition goes through keyed diffs against the surface.
pub struct Coordinator {
    session: Session,
    chart: ChartLayout,
    controller: SelectionController,
    chart_snapshot: Option<ChartSnapshot>,
    drawn_routes: BTreeSet<String>,
    hovered_bar: Option<String>,
}

impl Coordinator {
    pub fn new(session: Session, chart: ChartLayout, default_airline: Option<&str>) -> Self {
        let controller = match default_airline {
            Some(id) => SelectionController::with_airline(id),
            None => SelectionController::new(),
        };
        Self {
            session,
            chart,
            controller,
            chart_snapshot: None,
            drawn_routes: BTreeSet::new(),
            hovered_bar: None,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn controller(&self) -> &SelectionController {
        &self.controller
    }

    /// Draws the static scene, then the startup route set.
    pub fn init(&mut self, surface: &mut dyn Surface) {
        let mut ops = Vec::new();

        let basemap = extract_basemap(&self.session);
        for (at, shape) in basemap.shapes.into_iter().enumerate() {
            let key = boundary_key(&shape, at);
            ops.push(SurfaceOp::Draw(Element::new(
                key,
                Primitive::Polygon { rings: shape.rings },
                Style::filled(MAP_FILL).with_stroke(MAP_STROKE),
            )));
        }

        let airports = extract_airports(&self.session);
        for marker in airports.markers {
            ops.push(SurfaceOp::Draw(Element::new(
                ElementKey::new(format!("airport:{}", marker.airport_id)),
                Primitive::Circle {
                    center: marker.center,
                    radius: AIRPORT_RADIUS_PX,
                },
                Style::filled(AIRPORT_FILL),
            )));
        }

        match build_chart(self.session.airlines(), &self.chart) {
            Ok(snapshot) => {
                push_chart_ops(&mut ops, &snapshot);
                self.chart_snapshot = Some(snapshot);
            }
            Err(e) => {
                // The map half of the scene still renders.
                warn!("airlines chart disabled: {e}");
            }
        }

        ops.extend(self.route_ops());
        surface.apply(ops);
    }

    /// Applies one pointer transition: selection update, bar repaint, and
    /// the keyed route diff.
    pub fn pointer(&mut self, event: PointerEvent, surface: &mut dyn Surface) {
        let HoverTarget::AirlineBar { airline_id } = event.target;

        let mut ops = Vec::new();
        match event.kind {
            PointerKind::Enter => {
                self.controller.select_airline(airline_id.as_str());
                self.repaint_bars(&mut ops, Some(airline_id));
            }
            PointerKind::Leave => {
                self.controller.clear();
                self.repaint_bars(&mut ops, None);
            }
        }
        ops.extend(self.route_ops());
        surface.apply(ops);
    }

    /// Restores the previously hovered bar and paints the next one, if any.
    fn repaint_bars(&mut self, ops: &mut Vec<SurfaceOp>, next: Option<String>) {
        if self.hovered_bar == next {
            return;
        }
        let Some(snapshot) = &self.chart_snapshot else {
            self.hovered_bar = next;
            return;
        };

        if let Some(previous) = self.hovered_bar.take() {
            if let Some(bar) = snapshot.bars.iter().find(|b| b.airline_id == previous) {
                ops.push(SurfaceOp::Draw(bar_element(bar, Style::filled(BAR_FILL))));
            }
        }
        if let Some(id) = &next {
            if let Some(bar) = snapshot.bars.iter().find(|b| &b.airline_id == id) {
                ops.push(SurfaceOp::Draw(bar_element(
                    bar,
                    Style::filled(BAR_HOVER_FILL),
                )));
            }
        }
        self.hovered_bar = next;
    }

    /// Reconciles drawn route lines with the current selection: stale keys
    /// are removed before any new line is drawn, lines in both sets stay
    /// untouched.
    fn route_ops(&mut self) -> Vec<SurfaceOp> {
        let snapshot = extract_routes(&self.session, &self.controller);
        let next: BTreeSet<String> = snapshot
            .lines
            .iter()
            .map(|line| line.route_id.clone())
            .collect();

        let mut ops = Vec::new();
        for stale in self.drawn_routes.difference(&next) {
            ops.push(SurfaceOp::Remove(route_key(stale)));
        }
        for line in snapshot.lines {
            if self.drawn_routes.contains(&line.route_id) {
                continue;
            }
            ops.push(SurfaceOp::Draw(Element::new(
                route_key(&line.route_id),
                Primitive::Line {
                    from: line.from,
                    to: line.to,
                },
                Style::stroked(ROUTE_STROKE).with_opacity(ROUTE_OPACITY),
            )));
        }

        self.drawn_routes = next;
        ops
    }
}

fn boundary_key(shape: &BoundaryShape, at: usize) -> ElementKey {
    match shape.id.as_deref().or(shape.name.as_deref()) {
        Some(label) => ElementKey::new(format!("boundary:{label}")),
        None => ElementKey::new(format!("boundary:{at}")),
    }
}

fn route_key(route_id: &str) -> ElementKey {
    ElementKey::new(format!("route:{route_id}"))
}

fn bar_element(bar: &Bar, style: Style) -> Element {
    Element::new(
        ElementKey::new(format!("bar:{}", bar.airline_id)),
        Primitive::Rect {
            origin: bar.origin,
            size: bar.size,
        },
        style,
    )
    .with_hover(HoverTarget::AirlineBar {
        airline_id: bar.airline_id.clone(),
    })
}

fn push_chart_ops(ops: &mut Vec<SurfaceOp>, snapshot: &ChartSnapshot) {
    for bar in &snapshot.bars {
        ops.push(SurfaceOp::Draw(bar_element(bar, Style::filled(BAR_FILL))));
    }
    push_axis_ops(ops, "axis-x", &snapshot.x_axis, TextAlign::Center);
    push_axis_ops(ops, "axis-y", &snapshot.y_axis, TextAlign::End);
}

fn push_axis_ops(ops: &mut Vec<SurfaceOp>, prefix: &str, axis: &Axis, align: TextAlign) {
    ops.push(SurfaceOp::Draw(Element::new(
        ElementKey::new(format!("{prefix}:baseline")),
        Primitive::Line {
            from: axis.baseline.0,
            to: axis.baseline.1,
        },
        Style::stroked(AXIS_COLOR),
    )));
    for (at, tick) in axis.ticks.iter().enumerate() {
        ops.push(SurfaceOp::Draw(Element::new(
            ElementKey::new(format!("{prefix}:tick:{at}")),
            Primitive::Line {
                from: tick.mark.0,
                to: tick.mark.1,
            },
            Style::stroked(AXIS_COLOR),
        )));
        ops.push(SurfaceOp::Draw(Element::new(
            ElementKey::new(format!("{prefix}:label:{at}")),
            Primitive::Text {
                anchor: tick.label_at,
                content: tick.label.clone(),
                align,
            },
            Style::filled(AXIS_COLOR),
        )));
    }
}

#[cfg(test)]
mod tests {
    use super::{Coordinator, BAR_FILL, BAR_HOVER_FILL};
    use canvas::{ElementKey, HoverTarget, MemorySurface, PointerEvent};
    use formats::{Boundary, BoundarySet, Route, RouteEndpoint};
    use foundation::math::GeoPoint;
    use foundation::{ChartLayout, MapLayout};
    use pretty_assertions::assert_eq;
    use scene::Session;

    fn endpoint(airport_id: &str, lon: f64, lat: f64) -> RouteEndpoint {
        RouteEndpoint {
            airport_id: airport_id.to_string(),
            name: format!("Airport {airport_id}"),
            city: "City".to_string(),
            country: "Country".to_string(),
            position: GeoPoint::new(lon, lat),
        }
    }

    fn route(id: &str, airline_id: &str, airline_name: &str) -> Route {
        Route {
            id: id.to_string(),
            airline_id: airline_id.to_string(),
            airline_name: airline_name.to_string(),
            source: endpoint("A", 0.0, 0.0),
            dest: endpoint("B", 10.0, 10.0),
        }
    }

    fn boundaries() -> BoundarySet {
        BoundarySet {
            features: vec![Boundary {
                id: Some("NLD".to_string()),
                name: Some("Netherlands".to_string()),
                polygons: vec![vec![vec![
                    GeoPoint::new(4.0, 52.0),
                    GeoPoint::new(5.0, 52.0),
                    GeoPoint::new(5.0, 53.0),
                    GeoPoint::new(4.0, 52.0),
                ]]],
            }],
        }
    }

    fn session() -> Session {
        Session::new(
            vec![
                route("1", "24", "American Airlines"),
                route("2", "10", "Aeroflot"),
                route("3", "24", "American Airlines"),
            ],
            boundaries(),
            &MapLayout::default(),
        )
    }

    fn initialized() -> (Coordinator, MemorySurface) {
        let mut coordinator = Coordinator::new(session(), ChartLayout::default(), Some("24"));
        let mut surface = MemorySurface::new();
        coordinator.init(&mut surface);
        (coordinator, surface)
    }

    fn key(s: &str) -> ElementKey {
        ElementKey::new(s)
    }

    fn fill_of(surface: &MemorySurface, element_key: &str) -> canvas::Color {
        surface
            .get(&key(element_key))
            .unwrap_or_else(|| panic!("missing element {element_key}"))
            .style
            .fill
            .expect("element has a fill")
    }

    #[test]
    fn init_draws_the_whole_static_scene_and_the_default_routes() {
        let (_, surface) = initialized();

        assert!(surface.contains(&key("boundary:NLD")));
        assert!(surface.contains(&key("airport:A")));
        assert!(surface.contains(&key("airport:B")));
        assert!(surface.contains(&key("bar:24")));
        assert!(surface.contains(&key("bar:10")));
        assert!(surface.contains(&key("axis-x:baseline")));
        assert!(surface.contains(&key("axis-y:baseline")));
        assert!(surface.contains(&key("axis-y:label:0")));

        // Startup selection "24" shows its routes and nothing else.
        assert!(surface.contains(&key("route:1")));
        assert!(surface.contains(&key("route:3")));
        assert!(!surface.contains(&key("route:2")));
    }

    #[test]
    fn bars_register_their_hover_target() {
        let (_, surface) = initialized();
        let bar = surface.get(&key("bar:24")).expect("bar element");
        assert_eq!(
            bar.hover,
            Some(HoverTarget::AirlineBar {
                airline_id: "24".to_string()
            })
        );
    }

    #[test]
    fn basemap_renders_below_the_chart() {
        let (_, surface) = initialized();
        let boundary_at = surface
            .elements()
            .iter()
            .position(|e| e.key == key("boundary:NLD"))
            .expect("boundary");
        let bar_at = surface
            .elements()
            .iter()
            .position(|e| e.key == key("bar:24"))
            .expect("bar");
        assert!(boundary_at < bar_at);
    }

    #[test]
    fn enter_swaps_the_route_set_and_highlights_the_bar() {
        let (mut coordinator, mut surface) = initialized();

        coordinator.pointer(
            PointerEvent::enter(HoverTarget::AirlineBar {
                airline_id: "10".to_string(),
            }),
            &mut surface,
        );

        assert!(surface.contains(&key("route:2")));
        assert!(!surface.contains(&key("route:1")));
        assert!(!surface.contains(&key("route:3")));
        assert_eq!(fill_of(&surface, "bar:10"), BAR_HOVER_FILL);
        assert_eq!(fill_of(&surface, "bar:24"), BAR_FILL);
    }

    #[test]
    fn leave_clears_routes_and_the_highlight() {
        let (mut coordinator, mut surface) = initialized();

        coordinator.pointer(
            PointerEvent::enter(HoverTarget::AirlineBar {
                airline_id: "24".to_string(),
            }),
            &mut surface,
        );
        coordinator.pointer(
            PointerEvent::leave(HoverTarget::AirlineBar {
                airline_id: "24".to_string(),
            }),
            &mut surface,
        );

        assert!(!surface.contains(&key("route:1")));
        assert!(!surface.contains(&key("route:2")));
        assert!(!surface.contains(&key("route:3")));
        assert_eq!(fill_of(&surface, "bar:24"), BAR_FILL);
        // The static scene is untouched.
        assert!(surface.contains(&key("boundary:NLD")));
        assert!(surface.contains(&key("airport:A")));
    }

    #[test]
    fn switching_bars_restores_the_previous_highlight() {
        let (mut coordinator, mut surface) = initialized();

        coordinator.pointer(
            PointerEvent::enter(HoverTarget::AirlineBar {
                airline_id: "10".to_string(),
            }),
            &mut surface,
        );
        coordinator.pointer(
            PointerEvent::enter(HoverTarget::AirlineBar {
                airline_id: "24".to_string(),
            }),
            &mut surface,
        );

        assert_eq!(fill_of(&surface, "bar:10"), BAR_FILL);
        assert_eq!(fill_of(&surface, "bar:24"), BAR_HOVER_FILL);
        assert!(surface.contains(&key("route:1")));
        assert!(!surface.contains(&key("route:2")));
    }

    #[test]
    fn repeated_enter_on_the_same_bar_changes_nothing() {
        let (mut coordinator, mut surface) = initialized();

        coordinator.pointer(
            PointerEvent::enter(HoverTarget::AirlineBar {
                airline_id: "24".to_string(),
            }),
            &mut surface,
        );
        let before = surface.clone();

        coordinator.pointer(
            PointerEvent::enter(HoverTarget::AirlineBar {
                airline_id: "24".to_string(),
            }),
            &mut surface,
        );
        assert_eq!(surface, before);
    }

    #[test]
    fn zero_routes_disables_the_chart_but_keeps_the_map() {
        let mut coordinator = Coordinator::new(
            Session::new(Vec::new(), boundaries(), &MapLayout::default()),
            ChartLayout::default(),
            Some("24"),
        );
        let mut surface = MemorySurface::new();
        coordinator.init(&mut surface);

        assert!(surface.contains(&key("boundary:NLD")));
        assert!(!surface.contains(&key("bar:24")));
        assert!(!surface.contains(&key("axis-x:baseline")));
        assert_eq!(surface.len(), 1);
    }
}
