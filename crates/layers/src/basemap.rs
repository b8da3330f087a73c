use foundation::math::Vec2;
use scene::Session;

/// Projected outline of one boundary feature.
///
/// All rings of the feature are flattened into one list so the surface can
/// draw the feature as a single shape, holes included.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryShape {
    pub id: Option<String>,
    pub name: Option<String>,
    pub rings: Vec<Vec<Vec2>>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BasemapSnapshot {
    pub shapes: Vec<BoundaryShape>,
}

/// Projects every boundary ring into pixel space.
///
/// Static per session: the basemap is drawn once and never redrawn.
pub fn extract_basemap(session: &Session) -> BasemapSnapshot {
    let projection = session.projection();
    let mut shapes = Vec::with_capacity(session.boundaries().features.len());

    for feature in &session.boundaries().features {
        let mut rings = Vec::new();
        for polygon in &feature.polygons {
            for ring in polygon {
                rings.push(ring.iter().map(|p| projection.project(*p)).collect());
            }
        }
        shapes.push(BoundaryShape {
            id: feature.id.clone(),
            name: feature.name.clone(),
            rings,
        });
    }

    BasemapSnapshot { shapes }
}

#[cfg(test)]
mod tests {
    use super::extract_basemap;
    use formats::{Boundary, BoundarySet};
    use foundation::math::GeoPoint;
    use foundation::MapLayout;
    use scene::Session;

    fn session_with(features: Vec<Boundary>) -> Session {
        Session::new(Vec::new(), BoundarySet { features }, &MapLayout::default())
    }

    fn triangle(offset: f64) -> Vec<GeoPoint> {
        vec![
            GeoPoint::new(offset, 0.0),
            GeoPoint::new(offset + 1.0, 0.0),
            GeoPoint::new(offset + 1.0, 1.0),
            GeoPoint::new(offset, 0.0),
        ]
    }

    #[test]
    fn projects_rings_through_the_session_projection() {
        let session = session_with(vec![Boundary {
            id: Some("AAA".to_string()),
            name: Some("Alpha".to_string()),
            polygons: vec![vec![triangle(0.0)]],
        }]);

        let snapshot = extract_basemap(&session);
        assert_eq!(snapshot.shapes.len(), 1);

        let shape = &snapshot.shapes[0];
        assert_eq!(shape.id.as_deref(), Some("AAA"));
        assert_eq!(shape.rings.len(), 1);

        let projection = session.projection();
        let expected = projection.project(GeoPoint::new(0.0, 0.0));
        assert_eq!(shape.rings[0][0], expected);
    }

    #[test]
    fn multi_polygon_rings_flatten_into_one_shape() {
        let session = session_with(vec![Boundary {
            id: None,
            name: Some("Archipelago".to_string()),
            polygons: vec![vec![triangle(0.0)], vec![triangle(10.0)]],
        }]);

        let snapshot = extract_basemap(&session);
        assert_eq!(snapshot.shapes.len(), 1);
        assert_eq!(snapshot.shapes[0].rings.len(), 2);
    }

    #[test]
    fn empty_boundary_set_gives_an_empty_snapshot() {
        let snapshot = extract_basemap(&session_with(Vec::new()));
        assert!(snapshot.shapes.is_empty());
    }
}
