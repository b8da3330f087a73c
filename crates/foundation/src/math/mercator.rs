use crate::layout::MapLayout;
use crate::math::vec::Vec2;

/// Latitude magnitude (degrees) at which the square Mercator world ends.
/// Inputs beyond it are clamped so the projection stays total.
pub const MAX_LATITUDE_DEG: f64 = 85.051_128_779_806_59;

/// Map scale applied to a default viewport.
const VIEWPORT_SCALE: f64 = 97.0;

/// Vertical offset (px) pushing the projected world below the viewport
/// centre, leaving headroom for the sparse arctic latitudes.
const VIEWPORT_Y_OFFSET_PX: f64 = 20.0;

/// Geographic position in degrees, longitude first (GeoJSON axis order).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GeoPoint {
    pub lon_deg: f64,
    pub lat_deg: f64,
}

impl GeoPoint {
    pub fn new(lon_deg: f64, lat_deg: f64) -> Self {
        Self { lon_deg, lat_deg }
    }
}

/// Spherical Mercator projection into pixel space.
///
/// Determinism contract:
/// - `project` is a pure function of the configuration and the input; equal
///   inputs through one configuration give bit-identical pixels.
/// - Boundary outlines, airport markers, and route endpoints of one session
///   must all go through the same configuration instance to stay aligned.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MercatorProjection {
    pub scale: f64,
    pub translate: Vec2,
}

impl MercatorProjection {
    pub fn new(scale: f64, translate: Vec2) -> Self {
        Self { scale, translate }
    }

    /// Standard configuration for a map viewport: the world centred
    /// horizontally and nudged slightly below the vertical centre.
    pub fn for_layout(layout: &MapLayout) -> Self {
        let translate = layout.origin
            + Vec2::new(
                layout.width / 2.0,
                layout.height / 2.0 + VIEWPORT_Y_OFFSET_PX,
            );
        Self::new(VIEWPORT_SCALE, translate)
    }

    /// Projects a longitude/latitude pair to pixel coordinates.
    ///
    /// Screen y grows downward, so northern latitudes land above the
    /// translation point.
    pub fn project(&self, point: GeoPoint) -> Vec2 {
        let lon_rad = point.lon_deg.to_radians();
        let lat_rad = point
            .lat_deg
            .clamp(-MAX_LATITUDE_DEG, MAX_LATITUDE_DEG)
            .to_radians();
        let stretched = (std::f64::consts::FRAC_PI_4 + lat_rad / 2.0).tan().ln();
        self.translate + Vec2::new(self.scale * lon_rad, -self.scale * stretched)
    }
}

#[cfg(test)]
mod tests {
    use super::{GeoPoint, MercatorProjection, MAX_LATITUDE_DEG};
    use crate::layout::MapLayout;
    use crate::math::vec::Vec2;

    fn assert_close(a: f64, b: f64, eps: f64) {
        assert!((a - b).abs() < eps, "{a} vs {b}");
    }

    fn viewport_projection() -> MercatorProjection {
        MercatorProjection::for_layout(&MapLayout::default())
    }

    #[test]
    fn for_layout_centres_the_viewport() {
        let projection = viewport_projection();
        assert_eq!(projection.scale, 97.0);
        assert_eq!(projection.translate, Vec2::new(300.0, 220.0));
    }

    #[test]
    fn for_layout_shifts_with_the_viewport_origin() {
        let layout = MapLayout {
            origin: Vec2::new(350.0, 0.0),
            ..MapLayout::default()
        };
        let projection = MercatorProjection::for_layout(&layout);
        assert_eq!(projection.translate, Vec2::new(650.0, 220.0));
    }

    #[test]
    fn null_island_lands_on_the_translation_point() {
        let projection = viewport_projection();
        let pixel = projection.project(GeoPoint::new(0.0, 0.0));
        assert_close(pixel.x, 300.0, 1e-9);
        assert_close(pixel.y, 220.0, 1e-9);
    }

    #[test]
    fn antimeridian_x_is_scale_times_pi() {
        let projection = viewport_projection();
        let pixel = projection.project(GeoPoint::new(180.0, 0.0));
        assert_close(pixel.x, 300.0 + 97.0 * std::f64::consts::PI, 1e-9);
    }

    #[test]
    fn north_is_up_east_is_right() {
        let projection = viewport_projection();
        let origin = projection.project(GeoPoint::new(0.0, 0.0));
        assert!(projection.project(GeoPoint::new(0.0, 10.0)).y < origin.y);
        assert!(projection.project(GeoPoint::new(10.0, 0.0)).x > origin.x);
    }

    #[test]
    fn equal_inputs_give_bit_identical_pixels() {
        let projection = viewport_projection();
        let point = GeoPoint::new(-73.7789, 40.6397);
        let a = projection.project(point);
        let b = projection.project(point);
        assert_eq!(a.x.to_bits(), b.x.to_bits());
        assert_eq!(a.y.to_bits(), b.y.to_bits());
    }

    #[test]
    fn nearby_inputs_stay_nearby() {
        let projection = viewport_projection();
        let a = projection.project(GeoPoint::new(12.5, 41.9));
        let b = projection.project(GeoPoint::new(12.51, 41.91));
        assert!((a - b).length() < 0.1);
    }

    #[test]
    fn polar_latitudes_clamp_to_the_mercator_limit() {
        let projection = viewport_projection();
        let pole = projection.project(GeoPoint::new(0.0, 90.0));
        let limit = projection.project(GeoPoint::new(0.0, MAX_LATITUDE_DEG));
        assert!(pole.y.is_finite());
        assert_eq!(pole, limit);
        assert_eq!(
            projection.project(GeoPoint::new(0.0, -90.0)),
            projection.project(GeoPoint::new(0.0, -MAX_LATITUDE_DEG)),
        );
    }
}
