use std::fs;
use std::path::Path;

use foundation::math::GeoPoint;
use serde_json::Value;

/// One boundary feature: a country or territory outline.
///
/// `Polygon` geometries are normalized into a single-polygon list, so
/// consumers only ever walk `polygons -> rings -> points`.
#[derive(Debug, Clone, PartialEq)]
pub struct Boundary {
    pub id: Option<String>,
    pub name: Option<String>,
    pub polygons: Vec<Vec<Vec<GeoPoint>>>,
}

/// All boundary outlines of one basemap file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoundarySet {
    pub features: Vec<Boundary>,
}

#[derive(Debug)]
pub enum BoundaryError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    NotAFeatureCollection,
    InvalidFeature { index: usize, reason: String },
}

impl std::fmt::Display for BoundaryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoundaryError::Io(e) => write!(f, "boundary file read error: {e}"),
            BoundaryError::Parse(e) => write!(f, "boundary JSON parse error: {e}"),
            BoundaryError::NotAFeatureCollection => {
                write!(f, "expected GeoJSON FeatureCollection")
            }
            BoundaryError::InvalidFeature { index, reason } => {
                write!(f, "invalid feature at index {index}: {reason}")
            }
        }
    }
}

impl std::error::Error for BoundaryError {}

impl BoundarySet {
    pub fn from_geojson_path(path: impl AsRef<Path>) -> Result<Self, BoundaryError> {
        let payload = fs::read_to_string(path.as_ref()).map_err(BoundaryError::Io)?;
        Self::from_geojson_str(&payload)
    }

    pub fn from_geojson_str(payload: &str) -> Result<Self, BoundaryError> {
        let value: Value = serde_json::from_str(payload).map_err(BoundaryError::Parse)?;
        Self::from_geojson_value(value)
    }

    pub fn from_geojson_value(value: Value) -> Result<Self, BoundaryError> {
        let obj = value.as_object().ok_or(BoundaryError::NotAFeatureCollection)?;
        let ty = obj
            .get("type")
            .and_then(|v| v.as_str())
            .ok_or(BoundaryError::NotAFeatureCollection)?;
        if ty != "FeatureCollection" {
            return Err(BoundaryError::NotAFeatureCollection);
        }

        let features_val = obj
            .get("features")
            .and_then(|v| v.as_array())
            .ok_or(BoundaryError::NotAFeatureCollection)?;

        let mut features = Vec::with_capacity(features_val.len());
        for (index, feat_val) in features_val.iter().enumerate() {
            let feat_obj = feat_val.as_object().ok_or(BoundaryError::InvalidFeature {
                index,
                reason: "feature must be an object".to_string(),
            })?;

            let feat_type = feat_obj.get("type").and_then(|v| v.as_str()).ok_or(
                BoundaryError::InvalidFeature {
                    index,
                    reason: "feature missing type".to_string(),
                },
            )?;
            if feat_type != "Feature" {
                return Err(BoundaryError::InvalidFeature {
                    index,
                    reason: format!("unexpected feature type: {feat_type}"),
                });
            }

            let id = match feat_obj.get("id") {
                Some(Value::String(s)) => Some(s.clone()),
                Some(Value::Number(n)) => Some(n.to_string()),
                _ => None,
            };

            let name = feat_obj
                .get("properties")
                .and_then(|v| v.as_object())
                .and_then(|props| props.get("name"))
                .and_then(|v| v.as_str())
                .map(str::to_string);

            let geometry_val = feat_obj
                .get("geometry")
                .ok_or(BoundaryError::InvalidFeature {
                    index,
                    reason: "feature missing geometry".to_string(),
                })?;
            let polygons = parse_boundary_geometry(geometry_val)
                .map_err(|reason| BoundaryError::InvalidFeature { index, reason })?;

            features.push(Boundary { id, name, polygons });
        }

        Ok(Self { features })
    }
}

fn parse_boundary_geometry(value: &Value) -> Result<Vec<Vec<Vec<GeoPoint>>>, String> {
    let obj = value
        .as_object()
        .ok_or("geometry must be an object".to_string())?;
    let ty = obj
        .get("type")
        .and_then(|v| v.as_str())
        .ok_or("geometry missing type".to_string())?;

    let coords = obj
        .get("coordinates")
        .ok_or("geometry missing coordinates".to_string())?;

    match ty {
        "Polygon" => Ok(vec![parse_polygon(coords)?]),
        "MultiPolygon" => parse_multi_polygon(coords),
        other => Err(format!("unsupported boundary geometry type: {other}")),
    }
}

fn parse_point(coords: &Value) -> Result<GeoPoint, String> {
    let arr = coords
        .as_array()
        .ok_or("position must be an array".to_string())?;
    if arr.len() < 2 {
        return Err("position must have [lon, lat]".to_string());
    }
    let lon = arr[0].as_f64().ok_or("lon must be a number".to_string())?;
    let lat = arr[1].as_f64().ok_or("lat must be a number".to_string())?;
    Ok(GeoPoint::new(lon, lat))
}

fn parse_ring(coords: &Value) -> Result<Vec<GeoPoint>, String> {
    let arr = coords
        .as_array()
        .ok_or("ring must be an array of positions".to_string())?;
    let mut out = Vec::with_capacity(arr.len());
    for item in arr {
        out.push(parse_point(item)?);
    }
    Ok(out)
}

fn parse_polygon(coords: &Value) -> Result<Vec<Vec<GeoPoint>>, String> {
    let rings = coords
        .as_array()
        .ok_or("Polygon coordinates must be an array of rings".to_string())?;
    let mut out = Vec::with_capacity(rings.len());
    for ring in rings {
        out.push(parse_ring(ring)?);
    }
    Ok(out)
}

fn parse_multi_polygon(coords: &Value) -> Result<Vec<Vec<Vec<GeoPoint>>>, String> {
    let polys = coords
        .as_array()
        .ok_or("MultiPolygon coordinates must be an array of polygons".to_string())?;
    let mut out = Vec::with_capacity(polys.len());
    for poly in polys {
        out.push(parse_polygon(poly)?);
    }
    Ok(out)
}
