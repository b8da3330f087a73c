use std::fs::File;
use std::io;
use std::path::Path;

use foundation::math::GeoPoint;
use serde::Deserialize;

/// One directed flight leg between two airports.
///
/// Coordinates are already validated: a `Route` never carries an absent or
/// non-finite position.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub id: String,
    pub airline_id: String,
    pub airline_name: String,
    pub source: RouteEndpoint,
    pub dest: RouteEndpoint,
}

/// One side of a route: an airport in its source or destination role.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteEndpoint {
    pub airport_id: String,
    pub name: String,
    pub city: String,
    pub country: String,
    pub position: GeoPoint,
}

/// A route row whose coordinates were absent or not finite numbers.
///
/// Such rows are skipped at ingestion and reported; they never reach the
/// aggregations or the map as silently coerced zeros.
#[derive(Debug, Clone, PartialEq)]
pub struct MissingCoordinateError {
    /// 1-based data record number (the header row does not count).
    pub record: u64,
    pub route_id: String,
    pub field: &'static str,
    pub value: String,
}

impl std::fmt::Display for MissingCoordinateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "route {} (record {}): {} is not a coordinate: {:?}",
            self.route_id, self.record, self.field, self.value
        )
    }
}

impl std::error::Error for MissingCoordinateError {}

#[derive(Debug)]
pub enum RouteTableError {
    Io(io::Error),
    Parse(csv::Error),
}

impl std::fmt::Display for RouteTableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RouteTableError::Io(e) => write!(f, "route table read error: {e}"),
            RouteTableError::Parse(e) => write!(f, "route table parse error: {e}"),
        }
    }
}

impl std::error::Error for RouteTableError {}

/// Raw CSV row, column names as they appear in the header.
#[derive(Debug, Deserialize)]
struct RawRoute {
    #[serde(rename = "ID")]
    id: String,
    #[serde(rename = "AirlineID")]
    airline_id: String,
    #[serde(rename = "AirlineName")]
    airline_name: String,
    #[serde(rename = "SourceAirportID")]
    source_airport_id: String,
    #[serde(rename = "SourceAirport")]
    source_airport: String,
    #[serde(rename = "SourceCity")]
    source_city: String,
    #[serde(rename = "SourceCountry")]
    source_country: String,
    #[serde(rename = "SourceLongitude")]
    source_longitude: String,
    #[serde(rename = "SourceLatitude")]
    source_latitude: String,
    #[serde(rename = "DestAirportID")]
    dest_airport_id: String,
    #[serde(rename = "DestAirport")]
    dest_airport: String,
    #[serde(rename = "DestCity")]
    dest_city: String,
    #[serde(rename = "DestCountry")]
    dest_country: String,
    #[serde(rename = "DestLongitude")]
    dest_longitude: String,
    #[serde(rename = "DestLatitude")]
    dest_latitude: String,
}

/// Parsed route table: the validated rows plus every row skipped for a
/// coordinate problem.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteTable {
    pub routes: Vec<Route>,
    pub skipped: Vec<MissingCoordinateError>,
}

impl RouteTable {
    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self, RouteTableError> {
        let file = File::open(path.as_ref()).map_err(RouteTableError::Io)?;
        Self::from_csv_reader(file)
    }

    /// Parses a headered CSV stream. Columns are matched by header name, so
    /// their order does not matter; unknown columns are ignored.
    pub fn from_csv_reader(reader: impl io::Read) -> Result<Self, RouteTableError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut table = RouteTable::default();

        for (index, row) in csv_reader.deserialize().enumerate() {
            let raw: RawRoute = row.map_err(RouteTableError::Parse)?;
            match validate(raw, index as u64 + 1) {
                Ok(route) => table.routes.push(route),
                Err(skip) => table.skipped.push(skip),
            }
        }

        Ok(table)
    }
}

fn validate(raw: RawRoute, record: u64) -> Result<Route, MissingCoordinateError> {
    let source_lon = parse_coordinate(&raw.id, record, "SourceLongitude", &raw.source_longitude)?;
    let source_lat = parse_coordinate(&raw.id, record, "SourceLatitude", &raw.source_latitude)?;
    let dest_lon = parse_coordinate(&raw.id, record, "DestLongitude", &raw.dest_longitude)?;
    let dest_lat = parse_coordinate(&raw.id, record, "DestLatitude", &raw.dest_latitude)?;

    Ok(Route {
        id: raw.id,
        airline_id: raw.airline_id,
        airline_name: raw.airline_name,
        source: RouteEndpoint {
            airport_id: raw.source_airport_id,
            name: raw.source_airport,
            city: raw.source_city,
            country: raw.source_country,
            position: GeoPoint::new(source_lon, source_lat),
        },
        dest: RouteEndpoint {
            airport_id: raw.dest_airport_id,
            name: raw.dest_airport,
            city: raw.dest_city,
            country: raw.dest_country,
            position: GeoPoint::new(dest_lon, dest_lat),
        },
    })
}

fn parse_coordinate(
    route_id: &str,
    record: u64,
    field: &'static str,
    value: &str,
) -> Result<f64, MissingCoordinateError> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| MissingCoordinateError {
            record,
            route_id: route_id.to_string(),
            field,
            value: value.to_string(),
        })
}
