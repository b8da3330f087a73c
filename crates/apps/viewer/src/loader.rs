use std::path::{Path, PathBuf};
use std::thread;

use formats::{BoundaryError, BoundarySet, RouteTable, RouteTableError};
use tracing::info;

/// Fatal load failure on either input.
///
/// Both inputs must parse for the visualization to initialize at all; there
/// is no partial rendering and no retry.
#[derive(Debug)]
pub enum DataLoadError {
    Routes {
        path: PathBuf,
        source: RouteTableError,
    },
    Boundaries {
        path: PathBuf,
        source: BoundaryError,
    },
}

impl std::fmt::Display for DataLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataLoadError::Routes { path, source } => {
                write!(f, "failed to load routes from {}: {source}", path.display())
            }
            DataLoadError::Boundaries { path, source } => {
                write!(
                    f,
                    "failed to load boundaries from {}: {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for DataLoadError {}

/// Both inputs, parsed and validated.
#[derive(Debug)]
pub struct LoadedData {
    pub routes: RouteTable,
    pub boundaries: BoundarySet,
}

/// Reads and parses both inputs on two scoped threads and joins them.
///
/// All-or-nothing: the first failure aborts initialization.
pub fn load(routes_path: &Path, boundaries_path: &Path) -> Result<LoadedData, DataLoadError> {
    let (routes, boundaries) = thread::scope(|scope| {
        let routes = scope.spawn(|| RouteTable::from_csv_path(routes_path));
        let boundaries = scope.spawn(|| BoundarySet::from_geojson_path(boundaries_path));
        (join(routes), join(boundaries))
    });

    let routes = routes.map_err(|source| DataLoadError::Routes {
        path: routes_path.to_path_buf(),
        source,
    })?;
    let boundaries = boundaries.map_err(|source| DataLoadError::Boundaries {
        path: boundaries_path.to_path_buf(),
        source,
    })?;

    info!(
        "loaded {} routes ({} skipped) and {} boundary features",
        routes.routes.len(),
        routes.skipped.len(),
        boundaries.features.len()
    );

    Ok(LoadedData { routes, boundaries })
}

fn join<T>(handle: thread::ScopedJoinHandle<'_, T>) -> T {
    match handle.join() {
        Ok(value) => value,
        Err(panic) => std::panic::resume_unwind(panic),
    }
}
