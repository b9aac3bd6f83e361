//! Nearest-candidate selection.

use crate::distance::haversine_km;
use crate::types::{Candidate, Coordinate, LocatorError, Nearest, PointRef};

/// Find the candidate closest to `query` by great-circle distance.
///
/// Returns `Ok(None)` for an empty catalog. Every coordinate, the query
/// included, is validated; the first invalid one aborts the search with
/// [`LocatorError::InvalidCoordinate`] and no partial result.
///
/// Candidates at exactly the same distance resolve to the one that comes
/// first in `catalog`.
pub fn find_nearest<T>(
    query: Coordinate,
    catalog: &[Candidate<T>],
) -> Result<Option<Nearest<'_, T>>, LocatorError> {
    query
        .validate()
        .map_err(|source| LocatorError::InvalidCoordinate {
            point: PointRef::Query,
            source,
        })?;

    let mut best: Option<Nearest<'_, T>> = None;

    for (index, candidate) in catalog.iter().enumerate() {
        candidate
            .coordinate
            .validate()
            .map_err(|source| LocatorError::InvalidCoordinate {
                point: PointRef::Candidate(index),
                source,
            })?;

        let distance_km = haversine_km(query, candidate.coordinate);
        tracing::trace!(index, distance_km, "Scored candidate");

        // Strict comparison keeps the earliest candidate on ties
        let closer = match &best {
            Some(current) => distance_km < current.distance_km,
            None => true,
        };
        if closer {
            best = Some(Nearest {
                index,
                candidate,
                distance_km,
            });
        }
    }

    match &best {
        Some(nearest) => tracing::debug!(
            "Nearest of {} candidates to {} is #{} at {:.3} km",
            catalog.len(),
            query,
            nearest.index,
            nearest.distance_km
        ),
        None => tracing::debug!("No candidates to search around {}", query),
    }

    Ok(best)
}
