//! Fire-station catalog: the built-in Odisha list and JSON loading.

use crate::nearest::find_nearest;
use crate::types::{Candidate, Coordinate, CoordinateError, LocatorError, NearestMatch};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Payload carried by each station in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FireStation {
    pub name: String,
    pub address: String,
}

/// Nearest station, detached from the catalog
pub type StationMatch = NearestMatch<FireStation>;

/// On-disk record shape: `{ "name", "address", "lat", "lng" }`
#[derive(Debug, Deserialize)]
struct StationRecord {
    name: String,
    #[serde(default)]
    address: String,
    lat: f64,
    lng: f64,
}

/// Catalog loading errors
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read station catalog {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse station catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Station #{index} ({name}) has an invalid coordinate: {source}")]
    InvalidStation {
        index: usize,
        name: String,
        source: CoordinateError,
    },
}

// (name, latitude, longitude, address)
const BUILTIN_STATIONS: &[(&str, f64, f64, &str)] = &[
    ("Cuttack City Fire Station", 20.47661, 85.87556, "Buxi Bazar Road, Cuttack"),
    ("Baleswar Fire Station", 21.49499, 86.93787, "Town Hall Road, Balasore"),
    ("Berhampur Fire Station", 19.31256, 84.78953, "near Madam Showroom"),
    ("MKCG Berhampur Fire Station", 19.31407, 84.80235, "Medical Bank Colony"),
    ("Baramunda Fire Station", 20.28179, 85.79889, "IRC Village, Baramunda"),
    ("Fire Station", 20.33344, 85.80953, "S.S Vihar Road, Bhubaneswar"),
    ("Sambalpur Fire Station", 20.33344, 85.80953, "Pattnayakpada, Sambalpur"),
    ("Sambalpur Fire Station", 21.46951, 83.97207, "Pattnayakpada, Sambalpur"),
    ("Dhenkanal Fire Station", 20.65222, 85.59633, "College Road, Dhenkanal"),
    ("Aska Fire Station", 19.63365, 84.65261, "Asika, Ganjam"),
    ("Jeypore Fire Station", 18.86900, 82.56199, "Vizianagaram Road, Koraput"),
    ("Bhadrak Fire Station", 21.09709, 86.52800, "Near NH16, Bhadrak"),
    ("Athagarh Fire Station", 20.50805, 85.63191, "Pattnayakpada, Sambalpur"),
    ("Khurdha Fire Station", 20.17078, 85.61328, "Pallahat, Khurdha"),
    ("Baripada Fire Station", 21.94535, 86.72517, "Meher Colony, Mayurbhanj"),
    ("Paralakhemundi Fire Station", 18.80100, 84.09819, "Paralakhemundi ,Gajapati"),
    ("Nayagarh Fire Station", 20.00204, 85.00242, "Nayagarh Odagaon Road, Nayagarh"),
    ("Anandapur Fire Station", 21.20847, 86.13747, "Anandapur, Keonijhar"),
    ("Rourkela Fire Station", 22.22246, 84.85046, "Udit Nagar, Rourkela"),
    ("G.Udayagiri Fire Station", 20.13050, 85.35929, "Paburia-G.Udayagiri, Kandhamal"),
    ("Burla Fire Station", 21.49465, 83.86828, "Nuabatimuda, Sambalpur"),
];

/// Ordered list of fire stations searched by [`StationCatalog::nearest`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StationCatalog {
    stations: Vec<Candidate<FireStation>>,
}

impl StationCatalog {
    pub fn new(stations: Vec<Candidate<FireStation>>) -> Self {
        Self { stations }
    }

    /// Stations across Odisha, in their original order. Two entries share a
    /// coordinate; searches resolve that tie to the earlier one.
    pub fn builtin() -> Self {
        let stations = BUILTIN_STATIONS
            .iter()
            .map(|&(name, latitude, longitude, address)| {
                Candidate::new(
                    Coordinate {
                        latitude,
                        longitude,
                    },
                    FireStation {
                        name: name.to_string(),
                        address: address.to_string(),
                    },
                )
            })
            .collect();

        Self { stations }
    }

    /// Parse a JSON array of station records, validating every coordinate.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let records: Vec<StationRecord> = serde_json::from_str(json)?;

        let stations = records
            .into_iter()
            .enumerate()
            .map(|(index, record)| -> Result<Candidate<FireStation>, CatalogError> {
                let name = record.name.trim().to_string();
                let coordinate = Coordinate::new(record.lat, record.lng).map_err(|source| {
                    CatalogError::InvalidStation {
                        index,
                        name: name.clone(),
                        source,
                    }
                })?;

                Ok(Candidate::new(
                    coordinate,
                    FireStation {
                        name,
                        address: record.address.trim().to_string(),
                    },
                ))
            })
            .collect::<Result<Vec<_>, CatalogError>>()?;

        Ok(Self { stations })
    }

    pub fn from_json_file(path: &Path) -> Result<Self, CatalogError> {
        let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let catalog = Self::from_json_str(&contents)?;
        tracing::debug!(
            "Loaded {} stations from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    pub fn stations(&self) -> &[Candidate<FireStation>] {
        &self.stations
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Closest station to `query`, or `None` if the catalog is empty.
    pub fn nearest(&self, query: Coordinate) -> Result<Option<StationMatch>, LocatorError> {
        Ok(find_nearest(query, &self.stations)?.map(|nearest| nearest.into_owned()))
    }
}
