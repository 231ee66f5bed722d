//! Fixed city-to-coordinate registry.

use std::collections::HashMap;

use serde::Serialize;

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// The ten Kerala cities served by the model, with their coordinates.
///
/// The set is fixed at process start; entries are never added, removed,
/// or mutated at runtime.
const KERALA_CITIES: [(&str, Coordinates); 10] = [
    ("Kochi", Coordinates { latitude: 9.9312, longitude: 76.2673 }),
    ("Thiruvananthapuram", Coordinates { latitude: 8.5241, longitude: 76.9366 }),
    ("Kozhikode", Coordinates { latitude: 11.2588, longitude: 75.7804 }),
    ("Thrissur", Coordinates { latitude: 10.5276, longitude: 76.2144 }),
    ("Alappuzha", Coordinates { latitude: 9.4981, longitude: 76.3388 }),
    ("Kollam", Coordinates { latitude: 8.8932, longitude: 76.6141 }),
    ("Palakkad", Coordinates { latitude: 10.7867, longitude: 76.6548 }),
    ("Malappuram", Coordinates { latitude: 11.0732, longitude: 76.0748 }),
    ("Kannur", Coordinates { latitude: 11.8745, longitude: 75.3704 }),
    ("Pathanamthitta", Coordinates { latitude: 9.2641, longitude: 76.7878 }),
];

/// Immutable registry mapping city names to coordinates.
#[derive(Debug, Clone)]
pub struct CityRegistry {
    cities: HashMap<&'static str, Coordinates>,
}

impl CityRegistry {
    /// Build the Kerala registry.
    pub fn kerala() -> Self {
        Self {
            cities: KERALA_CITIES.into_iter().collect(),
        }
    }

    /// Look up a city by exact, case-sensitive name.
    ///
    /// Callers are responsible for trimming surrounding whitespace before
    /// calling; no other normalization is applied.
    pub fn lookup(&self, city_name: &str) -> Option<Coordinates> {
        self.cities.get(city_name).copied()
    }

    /// Number of registered cities.
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Registered city names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.cities.keys().copied()
    }
}

impl Default for CityRegistry {
    fn default() -> Self {
        Self::kerala()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_has_ten_cities() {
        let registry = CityRegistry::kerala();
        assert_eq!(registry.len(), 10);
    }

    #[test]
    fn test_lookup_kochi() {
        let registry = CityRegistry::kerala();
        let coords = registry.lookup("Kochi").unwrap();
        assert_eq!(coords.latitude, 9.9312);
        assert_eq!(coords.longitude, 76.2673);
    }

    #[test]
    fn test_lookup_unknown_city() {
        let registry = CityRegistry::kerala();
        assert!(registry.lookup("Mumbai").is_none());
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let registry = CityRegistry::kerala();
        assert!(registry.lookup("kochi").is_none());
        assert!(registry.lookup("KOCHI").is_none());
    }

    #[test]
    fn test_lookup_does_not_trim() {
        // Trimming is the caller's job.
        let registry = CityRegistry::kerala();
        assert!(registry.lookup(" Kochi ").is_none());
    }

    #[test]
    fn test_all_cities_resolve() {
        let registry = CityRegistry::kerala();
        for name in [
            "Kochi",
            "Thiruvananthapuram",
            "Kozhikode",
            "Thrissur",
            "Alappuzha",
            "Kollam",
            "Palakkad",
            "Malappuram",
            "Kannur",
            "Pathanamthitta",
        ] {
            assert!(registry.lookup(name).is_some(), "missing city: {}", name);
        }
    }
}
