//! Geographic points the pipeline polls.

#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    /// IANA zone name; the API reports observation times in this zone.
    pub timezone: String,
    pub continent: String,
    pub city: String,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64, timezone: &str, continent: &str, city: &str) -> Self {
        Location {
            latitude,
            longitude,
            timezone: timezone.to_string(),
            continent: continent.to_string(),
            city: city.to_string(),
        }
    }
}

/// Built-in registry: a few representative cities per continent.
pub fn default_locations() -> Vec<Location> {
    vec![
        // North America
        Location::new(34.0522, -118.2437, "America/Los_Angeles", "North America", "Los Angeles"),
        Location::new(40.7128, -74.0060, "America/New_York", "North America", "New York"),
        Location::new(45.4215, -75.6972, "America/Toronto", "North America", "Ottawa"),
        // South America
        Location::new(-23.5505, -46.6333, "America/Sao_Paulo", "South America", "Sao Paulo"),
        Location::new(-33.4489, -70.6693, "America/Santiago", "South America", "Santiago"),
        // Europe
        Location::new(51.5074, -0.1278, "Europe/London", "Europe", "London"),
        Location::new(48.8566, 2.3522, "Europe/Paris", "Europe", "Paris"),
        Location::new(52.5200, 13.4050, "Europe/Berlin", "Europe", "Berlin"),
        // Asia
        Location::new(35.6895, 139.6917, "Asia/Tokyo", "Asia", "Tokyo"),
        Location::new(28.7041, 77.1025, "Asia/Kolkata", "Asia", "New Delhi"),
        Location::new(39.9042, 116.4074, "Asia/Shanghai", "Asia", "Beijing"),
        // Africa
        Location::new(-26.2041, 28.0473, "Africa/Johannesburg", "Africa", "Johannesburg"),
        Location::new(30.0444, 31.2357, "Africa/Cairo", "Africa", "Cairo"),
        // Australia/Oceania
        Location::new(-33.8688, 151.2093, "Australia/Sydney", "Australia", "Sydney"),
        Location::new(-36.8485, 174.7633, "Pacific/Auckland", "Australia", "Auckland"),
    ]
}
