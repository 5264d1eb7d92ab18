//! Kenya's 47 counties with one weather lookup point each

use crate::types::GpsCoordinates;

/// A county and its weather lookup point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct County {
    pub name: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

/// Lookup point used when a county name is not recognised.
pub const NAIROBI_FALLBACK: GpsCoordinates = GpsCoordinates::new(-1.29, 36.82);

/// One lookup point per county, alphabetical.
pub static COUNTIES: &[County] = &[
    County { name: "Baringo", latitude: 0.47, longitude: 35.97 },
    County { name: "Bomet", latitude: -0.78, longitude: 35.34 },
    County { name: "Bungoma", latitude: 0.57, longitude: 34.56 },
    County { name: "Busia", latitude: 0.46, longitude: 34.11 },
    County { name: "Elgeyo-Marakwet", latitude: 0.82, longitude: 35.47 },
    County { name: "Embu", latitude: -0.54, longitude: 37.45 },
    County { name: "Garissa", latitude: -0.45, longitude: 39.64 },
    County { name: "Homa Bay", latitude: -0.53, longitude: 34.46 },
    County { name: "Isiolo", latitude: 0.35, longitude: 37.58 },
    County { name: "Kajiado", latitude: -1.85, longitude: 36.78 },
    County { name: "Kakamega", latitude: 0.28, longitude: 34.75 },
    County { name: "Kericho", latitude: -0.37, longitude: 35.28 },
    County { name: "Kiambu", latitude: -1.17, longitude: 36.82 },
    County { name: "Kilifi", latitude: -3.63, longitude: 39.85 },
    County { name: "Kirinyaga", latitude: -0.50, longitude: 37.38 },
    County { name: "Kisii", latitude: -0.68, longitude: 34.77 },
    County { name: "Kisumu", latitude: -0.10, longitude: 34.76 },
    County { name: "Kitui", latitude: -1.37, longitude: 38.01 },
    County { name: "Kwale", latitude: -4.18, longitude: 39.45 },
    County { name: "Laikipia", latitude: 0.20, longitude: 36.72 },
    County { name: "Lamu", latitude: -2.27, longitude: 40.90 },
    County { name: "Machakos", latitude: -1.52, longitude: 37.26 },
    County { name: "Makueni", latitude: -1.80, longitude: 37.62 },
    County { name: "Mandera", latitude: 3.94, longitude: 41.86 },
    County { name: "Marsabit", latitude: 2.33, longitude: 37.99 },
    County { name: "Meru", latitude: -0.05, longitude: 37.65 },
    County { name: "Migori", latitude: -1.06, longitude: 34.47 },
    County { name: "Mombasa", latitude: -4.04, longitude: 39.67 },
    County { name: "Murang'a", latitude: -0.72, longitude: 37.15 },
    County { name: "Nairobi City", latitude: -1.29, longitude: 36.82 },
    County { name: "Nakuru", latitude: -0.30, longitude: 36.08 },
    County { name: "Nandi", latitude: -0.20, longitude: 35.12 },
    County { name: "Narok", latitude: -1.08, longitude: 35.87 },
    County { name: "Nyamira", latitude: -0.57, longitude: 34.95 },
    County { name: "Nyandarua", latitude: -0.24, longitude: 36.52 },
    County { name: "Nyeri", latitude: -0.42, longitude: 36.95 },
    County { name: "Samburu", latitude: 1.10, longitude: 36.67 },
    County { name: "Siaya", latitude: -0.06, longitude: 34.29 },
    County { name: "Taita-Taveta", latitude: -3.40, longitude: 38.36 },
    County { name: "Tana River", latitude: -1.50, longitude: 39.90 },
    County { name: "Tharaka-Nithi", latitude: -0.30, longitude: 37.65 },
    County { name: "Trans Nzoia", latitude: 1.00, longitude: 34.95 },
    County { name: "Turkana", latitude: 3.12, longitude: 35.60 },
    County { name: "Uasin Gishu", latitude: 0.52, longitude: 35.27 },
    County { name: "Vihiga", latitude: -0.06, longitude: 34.72 },
    County { name: "Wajir", latitude: 1.75, longitude: 40.06 },
    County { name: "West Pokot", latitude: 1.24, longitude: 35.11 },
];

/// Resolve a county name to its weather lookup point.
///
/// Unknown names resolve to the Nairobi fallback instead of failing; the
/// county form only offers names from [`COUNTIES`], so this is a safety net.
pub fn county_coordinates(name: &str) -> GpsCoordinates {
    COUNTIES
        .iter()
        .find(|county| county.name == name)
        .map(|county| GpsCoordinates::new(county.latitude, county.longitude))
        .unwrap_or(NAIROBI_FALLBACK)
}

/// Whether a name is one of the 47 counties.
pub fn is_known_county(name: &str) -> bool {
    COUNTIES.iter().any(|county| county.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_counties_present() {
        assert_eq!(COUNTIES.len(), 47);
    }

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<_> = COUNTIES.iter().map(|county| county.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 47);
    }

    #[test]
    fn test_known_county_coordinates() {
        assert_eq!(county_coordinates("Baringo"), GpsCoordinates::new(0.47, 35.97));
        assert_eq!(county_coordinates("Kiambu"), GpsCoordinates::new(-1.17, 36.82));
        assert_eq!(county_coordinates("Murang'a"), GpsCoordinates::new(-0.72, 37.15));
        assert_eq!(county_coordinates("West Pokot"), GpsCoordinates::new(1.24, 35.11));
    }

    #[test]
    fn test_every_county_resolves_to_its_own_entry() {
        for county in COUNTIES {
            assert_eq!(
                county_coordinates(county.name),
                GpsCoordinates::new(county.latitude, county.longitude)
            );
        }
    }

    #[test]
    fn test_unknown_name_falls_back_to_nairobi() {
        assert_eq!(county_coordinates("Atlantis"), NAIROBI_FALLBACK);
        assert_eq!(county_coordinates(""), NAIROBI_FALLBACK);
        assert!(!is_known_county("Atlantis"));
        assert!(is_known_county("Nairobi City"));
    }
}
