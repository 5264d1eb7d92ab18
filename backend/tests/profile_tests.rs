//! Farm profile validation and serialization tests

use proptest::prelude::*;
use validator::Validate;

use shared::{validate_question, FarmProfile, SoilType, COUNTIES};

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_default_profile_matches_form_defaults() {
        let profile = FarmProfile::default();
        assert_eq!(profile.county, "Kiambu");
        assert_eq!(profile.locality, "Ruiru");
        assert_eq!(profile.soil_type, SoilType::RedVolcanic);
        assert_eq!(profile.planted_crop, "Maize");
        assert!(!profile.quick_plan);
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn test_profile_deserializes_from_form_json() {
        let profile: FarmProfile = serde_json::from_str(
            r#"{
                "county": "Homa Bay",
                "locality": "Mbita",
                "soil_type": "sandy_loamy",
                "planted_crop": "Sorghum",
                "quick_plan": true
            }"#,
        )
        .unwrap();
        assert_eq!(profile.county, "Homa Bay");
        assert_eq!(profile.soil_type, SoilType::SandyLoamy);
        assert!(profile.quick_plan);
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn test_profile_rejects_unknown_county() {
        let profile = FarmProfile {
            county: "Gotham".to_string(),
            ..FarmProfile::default()
        };
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_profile_rejects_blank_fields() {
        let no_locality = FarmProfile {
            locality: String::new(),
            ..FarmProfile::default()
        };
        assert!(no_locality.validate().is_err());

        let no_crop = FarmProfile {
            planted_crop: String::new(),
            ..FarmProfile::default()
        };
        assert!(no_crop.validate().is_err());
    }

    #[test]
    fn test_question_validation() {
        assert!(validate_question("How much water does sorghum need?").is_ok());
        assert!(validate_question("").is_err());
        assert!(validate_question("  \n ").is_err());
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;

    /// Strategy picking one of the 47 counties
    fn county_strategy() -> impl Strategy<Value = String> {
        (0usize..47).prop_map(|index| COUNTIES[index].name.to_string())
    }

    /// Strategy for short non-empty form text
    fn form_text_strategy() -> impl Strategy<Value = String> {
        "[A-Za-z][A-Za-z ]{0,40}"
    }

    fn soil_strategy() -> impl Strategy<Value = SoilType> {
        prop_oneof![
            Just(SoilType::RedVolcanic),
            Just(SoilType::BlackCotton),
            Just(SoilType::SandyLoamy),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Any profile built from form-shaped inputs validates
        #[test]
        fn prop_form_shaped_profiles_validate(
            county in county_strategy(),
            locality in form_text_strategy(),
            crop in form_text_strategy(),
            soil_type in soil_strategy(),
            quick_plan in any::<bool>()
        ) {
            let profile = FarmProfile {
                county,
                locality,
                soil_type,
                planted_crop: crop,
                quick_plan,
            };
            prop_assert!(profile.validate().is_ok());
        }

        /// Profiles survive a serde round-trip unchanged
        #[test]
        fn prop_profile_serde_round_trip(
            county in county_strategy(),
            locality in form_text_strategy(),
            crop in form_text_strategy(),
            quick_plan in any::<bool>()
        ) {
            let profile = FarmProfile {
                county,
                locality,
                soil_type: SoilType::BlackCotton,
                planted_crop: crop,
                quick_plan,
            };
            let json = serde_json::to_string(&profile).unwrap();
            let parsed: FarmProfile = serde_json::from_str(&json).unwrap();
            prop_assert_eq!(parsed.county, profile.county);
            prop_assert_eq!(parsed.locality, profile.locality);
            prop_assert_eq!(parsed.planted_crop, profile.planted_crop);
            prop_assert_eq!(parsed.quick_plan, profile.quick_plan);
        }
    }
}
