use super::*;
use std::collections::HashSet;

#[test]
fn every_region_round_trips() {
    for &region in Region::all() {
        let long = region.long_name().unwrap();
        assert_eq!(long.parse::<Region>().unwrap(), region, "{:?}", region);
        let stripped: String = long.split_whitespace().collect();
        assert_eq!(stripped.parse::<Region>().unwrap(), region, "{:?}", region);
    }
}

#[test]
fn region_codes_are_unique_ignoring_case() {
    let mut seen = HashSet::new();
    for &region in Region::all() {
        let code = region.short_name().unwrap().to_lowercase();
        assert!(seen.insert(code), "duplicate region code for {:?}", region);
    }
}

#[test]
fn codes_resolve_to_regions() {
    assert_eq!("U".parse::<Region>().unwrap(), Region::Usa);
    assert_eq!("uk".parse::<Region>().unwrap(), Region::UnitedKingdom);
    assert_eq!("U,E".parse::<Region>().unwrap(), Region::UsaEurope);
    assert_eq!("u, k".parse::<Region>().unwrap(), Region::UsaKorea);
}

#[test]
fn composite_regions() {
    assert!(Region::JapanUsa.is_composite());
    assert!(Region::GreaterChina.is_composite());
    assert!(!Region::Japan.is_composite());
}

#[test]
fn display_is_long_name() {
    assert_eq!(Region::UsaEurope.to_string(), "USA, Europe");
    assert_eq!(Region::Usa.to_string(), "USA");
}
