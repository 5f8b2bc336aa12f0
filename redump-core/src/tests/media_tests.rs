use super::*;
use std::collections::HashSet;

#[test]
fn media_types_round_trip() {
    for &media in MediaType::all() {
        let long = media.long_name().unwrap();
        assert_eq!(long.parse::<MediaType>().unwrap(), media);
        let stripped: String = long.split_whitespace().collect();
        assert_eq!(stripped.parse::<MediaType>().unwrap(), media);
    }
}

#[test]
fn disc_types_round_trip() {
    for &disc in DiscType::all() {
        let long = disc.long_name().unwrap();
        assert_eq!(long.parse::<DiscType>().unwrap(), disc);
        let stripped: String = long.split_whitespace().collect();
        assert_eq!(stripped.parse::<DiscType>().unwrap(), disc);
    }
}

#[test]
fn short_codes_are_unique_per_vocabulary() {
    let mut seen = HashSet::new();
    for &media in MediaType::all() {
        let code = media.short_name().unwrap().to_lowercase();
        assert!(seen.insert(code), "duplicate media code for {:?}", media);
    }

    let mut seen = HashSet::new();
    for &disc in DiscType::all() {
        let code = disc.short_name().unwrap().to_lowercase();
        assert!(seen.insert(code), "duplicate disc type code for {:?}", disc);
    }
}

#[test]
fn default_variant_maps_back_to_its_family() {
    for &media in MediaType::all() {
        if let Some(disc) = media.to_disc_type() {
            assert_eq!(disc.to_media_type(), Some(media), "{:?} -> {:?}", media, disc);
        }
    }
}

#[test]
fn families_without_a_canonical_variant() {
    assert_eq!(MediaType::Cartridge.to_disc_type(), None);
    assert_eq!(MediaType::LaserDisc.to_disc_type(), None);
    assert!(!MediaType::FloppyDisk.is_optical());
    assert!(MediaType::LaserDisc.is_optical());
}

#[test]
fn tiered_variants_share_a_family() {
    assert_eq!(DiscType::Bd128.to_media_type(), Some(MediaType::BluRay));
    assert_eq!(DiscType::Dvd9.to_media_type(), Some(MediaType::Dvd));
    assert_eq!(DiscType::MilCd.to_media_type(), Some(MediaType::CdRom));
    assert_eq!(DiscType::UmdDl.to_media_type(), Some(MediaType::Umd));
}

#[test]
fn parse_accepts_codes() {
    assert_eq!("BD66".parse::<DiscType>().unwrap(), DiscType::Bd66);
    assert_eq!("bd-66".parse::<DiscType>().unwrap(), DiscType::Bd66);
    assert_eq!("HD-DVDDL".parse::<DiscType>().unwrap(), DiscType::HdDvdDl);
    assert!("BD-200".parse::<DiscType>().is_err());
}
