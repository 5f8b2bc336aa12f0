//! Classification tables and the submission record for disc dump reports.
//!
//! Everything here is static data and plain value types: the closed
//! vocabularies the database uses (systems, media, regions, languages,
//! site codes, ...) and the structured record a report is built from.

pub mod category;
pub mod language;
pub mod media;
pub mod names;
pub mod region;
pub mod site_code;
pub mod submission;
pub mod system;

pub use category::{DiscCategory, DumpStatus, YesNo};
pub use language::{Language, LanguageSelection};
pub use media::{DiscType, MediaType};
pub use names::{HumanReadable, ParseError};
pub use region::Region;
pub use site_code::SiteCode;
pub use submission::{
    CommonDiscInfoSection, CopyProtectionSection, DumpersAndStatusSection, DumpingInfoSection,
    EdcSection, ExtrasSection, ParentCloneRelationshipSection, RingcodeLayer,
    SizeAndChecksumsSection, SpecialFields, SubmissionInfo, TracksAndWriteOffsetsSection,
    VersionAndEditionsSection,
};
pub use system::{RedumpSystem, SystemCategory};
