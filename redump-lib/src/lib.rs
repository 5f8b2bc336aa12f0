//! Submission report pipeline: disc type normalization, special-field
//! folding and the plain-text report writer.

pub mod disc_type;
pub mod error;
pub mod formatter;
pub mod settings;
pub mod special_fields;

pub use disc_type::{
    BluRayThresholds, DiscLayout, ThresholdProfile, media_type_label, normalize,
    normalize_disc_type,
};
pub use error::{FormatError, SettingsError};
pub use formatter::{ReportFormatter, format_output, format_output_with_status};
pub use settings::{FormatterSettings, load_settings, load_settings_from, settings_path};
pub use special_fields::{assemble, format_site_tag, process_special_fields};
