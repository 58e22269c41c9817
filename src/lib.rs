// File: src/lib.rs
pub mod color_utils;
pub mod config;
pub mod date_utils;
pub mod legend;
pub mod membership;
pub mod query;

pub use color_utils::{ColorScale, OverflowPolicy, PALETTE, Rgb, UNKNOWN_COLOR, legacy_color};
pub use config::Config;
pub use date_utils::iso_date_to_local;
pub use legend::Legend;
pub use membership::{is_in, is_in_by, is_in_loose, loose_eq};
pub use query::{QueryString, get_query_param};
