//! Shared front-end support for cinedex: table rendering and settings.

pub mod display;
pub mod settings;

pub use display::{COLUMNS, NO_DATA, TABLE_WIDTH, display_width, format_rating, pad, render_table};
pub use settings::{PathOverrides, ResolvedPath, SettingSource, Settings, settings_path};
