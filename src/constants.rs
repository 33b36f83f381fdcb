//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and configuration locations.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "LED Mapper";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "ledmapper";

/// Directory name under the platform config dir.
pub const APP_CONFIG_DIR_NAME: &str = "LedMapper";

/// Environment variable overriding the config directory.
pub const CONFIG_DIR_ENV: &str = "LEDMAPPER_CONFIG_DIR";
