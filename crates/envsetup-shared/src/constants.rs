//! Application-wide constants

/// Name of the built-in role every tenant carries for its administrators.
pub const ADMINISTRATOR_ROLE_NAME: &str = "Administrator";

pub const DEFAULT_BUNDLE_SYMBOLIC_NAME: &str = "com.example.environment.setup";
