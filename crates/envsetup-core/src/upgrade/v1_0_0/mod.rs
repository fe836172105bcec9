//! Schema 1.0.0: initial environment

mod initial_environment_setup;

pub use initial_environment_setup::{InitialEnvironmentSetup, UI_TESTER_ROLE_NAME};
