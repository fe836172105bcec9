//! Versioned environment setup steps and the machinery that applies them

pub mod step;
pub mod registry;
pub mod registrator;
pub mod runner;

pub mod v1_0_0;
pub mod v1_1_0;
pub mod v1_2_0;

pub use step::{StepBinding, UpgradeStep};
pub use registry::{RegisteredUpgrade, UpgradeStepRegistry};
pub use registrator::EnvironmentSetupRegistrator;
pub use runner::{UpgradeReport, UpgradeRunner};
