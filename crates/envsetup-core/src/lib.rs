//! # Environment Setup Core
//! 
//! Domain entities, platform service ports, and the versioned upgrade steps
//! that prepare a tenant for UI testing:
//!
//! | Range         | Step                             |
//! |---------------|----------------------------------|
//! | 0.0.0 → 1.0.0 | create the `UI Tester` role      |
//! | 1.0.0 → 1.1.0 | create the `UI Testers` group    |
//! | 1.1.0 → 1.2.0 | grant the role to the group      |

pub mod domain;
pub mod repositories;
pub mod services;
pub mod upgrade;
pub mod error;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export domain entities
pub use domain::*;
pub use error::DomainError;
