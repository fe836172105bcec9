//! Permission checker port
//!
//! Facade calls made by a step are authorized against whichever checker is
//! installed in the caller's [`ActorContext`](crate::services::ActorContext).

use std::fmt;
use std::sync::Arc;

use uuid::Uuid;

use crate::domain::PortalUser;

pub trait PermissionChecker: fmt::Debug + Send + Sync {
    fn user_id(&self) -> Uuid;
}

#[cfg_attr(test, mockall::automock)]
pub trait PermissionCheckerFactory: Send + Sync {
    fn create(&self, user: &PortalUser) -> Arc<dyn PermissionChecker>;
}

/// Checker bound to one user; authorization decisions stay with the platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserPermissionChecker {
    user_id: Uuid,
}

impl UserPermissionChecker {
    pub fn new(user_id: Uuid) -> Self {
        Self { user_id }
    }
}

impl PermissionChecker for UserPermissionChecker {
    fn user_id(&self) -> Uuid {
        self.user_id
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultPermissionCheckerFactory;

impl PermissionCheckerFactory for DefaultPermissionCheckerFactory {
    fn create(&self, user: &PortalUser) -> Arc<dyn PermissionChecker> {
        Arc::new(UserPermissionChecker::new(user.id))
    }
}
