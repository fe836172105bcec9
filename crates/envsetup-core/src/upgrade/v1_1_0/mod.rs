//! Schema 1.1.0: user groups missed by the initial setup

mod user_group_environment_setup;

pub use user_group_environment_setup::{
    UserGroupEnvironmentSetup, UI_TESTERS_USER_GROUP_DESCRIPTION, UI_TESTERS_USER_GROUP_NAME,
};
