//! Schema 1.2.0: grant the UI tester role to the UI testers user group

mod user_group_role_environment_setup;

pub use user_group_role_environment_setup::UserGroupRoleEnvironmentSetup;
