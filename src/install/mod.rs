//! Package manager selection and installation dispatch.

pub mod installer;
pub mod manager;
pub mod privilege;

pub use installer::{
    default_context, install, manual_install_instructions, InstallationAttempt, InstallerContext,
};
pub use manager::{select_manager, select_manager_with, ManagerId, PackageManager};
pub use privilege::{has_elevated_privileges, is_root};
