pub mod error;
pub mod groups;
pub mod install_config;
pub mod validators;

pub use error::AppError;
pub use groups::{GroupsError, join_groups, max_of, split_groups};
pub use install_config::{CONFIG_FILENAME, DEFAULT_INSTALL_DIR, InstallConfig, compose_address};
pub use validators::Validation;
