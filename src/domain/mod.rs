pub mod config;
pub mod descriptor;
pub mod error;
pub mod layout;

pub use descriptor::{Descriptor, Placement, base_name};
pub use error::AppError;
pub use layout::{CONFIG_FILE, DEFAULT_OUTPUT_DIR, ProjectLayout};
