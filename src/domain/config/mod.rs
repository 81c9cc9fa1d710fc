pub mod parse;

pub use parse::{parse_config_content, validate_layout};
