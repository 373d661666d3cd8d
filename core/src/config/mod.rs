mod load;
mod types;

pub use load::{load_default, load_from_path, CONFIG_ENV, DEFAULT_CONFIG_DIR};
pub use types::*;
