pub mod exit;
mod traits;
mod types;

pub use exit::normalize_exit;
pub use traits::RunnerPlugin;
pub use types::{RunnerSpec, ScanOutput};
