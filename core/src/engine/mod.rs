mod pre;
mod run;
mod types;

pub use pre::pre_run;
pub use run::run_with_scan;
pub use types::{RunWithScanArgs, Services, ServicesFactory};
