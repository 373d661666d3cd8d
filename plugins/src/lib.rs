pub mod factory;
pub mod runner;
pub mod services;
pub mod transform;

pub use services::PluginServicesFactory;
