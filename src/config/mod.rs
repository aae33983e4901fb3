pub mod traits;
pub mod archive;
pub mod manager;

pub use manager::{ConfigManager, AppConfig};
pub use archive::ArchiveConfig;
pub use traits::ConfigSection;
