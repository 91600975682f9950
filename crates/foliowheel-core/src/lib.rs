pub mod config;
pub mod error;
pub mod wheel;

pub use config::{AppConfig, PanelConfig, WheelConfig};
pub use error::{Error, Result};
pub use wheel::{SpringParams, WheelController};
