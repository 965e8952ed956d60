pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use app::converters::NbconvertConverter;
pub use config::CliConfig;
pub use crate::core::engine::PresentEngine;
pub use utils::error::{PresentError, Result};
