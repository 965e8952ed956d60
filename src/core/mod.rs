pub mod copy;
pub mod engine;
pub mod interrupt;
pub mod locator;
pub mod stage;

pub use crate::domain::model::{PresentPlan, StaticSelection, StaticSource};
pub use crate::domain::ports::{ConfigProvider, Converter};
pub use crate::utils::error::Result;
