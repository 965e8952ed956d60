use crate::utils::error::Result;
use async_trait::async_trait;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

pub trait ConfigProvider: Send + Sync {
    fn notebook(&self) -> &Path;
    fn others(&self) -> &[PathBuf];
    fn static_override(&self) -> Option<&Path>;
    fn fallback_static(&self) -> Option<PathBuf>;
    fn converter(&self) -> &str;
    fn slides_config(&self) -> &str;
}

#[async_trait]
pub trait Converter: Send + Sync {
    /// Blocks until the converter (and the server it starts) exits.
    async fn convert_and_serve(&self, slides_dir: &Path, program: &str, args: &[OsString])
        -> Result<()>;
}
