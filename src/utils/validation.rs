use crate::utils::error::{PresentError, Result};
use std::path::{Path, PathBuf};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &Path) -> Result<()> {
    let raw = path.as_os_str();
    if raw.is_empty() {
        return Err(PresentError::usage(field_name, "Path cannot be empty"));
    }

    if raw.as_encoded_bytes().contains(&0) {
        return Err(PresentError::usage(field_name, "Path contains null bytes"));
    }

    Ok(())
}

/// 路徑必須指向一個檔名（不能是 `..` 或根目錄）
pub fn validate_file_name(field_name: &str, path: &Path) -> Result<()> {
    validate_path(field_name, path)?;

    if path.file_name().is_none() {
        return Err(PresentError::usage(
            field_name,
            format!("{} does not name a file", path.display()),
        ));
    }

    Ok(())
}

pub fn validate_paths(field_name: &str, paths: &[PathBuf]) -> Result<()> {
    for path in paths {
        validate_file_name(field_name, path)?;
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PresentError::usage(
            field_name,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}
