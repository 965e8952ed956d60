use crate::utils::error::{PresentError, Result};
use std::ffi::{OsStr, OsString};

/// A converter command line split into program and leading arguments.
///
/// The command is split on whitespace and run without a shell, so
/// `jupyter nbconvert` becomes program `jupyter` with argument `nbconvert`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConverterCommand {
    pub program: String,
    pub prefix_args: Vec<String>,
}

impl ConverterCommand {
    pub fn parse(command: &str) -> Result<Self> {
        let mut parts = command.split_whitespace().map(str::to_string);
        let program = parts
            .next()
            .ok_or_else(|| PresentError::usage("converter", "Converter command is empty"))?;

        Ok(Self {
            program,
            prefix_args: parts.collect(),
        })
    }

    /// `<prefix..> <notebook> --to slides --post serve --config <slides_config>`
    pub fn slide_args(&self, notebook_name: &OsStr, slides_config: &str) -> Vec<OsString> {
        let mut args: Vec<OsString> = self.prefix_args.iter().map(OsString::from).collect();
        args.push(notebook_name.to_os_string());
        for arg in ["--to", "slides", "--post", "serve", "--config", slides_config] {
            args.push(OsString::from(arg));
        }
        args
    }
}
