pub mod converter;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONVERTER: &str = "jupyter nbconvert";
pub const DEFAULT_SLIDES_CONFIG: &str = "slides_config.py";
pub const HOME_FALLBACK_STATIC: &str = "Dropbox/Documents/ipynb/templates/static";

#[derive(Debug, Clone, Parser)]
#[command(name = "ipynb-present")]
#[command(version)]
#[command(about = "Launch web server to present the notebook slides from a temporary folder")]
pub struct CliConfig {
    /// The notebook file path
    #[arg(short = 'n', long)]
    pub notebook: PathBuf,

    /// Other files needed by the notebook. This flag can be used more than once
    #[arg(short = 'o', long = "other")]
    pub others: Vec<PathBuf>,

    /// The static folder path where custom reveal.js files are
    #[arg(short = 's', long = "static")]
    pub static_dir: Option<PathBuf>,

    /// Last-resort static folder (defaults to ~/Dropbox/Documents/ipynb/templates/static)
    #[arg(long, env = "IPYNB_PRESENT_FALLBACK_STATIC")]
    pub fallback_static: Option<PathBuf>,

    /// Converter command; the notebook name and slide options are appended
    #[arg(long, env = "IPYNB_PRESENT_CONVERTER", default_value = DEFAULT_CONVERTER)]
    pub converter: String,

    /// Config file passed to the converter via --config
    #[arg(long, default_value = DEFAULT_SLIDES_CONFIG)]
    pub slides_config: String,

    /// Show what would be staged and run without touching the filesystem
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,
}

impl CliConfig {
    pub fn new(notebook: impl Into<PathBuf>) -> Self {
        Self {
            notebook: notebook.into(),
            others: Vec::new(),
            static_dir: None,
            fallback_static: None,
            converter: DEFAULT_CONVERTER.to_string(),
            slides_config: DEFAULT_SLIDES_CONFIG.to_string(),
            dry_run: false,
            verbose: false,
            log_json: false,
        }
    }
}

impl ConfigProvider for CliConfig {
    fn notebook(&self) -> &Path {
        &self.notebook
    }

    fn others(&self) -> &[PathBuf] {
        &self.others
    }

    fn static_override(&self) -> Option<&Path> {
        // `-s ""` 視同未指定
        self.static_dir
            .as_deref()
            .filter(|path| !path.as_os_str().is_empty())
    }

    fn fallback_static(&self) -> Option<PathBuf> {
        match &self.fallback_static {
            Some(path) => Some(path.clone()),
            None => dirs::home_dir().map(|home| home.join(HOME_FALLBACK_STATIC)),
        }
    }

    fn converter(&self) -> &str {
        &self.converter
    }

    fn slides_config(&self) -> &str {
        &self.slides_config
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_file_name("notebook", &self.notebook)?;
        validation::validate_paths("other", &self.others)?;
        if let Some(static_dir) = self.static_override() {
            validation::validate_path("static", static_dir)?;
        }
        validation::validate_non_empty_string("converter", &self.converter)?;
        validation::validate_non_empty_string("slides_config", &self.slides_config)?;
        Ok(())
    }
}
