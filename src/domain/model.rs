use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;

/// Where a template tree was found, in lookup priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StaticSource {
    Override,
    NotebookAdjacent,
    WorkingDirectory,
    HomeFallback,
}

impl fmt::Display for StaticSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StaticSource::Override => "--static",
            StaticSource::NotebookAdjacent => "notebook folder",
            StaticSource::WorkingDirectory => "current directory",
            StaticSource::HomeFallback => "home fallback",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticCandidate {
    pub source: StaticSource,
    pub path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticSelection {
    pub source: StaticSource,
    pub path: PathBuf,
}

/// Everything a run needs, resolved before anything is written to disk.
#[derive(Debug, Clone)]
pub struct PresentPlan {
    pub notebook: PathBuf,
    pub others: Vec<PathBuf>,
    pub static_dir: Option<StaticSelection>,
    pub program: String,
    pub args: Vec<OsString>,
}

impl PresentPlan {
    pub fn command_line(&self) -> String {
        render_command(&self.program, &self.args)
    }
}

/// Human-readable form of a command line, for logs only.
pub fn render_command(program: &str, args: &[OsString]) -> String {
    let mut line = program.to_string();
    for arg in args {
        line.push(' ');
        line.push_str(&arg.to_string_lossy());
    }
    line
}
