use std::path::PathBuf;

/// Context passed throughout the application containing global configuration
#[derive(Clone)]
pub struct Context {
    /// Enable verbose output (per-file inclusion/exclusion reporting)
    pub verbose: bool,

    /// Root directory of the Unity project being packaged
    pub project_root: PathBuf,
}

impl Context {
    pub fn new(project_root: PathBuf, verbose: bool) -> Self {
        Self {
            verbose,
            project_root,
        }
    }
}
