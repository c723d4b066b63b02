use clap::{Arg, ArgAction, Command};
use std::path::PathBuf;

/// Command-line arguments for the unipack tool
#[derive(Debug)]
pub struct Args {
    /// Root directory of the Unity project
    pub path: Option<PathBuf>,

    /// Glob-style exclusion patterns (empty means use the bundled defaults)
    pub exclude: Vec<String>,

    /// Output zip file name
    pub output: Option<PathBuf>,

    /// Enable per-file inclusion/exclusion reporting
    pub verbose: bool,
}

impl Args {
    /// Parse command-line arguments
    pub fn parse() -> Self {
        let matches = Command::new("unipack")
            .version(env!("CARGO_PKG_VERSION"))
            .about("Milestone packaging tool for Unity student projects")
            .arg(
                Arg::new("path")
                    .short('p')
                    .long("path")
                    .value_name("PATH")
                    .help("Root directory of the Unity project (default: current directory)")
            )
            .arg(
                Arg::new("exclude")
                    .short('e')
                    .long("exclude")
                    .value_name("PATTERN")
                    .action(ArgAction::Append)
                    .help("Glob-style pattern to exclude (e.g. '*.meta', 'Library/**'); may be repeated")
            )
            .arg(
                Arg::new("output")
                    .short('o')
                    .long("output")
                    .value_name("FILE")
                    .help("Output zip file name (default: derived from the readme file name)")
            )
            .arg(
                Arg::new("verbose")
                    .short('v')
                    .long("verbose")
                    .action(ArgAction::SetTrue)
                    .help("Report each file as it is included or excluded")
            )
            .get_matches();

        Self {
            path: matches.get_one::<String>("path").map(PathBuf::from),
            exclude: matches
                .get_many::<String>("exclude")
                .map(|values| values.cloned().collect())
                .unwrap_or_default(),
            output: matches.get_one::<String>("output").map(PathBuf::from),
            verbose: matches.get_flag("verbose"),
        }
    }
}
