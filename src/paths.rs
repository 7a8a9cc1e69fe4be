use std::path::{Path, PathBuf};

const APP_DIR: &str = "lead-console";

/// Default on-disk locations for lead-console.
/// Pure data structure with no I/O.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    /// Directory holding everything the console writes
    /// Example: ~/.local/share/lead-console/
    pub data_dir: PathBuf,

    /// Persisted login response
    /// Example: ~/.local/share/lead-console/session.json
    pub session_file: PathBuf,

    /// Log output (the terminal belongs to the UI)
    /// Example: ~/.local/share/lead-console/lead-console.log
    pub log_file: PathBuf,
}

impl Paths {
    /// Resolves all paths under the given home directory.
    ///
    /// Pure function: only performs path concatenation. Does NOT create
    /// directories or verify file existence.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::Path;
    /// use lead_console::paths::Paths;
    ///
    /// let paths = Paths::resolve(Path::new("/home/user"));
    ///
    /// assert_eq!(
    ///     paths.session_file,
    ///     Path::new("/home/user/.local/share/lead-console/session.json")
    /// );
    /// ```
    pub fn resolve(home: &Path) -> Self {
        let data_dir = home.join(".local").join("share").join(APP_DIR);
        Self {
            session_file: data_dir.join("session.json"),
            log_file: data_dir.join("lead-console.log"),
            data_dir,
        }
    }

    /// Resolve from `$HOME`, falling back to `/tmp` when it is unset.
    pub fn from_env() -> Self {
        let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
        Self::resolve(Path::new(&home))
    }
}
