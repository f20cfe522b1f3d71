use std::path::PathBuf;

/// Optional settings file path from the first command-line argument
pub fn get_config_path() -> Option<PathBuf> {
    config_path_from(std::env::args().skip(1))
}

fn config_path_from<I: IntoIterator<Item = String>>(args: I) -> Option<PathBuf> {
    args.into_iter().next().filter(|arg| !arg.is_empty()).map(PathBuf::from)
}

/// Log directory from `MM_LOG_DIR`, if set
pub fn get_log_dir() -> Option<PathBuf> {
    std::env::var("MM_LOG_DIR").ok().filter(|dir| !dir.is_empty()).map(PathBuf::from)
}
