use ::std::path::PathBuf;

/// Expands a leading `~` to the home directory. The path is not required to
/// exist: a missing input falls back to stdin and an output file is created.
pub fn expand_path(raw: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(raw).into_owned())
}
