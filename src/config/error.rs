use std::path::PathBuf;

/// Failure while resolving settings from config files.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_saphyr::Error,
    },
    #[error("{}", .0.join("; "))]
    Invalid(Vec<String>),
}
