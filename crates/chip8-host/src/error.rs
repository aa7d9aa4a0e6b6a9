use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("Failed to load ROM {key:?}: {status} {status_text}")]
    Status {
        key: String,
        status: u16,
        status_text: String,
    },

    #[error("Failed to fetch ROM {key:?}: {details}")]
    Fetch { key: String, details: String },

    #[error("Failed to read ROM file {name:?}: {details}")]
    Read { name: String, details: String },
}

impl ResolveError {
    pub(crate) fn fetch(key: &str, err: anyhow::Error) -> Self {
        ResolveError::Fetch {
            key: key.to_string(),
            details: format!("{err:#}"),
        }
    }

    pub(crate) fn read(name: &str, err: anyhow::Error) -> Self {
        ResolveError::Read {
            name: name.to_string(),
            details: format!("{err:#}"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StartupError {
    #[error("Required element not found: {name} ({selector:?})")]
    MissingAnchor { name: &'static str, selector: String },

    #[error("No window available")]
    NoWindow,
}
