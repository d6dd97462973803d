//! Error types for ignoregen-blocks

/// Failure to parse a directive comment.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DirectiveError {
    #[error("line is not an ignoregen directive")]
    NotADirective,

    #[error("directive does not name a template")]
    MissingName,

    #[error("malformed options: {message}")]
    MalformedOptions { message: String },
}

/// A failure tied to one directive block.
///
/// Every variant carries the original header line so the message points the
/// user at the offending comment.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BlockError {
    #[error("\"{header}\" is not an ignoregen directive")]
    NotADirective { header: String },

    #[error("No template name in \"{header}\"")]
    MissingName { header: String },

    #[error("Invalid options in \"{header}\": {message}")]
    MalformedOptions { header: String, message: String },

    #[error("Invalid template source \"{src}\" for \"{header}\": {message}")]
    InvalidUrl {
        header: String,
        src: String,
        message: String,
    },

    #[error("Failed to fetch template from \"{url}\" for \"{header}\": {message}")]
    Fetch {
        header: String,
        url: String,
        status: Option<u16>,
        message: String,
    },
}

impl BlockError {
    /// Attach a header line to a directive parse failure.
    pub fn from_directive(header: impl Into<String>, error: DirectiveError) -> Self {
        let header = header.into();
        match error {
            DirectiveError::NotADirective => Self::NotADirective { header },
            DirectiveError::MissingName => Self::MissingName { header },
            DirectiveError::MalformedOptions { message } => {
                Self::MalformedOptions { header, message }
            }
        }
    }

    /// The directive comment this error belongs to.
    pub fn header(&self) -> &str {
        match self {
            Self::NotADirective { header }
            | Self::MissingName { header }
            | Self::MalformedOptions { header, .. }
            | Self::InvalidUrl { header, .. }
            | Self::Fetch { header, .. } => header,
        }
    }

    /// The template URL, when one was resolved before the failure.
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Fetch { url, .. } => Some(url),
            _ => None,
        }
    }
}
