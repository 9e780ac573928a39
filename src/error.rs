use std::{
    error, fmt,
    convert::From,
};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone)]
pub enum ErrorKind {
    Configuration,
    Logging,
    LogFile,
    TemplateLoad,
    RenderPage,
    EncodeImage,
    StateLock,
    IO,
    Serde,
}

#[derive(Debug, Clone)]
pub struct Error {
    kind: ErrorKind,
    message: String,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            message: Self::type_to_str(&kind),
            kind,
        }
    }

    pub fn from<E>(kind: ErrorKind, err: E) -> Self
    where E: error::Error {
        let mut message = Self::type_to_str(&kind);
        if !message.is_empty() {
            message = format!("{}: {}", message, err);
        } else {
            message = format!("{}", err);
        }

        Self {
            kind,
            message,
        }
    }

    fn type_to_str(kind: &ErrorKind) -> String {
        match kind {
            ErrorKind::IO => "",
            ErrorKind::Configuration => "could not load the configuration",
            ErrorKind::Logging => "could not setup logging",
            ErrorKind::LogFile => "could not write to log file",
            ErrorKind::TemplateLoad => "could not load the frame page template",
            ErrorKind::RenderPage => "could not render the frame page",
            ErrorKind::EncodeImage => "could not encode the frame image",
            ErrorKind::StateLock => "could not get the color store lock",
            ErrorKind::Serde => "could not serialize/deserialize JSON",
        }.into()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", &self.message)
    }
}

// This is important for other errors to wrap this one.
impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        // Generic error, underlying cause isn't tracked.
        None
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::from(ErrorKind::IO, err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::from(ErrorKind::Serde, err)
    }
}

impl From<config::ConfigError> for Error {
    fn from(err: config::ConfigError) -> Self {
        Self::from(ErrorKind::Configuration, err)
    }
}
