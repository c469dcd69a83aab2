use std::io;
use std::fmt;
use std::error::Error;

///
/// Errors that stop the command line tool from producing a result
///
#[derive(Debug)]
pub enum AssDrawError {
    /// A file or standard input could not be read
    Io(io::Error),

    /// The configuration file was not valid JSON, or didn't describe a configuration
    Config(serde_json::Error),

    /// A command line argument could not be interpreted
    InvalidArgument(String),

    /// The result could not be written out
    Output(serde_json::Error)
}

impl fmt::Display for AssDrawError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use self::AssDrawError::*;

        match self {
            Io(err)                 => write!(f, "could not read input: {}", err),
            Config(err)             => write!(f, "invalid configuration: {}", err),
            InvalidArgument(msg)    => write!(f, "{}", msg),
            Output(err)             => write!(f, "could not write output: {}", err)
        }
    }
}

impl Error for AssDrawError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        use self::AssDrawError::*;

        match self {
            Io(err)             => Some(err),
            Config(err)         => Some(err),
            InvalidArgument(_)  => None,
            Output(err)         => Some(err)
        }
    }
}

impl From<io::Error> for AssDrawError {
    fn from(err: io::Error) -> AssDrawError {
        AssDrawError::Io(err)
    }
}

impl From<serde_json::Error> for AssDrawError {
    fn from(err: serde_json::Error) -> AssDrawError {
        AssDrawError::Config(err)
    }
}
