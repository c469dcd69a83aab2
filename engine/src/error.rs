use super::command::*;
use super::point::*;

use std::fmt;
use std::error::Error;

///
/// Reasons an edit to a command sequence can be refused
///
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum EditError {
    /// The first command can only be deleted when it is the only command (every sequence must begin with a move)
    FirstCommand(CommandId),

    /// The command is not part of this sequence
    UnknownCommand(CommandId),

    /// The command does not have the requested point
    UnknownPoint(CommandId, PointRef)
}

impl fmt::Display for EditError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use self::EditError::*;

        match self {
            FirstCommand(id)    => write!(f, "command {} starts the drawing and cannot be removed while other commands follow it", id),
            UnknownCommand(id)  => write!(f, "command {} is not part of this drawing", id),
            UnknownPoint(id, p) => write!(f, "command {} has no point {:?}", id, p)
        }
    }
}

impl Error for EditError { }
