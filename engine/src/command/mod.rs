mod kind;
mod draw_command;
mod init;

pub use self::kind::*;
pub use self::draw_command::*;
pub use self::init::*;
