mod edit;
mod geometry;

pub use self::geometry::*;

use crate::command::*;
use crate::coordinate_system::*;

use std::rc::Rc;
use std::cell::Cell;
use std::slice;

///
/// An ordered sequence of drawing commands
///
/// The first command in a non-empty sequence is always a move. Each command's `previous` link
/// refers to the command before it and the main point of each command has the command after it
/// as its dependent. These links are only ever written by `connect()`.
///
#[derive(Clone, Debug)]
pub struct CommandSequence {
    /// The commands in this sequence
    commands: Vec<DrawCommand>,

    /// The coordinate system used when deriving control points
    coordinate_system: Rc<Cell<CoordinateSystem>>,

    /// The identifier to assign to the next command that's created
    next_id: u64
}

impl Default for CommandSequence {
    fn default() -> CommandSequence {
        CommandSequence::new()
    }
}

impl CommandSequence {
    ///
    /// Creates a sequence containing the initial `m 0 0` command
    ///
    pub fn new() -> CommandSequence {
        CommandSequence::with_coordinate_system(Rc::new(Cell::new(CoordinateSystem::default())))
    }

    ///
    /// Creates a sequence containing the initial `m 0 0` command, using a coordinate system shared with other objects
    ///
    pub fn with_coordinate_system(coordinate_system: Rc<Cell<CoordinateSystem>>) -> CommandSequence {
        let mut sequence = CommandSequence {
            commands:           vec![],
            coordinate_system:  coordinate_system,
            next_id:            0
        };

        sequence.reset(true);
        sequence
    }

    ///
    /// Removes every command from this sequence, optionally adding an initial `m 0 0`
    ///
    pub fn reset(&mut self, with_initial_move: bool) {
        self.commands.clear();

        if with_initial_move {
            self.append_new(CommandKind::Move, 0, 0);
        }
    }

    ///
    /// The current settings of the coordinate system used by this sequence
    ///
    #[inline]
    pub fn coordinate_system(&self) -> CoordinateSystem {
        self.coordinate_system.get()
    }

    ///
    /// The shared coordinate system used by this sequence
    ///
    pub fn shared_coordinate_system(&self) -> Rc<Cell<CoordinateSystem>> {
        Rc::clone(&self.coordinate_system)
    }

    ///
    /// Replaces the coordinate system settings (for everything sharing them)
    ///
    pub fn set_coordinate_system(&self, coordinate_system: CoordinateSystem) {
        self.coordinate_system.set(coordinate_system);
    }

    #[inline] pub fn len(&self) -> usize { self.commands.len() }
    #[inline] pub fn is_empty(&self) -> bool { self.commands.is_empty() }

    ///
    /// Iterates over the commands in this sequence
    ///
    #[inline]
    pub fn iter(&self) -> slice::Iter<DrawCommand> {
        self.commands.iter()
    }

    #[inline]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    #[inline] pub fn first(&self) -> Option<&DrawCommand> { self.commands.first() }
    #[inline] pub fn last(&self) -> Option<&DrawCommand> { self.commands.last() }

    ///
    /// Finds the index of a command in this sequence
    ///
    pub fn index_of(&self, id: CommandId) -> Option<usize> {
        self.commands.iter().position(|command| command.id == id)
    }

    ///
    /// Retrieves a command from this sequence
    ///
    pub fn get(&self, id: CommandId) -> Option<&DrawCommand> {
        self.commands.iter().find(|command| command.id == id)
    }

    ///
    /// Retrieves a command for editing its markers (the closed state of a spline or the continuity of a curve)
    ///
    pub fn get_mut(&mut self, id: CommandId) -> Option<&mut DrawCommand> {
        self.commands.iter_mut().find(|command| command.id == id)
    }

    ///
    /// The C1 continuity marker for every command in order (always false for anything that isn't a cubic curve)
    ///
    pub fn c1_continuity(&self) -> Vec<bool> {
        self.commands.iter().map(|command| command.is_c1_continuous()).collect()
    }

    ///
    /// Assigns a new command identifier
    ///
    pub (crate) fn allocate_id(&mut self) -> CommandId {
        let id = CommandId(self.next_id);
        self.next_id += 1;

        id
    }

    ///
    /// Links the command at the index `prev` so that it comes right before the command at the index `next`
    ///
    /// This is the only place where the `previous` and `dependent` links are written.
    ///
    fn connect(&mut self, prev: Option<usize>, next: Option<usize>) {
        let prev_id = prev.map(|idx| self.commands[idx].id);
        let next_id = next.map(|idx| self.commands[idx].id);

        if let Some(prev) = prev {
            self.commands[prev].main_point.dependent = next_id;
        }

        if let Some(next) = next {
            self.commands[next].previous = prev_id;
        }
    }

    ///
    /// True if the links between every pair of commands in this sequence agree with the order of the commands
    ///
    pub fn links_are_consistent(&self) -> bool {
        let first_ok = self.commands.first().map(|first| first.previous.is_none()).unwrap_or(true);
        let last_ok  = self.commands.last().map(|last| last.main_point.dependent.is_none()).unwrap_or(true);

        let pairs_ok = self.commands.windows(2)
            .all(|pair| pair[0].main_point.dependent == Some(pair[1].id) && pair[1].previous == Some(pair[0].id));

        first_ok && last_ok && pairs_ok
    }

    ///
    /// Checks the sequence invariants after a structural edit (debug builds only)
    ///
    #[inline]
    fn check_structure(&self) {
        debug_assert!(self.links_are_consistent(), "Command links are inconsistent");
        debug_assert!(self.commands.first().map(|first| first.kind() == CommandKind::Move).unwrap_or(true), "Drawing does not start with a move");
    }
}

impl<'a> IntoIterator for &'a CommandSequence {
    type Item       = &'a DrawCommand;
    type IntoIter   = slice::Iter<'a, DrawCommand>;

    fn into_iter(self) -> slice::Iter<'a, DrawCommand> {
        self.commands.iter()
    }
}
