use super::*;
use crate::point::*;
use crate::error::*;

impl CommandSequence {
    ///
    /// Creates a new command (with no control points) that follows the current last command
    ///
    /// The command is not part of the sequence until it's appended or inserted.
    ///
    pub fn new_command(&mut self, kind: CommandKind, x: i32, y: i32) -> DrawCommand {
        let id          = self.allocate_id();
        let previous    = self.commands.last().map(|command| command.id);

        DrawCommand::new(id, kind, x, y, previous)
    }

    ///
    /// Creates a new cubic curve with explicit control points that follows the current last command
    ///
    pub fn new_cubic(&mut self, end: (i32, i32), control_point1: (i32, i32), control_point2: (i32, i32)) -> DrawCommand {
        let id          = self.allocate_id();
        let previous    = self.commands.last().map(|command| command.id);

        DrawCommand::new_cubic(id, end, control_point1, control_point2, previous)
    }

    ///
    /// Creates a new spline with explicit control points (as a list of x, y pairs) that follows the current last command
    ///
    pub fn new_spline(&mut self, end: (i32, i32), control_values: &[i32]) -> DrawCommand {
        let id          = self.allocate_id();
        let previous    = self.commands.last().map(|command| command.id);

        DrawCommand::new_spline(id, end, control_values, previous)
    }

    ///
    /// Makes sure a command that's about to be added doesn't share an identifier with a command that's already in the sequence
    ///
    fn claim(&mut self, mut command: DrawCommand) -> DrawCommand {
        if self.index_of(command.id).is_some() {
            let new_id = self.allocate_id();
            debug!("Command {} is already in the drawing: adding it as {}", command.id, new_id);

            command.reassign_id(new_id);
        }

        command
    }

    ///
    /// Connects the command at the specified index to its neighbours
    ///
    fn link_at(&mut self, idx: usize) {
        let prev = idx.checked_sub(1);
        let next = if idx+1 < self.commands.len() { Some(idx+1) } else { None };

        self.connect(prev, Some(idx));
        self.connect(Some(idx), next);
    }

    ///
    /// Adds a command to the end of this sequence, returning its identifier
    ///
    /// If the sequence is empty, the command is replaced with a move to its main point so that the
    /// drawing always starts with a move.
    ///
    pub fn append(&mut self, command: DrawCommand) -> CommandId {
        let mut command = self.claim(command);

        if self.commands.is_empty() && command.kind() != CommandKind::Move {
            debug!("Replacing {:?} {} with a move as it is the first command", command.kind(), command.id);
            command = command.into_move();
        }

        let id = command.id;
        self.commands.push(command);
        self.link_at(self.commands.len()-1);

        self.check_structure();
        id
    }

    ///
    /// Creates a new command and adds it to the end of this sequence
    ///
    pub fn append_new(&mut self, kind: CommandKind, x: i32, y: i32) -> CommandId {
        let command = self.new_command(kind, x, y);
        self.append(command)
    }

    ///
    /// Inserts a command immediately after another one, returning its identifier
    ///
    /// The command is appended to the end of the sequence if the anchor can't be found.
    ///
    pub fn insert_after(&mut self, command: DrawCommand, anchor: CommandId) -> CommandId {
        let anchor_idx = match self.index_of(anchor) {
            Some(idx)   => idx,
            None        => {
                debug!("Insertion point {} is not in the drawing: appending instead", anchor);
                return self.append(command);
            }
        };

        let command = self.claim(command);
        let id      = command.id;

        self.commands.insert(anchor_idx+1, command);
        self.link_at(anchor_idx+1);

        self.check_structure();
        id
    }

    ///
    /// Creates a new command and inserts it after another one
    ///
    pub fn insert_new_after(&mut self, kind: CommandKind, x: i32, y: i32, anchor: CommandId) -> CommandId {
        let command = self.new_command(kind, x, y);
        self.insert_after(command, anchor)
    }

    ///
    /// Removes a command from this sequence, connecting the commands on either side of it
    ///
    /// The first command can only be removed if it's the only command in the sequence.
    ///
    pub fn delete(&mut self, id: CommandId) -> Result<(), EditError> {
        let idx = self.index_of(id).ok_or(EditError::UnknownCommand(id))?;

        if idx == 0 && self.commands.len() > 1 {
            warn!("Refusing to delete {}: it starts a drawing with {} commands", id, self.commands.len());
            return Err(EditError::FirstCommand(id));
        }

        self.commands.remove(idx);

        let prev = idx.checked_sub(1);
        let next = if idx < self.commands.len() { Some(idx) } else { None };
        self.connect(prev, next);

        self.check_structure();
        Ok(())
    }

    ///
    /// Moves a single point of a command to a new position
    ///
    pub fn move_point(&mut self, id: CommandId, point: PointRef, x: i32, y: i32) -> Result<(), EditError> {
        let command = self.get_mut(id).ok_or(EditError::UnknownCommand(id))?;
        let target  = command.point_mut(point).ok_or(EditError::UnknownPoint(id, point))?;

        target.set_position(x, y);
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn positions(sequence: &CommandSequence) -> Vec<(CommandKind, (i32, i32))> {
        sequence.iter().map(|command| (command.kind(), command.main_point().position())).collect()
    }

    #[test]
    fn append_links_commands() {
        let mut sequence    = CommandSequence::new();
        let first           = sequence.first().unwrap().id();
        let line            = sequence.append_new(CommandKind::Line, 10, 10);

        assert!(sequence.get(line).unwrap().previous() == Some(first));
        assert!(sequence.get(first).unwrap().main_point().dependent() == Some(line));
        assert!(sequence.get(line).unwrap().main_point().dependent() == None);
    }

    #[test]
    fn append_to_empty_makes_a_move() {
        let mut sequence    = CommandSequence::new();
        sequence.reset(false);

        let curve           = sequence.new_cubic((5, 6), (1, 2), (3, 4));
        let curve_id        = curve.id();
        let appended        = sequence.append(curve);

        assert!(appended == curve_id);
        assert!(positions(&sequence) == vec![(CommandKind::Move, (5, 6))]);
        assert!(sequence.first().unwrap().control_points().is_empty());
    }

    #[test]
    fn new_command_follows_last() {
        let mut sequence    = CommandSequence::new();
        let line            = sequence.append_new(CommandKind::Line, 10, 10);
        let curve           = sequence.new_command(CommandKind::CubicCurve, 20, 20);

        assert!(curve.previous() == Some(line));
        assert!(!curve.is_initialized());
        assert!(sequence.len() == 2);
    }

    #[test]
    fn insert_in_middle() {
        let mut sequence    = CommandSequence::new();
        let first           = sequence.first().unwrap().id();
        let last            = sequence.append_new(CommandKind::Line, 20, 20);
        let middle          = sequence.insert_new_after(CommandKind::Line, 10, 10, first);

        assert!(positions(&sequence) == vec![(CommandKind::Move, (0, 0)), (CommandKind::Line, (10, 10)), (CommandKind::Line, (20, 20))]);
        assert!(sequence.get(middle).unwrap().previous() == Some(first));
        assert!(sequence.get(last).unwrap().previous() == Some(middle));
        assert!(sequence.get(middle).unwrap().main_point().dependent() == Some(last));
        assert!(sequence.links_are_consistent());
    }

    #[test]
    fn insert_after_missing_anchor_appends() {
        let mut sequence    = CommandSequence::new();
        let line            = sequence.append_new(CommandKind::Line, 10, 10);
        sequence.delete(line).unwrap();

        sequence.append_new(CommandKind::Line, 20, 20);
        sequence.insert_new_after(CommandKind::Line, 30, 30, line);

        assert!(positions(&sequence) == vec![(CommandKind::Move, (0, 0)), (CommandKind::Line, (20, 20)), (CommandKind::Line, (30, 30))]);
        assert!(sequence.links_are_consistent());
    }

    #[test]
    fn insert_duplicate_command_gets_new_id() {
        let mut sequence    = CommandSequence::new();
        let line            = sequence.append_new(CommandKind::Line, 10, 10);
        let copy            = sequence.get(line).unwrap().clone();
        let copy_id         = sequence.append(copy);

        assert!(copy_id != line);
        assert!(sequence.len() == 3);
        assert!(sequence.get(copy_id).unwrap().main_point().owner() == copy_id);
        assert!(sequence.links_are_consistent());
    }

    #[test]
    fn delete_reconnects_neighbours() {
        let mut sequence    = CommandSequence::new();
        let first           = sequence.first().unwrap().id();
        let middle          = sequence.append_new(CommandKind::Line, 10, 10);
        let last            = sequence.append_new(CommandKind::Line, 20, 20);

        assert!(sequence.delete(middle) == Ok(()));
        assert!(sequence.get(middle).is_none());
        assert!(sequence.get(last).unwrap().previous() == Some(first));
        assert!(sequence.get(first).unwrap().main_point().dependent() == Some(last));
    }

    #[test]
    fn delete_last_clears_dependent() {
        let mut sequence    = CommandSequence::new();
        let first           = sequence.first().unwrap().id();
        let last            = sequence.append_new(CommandKind::Line, 20, 20);

        assert!(sequence.delete(last) == Ok(()));
        assert!(sequence.get(first).unwrap().main_point().dependent() == None);
    }

    #[test]
    fn cannot_delete_first_of_many() {
        let mut sequence    = CommandSequence::new();
        let first           = sequence.first().unwrap().id();
        sequence.append_new(CommandKind::Line, 10, 10);

        assert!(sequence.delete(first) == Err(EditError::FirstCommand(first)));
        assert!(sequence.len() == 2);
    }

    #[test]
    fn can_delete_only_command() {
        let mut sequence    = CommandSequence::new();
        let first           = sequence.first().unwrap().id();

        assert!(sequence.delete(first) == Ok(()));
        assert!(sequence.is_empty());
    }

    #[test]
    fn delete_unknown_command() {
        let mut sequence    = CommandSequence::new();

        assert!(sequence.delete(CommandId(1234)) == Err(EditError::UnknownCommand(CommandId(1234))));
    }

    #[test]
    fn move_single_points() {
        let mut sequence    = CommandSequence::new();
        let curve           = sequence.new_cubic((30, 0), (10, 0), (20, 0));
        let curve           = sequence.append(curve);

        sequence.move_point(curve, PointRef::Control(2), 25, 5).unwrap();
        sequence.move_point(curve, PointRef::Main, 40, 0).unwrap();

        let command = sequence.get(curve).unwrap();
        assert!(command.main_point().position() == (40, 0));
        assert!(command.control_points()[1].position() == (25, 5));
        assert!(sequence.move_point(curve, PointRef::Control(3), 0, 0) == Err(EditError::UnknownPoint(curve, PointRef::Control(3))));
    }
}
