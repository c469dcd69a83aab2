use super::kind::*;
use crate::point::*;

use std::fmt;
use std::iter;

///
/// Identifies a command within a command sequence
///
/// Identifiers are never reused by a sequence, so an identifier for a deleted command will
/// simply fail to match anything.
///
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct CommandId(pub u64);

impl fmt::Display for CommandId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

///
/// The kind-specific part of a drawing command
///
#[derive(Clone, PartialEq, Debug)]
pub enum CommandShape {
    Move,
    Line,

    /// A cubic bezier curve: the control points are `None` until they're specified or derived
    CubicCurve {
        controls:       Option<[DrawPoint; 2]>,
        c1_continuous:  bool
    },

    /// A spline: the control points are empty until they're specified or derived
    Spline {
        controls:       Vec<DrawPoint>,
        closed:         bool
    }
}

///
/// A single command in a drawing
///
/// The main point of a command is its anchor: for curves and splines this is the destination
/// point. The start of a curve is the main point of the command before it.
///
#[derive(Clone, PartialEq, Debug)]
pub struct DrawCommand {
    pub (crate) id:         CommandId,
    pub (crate) main_point: DrawPoint,
    pub (crate) previous:   Option<CommandId>,
    pub (crate) shape:      CommandShape
}

impl DrawCommand {
    ///
    /// Creates a command with no control points
    ///
    pub (crate) fn new(id: CommandId, kind: CommandKind, x: i32, y: i32, previous: Option<CommandId>) -> DrawCommand {
        let shape = match kind {
            CommandKind::Move       => CommandShape::Move,
            CommandKind::Line       => CommandShape::Line,
            CommandKind::CubicCurve => CommandShape::CubicCurve { controls: None, c1_continuous: false },
            CommandKind::Spline     => CommandShape::Spline { controls: vec![], closed: false }
        };

        DrawCommand {
            id:         id,
            main_point: DrawPoint::main(x, y, id),
            previous:   previous,
            shape:      shape
        }
    }

    ///
    /// Creates a cubic curve with explicit control points
    ///
    pub (crate) fn new_cubic(id: CommandId, (x, y): (i32, i32), (x1, y1): (i32, i32), (x2, y2): (i32, i32), previous: Option<CommandId>) -> DrawCommand {
        let controls = [DrawPoint::control(x1, y1, 1, id), DrawPoint::control(x2, y2, 2, id)];

        DrawCommand {
            id:         id,
            main_point: DrawPoint::main(x, y, id),
            previous:   previous,
            shape:      CommandShape::CubicCurve { controls: Some(controls), c1_continuous: false }
        }
    }

    ///
    /// Creates a spline from a list of control point coordinates (as x, y pairs: an odd trailing value is ignored)
    ///
    pub (crate) fn new_spline(id: CommandId, (x, y): (i32, i32), control_values: &[i32], previous: Option<CommandId>) -> DrawCommand {
        let controls = control_values.chunks_exact(2)
            .enumerate()
            .map(|(idx, pair)| DrawPoint::control(pair[0], pair[1], (idx as u32)+1, id))
            .collect();

        DrawCommand {
            id:         id,
            main_point: DrawPoint::main(x, y, id),
            previous:   previous,
            shape:      CommandShape::Spline { controls: controls, closed: false }
        }
    }

    ///
    /// The identifier for this command
    ///
    #[inline]
    pub fn id(&self) -> CommandId {
        self.id
    }

    ///
    /// The kind of this command
    ///
    pub fn kind(&self) -> CommandKind {
        match self.shape {
            CommandShape::Move                  => CommandKind::Move,
            CommandShape::Line                  => CommandKind::Line,
            CommandShape::CubicCurve { .. }     => CommandKind::CubicCurve,
            CommandShape::Spline { .. }         => CommandKind::Spline
        }
    }

    #[inline]
    pub fn shape(&self) -> &CommandShape {
        &self.shape
    }

    #[inline]
    pub fn main_point(&self) -> &DrawPoint {
        &self.main_point
    }

    ///
    /// The command that comes before this one in its sequence
    ///
    #[inline]
    pub fn previous(&self) -> Option<CommandId> {
        self.previous
    }

    ///
    /// The control points for this command, in order (empty for moves, lines and uninitialized curves)
    ///
    pub fn control_points(&self) -> &[DrawPoint] {
        match &self.shape {
            CommandShape::Move | CommandShape::Line             => &[],
            CommandShape::CubicCurve { controls, .. }           => controls.as_ref().map(|controls| &controls[..]).unwrap_or(&[]),
            CommandShape::Spline { controls, .. }               => &controls[..]
        }
    }

    pub (crate) fn control_points_mut(&mut self) -> &mut [DrawPoint] {
        match &mut self.shape {
            CommandShape::Move | CommandShape::Line             => &mut [],
            CommandShape::CubicCurve { controls, .. }           => controls.as_mut().map(|controls| &mut controls[..]).unwrap_or(&mut []),
            CommandShape::Spline { controls, .. }               => &mut controls[..]
        }
    }

    ///
    /// Iterates over the main point followed by the control points of this command
    ///
    pub fn points<'a>(&'a self) -> impl 'a+Iterator<Item=&'a DrawPoint> {
        iter::once(&self.main_point).chain(self.control_points().iter())
    }

    ///
    /// Calls a function for every point in this command
    ///
    pub (crate) fn for_each_point_mut<PointFn: FnMut(&mut DrawPoint)>(&mut self, mut point_fn: PointFn) {
        point_fn(&mut self.main_point);
        self.control_points_mut().iter_mut().for_each(point_fn);
    }

    ///
    /// Retrieves a point from this command
    ///
    pub fn point(&self, point: PointRef) -> Option<&DrawPoint> {
        match point {
            PointRef::Main              => Some(&self.main_point),
            PointRef::Control(ordinal)  => self.control_points().iter().find(|point| point.ordinal == ordinal)
        }
    }

    pub (crate) fn point_mut(&mut self, point: PointRef) -> Option<&mut DrawPoint> {
        match point {
            PointRef::Main              => Some(&mut self.main_point),
            PointRef::Control(ordinal)  => self.control_points_mut().iter_mut().find(|point| point.ordinal == ordinal)
        }
    }

    ///
    /// False for curves and splines whose control points have not been specified or derived yet
    ///
    pub fn is_initialized(&self) -> bool {
        match &self.shape {
            CommandShape::Move | CommandShape::Line             => true,
            CommandShape::CubicCurve { controls, .. }           => controls.is_some(),
            CommandShape::Spline { controls, .. }               => !controls.is_empty()
        }
    }

    ///
    /// True for splines that are closed with a `c`
    ///
    pub fn is_closed(&self) -> bool {
        match &self.shape {
            CommandShape::Spline { closed, .. } => *closed,
            _                                   => false
        }
    }

    ///
    /// Closes or opens a spline (has no effect on other kinds of command)
    ///
    pub fn set_closed(&mut self, new_closed: bool) {
        if let CommandShape::Spline { closed, .. } = &mut self.shape {
            *closed = new_closed;
        }
    }

    ///
    /// True for cubic curves that are marked as C1 continuous with the curve before them
    ///
    pub fn is_c1_continuous(&self) -> bool {
        match &self.shape {
            CommandShape::CubicCurve { c1_continuous, .. }  => *c1_continuous,
            _                                               => false
        }
    }

    ///
    /// Sets the C1 continuity marker for a cubic curve (has no effect on other kinds of command)
    ///
    pub fn set_c1_continuous(&mut self, continuous: bool) {
        if let CommandShape::CubicCurve { c1_continuous, .. } = &mut self.shape {
            *c1_continuous = continuous;
        }
    }

    ///
    /// Extends a spline with a new destination point: the existing main point becomes the last control point
    ///
    /// Only used on splines that are not yet part of a sequence (whose main point has no dependent)
    ///
    pub (crate) fn extend_spline(&mut self, x: i32, y: i32) {
        let id = self.id;

        if let CommandShape::Spline { controls, .. } = &mut self.shape {
            debug_assert!(self.main_point.dependent.is_none());

            let ordinal     = (controls.len() as u32)+1;
            let old_main    = &self.main_point;

            controls.push(DrawPoint::control(old_main.x, old_main.y, ordinal, id));
            self.main_point = DrawPoint::main(x, y, id);
        }
    }

    ///
    /// Gives this command (and the points it owns) a new identifier
    ///
    pub (crate) fn reassign_id(&mut self, id: CommandId) {
        self.id = id;
        self.for_each_point_mut(|point| point.owner = id);
    }

    ///
    /// Converts this command to a move to its main point, keeping its identifier
    ///
    pub (crate) fn into_move(self) -> DrawCommand {
        DrawCommand::new(self.id, CommandKind::Move, self.main_point.x, self.main_point.y, self.previous)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn spline_control_pairs() {
        let spline = DrawCommand::new_spline(CommandId(1), (9, 9), &[1, 2, 3, 4, 5], None);

        assert!(spline.control_points().len() == 2);
        assert!(spline.control_points()[1].position() == (3, 4));
        assert!(spline.control_points()[1].ordinal() == 2);
        assert!(spline.is_initialized());
    }

    #[test]
    fn extend_spline_demotes_main_point() {
        let mut spline = DrawCommand::new_spline(CommandId(1), (5, 6), &[1, 2, 3, 4], None);
        spline.extend_spline(7, 8);

        assert!(spline.main_point().position() == (7, 8));
        assert!(spline.main_point().kind() == PointKind::Main);
        assert!(spline.control_points().len() == 3);
        assert!(spline.control_points()[2].position() == (5, 6));
        assert!(spline.control_points()[2].kind() == PointKind::Control);
        assert!(spline.control_points()[2].ordinal() == 3);
    }

    #[test]
    fn uninitialized_commands_have_no_controls() {
        let curve   = DrawCommand::new(CommandId(1), CommandKind::CubicCurve, 5, 5, None);
        let spline  = DrawCommand::new(CommandId(2), CommandKind::Spline, 5, 5, None);
        let line    = DrawCommand::new(CommandId(3), CommandKind::Line, 5, 5, None);

        assert!(!curve.is_initialized());
        assert!(!spline.is_initialized());
        assert!(line.is_initialized());
        assert!(curve.control_points().is_empty());
        assert!(spline.control_points().is_empty());
    }

    #[test]
    fn points_iterate_main_first() {
        let curve   = DrawCommand::new_cubic(CommandId(1), (30, 0), (10, 1), (20, 2), None);
        let points  = curve.points().map(|point| point.position()).collect::<Vec<_>>();

        assert!(points == vec![(30, 0), (10, 1), (20, 2)]);
    }

    #[test]
    fn into_move_keeps_identity() {
        let curve   = DrawCommand::new_cubic(CommandId(4), (30, 0), (10, 1), (20, 2), None);
        let as_move = curve.into_move();

        assert!(as_move.id() == CommandId(4));
        assert!(as_move.kind() == CommandKind::Move);
        assert!(as_move.main_point().position() == (30, 0));
    }
}
