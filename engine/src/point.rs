use super::command::*;
use super::coordinate_system::*;

///
/// Whether a point is the anchor of a command or one of the points that shapes its curve
///
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum PointKind {
    /// The main point of a command (the destination of a curve or spline)
    Main,

    /// A control point of a curve or spline
    Control
}

///
/// Identifies a point within a single command
///
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PointRef {
    /// The main point of the command
    Main,

    /// The control point with the specified (1-based) ordinal
    Control(u32)
}

///
/// A point belonging to a drawing command
///
/// Coordinates are in the logical (drawing command) coordinate system: use a `CoordinateSystem`
/// to find where a point is on the device.
///
#[derive(Clone, PartialEq, Debug)]
pub struct DrawPoint {
    pub (crate) x: i32,
    pub (crate) y: i32,
    pub (crate) kind: PointKind,
    pub (crate) ordinal: u32,
    pub (crate) owner: CommandId,
    pub (crate) dependent: Option<CommandId>
}

impl DrawPoint {
    ///
    /// Creates the main point for a command
    ///
    pub (crate) fn main(x: i32, y: i32, owner: CommandId) -> DrawPoint {
        DrawPoint { x, y, kind: PointKind::Main, ordinal: 0, owner, dependent: None }
    }

    ///
    /// Creates a control point for a command
    ///
    pub (crate) fn control(x: i32, y: i32, ordinal: u32, owner: CommandId) -> DrawPoint {
        DrawPoint { x, y, kind: PointKind::Control, ordinal, owner, dependent: None }
    }

    #[inline] pub fn x(&self) -> i32 { self.x }
    #[inline] pub fn y(&self) -> i32 { self.y }
    #[inline] pub fn position(&self) -> (i32, i32) { (self.x, self.y) }

    ///
    /// Main point or control point
    ///
    #[inline]
    pub fn kind(&self) -> PointKind {
        self.kind
    }

    ///
    /// The position of this point among its command's control points (starting at 1), or 0 for a main point
    ///
    #[inline]
    pub fn ordinal(&self) -> u32 {
        self.ordinal
    }

    ///
    /// Reference that can be used to find this point again within its command
    ///
    pub fn point_ref(&self) -> PointRef {
        match self.kind {
            PointKind::Main     => PointRef::Main,
            PointKind::Control  => PointRef::Control(self.ordinal)
        }
    }

    ///
    /// The command that owns this point
    ///
    #[inline]
    pub fn owner(&self) -> CommandId {
        self.owner
    }

    ///
    /// The command that depends on this point (for a main point, the command that follows its owner)
    ///
    #[inline]
    pub fn dependent(&self) -> Option<CommandId> {
        self.dependent
    }

    ///
    /// True if this point is at the specified logical coordinates
    ///
    #[inline]
    pub fn is_at(&self, x: i32, y: i32) -> bool {
        self.x == x && self.y == y
    }

    ///
    /// True if the logical coordinate nearest to a device position is this point
    ///
    pub fn is_at_device(&self, device_x: f64, device_y: f64, coords: &CoordinateSystem) -> bool {
        let (x, y) = coords.from_device(device_x, device_y);

        self.is_at(x, y)
    }

    ///
    /// Moves this point to a new logical position
    ///
    #[inline]
    pub (crate) fn set_position(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }

    ///
    /// Device position of this point
    ///
    #[inline]
    pub fn to_device(&self, coords: &CoordinateSystem) -> (f64, f64) {
        coords.to_device(self.x, self.y)
    }
}
