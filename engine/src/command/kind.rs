///
/// The kinds of command that can appear in a command sequence
///
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum CommandKind {
    /// `m x y`
    Move,

    /// `l x y`
    Line,

    /// `b x1 y1 x2 y2 x y`
    CubicCurve,

    /// `s x1 y1 ... x y`
    Spline
}

impl CommandKind {
    ///
    /// The letter used for this command in drawing text
    ///
    pub fn letter(&self) -> char {
        use self::CommandKind::*;

        match self {
            Move        => 'm',
            Line        => 'l',
            CubicCurve  => 'b',
            Spline      => 's'
        }
    }

    ///
    /// True if commands of this kind have control points
    ///
    pub fn has_control_points(&self) -> bool {
        use self::CommandKind::*;

        match self {
            Move | Line             => false,
            CubicCurve | Spline     => true
        }
    }
}
