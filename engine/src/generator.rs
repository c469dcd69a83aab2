use super::command::*;
use super::sequence::*;

///
/// Trait implemented by objects that can be written out as ASS drawing text
///
pub trait DrawingEncoding {
    ///
    /// Encodes this item by appending it to the specified string
    ///
    fn encode_drawing(&self, append_to: &mut String);
}

///
/// Appends a logical coordinate as a pair of command arguments
///
#[inline]
fn encode_position(append_to: &mut String, (x, y): (i32, i32)) {
    append_to.push(' ');
    append_to.push_str(&x.to_string());
    append_to.push(' ');
    append_to.push_str(&y.to_string());
}

///
/// Control points that haven't been generated yet are written out as question marks
///
const UNINITIALIZED_CONTROL_POINTS: &str = " ? ? ? ?";

impl DrawingEncoding for DrawCommand {
    fn encode_drawing(&self, append_to: &mut String) {
        use self::CommandShape::*;

        append_to.push(self.kind().letter());

        match self.shape() {
            Move | Line                 => { }

            CubicCurve { controls, .. } => {
                match controls {
                    Some(controls)  => controls.iter().for_each(|point| encode_position(append_to, point.position())),
                    None            => append_to.push_str(UNINITIALIZED_CONTROL_POINTS)
                }
            }

            Spline { controls, .. }     => {
                if controls.is_empty() {
                    append_to.push_str(UNINITIALIZED_CONTROL_POINTS);
                } else {
                    controls.iter().for_each(|point| encode_position(append_to, point.position()));
                }
            }
        }

        encode_position(append_to, self.main_point().position());

        if self.is_closed() {
            append_to.push_str(" c");
        }
    }
}

impl DrawingEncoding for CommandSequence {
    fn encode_drawing(&self, append_to: &mut String) {
        for command in self.iter() {
            command.encode_drawing(append_to);
            append_to.push(' ');
        }
    }
}

impl DrawCommand {
    ///
    /// Returns the ASS drawing text for this command
    ///
    pub fn to_drawing_text(&self) -> String {
        let mut text = String::new();
        self.encode_drawing(&mut text);

        text
    }
}

impl CommandSequence {
    ///
    /// Generates the ASS drawing text for this sequence
    ///
    /// Every command is followed by a single space. Text generated this way parses back into an
    /// identical sequence, but this is not true of all drawing text: `n` hints become lines and
    /// missing initial moves are made explicit.
    ///
    pub fn generate(&self) -> String {
        let mut text = String::new();
        self.encode_drawing(&mut text);

        text
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn encode_move_and_line() {
        let mut sequence = CommandSequence::new();
        sequence.append_new(CommandKind::Line, -5, 12);

        assert!(sequence.generate() == "m 0 0 l -5 12 ");
    }

    #[test]
    fn encode_uninitialized_curve() {
        let mut sequence    = CommandSequence::new();
        let curve           = sequence.append_new(CommandKind::CubicCurve, 5, 5);

        assert!(sequence.get(curve).unwrap().to_drawing_text() == "b ? ? ? ? 5 5");
    }

    #[test]
    fn encode_initialized_curve() {
        let mut sequence    = CommandSequence::new();
        let curve           = sequence.new_cubic((30, 0), (10, 1), (20, 2));
        let curve           = sequence.append(curve);

        assert!(sequence.get(curve).unwrap().to_drawing_text() == "b 10 1 20 2 30 0");
    }

    #[test]
    fn encode_uninitialized_spline() {
        let mut sequence    = CommandSequence::new();
        let spline          = sequence.append_new(CommandKind::Spline, 8, 9);

        assert!(sequence.get(spline).unwrap().to_drawing_text() == "s ? ? ? ? 8 9");
    }

    #[test]
    fn encode_closed_spline() {
        let mut sequence    = CommandSequence::new();
        let spline          = sequence.new_spline((5, 6), &[1, 2, 3, 4]);
        let spline          = sequence.append(spline);

        sequence.get_mut(spline).unwrap().set_closed(true);

        assert!(sequence.get(spline).unwrap().to_drawing_text() == "s 1 2 3 4 5 6 c");
    }

    #[test]
    fn encode_empty_sequence() {
        let mut sequence = CommandSequence::new();
        sequence.reset(false);

        assert!(sequence.generate() == "");
    }
}
