use super::error::*;

use assdraw_engine::*;

use std::str::FromStr;

///
/// The operations that the command line tool can perform on a drawing
///
#[derive(Clone, PartialEq, Debug)]
pub enum DrawingCommand {
    /// Parse and regenerate the drawing
    Normalize,

    /// Move every point by an offset
    Translate(i32, i32),

    /// Apply an affine transformation to every point
    Transform(PointTransform),

    /// Report the command or control point at a position
    PointAt(i32, i32),

    /// Write out a JSON summary of the drawing
    Describe
}

///
/// JSON summary of a single command
///
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct CommandSummary {
    pub id:             u64,
    pub kind:           CommandKind,
    pub main_point:     (i32, i32),
    pub control_points: Vec<(i32, i32)>,
    pub initialized:    bool,
    pub c1_continuous:  bool,
    pub closed:         bool
}

///
/// JSON summary of a drawing
///
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct DrawingSummary {
    pub commands:   Vec<CommandSummary>,
    pub text:       String,

    /// Minimum and maximum logical coordinates covered by the path
    pub bounds:     Option<((f64, f64), (f64, f64))>
}

impl DrawingSummary {
    ///
    /// Summarizes a command sequence
    ///
    pub fn from_sequence(sequence: &CommandSequence) -> DrawingSummary {
        let commands = sequence.iter()
            .map(|command| CommandSummary {
                id:             command.id().0,
                kind:           command.kind(),
                main_point:     command.main_point().position(),
                control_points: command.control_points().iter().map(|point| point.position()).collect(),
                initialized:    command.is_initialized(),
                c1_continuous:  command.is_c1_continuous(),
                closed:         command.is_closed()
            })
            .collect();

        let bounds = sequence.bounds()
            .map(|(min, max)| ((min.0, min.1), (max.0, max.1)));

        DrawingSummary {
            commands:   commands,
            text:       sequence.generate(),
            bounds:     bounds
        }
    }
}

///
/// Parses a single numeric command line argument
///
pub fn parse_number<Number: FromStr>(name: &str, value: &str) -> Result<Number, AssDrawError> {
    Number::from_str(value.trim())
        .map_err(|_| AssDrawError::InvalidArgument(format!("'{}' is not a valid value for {}", value, name)))
}

///
/// Parses a coordinate pair of the form `X,Y`
///
pub fn parse_pair(name: &str, value: &str) -> Result<(f64, f64), AssDrawError> {
    let mut parts = value.split(',');

    match (parts.next(), parts.next(), parts.next()) {
        (Some(x), Some(y), None)    => Ok((parse_number(name, x)?, parse_number(name, y)?)),
        _                           => Err(AssDrawError::InvalidArgument(format!("'{}' is not a valid value for {}. The parameter must be of the format <x>,<y> (eg: 10,20)", value, name)))
    }
}

impl DrawingCommand {
    ///
    /// Runs this command against a drawing, returning the text to write out
    ///
    pub fn run(&self, sequence: &mut CommandSequence) -> Result<String, AssDrawError> {
        use self::DrawingCommand::*;

        debug!("Running {:?} on a drawing with {} commands", self, sequence.len());

        match self {
            Normalize           => Ok(sequence.generate()),

            Translate(dx, dy)   => {
                sequence.translate(*dx, *dy);
                Ok(sequence.generate())
            }

            Transform(transform) => {
                sequence.transform(transform);
                Ok(sequence.generate())
            }

            PointAt(x, y)       => {
                if let Some(command) = sequence.point_at(*x, *y) {
                    Ok(format!("{} {}", command.id(), command.to_drawing_text()))
                } else if let Some((command, point)) = sequence.control_at(*x, *y) {
                    Ok(format!("{} control point {} of {}", command.id(), point.ordinal(), command.to_drawing_text()))
                } else {
                    Ok(format!("no point at {},{}", x, y))
                }
            }

            Describe            => {
                let summary = DrawingSummary::from_sequence(sequence);
                serde_json::to_string_pretty(&summary).map_err(AssDrawError::Output)
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn normalize_drawing() {
        let mut sequence = CommandSequence::parse("M 0 0 L 10 10 20 20");

        assert!(DrawingCommand::Normalize.run(&mut sequence).unwrap() == "m 0 0 l 10 10 l 20 20 ");
    }

    #[test]
    fn translate_drawing() {
        let mut sequence = CommandSequence::parse("m 0 0 l 10 10");

        assert!(DrawingCommand::Translate(-5, 5).run(&mut sequence).unwrap() == "m -5 5 l 5 15 ");
    }

    #[test]
    fn transform_drawing() {
        let mut sequence    = CommandSequence::parse("m 0 0 l 10 10");
        let transform       = PointTransform::new(2.0, 0.0, 0.0, 2.0, 0.0, 0.0, 1.0, 1.0);

        assert!(DrawingCommand::Transform(transform).run(&mut sequence).unwrap() == "m 1 1 l 21 21 ");
    }

    #[test]
    fn find_main_and_control_points() {
        let mut sequence = CommandSequence::parse("m 0 0 b 10 0 20 0 30 0");

        assert!(DrawingCommand::PointAt(30, 0).run(&mut sequence).unwrap().ends_with("b 10 0 20 0 30 0"));
        assert!(DrawingCommand::PointAt(20, 0).run(&mut sequence).unwrap().contains("control point 2"));
        assert!(DrawingCommand::PointAt(1, 1).run(&mut sequence).unwrap() == "no point at 1,1");
    }

    #[test]
    fn describe_drawing() {
        let mut sequence    = CommandSequence::parse("m 0 0 l 10 20");
        let json            = DrawingCommand::Describe.run(&mut sequence).unwrap();
        let value           = serde_json::from_str::<serde_json::Value>(&json).unwrap();

        assert!(value["commands"].as_array().unwrap().len() == 2);
        assert!(value["commands"][1]["kind"] == "Line");
        assert!(value["commands"][1]["main_point"][1] == 20);
        assert!(value["text"] == "m 0 0 l 10 20 ");
        assert!(value["bounds"][1][0] == 10.0);
    }

    #[test]
    fn parse_arguments() {
        assert!(parse_number::<i32>("DX", "-12").unwrap() == -12);
        assert!(parse_number::<i32>("DX", "twelve").is_err());
        assert!(parse_pair("--origin", "1.5,-2").unwrap() == (1.5, -2.0));
        assert!(parse_pair("--origin", "1,2,3").is_err());
        assert!(parse_pair("--origin", "1").is_err());
    }
}
