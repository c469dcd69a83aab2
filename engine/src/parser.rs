use super::command::*;
use super::sequence::*;
use super::coordinate_system::*;

use smallvec::*;

use std::rc::Rc;
use std::cell::Cell;

///
/// Token appended to every drawing before it's parsed, so that the last real command is always flushed
///
const END_OF_DRAWING: &str = " _ _";

///
/// The command letters recognised by the parser
///
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum CommandToken {
    Move,           // m (x, y)
    LineHint,       // n (x, y)
    Line,           // l (x, y)*
    Bezier,         // b (x1, y1, x2, y2, x, y)*
    Spline,         // s (x1, y1, ..., x, y)
    ExtendSpline,   // p (x, y)
    CloseSpline,    // c
    Flush           // _
}

impl CommandToken {
    fn from_token(token: &str) -> Option<CommandToken> {
        use self::CommandToken::*;

        match token {
            "m" => Some(Move),
            "n" => Some(LineHint),
            "l" => Some(Line),
            "b" => Some(Bezier),
            "s" => Some(Spline),
            "p" => Some(ExtendSpline),
            "c" => Some(CloseSpline),
            "_" => Some(Flush),
            _   => None
        }
    }
}

///
/// Prepares drawing text for tokenizing: line breaks and tabs are removed (not replaced with spaces), the text is made
/// lower case and the end-of-drawing marker is added
///
fn normalize_drawing(text: &str) -> String {
    let mut normalized = text.chars()
        .filter(|chr| !matches!(chr, '\t' | '\r' | '\n'))
        .collect::<String>()
        .to_lowercase();

    normalized.push_str(END_OF_DRAWING);
    normalized
}

///
/// Parses ASS drawing commands into a command sequence
///
/// The parser reads one token at a time. Numbers are collected until the next command letter is
/// seen, at which point the command for the previous letter is generated from them. Lines and
/// bezier curves are greedy: a single `l` or `b` can be followed by as many sets of coordinates
/// as there are commands. Anything that isn't a command letter or an integer is ignored, as are
/// commands that don't have enough coordinates.
///
pub struct CommandParser {
    /// The command letter that the collected values belong to
    current: Option<CommandToken>,

    /// The numbers that have been read since the last command letter
    values: SmallVec<[i32; 8]>,

    /// A spline that can still be extended by `p` or closed by `c`
    pending_spline: Option<DrawCommand>,

    /// The point from an `n` command, which becomes a line once the parser moves past it
    pending_line: Option<(i32, i32)>
}

impl CommandParser {
    ///
    /// Creates a new parser
    ///
    pub fn new() -> CommandParser {
        CommandParser {
            current:        None,
            values:         smallvec![],
            pending_spline: None,
            pending_line:   None
        }
    }

    ///
    /// Processes a single token, adding any commands that it completes to the sequence
    ///
    pub fn next_token(&mut self, token: &str, sequence: &mut CommandSequence) {
        if let Some(command) = CommandToken::from_token(token) {
            self.flush(sequence);

            self.values.clear();
            self.current = Some(command);
        } else if let Ok(value) = token.parse::<i32>() {
            self.values.push(value);
        } else {
            trace!("Ignoring drawing token '{}'", token);
        }
    }

    ///
    /// Adds a command generated by the parser to a sequence
    ///
    /// A drawing that doesn't start with a move starts at the origin
    ///
    fn add_command(sequence: &mut CommandSequence, command: DrawCommand) {
        if sequence.is_empty() && command.kind() != CommandKind::Move {
            debug!("Drawing starts with {:?}: adding an implied move to the origin", command.kind());
            sequence.append_new(CommandKind::Move, 0, 0);
        }

        sequence.append(command);
    }

    ///
    /// Generates the commands for the current command letter from the values that have been read
    ///
    fn flush(&mut self, sequence: &mut CommandSequence) {
        use self::CommandToken::*;

        loop {
            let mut done = true;

            // The point for an 'n' is remembered, and becomes a line when the following command is processed
            if self.current == Some(LineHint) && self.values.len() >= 2 {
                self.pending_line = Some((self.values[0], self.values[1]));
            } else if let Some((x, y)) = self.pending_line.take() {
                let line = sequence.new_command(CommandKind::Line, x, y);
                Self::add_command(sequence, line);
            }

            // 'p' extends the pending spline and 'c' closes it: anything else finishes it
            if let Some(mut spline) = self.pending_spline.take() {
                match self.current {
                    Some(ExtendSpline) if self.values.len() >= 2 => {
                        spline.extend_spline(self.values[0], self.values[1]);
                        self.pending_spline = Some(spline);
                    }

                    Some(CloseSpline) => {
                        spline.set_closed(true);
                        Self::add_command(sequence, spline);
                    }

                    _ => {
                        Self::add_command(sequence, spline);
                    }
                }
            }

            match self.current {
                Some(Move) if self.values.len() >= 2 => {
                    let move_to = sequence.new_command(CommandKind::Move, self.values[0], self.values[1]);
                    Self::add_command(sequence, move_to);
                }

                Some(Line) if self.values.len() >= 2 => {
                    let line = sequence.new_command(CommandKind::Line, self.values[0], self.values[1]);
                    Self::add_command(sequence, line);

                    self.values.drain(0..2);
                    done = self.values.len() < 2;
                }

                Some(Bezier) if self.values.len() >= 6 => {
                    let v       = &self.values;
                    let curve   = sequence.new_cubic((v[4], v[5]), (v[0], v[1]), (v[2], v[3]));
                    Self::add_command(sequence, curve);

                    self.values.drain(0..6);
                    done = self.values.len() < 6;
                }

                Some(Spline) if self.values.len() >= 6 => {
                    // An odd trailing value is ignored: the final pair is the destination and the rest are control points
                    let num_values      = (self.values.len() / 2) * 2;
                    let end             = (self.values[num_values-2], self.values[num_values-1]);
                    let spline          = sequence.new_spline(end, &self.values[0..(num_values-2)]);

                    self.pending_spline = Some(spline);
                }

                _ => { }
            }

            if done {
                break;
            }
        }
    }

    ///
    /// Parses a drawing, adding its commands to a sequence
    ///
    pub fn parse(&mut self, text: &str, sequence: &mut CommandSequence) {
        let normalized = normalize_drawing(text);

        for token in normalized.split(' ').filter(|token| !token.is_empty()) {
            self.next_token(token, sequence);
        }

        if sequence.is_empty() {
            sequence.append_new(CommandKind::Move, 0, 0);
        }
    }
}

impl CommandSequence {
    ///
    /// Parses ASS drawing text into a new command sequence
    ///
    pub fn parse(text: &str) -> CommandSequence {
        let mut sequence = CommandSequence::new();
        sequence.parse_into(text);

        sequence
    }

    ///
    /// Parses ASS drawing text into a new command sequence that uses a shared coordinate system
    ///
    pub fn parse_with_coordinate_system(text: &str, coordinate_system: Rc<Cell<CoordinateSystem>>) -> CommandSequence {
        let mut sequence = CommandSequence::with_coordinate_system(coordinate_system);
        sequence.parse_into(text);

        sequence
    }

    ///
    /// Replaces the contents of this sequence with the commands from some ASS drawing text, returning the number of commands
    ///
    pub fn parse_into(&mut self, text: &str) -> usize {
        self.reset(false);
        CommandParser::new().parse(text, self);

        debug!("Parsed {} drawing commands", self.len());
        self.len()
    }
}

///
/// Parses ASS drawing text, returning the command sequence and the number of commands in it
///
pub fn parse_drawing(text: &str) -> (CommandSequence, usize) {
    let sequence    = CommandSequence::parse(text);
    let count       = sequence.len();

    (sequence, count)
}
