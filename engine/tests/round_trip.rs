use assdraw_engine::*;

#[test]
fn generated_text_is_a_fixed_point() {
    let drawings = vec![
        "m 0 0 l 10 0 10 10 0 10",
        "m 5 5 b 10 0 20 0 30 5 40 10 50 10 60 5",
        "m 0 0 s 10 0 20 10 30 20 p 40 30 c",
        "m -10 -20 l 30 -40 m 50 50 s 1 2 3 4 5 6"
    ];

    for drawing in drawings {
        let first   = CommandSequence::parse(drawing).generate();
        let second  = CommandSequence::parse(&first).generate();

        assert!(first == second, "{:?} != {:?}", first, second);
    }
}

#[test]
fn generate_canonical_text() {
    let sequence = CommandSequence::parse("M 0 0 L 10 0 10 10");

    assert!(sequence.generate() == "m 0 0 l 10 0 l 10 10 ");
}

#[test]
fn line_hints_and_implied_moves_do_not_survive() {
    let sequence = CommandSequence::parse("n 5 5 l 10 10");

    assert!(sequence.generate() == "m 0 0 l 5 5 l 10 10 ");
}

#[test]
fn edits_appear_in_generated_text() {
    let mut sequence    = CommandSequence::parse("m 0 0 l 10 10");
    let line            = sequence.last().unwrap().id();

    sequence.move_point(line, PointRef::Main, 20, 30).unwrap();
    sequence.translate(1, 1);

    assert!(sequence.generate() == "m 1 1 l 21 31 ");
}

#[test]
fn initialized_curves_round_trip() {
    let mut sequence    = CommandSequence::new();
    sequence.append_new(CommandKind::CubicCurve, 30, 0);

    assert!(sequence.generate() == "m 0 0 b ? ? ? ? 30 0 ");

    sequence.initialize_all();
    let text            = sequence.generate();

    assert!(text == "m 0 0 b 10 0 20 0 30 0 ");
    assert!(CommandSequence::parse(&text).generate() == text);
}
