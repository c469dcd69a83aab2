use assdraw_engine::*;

#[test]
fn delete_guard_keeps_first_move() {
    let mut sequence    = CommandSequence::parse("m 0 0 l 10 10 20 20");
    let ids             = sequence.iter().map(|command| command.id()).collect::<Vec<_>>();

    assert!(sequence.delete(ids[0]) == Err(EditError::FirstCommand(ids[0])));
    assert!(sequence.len() == 3);

    assert!(sequence.delete(ids[1]).is_ok());
    assert!(sequence.delete(ids[0]).is_err());
    assert!(sequence.delete(ids[2]).is_ok());
    assert!(sequence.delete(ids[0]).is_ok());
    assert!(sequence.is_empty());
}

#[test]
fn first_command_is_always_a_move() {
    let mut sequence    = CommandSequence::new();
    sequence.reset(false);

    sequence.append_new(CommandKind::Line, 3, 4);
    sequence.append_new(CommandKind::Line, 5, 6);

    assert!(sequence.first().unwrap().kind() == CommandKind::Move);
    assert!(sequence.first().unwrap().main_point().position() == (3, 4));
    assert!(sequence.generate() == "m 3 4 l 5 6 ");
}

#[test]
fn links_stay_consistent_through_edits() {
    let mut sequence    = CommandSequence::parse("m 0 0 l 10 0 20 0 30 0");
    let ids             = sequence.iter().map(|command| command.id()).collect::<Vec<_>>();

    sequence.insert_new_after(CommandKind::CubicCurve, 15, 5, ids[1]);
    assert!(sequence.links_are_consistent());

    sequence.delete(ids[2]).unwrap();
    assert!(sequence.links_are_consistent());

    sequence.append_new(CommandKind::Spline, 40, 0);
    assert!(sequence.links_are_consistent());

    for command in sequence.iter().skip(1) {
        let previous = command.previous().and_then(|id| sequence.get(id)).unwrap();
        assert!(previous.main_point().dependent() == Some(command.id()));
    }
}

#[test]
fn inserted_curve_derives_from_new_neighbour() {
    let mut sequence    = CommandSequence::parse("m 0 0 l 30 30");
    let first           = sequence.first().unwrap().id();
    let curve           = sequence.insert_new_after(CommandKind::CubicCurve, 30, 0, first);

    assert!(sequence.initialize(curve));

    let controls = sequence.get(curve).unwrap().control_points().iter().map(|point| point.position()).collect::<Vec<_>>();
    assert!(controls == vec![(10, 0), (20, 0)]);
}

#[test]
fn find_points_after_transform() {
    let mut sequence    = CommandSequence::parse("m 0 0 b 10 0 20 0 30 0");

    sequence.affine_transform(2.0, 0.0, 0.0, 2.0, 0.0, 0.0, 5.0, 5.0);

    assert!(sequence.point_at(65, 5).map(|command| command.kind()) == Some(CommandKind::CubicCurve));
    assert!(sequence.control_at(25, 5).map(|(_, point)| point.ordinal()) == Some(1));
    assert!(sequence.point_at(30, 0).is_none());
}

#[test]
fn edit_errors_describe_themselves() {
    let error = EditError::FirstCommand(CommandId(3));

    assert!(error.to_string().contains("#3"));
}

#[test]
fn transform_serializes() {
    let transform   = PointTransform::scale(2.0, 2.0, (1.0, 1.0));
    let json        = serde_json::to_string(&transform).unwrap();
    let restored    = serde_json::from_str::<PointTransform>(&json).unwrap();

    assert!(restored == transform);
}

#[test]
fn edits_near_coordinate_limits() {
    let mut sequence    = CommandSequence::parse("m -2000000000 0");
    sequence.append_new(CommandKind::CubicCurve, 2000000000, 0);

    assert!(sequence.path_segments().len() == 2);
    assert!(sequence.initialize_all() == 1);

    let mut sequence    = CommandSequence::parse("m 2147483647 0");
    sequence.translate(1, 0);

    assert!(sequence.generate() == "m -2147483648 0 ");
}
