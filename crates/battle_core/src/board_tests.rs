use super::*;

#[test]
fn test_standard_layout() {
    let b = Board::standard();
    assert_eq!(b.count(), 32);
    assert_eq!(b.units_of(Side::First).count(), 16);
    assert!(b.is_consistent());

    let white_queen = b.unit_at(Square::parse("d1").unwrap()).unwrap();
    assert_eq!(white_queen.archetype, Archetype::Queen);
    assert_eq!(white_queen.side, Side::First);

    let black_king = b.king(Side::Second).unwrap();
    assert_eq!(black_king.square, Square::at(0, 4));

    for side in [Side::First, Side::Second] {
        for unit in b.units_of(side) {
            let expected_row = match unit.archetype {
                Archetype::Pawn => side.pawn_row(),
                _ => side.back_row(),
            };
            assert_eq!(unit.square.row(), expected_row, "{:?} on {}", unit.archetype, unit.square);
        }
    }
}

#[test]
fn test_diagram_round_trip() {
    let text = "\
        r...k...
        ........
        ....n...
        ........
        ...Q....
        ........
        PP......
        ....K..R
    ";
    let b = Board::from_diagram(text).unwrap();
    assert_eq!(b.count(), 8);
    assert_eq!(Board::from_diagram(&b.diagram()).unwrap(), b);
    assert_eq!(b.unit_at(Square::at(4, 3)).unwrap().archetype, Archetype::Queen);
    assert_eq!(b.unit_at(Square::at(2, 4)).unwrap().side, Side::Second);
}

#[test]
fn test_standard_matches_diagram() {
    let text = "rnbqkbnr/pppppppp/......../......../......../......../PPPPPPPP/RNBQKBNR";
    assert_eq!(Board::from_diagram(text).unwrap(), Board::standard());
}

#[test]
fn test_diagram_errors() {
    assert_eq!(
        Board::from_diagram("......../........"),
        Err(BoardParseError::RowCount(2))
    );
    let short = "......./......../......../......../......../......../......../........";
    assert_eq!(
        Board::from_diagram(short),
        Err(BoardParseError::RowWidth { row: 0, len: 7 })
    );
    let bad = "x......./......../......../......../......../......../......../........";
    assert_eq!(
        Board::from_diagram(bad),
        Err(BoardParseError::BadChar { row: 0, ch: 'x' })
    );
}

#[test]
fn test_relocate_keeps_position_in_sync() {
    let mut b = Board::standard();
    let from = Square::at(7, 0);
    let to = Square::at(4, 0);
    b.unit_at_mut(from).unwrap().damage_reduction = 3;

    let rook = b.relocate(from, to).unwrap();
    assert_eq!(rook.square, to);
    assert_eq!(rook.damage_reduction, 0);
    assert!(b.is_empty(from));
    assert!(b.is_consistent());
}

#[test]
fn test_clone_is_independent() {
    let original = Board::standard();
    let mut copy = original.clone();
    copy.unit_at_mut(Square::at(6, 4)).unwrap().hp = 1;
    copy.remove(Square::at(7, 4));

    assert_eq!(original.unit_at(Square::at(6, 4)).unwrap().hp, 5);
    assert!(original.unit_at(Square::at(7, 4)).is_some());
}

#[test]
fn test_queen_cooldowns() {
    let mut b = Board::standard();
    b.unit_at_mut(Square::at(0, 3)).unwrap().special_cooldown = 2;
    let mut cds = b.queen_cooldowns();
    cds.sort_by_key(|(side, _, _)| side.idx());
    assert_eq!(
        cds,
        vec![
            (Side::First, Square::at(7, 3), 0),
            (Side::Second, Square::at(0, 3), 2),
        ]
    );
}

#[test]
fn test_square_names() {
    assert_eq!(Square::parse("e2").unwrap(), Square::at(6, 4));
    assert_eq!(Square::at(0, 0).name(), "a8");
    assert_eq!(Square::at(7, 7).to_string(), "h1");
    assert!(Square::parse("i9").is_err());
    assert!(Square::new(8, 0).is_none());
    assert!(Square::at(0, 0).offset(-1, 0).is_none());
}
