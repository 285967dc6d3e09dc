use armada::{build_ship, CannotPlaceReason, Compass, Edge, Fleet, Position, Rules, Ship, ShipKind};

#[test]
fn caravel_north_layout() {
    let ship = Ship::new(ShipKind::Caravel, Compass::North, Position::new(3, 5));
    assert_eq!(ship.positions(), &[Position::new(3, 5), Position::new(4, 5)][..]);
    assert_eq!(ship.size(), 2);
}

#[test]
fn galleon_north_layout() {
    let ship = Ship::new(ShipKind::Galleon, Compass::North, Position::new(2, 3));
    let expected: Vec<Position> = vec![(2, 3), (2, 4), (2, 5), (3, 4), (4, 4)]
        .into_iter()
        .map(Position::from)
        .collect();
    assert_eq!(ship.positions(), &expected[..]);
}

#[test]
fn barge_left_of_board_is_rejected() {
    let mut fleet = Fleet::with_rules(Rules::new(10, 10));
    let barge = build_ship("barca", Compass::North, Position::new(0, -1)).unwrap();
    let err = fleet.try_add_ship(barge).unwrap_err();
    assert_eq!(err.reason(), CannotPlaceReason::OutOfBounds(Edge::Left.into()));
    assert!(fleet.is_empty());
}

#[test]
fn ship_next_to_barge_is_rejected() {
    let mut fleet = Fleet::new();
    assert!(fleet.add_ship(build_ship("barca", Compass::North, Position::new(5, 5)).unwrap()));
    let frigate = build_ship("fragata", Compass::East, Position::new(5, 6)).unwrap();
    assert!(!fleet.add_ship(frigate));
    assert_eq!(fleet.len(), 1);
}

#[test]
fn unknown_kind_builds_nothing() {
    assert!(build_ship("cargueiro", Compass::East, Position::new(1, 1)).is_none());
}

#[test]
fn second_shot_on_same_cell_does_not_sink() {
    let mut fleet = Fleet::new();
    assert!(fleet.add_ship(Ship::new(ShipKind::Caravel, Compass::North, Position::new(3, 5))));
    fleet.shoot(&(3, 5));
    let caravel = fleet.shoot(&(3, 5)).unwrap();
    assert!(caravel.still_floating());
    assert_eq!(fleet.floating_ships().len(), 1);
}

#[test]
fn shots_route_to_the_ship_at_the_cell() {
    let mut fleet = Fleet::new();
    assert!(fleet.add_ship(Ship::new(ShipKind::Frigate, Compass::South, Position::new(0, 0))));
    assert!(fleet.add_ship(Ship::new(ShipKind::Carrack, Compass::West, Position::new(0, 4))));
    assert_eq!(
        fleet.shoot(&(2, 0)).map(Ship::category),
        Some(ShipKind::Frigate.category())
    );
    assert_eq!(fleet.shoot(&(0, 6)).map(Ship::category), Some("Nau"));
    let hits: Vec<bool> = fleet.ships()[1].positions().iter().map(Position::is_hit).collect();
    assert_eq!(hits, vec![false, false, true]);
}

#[test]
fn standard_fleet_can_be_laid_out_by_hand() {
    let mut fleet = Fleet::new();
    let layout: [(&str, Compass, (i32, i32)); 10] = [
        ("galeao", Compass::North, (0, 0)),
        ("fragata", Compass::South, (0, 9)),
        ("nau", Compass::East, (4, 0)),
        ("nau", Compass::East, (4, 4)),
        ("caravela", Compass::North, (6, 0)),
        ("caravela", Compass::North, (6, 3)),
        ("caravela", Compass::North, (6, 6)),
        ("barca", Compass::Unknown, (9, 0)),
        ("barca", Compass::Unknown, (9, 4)),
        ("barca", Compass::Unknown, (9, 9)),
    ];
    for &(kind, bearing, anchor) in &layout {
        let ship = build_ship(kind, bearing, anchor.into()).unwrap();
        assert!(fleet.add_ship(ship), "{} at {:?}", kind, anchor);
    }
    assert_eq!(fleet.len(), 10);
    assert!(!fleet.add_ship(build_ship("barca", Compass::North, Position::new(2, 6)).unwrap()));
}
