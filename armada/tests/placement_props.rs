use armada::{Compass, Fleet, Position, Rules, Ship, ShipKind};
use proptest::prelude::*;

fn kind() -> impl Strategy<Value = ShipKind> {
    prop::sample::select(ShipKind::ALL.to_vec())
}

fn bearing() -> impl Strategy<Value = Compass> {
    prop::sample::select(Compass::BEARINGS.to_vec())
}

fn any_ship() -> impl Strategy<Value = Ship> {
    (kind(), bearing(), -2..12i32, -2..12i32).prop_map(|(kind, bearing, row, column)| {
        Ship::new(kind, bearing, Position::new(row, column))
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn size_matches_positions(ship in any_ship()) {
        prop_assert_eq!(ship.size(), ship.positions().len());
    }

    #[test]
    fn floating_until_every_cell_is_shot(
        mut ship in any_ship(),
        order in any::<prop::sample::Index>()
    ) {
        let mut cells: Vec<Position> = ship.positions().to_vec();
        let first = order.index(cells.len());
        cells.rotate_left(first);
        let (last, rest) = cells.split_last().unwrap();
        for cell in rest {
            ship.shoot(cell);
            prop_assert!(ship.still_floating());
        }
        ship.shoot(last);
        prop_assert!(!ship.still_floating());
    }

    #[test]
    fn occupies_matches_coordinates(ship in any_ship(), row in -3..14i32, column in -3..14i32) {
        let expected = ship.positions().iter().any(|p| p.row() == row && p.column() == column);
        prop_assert_eq!(ship.occupies(&(row, column)), expected);
    }

    #[test]
    fn too_close_is_symmetric(a in any_ship(), b in any_ship()) {
        prop_assert_eq!(a.too_close_to_ship(&b), b.too_close_to_ship(&a));
    }

    #[test]
    fn rejected_add_leaves_fleet_unchanged(ships in prop::collection::vec(any_ship(), 1..15)) {
        let mut fleet = Fleet::with_rules(Rules::new(10, 6));
        for ship in ships {
            let before: Vec<String> = fleet.ships().iter().map(ToString::to_string).collect();
            if !fleet.add_ship(ship) {
                let after: Vec<String> = fleet.ships().iter().map(ToString::to_string).collect();
                prop_assert_eq!(before, after);
            }
        }
        prop_assert!(fleet.len() <= 6);
    }

    #[test]
    fn accepted_ships_are_inside_and_apart(ships in prop::collection::vec(any_ship(), 1..15)) {
        let mut fleet = Fleet::new();
        for ship in ships {
            fleet.add_ship(ship);
        }
        let placed = fleet.ships();
        for (i, a) in placed.iter().enumerate() {
            prop_assert!(a.positions().iter().all(|p| fleet.rules().contains(p)));
            for b in &placed[i + 1..] {
                prop_assert!(!a.too_close_to_ship(b));
            }
        }
    }
}
