//! Console printers for fleets.
use std::io::{self, Write};

use armada::{Fleet, Ship};

/// Write each ship on its own line.
pub fn print_ships<'a, W, I>(out: &mut W, ships: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Ship>,
{
    for ship in ships {
        writeln!(out, "{}", ship)?;
    }
    Ok(())
}

/// Write every ship in the fleet.
pub fn print_all_ships<W: Write>(out: &mut W, fleet: &Fleet) -> io::Result<()> {
    print_ships(out, fleet.ships())
}

/// Write the ships that are still floating.
pub fn print_floating_ships<W: Write>(out: &mut W, fleet: &Fleet) -> io::Result<()> {
    print_ships(out, fleet.floating_ships())
}

/// Write the ships of the given category.
pub fn print_ships_by_category<W: Write>(
    out: &mut W,
    fleet: &Fleet,
    category: &str,
) -> io::Result<()> {
    print_ships(out, fleet.ships_like(category))
}

/// Write a summary of the fleet: every ship, the floating ones, and a count per kind.
pub fn print_status<W: Write>(out: &mut W, fleet: &Fleet) -> io::Result<()> {
    writeln!(out, "All ships ({}):", fleet.len())?;
    print_all_ships(out, fleet)?;
    writeln!(out, "Floating ships ({}):", fleet.floating_ships().len())?;
    print_floating_ships(out, fleet)?;
    for &kind in armada::ShipKind::ALL {
        let ships = fleet.ships_like(kind.category());
        if !ships.is_empty() {
            let afloat = ships.iter().filter(|ship| ship.still_floating()).count();
            writeln!(out, "{:>9}: {} of {} afloat", kind, afloat, ships.len())?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use armada::{Compass, Position, ShipKind};

    use super::*;

    fn fleet() -> Fleet {
        let mut fleet = Fleet::new();
        assert!(fleet.add_ship(Ship::new(ShipKind::Galleon, Compass::North, Position::new(1, 1))));
        assert!(fleet.add_ship(Ship::new(ShipKind::Barge, Compass::South, Position::new(8, 8))));
        fleet
    }

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn prints_each_ship() {
        let fleet = fleet();
        let text = render(|out| print_all_ships(out, &fleet));
        assert_eq!(text.lines().count(), 2);
        assert!(text.contains("Galeao"));
        assert!(text.contains("Barca"));
    }

    #[test]
    fn prints_by_category() {
        let fleet = fleet();
        let text = render(|out| print_ships_by_category(out, &fleet, "Barca"));
        assert_eq!(text.trim(), fleet.ships()[1].to_string());
        assert!(render(|out| print_ships_by_category(out, &fleet, "Nau")).is_empty());
    }

    #[test]
    fn status_skips_sunk_ships_in_floating_list() {
        let mut fleet = fleet();
        fleet.shoot(&(8, 8));
        let text = render(|out| print_floating_ships(out, &fleet));
        assert!(!text.contains("Barca"));
        let status = render(|out| print_status(out, &fleet));
        assert!(status.contains("Floating ships (1):"));
        assert!(status.contains("Barca: 0 of 1 afloat"));
    }
}
