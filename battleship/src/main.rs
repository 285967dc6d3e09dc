use std::{
    collections::HashSet,
    fmt,
    io::{self, BufRead, Write},
};

use clap::{App, Arg, ArgMatches};
use log::{info, warn};
use once_cell::sync::Lazy;
use rand::{rngs::StdRng, Rng, SeedableRng};
use regex::Regex;

use armada::{
    fleet::random_anchor, CannotPlaceReason, Compass, Fleet, Position, RandomPlacementError,
    Rules, Ship, ShipKind, BOARD_SIZE, FLEET_SIZE, STANDARD_FLEET,
};

mod logging;
mod report;

/// Placement attempts per ship before a random layout is started over.
const RANDOM_ATTEMPTS: usize = 1000;
/// Times a random layout is started over before giving up.
const RANDOM_RESTARTS: usize = 50;

/// Matcher for the placement command.
static PLACE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?x)(?:place|put)\s+
    (?P<ship>\w+)\s+
    (?:(?:at|on|to|->|=>)\s+)?
    (?P<row>-?[0-9]+)(?:\s*,\s*|\s+)(?P<column>-?[0-9]+)\s+
    (?P<dir>\w+)$",
    )
    .unwrap()
});
/// Matcher for the category listing. Only the command word ignores case.
static CATEGORY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?i:category|cat)\s+(?P<name>\w+)$").unwrap());

fn main() -> io::Result<()> {
    logging::init_logging();
    let matches = App::new("Battleship")
        .version("1.0")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Command line naval battle against a random bot.")
        .arg(
            Arg::with_name("board_size")
                .short("b")
                .long("board-size")
                .value_name("SIZE")
                .help("number of rows and columns on each board")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("fleet_size")
                .short("f")
                .long("fleet-size")
                .value_name("SHIPS")
                .help("maximum number of ships per fleet")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("random")
                .short("r")
                .long("random")
                .help("place your own fleet randomly"),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .value_name("SEED")
                .help("seed for the random number generator")
                .takes_value(true),
        )
        .get_matches();

    let rules = match parse_rules(&matches) {
        Ok(rules) => rules,
        Err(msg) => {
            eprintln!("{}", msg);
            std::process::exit(2);
        }
    };
    let mut rng = match matches.value_of("seed").map(str::parse::<u64>) {
        Some(Ok(seed)) => StdRng::seed_from_u64(seed),
        Some(Err(_)) => {
            eprintln!("--seed must be a non-negative integer");
            std::process::exit(2);
        }
        None => StdRng::from_entropy(),
    };
    info!("playing with {:?}", rules);

    let stdin = io::stdin();
    let mut input = InputReader::new(stdin.lock());

    let player = if matches.is_present("random") {
        random_fleet(&mut rng, rules).unwrap_or_else(|err| fail_random_layout(err))
    } else {
        choose_placements(&mut rng, rules, &mut input)?
    };
    let bot = random_fleet(&mut rng, rules).unwrap_or_else(|err| fail_random_layout(err));
    play(&mut rng, player, bot, &mut input)
}

/// Report a board that cannot hold a random layout and exit.
fn fail_random_layout(err: RandomPlacementError) -> ! {
    eprintln!("cannot lay out a fleet on this board: {}", err);
    std::process::exit(2);
}

/// Build the [`Rules`] from the command line, falling back to the defaults.
fn parse_rules(matches: &ArgMatches) -> Result<Rules, String> {
    let board_size = match matches.value_of("board_size") {
        Some(v) => v
            .parse()
            .map_err(|_| format!("invalid board size {:?}", v))?,
        None => BOARD_SIZE,
    };
    let fleet_size = match matches.value_of("fleet_size") {
        Some(v) => v
            .parse()
            .map_err(|_| format!("invalid fleet size {:?}", v))?,
        None => FLEET_SIZE,
    };
    Rules::try_new(board_size, fleet_size)
        .ok_or_else(|| "board and fleet size must be positive".to_owned())
}

/// Ships still to be placed: the standard fleet, cut to the fleet size, minus what is
/// already in the fleet.
fn pending_ships(fleet: &Fleet) -> Vec<ShipKind> {
    let mut pending: Vec<ShipKind> = STANDARD_FLEET
        .iter()
        .copied()
        .take(fleet.rules().fleet_size())
        .collect();
    for kind in fleet.ships().iter().filter_map(Ship::kind) {
        if let Some(idx) = pending.iter().position(|&p| p == kind) {
            pending.remove(idx);
        }
    }
    pending
}

/// Randomly place every pending ship, starting over whenever a ship cannot fit. After
/// too many restarts the fleet is left as it was and the last failure is returned.
fn fill_randomly(rng: &mut impl Rng, fleet: &mut Fleet) -> Result<(), RandomPlacementError> {
    let start = fleet.clone();
    let mut last_err = RandomPlacementError::FleetFull;
    for _ in 0..RANDOM_RESTARTS {
        let mut failed = None;
        for kind in pending_ships(fleet) {
            match fleet.place_random(rng, kind, RANDOM_ATTEMPTS) {
                Ok(_) => {}
                Err(RandomPlacementError::FleetFull) => break,
                Err(err) => {
                    warn!("{}, starting over", err);
                    failed = Some(err);
                    break;
                }
            }
        }
        match failed {
            None => return Ok(()),
            Some(err) => last_err = err,
        }
        *fleet = start.clone();
    }
    Err(last_err)
}

/// Build a complete fleet with random placements.
fn random_fleet(rng: &mut impl Rng, rules: Rules) -> Result<Fleet, RandomPlacementError> {
    let mut fleet = Fleet::with_rules(rules);
    fill_randomly(rng, &mut fleet)?;
    Ok(fleet)
}

/// Choose placements for all ships using input from the player.
fn choose_placements(
    rng: &mut impl Rng,
    rules: Rules,
    input: &mut InputReader<impl BufRead>,
) -> io::Result<Fleet> {
    enum Command {
        Done,
        Place(ShipKind, Position, Compass),
        Clear,
        RandomizeRest,
        Status,
        Category(String),
        Help,
    }

    let mut fleet = Fleet::with_rules(rules);
    let mut out = io::stdout();
    println!();
    println!("Place ships. Type help or ? for commands.");
    loop {
        println!();
        let pending = pending_ships(&fleet);
        if pending.is_empty() {
            println!("All ships placed, type done to start the game");
        } else {
            let names: Vec<String> = pending.iter().map(ToString::to_string).collect();
            println!("Remaining ships to place: {}", names.join(", "));
        }
        println!("Your current board setup:");
        show_revealed_board(&fleet);
        println!();

        let cmd = input.read_input("> ", |input| match input.to_ascii_lowercase().as_str() {
            "?" | "help" | "h" => Some(Command::Help),
            "randomize" | "rand" | "random" => Some(Command::RandomizeRest),
            "done" | "start" => Some(Command::Done),
            "clear" => Some(Command::Clear),
            "status" => Some(Command::Status),
            other => {
                if let Some(captures) = CATEGORY.captures(input) {
                    return Some(Command::Category(captures["name"].to_owned()));
                }
                let captures = match PLACE.captures(other) {
                    Some(captures) => captures,
                    None => {
                        println!("Invalid ship-placement command \"{}\". Use '?' for help", other);
                        return None;
                    }
                };
                let kind = match captures["ship"].parse::<ShipKind>() {
                    Ok(kind) => kind,
                    Err(err) => {
                        println!("{}", err);
                        return None;
                    }
                };
                let (row, column) = match (captures["row"].parse(), captures["column"].parse()) {
                    (Ok(row), Ok(column)) => (row, column),
                    _ => {
                        println!("invalid coordinates, expected <row>,<column>");
                        return None;
                    }
                };
                let bearing = match captures["dir"].parse::<Compass>() {
                    Ok(bearing) => bearing,
                    Err(err) => {
                        println!("{}", err);
                        return None;
                    }
                };
                Some(Command::Place(kind, Position::new(row, column), bearing))
            }
        })?;

        match cmd {
            Command::Done if pending.is_empty() => break,
            Command::Done => println!("You must place all your ships first!"),
            Command::Place(kind, _, _) if !pending.contains(&kind) => {
                println!("No {} left to place.", kind);
            }
            Command::Place(kind, anchor, bearing) => {
                let ship = Ship::new(kind, bearing, anchor);
                match fleet.try_add_ship(ship) {
                    Ok(()) => {}
                    Err(err) => match err.reason() {
                        CannotPlaceReason::OutOfBounds(edges) => {
                            println!("Invalid placement: crosses the board edge {:?}.", edges);
                        }
                        CannotPlaceReason::TooClose(idx) => {
                            println!(
                                "Invalid placement: too close to {}.",
                                fleet.ships()[idx]
                            );
                        }
                        CannotPlaceReason::FleetFull => println!("Your fleet is full."),
                    },
                }
            }
            Command::Clear => fleet = Fleet::with_rules(rules),
            Command::RandomizeRest => {
                if let Err(err) = fill_randomly(rng, &mut fleet) {
                    println!("Could not place the remaining ships: {}", err);
                }
            }
            Command::Status => report::print_status(&mut out, &fleet)?,
            Command::Category(name) => report::print_ships_by_category(&mut out, &fleet, &name)?,
            Command::Help => {
                println!(
                    "Available Commands:
    done                           if all ships are placed, start the game.
    place <ship> <row>,<col> <dir> place the ship with its anchor at the given cell.
        Directions are n, s, e, o (or north, south, east, west). See below for ships.
    clear                          clears all ship placements.
    randomize                      randomize the placements of the remaining ships.
    status                         list your ships.
    category <name>                list your ships of one category, e.g. Nau.

Available Ships:
    barca     1 cell
    caravela  2 cells in a line
    nau       3 cells in a line
    fragata   4 cells in a line
    galeao    5 cells in a cross",
                );
            }
        }
    }
    Ok(fleet)
}

/// Result of a single shot, for reporting.
enum Outcome {
    Miss,
    Hit(String),
    Sunk(String),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Outcome::Miss => f.write_str("miss"),
            Outcome::Hit(category) => write!(f, "hit a {}", category),
            Outcome::Sunk(category) => write!(f, "sunk a {}", category),
        }
    }
}

/// Fire at a fleet, recording the shot.
fn fire(fleet: &mut Fleet, shots: &mut HashSet<Position>, target: Position) -> Outcome {
    shots.insert(target);
    match fleet.shoot(&target) {
        None => Outcome::Miss,
        Some(ship) if ship.still_floating() => Outcome::Hit(ship.category().to_owned()),
        Some(ship) => Outcome::Sunk(ship.category().to_owned()),
    }
}

/// Alternate shots between the player and the bot until one fleet is sunk.
fn play(
    rng: &mut impl Rng,
    mut player: Fleet,
    mut bot: Fleet,
    input: &mut InputReader<impl BufRead>,
) -> io::Result<()> {
    static SHOT: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"^(?:(?:shoot|fire)\s+)?(?P<row>[0-9]+)(?:\s*,\s*|\s+)(?P<column>[0-9]+)$")
            .unwrap()
    });
    let mut player_shots = HashSet::new();
    let mut bot_shots = HashSet::new();
    let mut out = io::stdout();

    loop {
        println!();
        println!("Enemy waters:");
        show_obfuscated_board(&bot, &player_shots);
        println!("Your fleet:");
        show_revealed_board(&player);
        println!();

        let target = input.read_input("fire at <row>,<col>> ", |input| {
            if input.eq_ignore_ascii_case("status") {
                if let Err(err) = report::print_status(&mut out, &player) {
                    warn!("could not print status: {}", err);
                }
                return None;
            }
            let captures = match SHOT.captures(input) {
                Some(captures) => captures,
                None => {
                    println!("Expected a target like 3,4 (or status)");
                    return None;
                }
            };
            let target = match (captures["row"].parse(), captures["column"].parse()) {
                (Ok(row), Ok(column)) => Position::new(row, column),
                _ => {
                    println!("invalid coordinates");
                    return None;
                }
            };
            if !bot.rules().contains(&target) {
                println!("{} is off the board", target);
                None
            } else if player_shots.contains(&target) {
                println!("You already fired at {}", target);
                None
            } else {
                Some(target)
            }
        })?;

        println!("You {}.", fire(&mut bot, &mut player_shots, target));
        if bot.all_sunk() {
            show_obfuscated_board(&bot, &player_shots);
            println!("You sank the enemy fleet. Victory!");
            return Ok(());
        }

        let target = loop {
            let target = random_anchor(rng, player.rules());
            if !bot_shots.contains(&target) {
                break target;
            }
        };
        println!(
            "The enemy fires at {},{} and {}.",
            target.row(),
            target.column(),
            fire(&mut player, &mut bot_shots, target)
        );
        if player.all_sunk() {
            show_revealed_board(&player);
            println!("Your fleet was sunk. Defeat!");
            println!("The enemy fleet was:");
            report::print_all_ships(&mut out, &bot)?;
            return Ok(());
        }
    }
}

/// Two-letter abbreviation for a ship's category.
fn abbrev(ship: &Ship) -> &'static str {
    match ship.kind() {
        Some(ShipKind::Barge) => "ba",
        Some(ShipKind::Caravel) => "cv",
        Some(ShipKind::Carrack) => "na",
        Some(ShipKind::Frigate) => "fr",
        Some(ShipKind::Galleon) => "ga",
        None => "??",
    }
}

/// Print out the fully-revealed board for the given fleet.
fn show_revealed_board(fleet: &Fleet) {
    enum RevealedCell {
        Empty,
        NotShot(&'static str),
        Hit(&'static str),
        Sunk(&'static str),
    }
    impl fmt::Display for RevealedCell {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            match self {
                RevealedCell::Empty => f.pad("~~"),
                RevealedCell::NotShot(abbrev) => f.pad(abbrev),
                RevealedCell::Hit(abbrev) => f.pad(&format!("x{}", abbrev)),
                RevealedCell::Sunk(abbrev) => f.pad(&format!("X{}", abbrev)),
            }
        }
    }
    show_board(fleet.rules(), |pos| match fleet.ship_at(pos) {
        None => RevealedCell::Empty,
        Some(ship) if !ship.still_floating() => RevealedCell::Sunk(abbrev(ship)),
        Some(ship) if ship.positions().iter().any(|p| p == pos && p.is_hit()) => {
            RevealedCell::Hit(abbrev(ship))
        }
        Some(ship) => RevealedCell::NotShot(abbrev(ship)),
    })
}

/// Print out the obfuscated board for the given fleet.
fn show_obfuscated_board(fleet: &Fleet, shots: &HashSet<Position>) {
    enum HiddenCell {
        NotShot,
        Miss,
        Hit,
        Sunk(&'static str),
    }
    impl fmt::Display for HiddenCell {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            match self {
                HiddenCell::NotShot => f.pad("~~"),
                HiddenCell::Miss => f.pad("x"),
                HiddenCell::Hit => f.pad("X"),
                HiddenCell::Sunk(abbrev) => f.pad(&format!("X{}", abbrev)),
            }
        }
    }
    show_board(fleet.rules(), |pos| match fleet.ship_at(pos) {
        _ if !shots.contains(pos) => HiddenCell::NotShot,
        None => HiddenCell::Miss,
        Some(ship) if ship.still_floating() => HiddenCell::Hit,
        Some(ship) => HiddenCell::Sunk(abbrev(ship)),
    })
}

/// Show the board by printing the grid, rendering each cell with `cell`.
fn show_board<D: fmt::Display>(rules: &Rules, mut cell: impl FnMut(&Position) -> D) {
    print!("   ");
    for i in 0..rules.board_size() {
        print!("{:^4}", i);
    }
    println!();
    for (i, row) in rules.iter_coordinates().enumerate() {
        print!("{:>2} ", i);
        for pos in row {
            print!("{:^4}", cell(&pos));
        }
        println!();
    }
}

/// Helper to read input from the player.
struct InputReader<B> {
    read: B,
    buf: String,
}

impl<B> InputReader<B> {
    fn new(read: B) -> Self {
        Self {
            read,
            buf: String::new(),
        }
    }
}

impl<B: BufRead> InputReader<B> {
    /// Repeatedly tries to read input until the input checker returns `Some`.
    fn read_input<F, T>(&mut self, prompt: &str, mut checker: F) -> io::Result<T>
    where
        F: FnMut(&str) -> Option<T>,
    {
        loop {
            self.read_input_inner(prompt)?;
            if let Some(val) = checker(self.buf.trim()) {
                return Ok(val);
            }
        }
    }

    /// Helper to print the prompt, clear the string buffer and read a line.
    fn read_input_inner(&mut self, prompt: &str) -> io::Result<()> {
        print!("{} ", prompt);
        io::stdout().flush()?;
        self.buf.clear();
        if self.read.read_line(&mut self.buf)? == 0 {
            println!();
            std::process::exit(0);
        }
        Ok(())
    }
}
