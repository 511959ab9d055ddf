use std::{
    fmt,
    io::{self, BufRead, Write},
    process,
};

use anyhow::{anyhow, Context};
use clap::{App, Arg};
use once_cell::sync::Lazy;
use rand::{rngs::StdRng, SeedableRng};
use regex::Regex;
use tracing_subscriber::EnvFilter;

use flotilla::{
    board::{
        CannotShootReason, CellSymbol, Coordinate, Dimensions, ShotOutcome, MAX_COLS,
    },
    game::Game,
    ships::ShipClass,
};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let matches = App::new("Battleship")
        .version("0.1")
        .about("Single-player command line battleship: call out coordinates until the hidden fleet is sunk.")
        .arg(
            Arg::with_name("rows")
                .long("rows")
                .value_name("ROWS")
                .help("number of rows on the grid")
                .takes_value(true)
                .default_value("9"),
        )
        .arg(
            Arg::with_name("cols")
                .long("cols")
                .value_name("COLS")
                .help("number of columns on the grid (at most 26)")
                .takes_value(true)
                .default_value("9"),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .value_name("SEED")
                .help("fix the RNG seed for a reproducible fleet")
                .takes_value(true),
        )
        .get_matches();

    let rows = matches
        .value_of("rows")
        .unwrap()
        .parse()
        .context("--rows must be a number")?;
    let cols = matches
        .value_of("cols")
        .unwrap()
        .parse()
        .context("--cols must be a number")?;
    let dim = Dimensions::try_new(rows, cols).ok_or_else(|| {
        anyhow!(
            "invalid grid {}x{}: rows and columns must be nonzero, with at most {} columns",
            rows,
            cols,
            MAX_COLS
        )
    })?;

    let mut rng = match matches.value_of("seed") {
        Some(seed) => StdRng::seed_from_u64(seed.parse().context("--seed must be a number")?),
        None => StdRng::from_entropy(),
    };
    let mut game = Game::random(dim, &mut rng)?;

    let stdin = io::stdin();
    let mut input = InputReader::new(stdin.lock());

    while !game.has_ended() {
        clear_screen();
        show_fog_board(&game);
        show_status(&game);
        take_turn(&mut game, &mut input)?;
    }

    clear_screen();
    show_revealed_board(&game);
    show_status(&game);
    println!(
        "Congratulations! You sank all the ships in {} turns.",
        game.turns()
    );
    Ok(())
}

/// A line of input, already classified: either a move to fire at, or a
/// request to stop playing. Quitting is handled here in the input layer and
/// carried up to the main loop; the game itself never exits the process.
enum Command {
    Fire(Coordinate),
    Quit,
}

/// Run one turn: read moves until the game accepts one, printing the
/// rejection reason each time it does not. Invalid input never changes the
/// game, so re-prompting is always safe.
fn take_turn(game: &mut Game, input: &mut InputReader<impl BufRead>) -> io::Result<()> {
    loop {
        match read_move(input, game.dimensions())? {
            Command::Quit => process::exit(0),
            Command::Fire(coord) => match game.fire(coord) {
                Ok(_) => return Ok(()),
                Err(err) => match err.reason() {
                    CannotShootReason::OutOfRange { .. } => show_invalid_move(game.dimensions()),
                    CannotShootReason::AlreadyShot => {
                        println!("Move {} was already made. Pick another.", err.coord());
                    }
                },
            },
        }
    }
}

/// Read one command, re-prompting until the line is a quit token or shaped
/// like a coordinate. Range and duplicate checking is the game's call, not
/// the input layer's.
fn read_move(input: &mut InputReader<impl BufRead>, dim: Dimensions) -> io::Result<Command> {
    /// Matcher for move tokens: a column letter then a row number, with
    /// optional whitespace between.
    static MOVE: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^(?P<col>[a-z])\s*(?P<row>[0-9]+)$").unwrap());

    input.read_input_lower("Choose your next move:", |line| match line {
        "quit" | "exit" => Some(Command::Quit),
        other => match MOVE.captures(other) {
            Some(caps) => match format!("{}{}", &caps["col"], &caps["row"]).parse() {
                Ok(coord) => Some(Command::Fire(coord)),
                Err(_) => {
                    show_invalid_move(dim);
                    None
                }
            },
            None => {
                show_invalid_move(dim);
                None
            }
        },
    })
}

fn show_invalid_move(dim: Dimensions) {
    println!(
        "Invalid move. A move consists of a letter and a number, like B2, with a minimum of {} and a maximum of {}.",
        dim.first(),
        dim.last()
    );
}

/// Print the result of the previous turn.
fn show_status(game: &Game) {
    match (game.moves().last(), game.last_outcome()) {
        (Some(last), Some(outcome)) => {
            match outcome {
                ShotOutcome::Miss => println!("Splash!"),
                ShotOutcome::Hit(_) => println!("Kaboooom!"),
                ShotOutcome::Sunk(ship) | ShotOutcome::Victory(ship) => {
                    println!("Kaboooom!");
                    println!("{} has sunk!", ship);
                }
            }
            println!("Last move: {}", last);
        }
        _ => println!(),
    }
}

/// Print the player's view of the grid while the game is running. Intact
/// ship cells draw exactly like open water; the fleet only shows where it
/// has been hit.
fn show_fog_board(game: &Game) {
    enum FogCell {
        Unknown,
        Miss,
        Hit,
    }
    impl fmt::Display for FogCell {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            match self {
                FogCell::Unknown => f.pad("·"),
                FogCell::Miss => f.pad("o"),
                FogCell::Hit => f.pad("X"),
            }
        }
    }
    show_board(
        game.dimensions(),
        game.iter_board().map(|row| {
            row.map(|sym| match sym {
                CellSymbol::Empty | CellSymbol::Ship(_) => FogCell::Unknown,
                CellSymbol::Miss => FogCell::Miss,
                CellSymbol::Hit(_) => FogCell::Hit,
            })
        }),
    );
}

/// Print the grid with ship positions revealed, for the end-of-game
/// summary.
fn show_revealed_board(game: &Game) {
    enum RevealedCell {
        Empty,
        Miss,
        Intact(ShipClass),
        Hit,
    }
    impl fmt::Display for RevealedCell {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            match self {
                RevealedCell::Empty => f.pad("·"),
                RevealedCell::Miss => f.pad("o"),
                RevealedCell::Intact(ship) => fmt::Display::fmt(&ShipAbbreviation(*ship), f),
                RevealedCell::Hit => f.pad("X"),
            }
        }
    }
    show_board(
        game.dimensions(),
        game.iter_board().map(|row| {
            row.map(|sym| match sym {
                CellSymbol::Empty => RevealedCell::Empty,
                CellSymbol::Ship(ship) => RevealedCell::Intact(ship),
                CellSymbol::Hit(_) => RevealedCell::Hit,
                CellSymbol::Miss => RevealedCell::Miss,
            })
        }),
    );
}

/// Show the board by printing the grid. Takes an iterator over the rows of
/// iterators over the cells.
fn show_board(
    dim: Dimensions,
    rows: impl Iterator<Item = impl Iterator<Item = impl fmt::Display>>,
) {
    print!("   ");
    for col in 0..dim.cols() {
        print!("{:^3}", (b'A' + col as u8) as char);
    }
    println!();
    for (row, cells) in rows.enumerate() {
        print!("{:>2} ", row + 1);
        for cell in cells {
            print!("{:^3}", cell);
        }
        println!();
    }
}

/// Clear the terminal and park the cursor at the top left.
fn clear_screen() {
    print!("\x1b[2J\x1b[1;1H");
}

/// Display helper that prints the ship's type abbreviation.
struct ShipAbbreviation(ShipClass);

impl ShipAbbreviation {
    fn abbrev(&self) -> &'static str {
        match self.0 {
            ShipClass::Carrier => "cv",
            ShipClass::Battleship => "bb",
            ShipClass::Cruiser => "cl",
            ShipClass::Submarine => "ss",
            ShipClass::Destroyer => "dd",
        }
    }
}

impl fmt::Display for ShipAbbreviation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.abbrev())
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
    /// Repeatedly tries to read input until the input checker returns
    /// `Some`. Converts to ascii lower before running the checker.
    fn read_input_lower<F, T>(&mut self, prompt: &str, mut checker: F) -> io::Result<T>
    where
        F: FnMut(&str) -> Option<T>,
    {
        loop {
            self.read_input_inner(prompt)?;
            self.buf.make_ascii_lowercase();
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
            process::exit(0);
        }
        Ok(())
    }
}
