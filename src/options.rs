use std::str::FromStr;

use torolife::Pos2;
use tracing::warn;

use crate::speed::Speed;

const USAGE: &str = "usage: torolife [options]";
/// Grid side used when not in console mode and no size is given
const DEFAULT_GRID_SIZE: i32 = 100;

pub struct Args {
    matches: getopts::Matches,
}

impl Args {
    fn options() -> getopts::Options {
        let mut opts = getopts::Options::new();
        opts.optflag("", "help", "print this help menu");
        opts.optflag("c", "console", "run in console mode");
        opts.optopt("o", "output", "write the final pattern to a file", "FILE");
        opts.optopt("i", "input", "load a pattern file", "FILE");
        opts.optopt("x", "origin-x", "column the pattern is loaded at", "X");
        opts.optopt("y", "origin-y", "row the pattern is loaded at", "Y");
        opts.optopt("w", "width", "set grid width", "WIDTH");
        opts.optopt("h", "height", "set grid height", "HEIGHT");
        opts.optopt("f", "fill", "fill used without an input file", "TYPE");
        opts.optopt("s", "speed", "simulation speed from 0 to 100", "SPEED");
        opts.optopt("g", "gens", "max number of generations", "COUNT");
        opts.optopt("", "stats", "write stats csv to file", "FILE");
        opts
    }

    /// Parses the arguments, returning `None` when the program should not run
    fn new<T: AsRef<str>>(args: &[T]) -> Option<Self> {
        let opts = Self::options();
        let matches = match opts.parse(args.iter().map(T::as_ref)) {
            Ok(matches) => matches,
            Err(err) => {
                eprintln!("{}\n{}", err, opts.usage(USAGE));
                return None;
            }
        };
        if matches.opt_present("help") {
            println!("{}", opts.usage(USAGE));
            None
        } else {
            Some(Self { matches })
        }
    }
    pub fn from_env() -> Option<Self> {
        let env = std::env::args().collect::<Vec<_>>();
        Self::new(&env[1..])
    }

    /// Reads a numeric option, ignoring (and reporting) values that don't parse
    fn number<N: FromStr>(&self, name: &str) -> Option<N> {
        let value = self.matches.opt_str(name)?;
        match value.parse() {
            Ok(n) => Some(n),
            Err(_) => {
                warn!(option = name, value = %value, "ignoring invalid number");
                None
            }
        }
    }

    pub fn console(&self) -> bool {
        self.matches.opt_present("console")
    }

    pub fn generations(&self) -> u64 {
        self.number("gens").unwrap_or(u64::MAX) // kinda hacky way of saying "infinity"
    }
    /// The requested speed; console mode always throttles
    pub fn speed(&self) -> Option<Speed> {
        match self.number::<u8>("speed") {
            Some(speed) => Some(Speed::new(speed)),
            None if self.console() => Some(Speed::default()),
            None => None,
        }
    }

    pub fn grid_size(&self) -> (i32, i32) {
        let default = if self.console() {
            match crossterm::terminal::size() {
                // leave the bottom row for the dashboard
                Ok((cols, rows)) => (cols as i32, rows.saturating_sub(1).max(1) as i32),
                Err(err) => {
                    warn!(%err, "couldn't read terminal size");
                    (DEFAULT_GRID_SIZE, DEFAULT_GRID_SIZE)
                }
            }
        } else {
            (DEFAULT_GRID_SIZE, DEFAULT_GRID_SIZE)
        };

        (
            self.number("width").unwrap_or(default.0),
            self.number("height").unwrap_or(default.1),
        )
    }
    pub fn origin(&self) -> Pos2 {
        Pos2 {
            x: self.number("origin-x").unwrap_or(0),
            y: self.number("origin-y").unwrap_or(0),
        }
    }
    pub fn fill_mode(&self) -> FillMode {
        let mode_str = self.matches.opt_str("fill");
        let mode_str = mode_str.as_deref().unwrap_or("random");
        FillMode::new(mode_str).unwrap_or_else(|| {
            warn!(fill = mode_str, "unknown fill mode, using random");
            FillMode::Random
        })
    }

    pub fn output_file(&self) -> Option<String> {
        self.matches.opt_str("output")
    }
    pub fn input_file(&self) -> Option<String> {
        self.matches.opt_str("input")
    }

    pub fn stats_file(&self) -> Option<String> {
        self.matches.opt_str("stats")
    }
}

pub enum FillMode {
    Random,
    Alternating,
    All,
    Empty,
}
impl FillMode {
    fn new<S: AsRef<str>>(s: S) -> Option<Self> {
        match s.as_ref() {
            "random" => Some(Self::Random),
            "alternating" => Some(Self::Alternating),
            "all" => Some(Self::All),
            "empty" => Some(Self::Empty),
            _ => None,
        }
    }

    fn fill_cell<R: rand::Rng>(&self, cell: Pos2, rng: &mut R) -> bool {
        match self {
            Self::Random => rng.random_bool(0.5),
            Self::Alternating => (cell.x + cell.y) % 2 == 0,
            Self::All => true,
            Self::Empty => false,
        }
    }
    pub fn create_alive(self, w: i32, h: i32) -> Vec<Pos2> {
        if matches!(self, Self::Empty) {
            return Vec::new();
        }

        let mut rng = rand::rng();
        (0..h)
            .flat_map(|y| (0..w).map(move |x| Pos2 { x, y }))
            .filter(|&cell| self.fill_cell(cell, &mut rng))
            .collect()
    }
}
