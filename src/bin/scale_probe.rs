//! Timing probe for the memoized solver.
//!
//! Runs each grid family at doubling side lengths, reports throughput in
//! cells per second alongside the resolved length, and checks every answer
//! against a closed form or, for small noisy grids, exhaustive search.
//! Exits with status 1 if any answer is wrong.

use std::env;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use grid_lip::{BruteForce, Grid, IncreasingPathSolver, PathFinder};
use sysinfo::{get_current_pid, Pid, ProcessRefreshKind, System};

const USAGE: &str = "\
Usage: scale_probe [--max-side N] [--verify-limit CELLS] [--repeat N]

  --max-side N          largest square side to run (default 1024)
  --verify-limit CELLS  largest noise grid checked by exhaustive search (default 25)
  --repeat N            timed runs per grid; the fastest is reported (default 3)";

struct ProbeConfig {
    max_side: usize,
    verify_limit: usize,
    repeat: usize,
}

impl ProbeConfig {
    fn from_args(args: impl IntoIterator<Item = String>) -> Result<Self, String> {
        let mut cfg = Self {
            max_side: 1024,
            verify_limit: 25,
            repeat: 3,
        };
        let mut args = args.into_iter();
        while let Some(flag) = args.next() {
            let slot = match flag.as_str() {
                "--max-side" => &mut cfg.max_side,
                "--verify-limit" => &mut cfg.verify_limit,
                "--repeat" => &mut cfg.repeat,
                other => return Err(format!("unknown flag '{other}'")),
            };
            let raw = args.next().ok_or_else(|| format!("{flag} needs a value"))?;
            *slot = raw
                .parse()
                .map_err(|_| format!("{flag}: '{raw}' is not a number"))?;
        }
        if cfg.max_side == 0 || cfg.repeat == 0 {
            return Err("--max-side and --repeat must be positive".to_string());
        }
        Ok(cfg)
    }
}

#[derive(Clone, Copy)]
enum Family {
    /// Boustrophedon numbering: one path through every cell.
    Snake,
    /// value = row + col
    Gradient,
    /// Every value equal.
    Plateau,
    /// Hashed values in 0..10.
    Noise,
}

impl Family {
    const ALL: [Family; 4] = [Family::Snake, Family::Gradient, Family::Plateau, Family::Noise];

    fn name(self) -> &'static str {
        match self {
            Family::Snake => "snake",
            Family::Gradient => "gradient",
            Family::Plateau => "plateau",
            Family::Noise => "noise",
        }
    }

    fn value(self, side: usize, r: usize, c: usize) -> i64 {
        match self {
            Family::Snake => {
                let c = if r % 2 == 0 { c } else { side - 1 - c };
                (r * side + c) as i64
            }
            Family::Gradient => (r + c) as i64,
            Family::Plateau => 0,
            Family::Noise => {
                let h = (r as u64)
                    .wrapping_mul(0x9E37_79B9_7F4A_7C15)
                    ^ (c as u64).wrapping_mul(0xC2B2_AE3D_27D4_EB4F);
                (h.rotate_left(17) % 10) as i64
            }
        }
    }

    fn build(self, side: usize) -> Result<Grid<i64>, grid_lip::GridError> {
        let values = (0..side * side)
            .map(|i| self.value(side, i / side, i % side))
            .collect();
        Grid::from_flat(side, side, values)
    }

    /// Known answer for a `side x side` grid, if there is a closed form.
    fn closed_form(self, side: usize) -> Option<usize> {
        match self {
            Family::Snake => Some(side * side),
            Family::Gradient => Some(2 * side - 1),
            Family::Plateau => Some(1),
            Family::Noise => None,
        }
    }
}

enum Check {
    Ok,
    Skipped,
    Wrong { expected: usize },
}

struct Sample {
    family: Family,
    side: usize,
    length: usize,
    best: Duration,
    rss_growth_kib: u64,
    check: Check,
}

impl Sample {
    fn cells_per_sec(&self) -> f64 {
        let secs = self.best.as_secs_f64();
        if secs > 0.0 {
            (self.side * self.side) as f64 / secs
        } else {
            f64::INFINITY
        }
    }

    fn print(&self) {
        let check = match self.check {
            Check::Ok => "ok".to_string(),
            Check::Skipped => "-".to_string(),
            Check::Wrong { expected } => format!("WRONG (expected {expected})"),
        };
        println!(
            "{:<9} {:>6} {:>10} {:>10.3} {:>12.2} {:>10} {check}",
            self.family.name(),
            self.side,
            self.length,
            self.best.as_secs_f64() * 1e3,
            self.cells_per_sec() / 1e6,
            self.rss_growth_kib,
        );
    }
}

/// Resident set size of this process, in KiB.
struct RssMeter {
    sys: System,
    pid: Option<Pid>,
}

impl RssMeter {
    fn new() -> Self {
        Self {
            sys: System::new(),
            pid: get_current_pid().ok(),
        }
    }

    fn kib(&mut self) -> u64 {
        // process memory is refreshed regardless of the requested kinds
        self.sys.refresh_processes_specifics(ProcessRefreshKind::new());
        self.pid
            .and_then(|pid| self.sys.process(pid))
            .map_or(0, |p| p.memory() / 1024)
    }
}

fn probe(family: Family, side: usize, cfg: &ProbeConfig, rss: &mut RssMeter) -> Result<Sample, String> {
    let grid = family.build(side).map_err(|e| e.to_string())?;
    let finder = PathFinder::new();

    let before = rss.kib();
    let mut best = Duration::MAX;
    let mut length = 0;
    for _ in 0..cfg.repeat {
        let start = Instant::now();
        length = finder.longest_increasing_path(&grid);
        best = best.min(start.elapsed());
    }
    let rss_growth_kib = rss.kib().saturating_sub(before);

    let expected = family
        .closed_form(side)
        .or_else(|| (grid.len() <= cfg.verify_limit).then(|| BruteForce.longest_len(&grid)));
    let check = match expected {
        Some(e) if e == length => Check::Ok,
        Some(e) => Check::Wrong { expected: e },
        None => Check::Skipped,
    };

    Ok(Sample {
        family,
        side,
        length,
        best,
        rss_growth_kib,
        check,
    })
}

fn main() -> ExitCode {
    let cfg = match ProbeConfig::from_args(env::args().skip(1)) {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("scale_probe: {err}\n\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    let sides: Vec<usize> = std::iter::successors(Some(4usize), |s| s.checked_mul(2))
        .take_while(|&s| s <= cfg.max_side)
        .collect();

    println!(
        "{:<9} {:>6} {:>10} {:>10} {:>12} {:>10} check",
        "family", "side", "length", "best_ms", "Mcells/s", "rss_kib"
    );

    let mut rss = RssMeter::new();
    let mut wrong = 0usize;
    for family in Family::ALL {
        for &side in &sides {
            match probe(family, side, &cfg, &mut rss) {
                Ok(sample) => {
                    if matches!(sample.check, Check::Wrong { .. }) {
                        wrong += 1;
                    }
                    sample.print();
                }
                Err(err) => {
                    eprintln!("scale_probe: {} at side {side}: {err}", family.name());
                    wrong += 1;
                }
            }
        }
    }

    if wrong == 0 {
        ExitCode::SUCCESS
    } else {
        eprintln!("scale_probe: {wrong} wrong answer(s)");
        ExitCode::FAILURE
    }
}
