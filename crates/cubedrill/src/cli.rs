use std::io::{BufRead, IsTerminal, Write};
use std::time::Duration;

use cubedrill_catalog::{Algorithm, Category};
use cubedrill_core::Lattice;
use cubedrill_notation::{format_moves, parse_notation, setup_sequence};
use cubedrill_playback::{PlaybackController, PlaybackEvent, PlaybackTiming};
use cubedrill_prefs::Preferences;
use cubedrill_prefs::paths;
use cubedrill_timer::{Scramble, Session, SpeedTimer, TimerKey, TimerState, format_time};
use eyre::{Context, Result, bail};
use owo_colors::OwoColorize;
use web_time::Instant;

use crate::net;

/// Frame rate used when driving playback.
const FRAME: Duration = Duration::from_micros(16_667);

/// Cubedrill command-line interface
///
/// Drill CFOP algorithms on a simulated 3x3x3 cube and time solves.
#[derive(Debug, clap::Parser)]
#[command(version)]
pub(crate) struct Args {
    #[command(subcommand)]
    pub subcommand: Subcommand,
}

#[derive(clap::Subcommand, Debug)]
pub(crate) enum Subcommand {
    /// List algorithms in the catalog.
    Algs {
        /// List only algorithms in this category (PLL, OLL, F2L, or Cross).
        #[arg(short, long)]
        category: Option<Category>,
        /// Text to search for in algorithm IDs and names.
        query: Vec<String>,
    },
    /// Show an algorithm along with the cube state it solves.
    Show {
        /// Algorithm ID (such as `pll-t`)
        id: String,
    },
    /// Apply moves to a solved cube and show the result.
    Apply {
        /// Moves to apply (such as `R U R' U'`)
        #[arg(required = true, allow_hyphen_values = true)]
        notation: Vec<String>,
    },
    /// Play an algorithm on the simulated cube, looping from its setup state.
    Play {
        /// Algorithm ID (such as `pll-t`)
        id: String,
        /// Number of times to play the algorithm.
        #[arg(short, long, default_value_t = 1)]
        loops: usize,
        /// Wait between frames so that playback takes real time.
        #[arg(long)]
        realtime: bool,
    },
    /// Print a random scramble.
    Scramble {
        /// Number of moves.
        #[arg(short, long)]
        length: Option<usize>,
        /// Seed for a reproducible scramble.
        #[arg(short, long)]
        seed: Option<String>,
    },
    /// Time solves. Press Enter to start and stop; enter `q` to quit.
    Timer,
    /// Print statistics of the saved timer session.
    Stats {
        /// Delete all saved solves.
        #[arg(long)]
        clear: bool,
    },
}

pub(crate) fn exec(subcommand: Subcommand) -> Result<()> {
    match subcommand {
        Subcommand::Algs { category, query } => {
            let query = query.join(" ");
            let algs = cubedrill_catalog::search(&query)
                .filter(|alg| category.is_none_or(|c| alg.category == c))
                .collect::<Vec<_>>();
            for alg in &algs {
                println!(
                    "{:<8} {:<5} {:<24} {}",
                    alg.id.bold(),
                    alg.category,
                    alg.name,
                    alg.notation,
                );
            }
            println!(
                "{} of {} algorithms",
                algs.len(),
                cubedrill_catalog::count(category),
            );
            Ok(())
        }

        Subcommand::Show { id } => {
            let alg = cubedrill_catalog::get(&id)?;
            let moves = alg.moves();
            let setup = setup_sequence(&moves);
            print_algorithm(alg);
            println!("{}    {}", "Moves:".bold(), format_moves(&moves));
            println!("{}    {}", "Setup:".bold(), format_moves(&setup));
            println!();

            let mut lattice = Lattice::solved();
            lattice.apply_all(&setup);
            print!("{}", net::render(&lattice, use_color()));
            Ok(())
        }

        Subcommand::Apply { notation } => {
            let moves = parse_notation(&notation.join(" "));
            let mut lattice = Lattice::solved();
            for token in &moves {
                if !lattice.apply(token) {
                    log::warn!("ignoring unrecognized move {token:?}");
                }
            }
            print!("{}", net::render(&lattice, use_color()));
            if lattice.is_solved() {
                println!("{}", "solved".green());
            }
            Ok(())
        }

        Subcommand::Play {
            id,
            loops,
            realtime,
        } => {
            let alg = cubedrill_catalog::get(&id)?;
            let prefs = Preferences::load();
            play(alg, loops, realtime, PlaybackTiming::from(&prefs.animation));
            Ok(())
        }

        Subcommand::Scramble { length, seed } => {
            let length = length.unwrap_or_else(|| Preferences::load().timer.scramble_length);
            let scramble = match seed {
                Some(seed) => Scramble::from_seed(seed, length),
                None => Scramble::new(length),
            };
            println!("{scramble}");
            log::info!("scramble seed: {}", scramble.seed);
            Ok(())
        }

        Subcommand::Timer => run_timer(),

        Subcommand::Stats { clear } => {
            let path = paths::session_file()?;
            let mut session = Session::load(path)
                .wrap_err_with(|| format!("error loading session from {}", path.display()))?;
            if clear {
                session.clear();
                session.save(path)?;
                println!("Cleared all solves");
                return Ok(());
            }
            print_stats(&session);
            for (i, solve) in session.solves().iter().enumerate().take(12) {
                println!(
                    "{:>4}. {:>8}   {}",
                    session.len() - i,
                    format_time(Some(solve.time())),
                    solve.scramble.dimmed(),
                );
            }
            Ok(())
        }
    }
}

fn use_color() -> bool {
    std::io::stdout().is_terminal()
}

fn print_algorithm(alg: &Algorithm) {
    println!("{} ({})", alg.name.bold(), alg.category);
    if let Some(description) = &alg.description {
        println!("{description}");
    }
    println!("{} {}", "Notation:".bold(), alg.notation);
}

fn play(alg: &Algorithm, loops: usize, realtime: bool, timing: PlaybackTiming) {
    let mut playback = PlaybackController::new(timing);
    playback.load(&alg.notation);
    let moves = playback.state().moves;

    print_algorithm(alg);
    print!("{}", net::render(playback.lattice(), use_color()));
    if loops == 0 || moves.is_empty() {
        return;
    }

    playback.play();
    let mut loops_done = 0;
    while loops_done < loops {
        for event in playback.update(FRAME) {
            match event {
                PlaybackEvent::TwistCompleted { index } => {
                    log::info!("completed move {}", index + 1);
                    println!("{:>3}/{}  {}", index + 1, moves.len(), moves[index]);
                    if index + 1 == moves.len() {
                        loops_done += 1;
                        print!("{}", net::render(playback.lattice(), use_color()));
                    }
                }
                PlaybackEvent::LoopRestarted => log::debug!("loop restarted"),
                PlaybackEvent::TwistStarted { .. } | PlaybackEvent::SetupApplied => (),
            }
        }
        if realtime {
            std::thread::sleep(FRAME);
        }
    }
}

fn print_stats(session: &Session) {
    println!("{} {}", "Solves:".bold(), session.len());
    println!("{}   {}", "Best:".bold(), format_time(session.best()));
    println!("{}    {}", "Ao5:".bold(), format_time(session.average_of(5)));
    println!("{}   {}", "Ao12:".bold(), format_time(session.average_of(12)));
}

fn run_timer() -> Result<()> {
    let prefs = Preferences::load();
    let path = paths::session_file()?;
    let mut session = Session::load(path)
        .wrap_err_with(|| format!("error loading session from {}", path.display()))?;
    let mut timer = SpeedTimer::new(&prefs.timer);

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        match timer.state() {
            TimerState::Running => print!("{} ", "Running... press Enter to stop".yellow()),
            _ => {
                println!("{} {}", "Scramble:".bold(), timer.scramble());
                print!("Press Enter to start, or enter q to quit: ");
            }
        }
        std::io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let now = Instant::now();
        if line?.trim().eq_ignore_ascii_case("q") {
            break;
        }

        match timer.state() {
            TimerState::Running => {
                if let Some(solve) = timer.key_down(TimerKey::Other, now) {
                    println!("{} {}", "Time:".bold(), format_time(Some(solve.time())).green());
                    session.push(solve);
                    println!(
                        "Ao5: {}   Ao12: {}",
                        format_time(session.average_of(5)),
                        format_time(session.average_of(12)),
                    );
                    session.save(path)?;
                }
            }
            _ => {
                // A line of input can't be held, so treat Enter as a press
                // that was held just long enough.
                let Some(pressed) = now.checked_sub(timer.hold_duration()) else {
                    bail!("system clock is too close to its epoch");
                };
                timer.key_down(TimerKey::Start, pressed);
                timer.key_up(TimerKey::Start, now);
            }
        }
    }

    if timer.state() == TimerState::Running {
        log::warn!("timer stopped without recording a solve");
    }
    println!();
    print_stats(&session);
    Ok(())
}
