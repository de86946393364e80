#![warn(clippy::pedantic)]
#![allow(clippy::too_many_lines)]

mod config;
mod render;

use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use cfop_core::{
    Color, OllCase, PllCase,
    catalog::{
        Algorithm, CROSS_GOAL, F2L_GOAL, F2L_PATTERNS, TRIGGER_CATEGORIES, all_oll_cases,
        all_pll_cases, oll_case, oll_category_of, pll_category_of, trigger_book,
    },
    expand,
    flashcards::{Deck, Flashcard, Outcome},
    search::{filter_pll, find_oll_category, find_pll, search_oll},
};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use color_eyre::eyre::eyre;
use config::{Config, GridSize};
use env_logger::TimestampPrecision;
use itertools::Itertools;
use log::{LevelFilter, debug, info};
use owo_colors::OwoColorize;
use render::Picture;

/// Browse and drill the CFOP last layer cases
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The configuration file to use, in TOML format. It is fine for it not to exist.
    #[arg(long, short, default_value = "cfop.toml", value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (can be repeated)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// How large to draw each sticker, overriding the config
    #[arg(long, global = true)]
    grid_size: Option<GridSize>,

    /// Show algorithms without trigger shorthand
    #[arg(long, global = true)]
    full: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show OLL cases: one by number, a category, or everything matching a search
    Oll {
        /// The case number, 1 to 57
        #[arg(conflicts_with_all = ["category", "search"])]
        number: Option<u8>,
        /// A category name, such as "Fish" or "small-l-shapes"
        #[arg(long, conflicts_with = "search")]
        category: Option<String>,
        /// Matched against case and category names
        #[arg(long)]
        search: Option<String>,
    },
    /// Show PLL cases
    Pll {
        /// A case name or alias, such as "T" or "Ja"
        #[arg(conflicts_with = "category")]
        name: Option<String>,
        /// The side color to put at the front, overriding the config
        #[arg(long)]
        front: Option<Color>,
        /// A category name, such as "Edges Only"
        #[arg(long)]
        category: Option<String>,
        /// List the pieces each case moves
        #[arg(long)]
        arrows: bool,
    },
    /// List the triggers that algorithms are written with
    Triggers,
    /// Show the basic F2L patterns
    F2l,
    /// Show the goal of the cross step
    Cross,
    /// Drill cases until every one is known
    Flashcards {
        set: CaseSet,
        /// Shuffle with this seed to repeat an earlier order
        #[arg(long)]
        seed: Option<u64>,
        /// Only drill this many cases
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Print the moves an algorithm performs, with triggers written out
    Expand {
        /// Algorithm text, such as "F {sexy} F'"
        text: String,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CaseSet {
    Oll,
    Pll,
}

/// What every printing command needs to know
struct View {
    front: Color,
    grid_size: GridSize,
    show_full: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(match cli.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .format_timestamp(Some(TimestampPrecision::Millis))
        .init();

    let config = Config::load(&cli.config)?;
    debug!("{config:?}");

    let view = View {
        front: config.front_color,
        grid_size: cli.grid_size.unwrap_or(config.grid_size),
        show_full: cli.full || config.show_full,
    };

    match cli.command {
        Commands::Oll {
            number,
            category,
            search,
        } => {
            let cases = match (number, category) {
                (Some(number), _) => vec![oll_case(number).ok_or_else(|| {
                    eyre!("There is no OLL {number}; cases are numbered 1 to 57")
                })?],
                (None, Some(name)) => find_oll_category(&name)
                    .ok_or_else(|| eyre!("No OLL category is called `{name}`"))?
                    .iter()
                    .collect_vec(),
                (None, None) => search_oll(search.as_deref().unwrap_or("")),
            };

            if cases.is_empty() {
                return Err(eyre!("No OLL case matches your search"));
            }

            for case in cases {
                print_oll(case, &view);
            }
        }
        Commands::Pll {
            name,
            front,
            category,
            arrows,
        } => {
            let view = View {
                front: front.unwrap_or(view.front),
                ..view
            };
            if !view.front.is_side() {
                return Err(eyre!(
                    "The front must be blue, red, green, or orange, not {}",
                    view.front
                ));
            }

            let cases = match name {
                Some(name) => vec![
                    find_pll(&name)
                        .ok_or_else(|| eyre!("No PLL case is called `{name}`"))?,
                ],
                None => {
                    let cases = filter_pll(category.as_deref());
                    if cases.is_empty() {
                        return Err(eyre!(
                            "No PLL category is called `{}`",
                            category.unwrap_or_default()
                        ));
                    }
                    cases
                }
            };

            for case in cases {
                print_pll(case, &view, arrows);
            }
        }
        Commands::Triggers => print_triggers(),
        Commands::F2l => print_f2l(&view),
        Commands::Cross => {
            println!("{}", "Cross".bold());
            println!(
                "Solve the four white edges around the white center, each matching its side \
                 center."
            );
            println!();
            println!("{}", render::cube_faces(&CROSS_GOAL, view.grid_size));
        }
        Commands::Flashcards { set, seed, limit } => {
            let seed = seed
                .or(config.flashcards.seed)
                .unwrap_or_else(|| fastrand::u64(..));
            let limit = limit.or(config.flashcards.limit);
            info!("Dealing {set:?} flashcards with seed {seed}");

            match set {
                CaseSet::Oll => drill(deal(all_oll_cases(), seed, limit), &view)?,
                CaseSet::Pll => drill(deal(all_pll_cases(), seed, limit), &view)?,
            }

            println!("Seed: {seed}");
        }
        Commands::Expand { text } => {
            let moves = expand(&text, trigger_book())?;

            println!("{} {}", "Moves:".bold(), moves);
            println!("{} {}", "Simplified:".bold(), moves.simplified());
            println!("{} {}", "Inverse:".bold(), moves.inverse().simplified());
            println!("{} {}", "Length:".bold(), moves.simplified().len());
        }
    }

    Ok(())
}

fn print_algorithms(algorithms: &[Algorithm], show_full: bool) {
    for algorithm in algorithms {
        let text = if show_full {
            algorithm.full
        } else {
            algorithm.display_text()
        };

        println!("  {}", render::algorithm(text));
    }
}

fn print_oll(case: &OllCase, view: &View) {
    let category = oll_category_of(case.number).map_or("", |category| category.name);

    println!("{} {}", case.label().bold(), category.dimmed());
    println!("{}", render::last_layer(&case.colors(), view.grid_size));
    print_algorithms(case.algorithms, view.show_full);
    println!();
}

fn print_pll(case: &PllCase, view: &View, arrows: bool) {
    let category = pll_category_of(case.name).map_or("", |category| category.name);

    println!("{} {}", case.label().bold(), category.dimmed());
    let colors = case.colors_for(view.front);
    println!("{}", render::last_layer(&colors, view.grid_size));

    if arrows {
        let swaps = case.swaps;
        println!("  {}", swaps.description.italic());
        for cycle in swaps.corners.iter().chain(swaps.edges) {
            println!("  {cycle}");
        }
    }

    print_algorithms(case.algorithms, view.show_full);
    println!();
}

fn print_triggers() {
    for category in TRIGGER_CATEGORIES {
        println!("{}", category.name.bold());
        println!("{}", category.description.dimmed());

        for trigger in category.iter() {
            println!(
                "  {} {} {}",
                format!("{:<18}", trigger.name).bold(),
                format!("{:<14}", trigger.notation).italic(),
                trigger.moves
            );

            let inverse = trigger.inverse_notation.unwrap_or("");
            println!(
                "  {:<18} {} {}",
                "",
                format!("{inverse:<14}").italic(),
                trigger.inverse.dimmed()
            );

            if let Some(description) = trigger.description {
                println!("  {:<18} {}", "", description.dimmed());
            }
        }

        println!();
    }
}

fn print_f2l(view: &View) {
    println!("{}", "Goal".bold());
    println!("{}", render::cube_faces(&F2L_GOAL, view.grid_size));
    println!();

    for pattern in F2L_PATTERNS {
        println!("{} {}", pattern.name.bold(), pattern.slot.label().dimmed());
        println!("{}", pattern.description);
        println!("  {}", render::algorithm(pattern.algorithm));

        let pictures = pattern
            .variations()
            .map(|faces| render::cube_faces(&faces, view.grid_size));
        println!("{}", Picture::beside(&pictures, 4));
        println!();
    }
}

fn deal<C: Flashcard>(
    cards: impl IntoIterator<Item = C>,
    seed: u64,
    limit: Option<usize>,
) -> Deck<C> {
    let deck = Deck::new(cards, seed);
    match limit {
        Some(limit) => deck.truncated(limit),
        None => deck,
    }
}

/// Asks for a line on stdin; `None` once the input is closed
fn prompt(message: &str) -> color_eyre::Result<Option<String>> {
    eprint!("{message}");
    io::stderr().flush()?;

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_lowercase()))
}

fn drill<C: Flashcard>(mut deck: Deck<C>, view: &View) -> color_eyre::Result<()> {
    while let Some(card) = deck.current() {
        let diagram = card.diagram(view.front);
        println!("{}", render::last_layer(&diagram, view.grid_size));

        let message = format!("{} left. Press enter to reveal ", deck.remaining());
        if prompt(&message)?.is_none() {
            break;
        }

        println!("{}", card.label().bold());
        print_algorithms(card.answers(), view.show_full);

        let outcome = loop {
            match prompt("Did you know it? [y/n/q] ")?.as_deref() {
                Some("y" | "yes") => break Some(Outcome::Known),
                Some("n" | "no") => break Some(Outcome::Missed),
                Some("q" | "quit") | None => break None,
                Some(_) => {}
            }
        };

        let Some(outcome) = outcome else {
            break;
        };

        deck.answer(outcome);
        println!();
    }

    let stats = deck.stats();
    println!(
        "Known {} of {} attempts, {} missed, {} left",
        stats.known.green(),
        stats.attempts(),
        stats.missed.red(),
        stats.remaining
    );

    Ok(())
}
