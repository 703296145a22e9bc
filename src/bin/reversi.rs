// src/bin/reversi.rs
#![forbid(unsafe_code)]

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use reversi_engine::core::{GameRng, Tile};
use reversi_engine::session::{
    parse_command, parse_depth, parse_first_turn, parse_tile_choice, render_board,
    render_outcome, render_scores, Command, Session, SessionConfig, SessionError, Status, Turn,
    QUIT_LINE, WELCOME,
};

#[derive(Parser, Debug)]
#[command(name = "reversi", about = "Play Reversi against the computer")]
struct Args {
    /// Your tile: X (black) or O (white). Asked interactively if omitted.
    #[arg(long)]
    tile: Option<Tile>,

    /// Move first? y or n. Asked interactively if omitted.
    #[arg(long)]
    first: Option<String>,

    /// Search depth for the computer. Asked interactively if omitted.
    #[arg(long)]
    depth: Option<u32>,

    /// RNG seed for the computer's tie-breaking. Random if omitted.
    #[arg(long)]
    seed: Option<u64>,
}

/// Line source with prompts; `None` means stdin closed.
struct Prompter<R> {
    input: R,
}

impl<R: BufRead> Prompter<R> {
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        println!("{prompt}");
        io::stdout().flush().context("flushing stdout")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("reading from stdin")?;
        Ok((read > 0).then_some(line))
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let mut prompter = Prompter {
        input: io::stdin().lock(),
    };

    println!("{WELCOME}");

    let Some(config) = configure(&args, &mut prompter)? else {
        return Ok(());
    };
    tracing::info!(?config, "starting game");
    println!("The {} will go first.", config.first);

    let mut session = Session::new(config);
    tracing::debug!(
        depth = session.selector().config().depth,
        seed = session.selector().config().seed,
        "computer ready"
    );
    play(&mut session, &mut prompter)
}

/// Fill in whatever the command line left open. `None` if stdin closed.
fn configure<R: BufRead>(args: &Args, prompter: &mut Prompter<R>) -> Result<Option<SessionConfig>> {
    let human_tile = match args.tile {
        Some(tile) => tile,
        None => loop {
            let Some(answer) = prompter.ask("Do you want to be X (black) or O (white)?")? else {
                return Ok(None);
            };
            if let Some(tile) = parse_tile_choice(&answer) {
                break tile;
            }
        },
    };

    let first = match &args.first {
        Some(answer) => parse_first_turn(answer),
        None => {
            let Some(answer) = prompter.ask("Do you want to play first? Y or N?")? else {
                return Ok(None);
            };
            parse_first_turn(&answer)
        }
    };

    let depth = match args.depth {
        Some(depth) => depth,
        None => loop {
            let Some(answer) = prompter.ask("Enter a number how far the Algorith you want to go.")?
            else {
                return Ok(None);
            };
            match parse_depth(&answer) {
                Ok(depth) => break depth,
                Err(err) => println!("{err}"),
            }
        },
    };

    let seed = args.seed.unwrap_or_else(|| GameRng::from_entropy().seed());

    Ok(Some(
        SessionConfig::default()
            .with_human_tile(human_tile)
            .with_first(first)
            .with_depth(depth)
            .with_seed(seed),
    ))
}

fn play<R: BufRead>(session: &mut Session, prompter: &mut Prompter<R>) -> Result<()> {
    loop {
        match session.status() {
            Status::InProgress(Turn::Human) => {
                show(session);
                human_turn(session, prompter)?;
            }
            Status::InProgress(Turn::Computer) => {
                show(session);
                if prompter
                    .ask("Press Enter to see the computer's move.")?
                    .is_none()
                {
                    session.quit();
                    continue;
                }
                let coord = session
                    .play_computer()
                    .context("computer failed to move")?;
                println!("The computer plays {coord}.");
            }
            Status::Finished(outcome) => {
                print!("{}", render_board(session.board()));
                println!("{}", render_outcome(&outcome));
                return Ok(());
            }
            Status::Quit => {
                println!("{QUIT_LINE}");
                return Ok(());
            }
        }
    }
}

/// Prompt until the human plays a legal move or quits.
fn human_turn<R: BufRead>(session: &mut Session, prompter: &mut Prompter<R>) -> Result<()> {
    loop {
        let Some(line) = prompter.ask(
            "Enter your move (first the x axis and then the y axis), or type quit to end the game.",
        )?
        else {
            session.quit();
            return Ok(());
        };

        match parse_command(&line) {
            Ok(Command::Quit) => {
                session.quit();
                return Ok(());
            }
            Ok(Command::Move(coord)) => match session.play_human(coord) {
                Ok(_) => return Ok(()),
                Err(SessionError::Illegal(err)) => println!("That move is not allowed: {err}."),
                Err(err) => return Err(err).context("human move"),
            },
            Err(err) => println!("{err}"),
        }
    }
}

fn show(session: &Session) {
    print!("{}", render_board(session.board()));
    println!(
        "{}",
        render_scores(&session.score(), session.human_tile(), session.computer_tile())
    );
}
