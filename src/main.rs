use anyhow::{Context, Result};
use bounded_stack::{
    command, terminal_io::TerminalIo, BoundedStack, Command, OverflowPolicy, Session,
};
use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};
use std::io::{self, Read};

/// Run a script of stack commands (`push <n>`, `pop`, `peek`, `dump`), one
/// per line, read from stdin.
#[derive(Debug, Parser)]
#[clap(version, about)]
struct Args {
    /// Maximum number of elements the stack holds.
    #[clap(short, long, default_value_t = 16)]
    capacity: usize,

    /// Report pushes onto a full stack, instead of dropping them silently.
    #[clap(long)]
    strict: bool,

    /// Print the stack to stderr after every command.
    #[clap(long)]
    trace: bool,

    /// Don't color the output.
    #[clap(long)]
    no_color: bool,

    /// Ignore stdin, and run this many randomly generated commands instead.
    #[clap(long, value_name = "N")]
    random: Option<usize>,

    /// Seed for `--random`. Defaults to a fresh one each run.
    #[clap(long, requires = "random")]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let commands = match args.random {
        Some(n) => random_commands(n, args.seed),
        None => read_script()?,
    };

    let policy = if args.strict {
        OverflowPolicy::Reject
    } else {
        OverflowPolicy::Ignore
    };

    let stack = BoundedStack::try_new(args.capacity)
        .with_context(|| format!("bad --capacity {}", args.capacity))?;

    let mut io = TerminalIo::stdout()
        .color(!args.no_color)
        .trace(args.trace);
    Session::with_stack(stack, policy, &mut io).run(commands);
    io.finish().context("failed to write output")?;

    Ok(())
}

/// Parse all of stdin up front, so a typo on the last line doesn't leave a
/// half-run script behind.
fn read_script() -> Result<Vec<Command>> {
    let mut script = String::new();
    io::stdin()
        .read_to_string(&mut script)
        .context("failed to read script from stdin")?;

    Ok(command::read_script(&script)?)
}

fn random_commands(n: usize, seed: Option<u64>) -> Vec<Command> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    (0..n).map(|_| Command::random(&mut rng)).collect()
}
