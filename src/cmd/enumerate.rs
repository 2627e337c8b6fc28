use clap::Args;
use seatforge::consts::{MAX_EXHAUSTIVE_AGENTS, MIN_AGENTS};
use seatforge::enumerate::{canonical_arrangement_count, canonical_arrangements};
use seatforge::error::{SeatingError, SfResult};

#[derive(Args, Debug, Clone)]
pub struct EnumerateArgs {
    #[arg(short, long)]
    pub n: usize,

    /// Print every canonical seating, not just the count.
    #[arg(long, default_value_t = false)]
    pub list: bool,
}

pub fn run(args: &EnumerateArgs) -> SfResult<()> {
    if args.n < MIN_AGENTS {
        return Err(SeatingError::Config(format!(
            "A table needs at least {} agents, got {}",
            MIN_AGENTS, args.n
        )));
    }
    if args.list && args.n > MAX_EXHAUSTIVE_AGENTS {
        return Err(SeatingError::Config(format!(
            "Listing supports at most {} agents, got {}",
            MAX_EXHAUSTIVE_AGENTS, args.n
        )));
    }

    println!(
        "Canonical arrangements: {}",
        canonical_arrangement_count(args.n)
    );

    if args.list {
        for (i, arrangement) in canonical_arrangements(args.n).enumerate() {
            println!("{:>6}  {}", i + 1, arrangement);
        }
    }
    Ok(())
}
