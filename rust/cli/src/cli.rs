//! Command-line argument definitions.

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "blackjack",
    version,
    about = "Single-deck player vs dealer card game"
)]
pub struct BlackjackCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Play interactively: hit, stand, reset or quit
    Play {
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Deal one opening hand and show every card
    Deal {
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Score a hand given in card notation, e.g. `AS 10h kd`
    Score {
        #[arg(required = true, num_args = 1..)]
        cards: Vec<String>,
    },
    /// Play many rounds with a fixed player policy and tally the results
    Sim {
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        rounds: Option<u32>,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        output: Option<String>,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}
