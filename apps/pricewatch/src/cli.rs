use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Records a coin's spot price and ranks the cheapest minutes of the day",
    override_usage = "pricewatch record\n       pricewatch stats [days] [--limit <N>] [--all-time]",
    arg_required_else_help = true
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Fetch the current price once and store it
    Record,
    /// Print the best and worst minutes of the day to buy
    Stats {
        /// Size of the recent window in days (default: 10)
        #[arg(allow_negative_numbers = true)]
        days: Option<String>,

        /// Rows per table
        #[arg(long, default_value_t = 60)]
        limit: usize,

        /// Also print the tables over the whole history
        #[arg(long)]
        all_time: bool,
    },
}
