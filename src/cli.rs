use clap::Parser;

/// Name the day of the week for a Gregorian date.
#[derive(Parser)]
#[command(
    name = "day-of-week",
    version,
    about = "Validate a DD/MM/YYYY date (years 1700-2500) and print its day of the week"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Date to look up, as DD/MM/YYYY. Prompts on stdin when omitted.
    pub date: Option<String>,
}
