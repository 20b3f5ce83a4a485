//! Print one month as a Sunday-first text grid.

use clap::Parser;
use post_sentiment::calendar::format_month;

#[derive(Parser, Debug)]
#[command(name = "calendar", about = "Print a month's calendar to stdout")]
struct Args {
    /// Calendar year
    #[arg(long, default_value_t = 2024)]
    year: i32,

    /// Month number, 1-12
    #[arg(long, default_value_t = 10)]
    month: u32,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let grid = format_month(args.year, args.month).map_err(|e| anyhow::anyhow!("{}", e))?;
    println!("{}", grid);
    Ok(())
}
