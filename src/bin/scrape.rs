// src/bin/scrape.rs
use tabscrape::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    tabscrape::init_logging();
    cli::run_scrape()?;
    Ok(())
}
