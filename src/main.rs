use anyhow::Result;

mod app;
mod logging;

fn main() -> Result<()> {
    let args = stamp_rename::cli::parse();
    app::run(args)
}
