use anyhow::Result;

fn main() -> Result<()> {
    env_logger::init();
    pricetag_cli::cli::run()
}
