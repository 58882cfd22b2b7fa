use tasklist::commands::Cli;
use tasklist::libs::logging;

fn main() -> anyhow::Result<()> {
    logging::init();
    Cli::menu()
}
