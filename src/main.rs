use clap::Parser;
use drivecmd::cli::{run_add, run_edit, run_list, run_pending, run_show, Cli, Commands};
use drivecmd::config::Config;
use drivecmd::db::Database;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let db = Database::open()?;
    let config = Config::load()?;

    match cli.command {
        Commands::Add(args) => {
            run_add(&db, &config, args.name, args.assign)?;
        }
        Commands::Edit(args) => {
            run_edit(&db, &config, &args.identifier)?;
        }
        Commands::List(args) => {
            run_list(&db, args.page, args.limit)?;
        }
        Commands::Show(args) => {
            run_show(&db, &config, &args.identifier)?;
        }
        Commands::Pending => {
            run_pending(&db)?;
        }
    }

    Ok(())
}
