use clap::{Args, Parser, Subcommand};

pub mod add;
pub mod edit;
pub mod form;
pub mod list;
pub mod pending;
pub mod show;
pub mod ui;

pub use add::run_add;
pub use edit::run_edit;
pub use list::run_list;
pub use pending::run_pending;
pub use show::run_show;

#[derive(Parser)]
#[command(name = "drivecmd")]
#[command(about = "Recruiting-drive CRM for the command line")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new company record
    Add(AddArgs),
    /// Edit an existing company record
    Edit(EditArgs),
    /// List companies with pagination
    List(ListArgs),
    /// Show full details for a company
    Show(ShowArgs),
    /// List edits waiting for review
    Pending,
}

#[derive(Args)]
pub struct AddArgs {
    /// Company name (prompted when omitted)
    #[arg(short, long)]
    pub name: Option<String>,
    /// Assign to a staff member (username, id, or email)
    #[arg(short, long)]
    pub assign: Option<String>,
}

#[derive(Args)]
pub struct EditArgs {
    /// Company UUID or name
    pub identifier: String,
}

#[derive(Args)]
pub struct ListArgs {
    #[arg(short, long, default_value = "1")]
    pub page: u32,
    #[arg(short, long, default_value = "20")]
    pub limit: u32,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Company UUID or name
    pub identifier: String,
}
