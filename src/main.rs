use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "requirements-lsp")]
#[command(
    version,
    about = "Language Server for pip requirements version completion"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        None => tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?
            .block_on(requirements_lsp::lsp::server::run_server()),
    }
}
