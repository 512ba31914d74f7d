#![forbid(unsafe_code)]

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

use op_export::export_cmd;

#[derive(Parser, Debug)]
#[command(name = "op-export")]
#[command(about = "Export 1Password items into a live-updating HTML report", long_about = None)]
struct Cli {
    /// Path of the HTML report to write
    #[arg(long, default_value = "out.html")]
    output: std::path::PathBuf,

    /// Path of the stylesheet to write (linked-CSS mode)
    #[arg(long, default_value = "out.css")]
    css: std::path::PathBuf,

    /// Report title
    #[arg(long, default_value = "1Password Export")]
    title: String,

    /// Leave the export date out of the report header
    #[arg(long)]
    no_date: bool,

    /// Leave item URLs out of the report
    #[arg(long)]
    no_url: bool,

    /// Embed the stylesheet in the HTML instead of linking it
    #[arg(long)]
    inline_css: bool,

    /// Skip the loading indicator and reload script
    #[arg(long)]
    no_reload: bool,

    /// Command used to invoke the 1Password CLI (e.g. "op" or a wrapper script)
    #[arg(long, default_value = "op")]
    op: String,

    /// Enable verbose logging (or set OP_EXPORT_LOG)
    #[arg(long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let env = std::env::var("OP_EXPORT_LOG").unwrap_or_else(|_| {
        if verbose { "op_export=debug".to_string() } else { "op_export=info".to_string() }
    });
    let _ = tracing_subscriber::fmt()
        .with_span_events(FmtSpan::ACTIVE)
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_env_filter(EnvFilter::new(env))
        .try_init();
}

fn main() {
    color_eyre::install().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = export_cmd::run(
        cli.output,
        cli.css,
        cli.title,
        cli.no_date,
        cli.no_url,
        cli.inline_css,
        cli.no_reload,
        cli.op,
    );

    if let Err(e) = result {
        eprintln!("{:#}", e);
        std::process::exit(1);
    }
}
