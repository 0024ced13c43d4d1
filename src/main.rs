//! mindsystem-install CLI
//!
//! Usage: mindsystem-install [OPTIONS]
//!
//! Installs the Mindsystem commands, agents and scripts into a Claude config
//! directory (`--global`, the default) or into `./.claude` (`--local`).

mod ui;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use mindsystem_install::infrastructure::InteractivePrompt;
use mindsystem_install::presentation::{factory, Cli};
use mindsystem_install::InstallScope;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.log_level());

    if let Err(err) = run(&cli) {
        ui::error::print_error(&err);
        std::process::exit(1);
    }
}

/// Diagnostics go to stderr; `RUST_LOG` beats `-v`.
fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run(cli: &Cli) -> Result<()> {
    let caps = ui::terminal::detect_capabilities();
    let (color, unicode) = (caps.supports_color, caps.supports_unicode);

    let mut env = factory::InstallEnv::from_process()?;
    env.interactive = caps.can_prompt();

    let scope = match cli.scope() {
        Some(scope) => scope,
        None if env.interactive => {
            let (global_root, _) = env.global_root(cli)?;
            let label = env.location_label(&global_root, InstallScope::Global);
            ui::location::prompt_location(&label, unicode)?
        }
        None => InstallScope::Global,
    };
    tracing::debug!(%scope, interactive = env.interactive, "install location chosen");

    let options = factory::build_options(cli, &env, scope)?;
    let location = env.location_label(&options.dest_root, scope);
    println!(
        "{}",
        ui::views::install::render_install_header(
            &location,
            &options.package_root,
            cli.force,
            color,
            unicode
        )
    );

    let use_case = factory::create_install_use_case();
    let mut prompt = InteractivePrompt::stdio();
    let report = use_case.execute(&options, &mut prompt)?;

    print!(
        "{}",
        ui::views::install::render_install_steps(&report, color, unicode)
    );
    println!();
    if let Some(kept) = ui::views::install::render_kept_files(&report, color, unicode) {
        print!("{}", kept);
    }
    print!(
        "{}",
        ui::views::install::render_install_summary(&report, color, unicode)
    );

    Ok(())
}
