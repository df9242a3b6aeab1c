use anyhow::Context;
use coursefit::core::catalog::Catalog;
use coursefit::core::cli::CliArgs;
use coursefit::core::context::AppContext;
use coursefit::logging::LogTarget;
use coursefit::scheduler::ScheduleManager;
use coursefit::ui::report::ReportPrinter;

fn run(cli: CliArgs) -> anyhow::Result<()> {
    let ctx = AppContext::new_with_paths(cli.config_path.clone(), cli.logs_dir.clone())
        .context("could not load configuration")?;

    let catalog = Catalog::load_from(&cli.catalog_path)
        .with_context(|| format!("could not load catalog {}", cli.catalog_path.display()))?;

    let result = ScheduleManager::new(&ctx)
        .compute_schedule(&catalog.items, &cli.overrides)
        .context("scheduling run aborted")?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        ReportPrinter::new().print(&catalog.items, &result)?;
    }

    ctx.logger.info("Finished scheduling.", LogTarget::FileOnly);
    Ok(())
}

fn main() {
    let cli = match CliArgs::from_env() {
        Ok(cli) => cli,
        Err(err) => {
            eprintln!("{err}");
            eprintln!(
                "usage: coursefit [--config PATH] [--catalog PATH] [--logs DIR] [--importance NAME=VALUE]... [--json]"
            );
            std::process::exit(1);
        }
    };

    if let Err(err) = run(cli) {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}
