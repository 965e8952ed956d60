use clap::Parser;
use ipynb_present::utils::{logger, validation::Validate};
use ipynb_present::{CliConfig, NbconvertConverter, PresentEngine, PresentError};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_logger(config.verbose, config.log_json);

    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        exit_with(e);
    }

    let dry_run = config.dry_run;
    let engine = PresentEngine::new(config, NbconvertConverter::new());

    if dry_run {
        tracing::info!("🔍 DRY RUN MODE - nothing will be staged or served");
        if let Err(e) = perform_dry_run(&engine) {
            exit_with(e);
        }
        return;
    }

    match engine.run().await {
        Ok(staging_root) => {
            tracing::info!("✅ Presentation finished, {} cleaned up", staging_root.display());
        }
        Err(e) => exit_with(e),
    }
}

fn perform_dry_run(engine: &PresentEngine<CliConfig, NbconvertConverter>) -> ipynb_present::Result<()> {
    let cwd = std::env::current_dir()?;
    let plan = engine.plan(&cwd)?;

    println!("📋 Presentation plan:");
    println!("  Notebook: {}", plan.notebook.display());
    if plan.others.is_empty() {
        println!("  Other files: none");
    } else {
        println!("  Other files:");
        for other in &plan.others {
            let marker = if other.exists() { "✅" } else { "❌ missing" };
            println!("    {} {}", other.display(), marker);
        }
    }
    match &plan.static_dir {
        Some(selection) => println!(
            "  Static folder: {} ({})",
            selection.path.display(),
            selection.source
        ),
        None => println!("  Static folder: none, slides are staged in the temp dir root"),
    }
    println!("  Command: {}", plan.command_line());

    Ok(())
}

fn exit_with(e: PresentError) -> ! {
    tracing::error!(
        "❌ ipynb-present failed: {} (Category: {:?})",
        e,
        e.category()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    std::process::exit(e.exit_code());
}
