use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "ipynb_present=debug,info"
    } else {
        "ipynb_present=info"
    }
}

/// `RUST_LOG` wins over `--verbose`; `--log-json` switches to JSON lines.
pub fn init_logger(verbose: bool, log_json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));
    let layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    let registry = tracing_subscriber::registry().with(filter);
    if log_json {
        registry.with(layer.json()).init();
    } else {
        registry.with(layer.compact()).init();
    }
}
