use tracing_subscriber::EnvFilter;

use sts_whoami::app;
use sts_whoami::context::Context;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let context = Context::new();
    let status = app::run(
        &context,
        std::env::args_os(),
        &mut std::io::stdout().lock(),
        &mut std::io::stderr(),
    )
    .await;

    std::process::exit(status.code());
}
