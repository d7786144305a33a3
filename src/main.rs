use staticd::config::Config;
use staticd::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let cfg = match Config::from_args(&args) {
        Ok(cfg) => cfg,
        Err(e) => {
            let program = args.first().map(String::as_str).unwrap_or("staticd");
            eprintln!("{e}");
            eprintln!(
                "usage: {program} <document-root> <port>\n\n\
                 document-root: where the server resources are located.\n\
                 port: port to bind the server to."
            );
            std::process::exit(1);
        }
    };

    tokio::select! {
        res = server::listener::run(&cfg) => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
