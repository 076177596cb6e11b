use staticd::config::Config;
use staticd::logger;
use staticd::server::{signal, Server};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = Config::load()?;
    logger::init(&cfg)?;

    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: Config) -> Result<(), Box<dyn std::error::Error>> {
    let server = Server::bind(&cfg)?;
    logger::log_server_start(&server.local_addr()?, &cfg);

    signal::start_signal_handler(server.shutdown_handle());

    server.run().await?;
    Ok(())
}
