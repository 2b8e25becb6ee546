fn main() -> anyhow::Result<()> {
    simple_logger::SimpleLogger::new()
        .with_colors(true)
        .with_threads(true)
        .with_local_timestamps()
        .init()?;

    let channels = notibar_bridge::BridgeChannels::default();
    notibar_backend::run(channels.backend_rx, channels.backend_tx);
    notibar_frontend::run(channels.frontend_rx, channels.frontend_tx)
}
