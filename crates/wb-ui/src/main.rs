//! Native demo: the overlay running against the in-memory reference
//! host.

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use std::sync::Arc;
    use wb_host::MemoryHost;
    use wb_ui::{UiConfig, WorldbookApp};

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_target(false)
        .init();

    tracing::info!("starting worldbook overlay demo");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Worldbook Overlay Demo")
            .with_inner_size([1280.0, 720.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };

    let host = Arc::new(MemoryHost::demo());
    eframe::run_native(
        "Worldbook Overlay Demo",
        native_options,
        Box::new(move |_cc| {
            Ok(Box::new(WorldbookApp::new(host, UiConfig::default())) as Box<dyn eframe::App>)
        }),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {e}"))?;

    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // On wasm32 the library's `start` entry point drives everything.
}
