//! Worldbook overlay UI.
//!
//! Two components on top of the host contract: a draggable launcher
//! icon that survives anywhere in the viewport, and a modal panel
//! listing the currently enabled world-info entries with a bulk
//! disable action. [`WorldbookApp`] wires them to a [`wb_host::WorldHost`].

pub mod app;
pub mod config;
pub mod launcher;
pub mod panel;
pub mod style;

pub use app::WorldbookApp;
pub use config::UiConfig;
pub use launcher::{Launcher, LauncherEvent};
pub use panel::{EntryPanelModal, EntryPanelResult, EntryRow, PanelState, PanelTemplate};

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use wasm_bindgen::JsCast;

    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    wasm_bindgen_futures::spawn_local(async {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .expect("no document");
        let canvas = document
            .get_element_by_id("wb_canvas")
            .expect("canvas `wb_canvas` missing")
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .expect("`wb_canvas` is not a canvas element");

        let host = std::sync::Arc::new(wb_host::MemoryHost::demo());
        eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(move |_cc| {
                    Ok(Box::new(WorldbookApp::new(host, UiConfig::default()))
                        as Box<dyn eframe::App>)
                }),
            )
            .await
            .expect("Failed to start eframe");
    });
}
