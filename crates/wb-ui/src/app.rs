//! Application glue: launcher + entry panel over a host.
//!
//! Async host calls (template fetch, persist) run through pending-slot
//! handles polled at the top of every frame; everything else is
//! synchronous against the live entry collection.

use crate::config::UiConfig;
use crate::launcher::{Launcher, LauncherEvent};
use crate::panel::{EntryPanelModal, EntryPanelResult, PanelTemplate};
use std::sync::{Arc, Mutex};
use wb_host::{apply_status, EntryId, HostError, NoticeLevel, WorldHost};

type PendingSlot<T> = Arc<Mutex<Option<Result<T, HostError>>>>;

/// Main overlay application.
pub struct WorldbookApp {
    host: Arc<dyn WorldHost>,
    config: UiConfig,

    launcher: Launcher,
    panel: EntryPanelModal,

    /// Last host failure, surfaced in a banner. Never retried.
    error: Option<String>,

    // Async result holders
    pending_template: Option<PendingSlot<String>>,
    pending_persist: Option<PendingSlot<()>>,

    /// Change count carried across the persist suspension.
    persist_count: usize,
    /// Target state of the in-flight persist (false = disabled).
    persist_target: bool,

    // Tokio runtime for native builds
    #[cfg(not(target_arch = "wasm32"))]
    runtime: Arc<tokio::runtime::Runtime>,
}

impl WorldbookApp {
    pub fn new(host: Arc<dyn WorldHost>, config: UiConfig) -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        let runtime = Arc::new(
            tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()
                .expect("Failed to create tokio runtime"),
        );

        let launcher = Launcher::new(&config);
        let panel = EntryPanelModal::new(config.panel_width, config.row_list_max_height);

        Self {
            host,
            config,
            launcher,
            panel,
            error: None,
            pending_template: None,
            pending_persist: None,
            persist_count: 0,
            persist_target: false,
            #[cfg(not(target_arch = "wasm32"))]
            runtime,
        }
    }

    // =========================================================================
    // HOST CALLS
    // =========================================================================

    fn fetch_template(&mut self) {
        if self.pending_template.is_some() {
            return;
        }

        let host = self.host.clone();
        let name = self.config.template_name.clone();
        let result = Arc::new(Mutex::new(None));
        let result_clone = result.clone();

        #[cfg(target_arch = "wasm32")]
        {
            wasm_bindgen_futures::spawn_local(async move {
                *result_clone.lock().unwrap() = Some(host.fetch_template(&name).await);
            });
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            self.runtime.spawn(async move {
                *result_clone.lock().unwrap() = Some(host.fetch_template(&name).await);
            });
        }

        self.pending_template = Some(result);
    }

    fn start_persist(&mut self) {
        let host = self.host.clone();
        let result = Arc::new(Mutex::new(None));
        let result_clone = result.clone();

        #[cfg(target_arch = "wasm32")]
        {
            wasm_bindgen_futures::spawn_local(async move {
                *result_clone.lock().unwrap() = Some(host.persist_entries().await);
            });
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            self.runtime.spawn(async move {
                *result_clone.lock().unwrap() = Some(host.persist_entries().await);
            });
        }

        self.pending_persist = Some(result);
    }

    // =========================================================================
    // ASYNC RESULT HANDLING
    // =========================================================================

    fn check_pending(&mut self) {
        let template_result = self
            .pending_template
            .as_ref()
            .and_then(|p| p.try_lock().ok())
            .and_then(|mut g| g.take());
        if let Some(result) = template_result {
            self.pending_template = None;
            match result {
                Ok(raw) => match serde_json::from_str::<PanelTemplate>(&raw) {
                    Ok(template) => {
                        self.panel.set_template(template);
                        if self.panel.is_open() {
                            self.refresh_panel();
                        }
                    }
                    Err(e) => {
                        self.panel.hide();
                        self.fail(format!("panel template is not valid JSON: {e}"));
                    }
                },
                Err(e) => {
                    self.panel.hide();
                    self.fail(e.to_string());
                }
            }
        }

        let persist_result = self
            .pending_persist
            .as_ref()
            .and_then(|p| p.try_lock().ok())
            .and_then(|mut g| g.take());
        if let Some(result) = persist_result {
            self.pending_persist = None;
            match result {
                Ok(()) => {
                    let direction = if self.persist_target {
                        "enabled"
                    } else {
                        "disabled"
                    };
                    let noun = if self.persist_count == 1 {
                        "entry"
                    } else {
                        "entries"
                    };
                    self.host.notify(
                        NoticeLevel::Success,
                        &format!("Successfully {direction} {} {noun}.", self.persist_count),
                    );
                    self.panel.hide();
                }
                // The flips stay in memory; the panel stays open so the
                // user sees nothing was committed.
                Err(e) => self.fail(e.to_string()),
            }
        }
    }

    // =========================================================================
    // EVENT HANDLERS
    // =========================================================================

    /// Open the panel: first open kicks off the one-shot template
    /// fetch, later opens re-render the row list from the live
    /// collection.
    fn open_panel(&mut self) {
        self.error = None;
        if self.panel.has_template() {
            self.refresh_panel();
        } else {
            self.panel.open_pending();
            self.fetch_template();
        }
    }

    /// Rebuild the row list from the host, failing fast when the data
    /// source is unavailable.
    fn refresh_panel(&mut self) {
        // The guard-holding Result must be consumed before `fail`
        // takes `&mut self`.
        let panel = &mut self.panel;
        let result = self.host.entries().map(|entries| panel.show(&entries));
        if let Err(e) = result {
            self.panel.hide();
            self.fail(e.to_string());
        }
    }

    fn handle_panel_result(&mut self, result: EntryPanelResult) {
        match result {
            EntryPanelResult::None => {}
            EntryPanelResult::DisableSelected(ids) => self.apply_status_change(&ids, false),
            EntryPanelResult::Closed => {
                // Modal hid itself, nothing to do.
            }
        }
    }

    /// Flip the selected entries to `enabled`, then persist. The empty
    /// and no-op selections never reach the host's storage.
    fn apply_status_change(&mut self, ids: &[EntryId], enabled: bool) {
        if ids.is_empty() {
            self.host
                .notify(NoticeLevel::Warning, "Select at least one entry first.");
            return; // panel stays open
        }

        // Consume the guard-holding Result in one statement so the
        // entry borrow ends before `fail`/`start_persist` take
        // `&mut self`.
        let result = self
            .host
            .entries()
            .map(|mut entries| apply_status(&mut entries, ids, enabled));
        let changed = match result {
            Ok(changed) => changed,
            Err(e) => {
                self.panel.hide();
                self.fail(e.to_string());
                return;
            }
        };

        if changed == 0 {
            self.host
                .notify(NoticeLevel::Info, "No entry state was changed.");
            self.panel.hide();
        } else {
            self.persist_count = changed;
            self.persist_target = enabled;
            self.start_persist();
        }
    }

    fn fail(&mut self, message: String) {
        tracing::error!("{message}");
        self.error = Some(message);
    }
}

impl eframe::App for WorldbookApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.check_pending();

        // Startup gate: nothing mounts until the host reports ready.
        if !self.launcher.is_mounted() {
            if self.host.is_ready() {
                self.launcher.mount(ctx);
            } else {
                ctx.request_repaint_after(std::time::Duration::from_millis(200));
                return;
            }
        }

        if self.pending_template.is_some() || self.pending_persist.is_some() {
            ctx.request_repaint();
        }

        if self.launcher.ui(ctx) == LauncherEvent::Activated {
            self.open_panel();
        }

        let result = self.panel.ui(ctx);
        self.handle_panel_result(result);

        if let Some(err) = self.error.clone() {
            egui::TopBottomPanel::bottom("wb_error_banner").show(ctx, |ui| {
                ui.colored_label(egui::Color32::RED, err);
            });
        }
    }
}
