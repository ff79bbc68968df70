//! Entry panel modal.
//!
//! Lists the currently enabled world-info entries as checkable rows
//! and offers a bulk disable action. The row list is rebuilt from
//! scratch on every `show()` — no diffing; re-render-on-open is the
//! whole sync story.

use crate::style;
use egui::{Color32, RichText, ScrollArea};
use serde::{Deserialize, Serialize};
use wb_host::{Entry, EntryId};

/// Panel chrome strings, fetched from the host once at first open.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelTemplate {
    pub title: String,
    pub empty_notice: String,
    pub disable_label: String,
    pub close_label: String,
}

impl Default for PanelTemplate {
    fn default() -> Self {
        Self {
            title: "Worldbook entries".to_string(),
            empty_notice: "No enabled worldbook entries.".to_string(),
            disable_label: "Disable selected".to_string(),
            close_label: "Close".to_string(),
        }
    }
}

/// One checkable row.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryRow {
    /// Resolved uid-or-key identifier carried as row metadata.
    pub id: EntryId,
    /// Display label (the entry's key).
    pub label: String,
    pub checked: bool,
}

/// Panel visibility state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelState {
    #[default]
    Closed,
    Open,
}

/// Result from one frame of the panel.
#[derive(Debug, Clone, PartialEq)]
pub enum EntryPanelResult {
    /// No action taken.
    None,
    /// User triggered the bulk disable with this selection (possibly
    /// empty — the caller decides how to complain).
    DisableSelected(Vec<EntryId>),
    /// User closed the panel.
    Closed,
}

/// Entry panel modal state.
pub struct EntryPanelModal {
    state: PanelState,
    /// Chrome strings; `None` until the host template resolves. Rows
    /// are not rendered before then.
    template: Option<PanelTemplate>,
    rows: Vec<EntryRow>,
    width: f32,
    row_list_max_height: f32,
}

impl Default for EntryPanelModal {
    fn default() -> Self {
        Self::new(360.0, 260.0)
    }
}

impl EntryPanelModal {
    pub fn new(width: f32, row_list_max_height: f32) -> Self {
        Self {
            state: PanelState::Closed,
            template: None,
            rows: Vec::new(),
            width,
            row_list_max_height,
        }
    }

    pub fn state(&self) -> PanelState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == PanelState::Open
    }

    pub fn has_template(&self) -> bool {
        self.template.is_some()
    }

    pub fn set_template(&mut self, template: PanelTemplate) {
        self.template = Some(template);
    }

    /// Rebuild rows from the live collection and open. Safe to call
    /// while already open — the list is rebuilt either way.
    pub fn show(&mut self, entries: &[Entry]) {
        self.render(entries);
        self.state = PanelState::Open;
    }

    /// Open before the template has resolved: a spinner renders until
    /// [`set_template`](Self::set_template) lands and the caller
    /// re-renders.
    pub fn open_pending(&mut self) {
        self.rows.clear();
        self.state = PanelState::Open;
    }

    /// Close. Rows are kept as-is; the next `show()` rebuilds them.
    pub fn hide(&mut self) {
        self.state = PanelState::Closed;
    }

    /// Full clear-and-repopulate from the entry collection: one
    /// unchecked row per enabled entry, in host order.
    pub fn render(&mut self, entries: &[Entry]) {
        self.rows = entries
            .iter()
            .filter(|e| e.enabled)
            .map(|e| EntryRow {
                id: e.resolved_id(),
                label: e.key.clone(),
                checked: false,
            })
            .collect();
    }

    /// Identifiers of the rows checked right now.
    pub fn collect_selection(&self) -> Vec<EntryId> {
        self.rows
            .iter()
            .filter(|r| r.checked)
            .map(|r| r.id.clone())
            .collect()
    }

    pub fn rows(&self) -> &[EntryRow] {
        &self.rows
    }

    /// Set a row's checkbox state.
    pub fn set_checked(&mut self, index: usize, checked: bool) {
        if let Some(row) = self.rows.get_mut(index) {
            row.checked = checked;
        }
    }

    /// Render the modal.
    pub fn ui(&mut self, ctx: &egui::Context) -> EntryPanelResult {
        if self.state != PanelState::Open {
            return EntryPanelResult::None;
        }

        let mut result = EntryPanelResult::None;
        let mut should_close = false;

        let template = self.template.clone();
        let title = template
            .as_ref()
            .map(|t| t.title.clone())
            .unwrap_or_default();

        egui::Window::new(title)
            .id(egui::Id::new("wb_entry_panel"))
            .collapsible(false)
            .resizable(false)
            .default_width(self.width)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                let Some(template) = template else {
                    // Template fetch still in flight.
                    ui.spinner();
                    return;
                };

                if ui.input(|i| i.key_pressed(egui::Key::Escape)) {
                    should_close = true;
                    result = EntryPanelResult::Closed;
                }

                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(format!("{} enabled", self.rows.len()))
                            .size(11.0)
                            .color(Color32::GRAY),
                    );
                });
                ui.separator();

                if self.rows.is_empty() {
                    ui.label(
                        RichText::new(&template.empty_notice)
                            .color(style::PLACEHOLDER_TEXT)
                            .italics(),
                    );
                } else {
                    ScrollArea::vertical()
                        .max_height(self.row_list_max_height)
                        .show(ui, |ui| {
                            for row in &mut self.rows {
                                ui.checkbox(&mut row.checked, &row.label);
                            }
                        });
                }

                ui.add_space(8.0);
                ui.separator();

                ui.horizontal(|ui| {
                    if !self.rows.is_empty() && ui.button(&template.disable_label).clicked() {
                        result = EntryPanelResult::DisableSelected(self.collect_selection());
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button(&template.close_label).clicked() {
                            should_close = true;
                            result = EntryPanelResult::Closed;
                        }
                    });
                });
            });

        if should_close {
            self.hide();
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries() -> Vec<Entry> {
        vec![
            Entry::new(Some("a"), "Foo", true),
            Entry::new(Some("b"), "Bar", false),
            Entry::new(None, "Baz", true),
        ]
    }

    #[test]
    fn render_lists_only_enabled_entries() {
        let mut panel = EntryPanelModal::default();
        panel.render(&entries());

        let labels: Vec<_> = panel.rows().iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["Foo", "Baz"]);
        assert!(panel.rows().iter().all(|r| !r.checked));
    }

    #[test]
    fn rows_carry_resolved_identifiers() {
        let mut panel = EntryPanelModal::default();
        panel.render(&entries());

        assert_eq!(panel.rows()[0].id, EntryId::Uid("a".into()));
        assert_eq!(panel.rows()[1].id, EntryId::Key("Baz".into()));
    }

    #[test]
    fn zero_enabled_entries_means_zero_rows() {
        let mut panel = EntryPanelModal::default();
        panel.render(&[Entry::new(Some("b"), "Bar", false)]);

        // The placeholder renders at ui() time; the row list itself is
        // empty.
        assert!(panel.rows().is_empty());
    }

    #[test]
    fn collect_selection_returns_checked_ids_only() {
        let mut panel = EntryPanelModal::default();
        panel.render(&entries());
        panel.set_checked(1, true);

        assert_eq!(panel.collect_selection(), vec![EntryId::Key("Baz".into())]);
    }

    #[test]
    fn show_is_idempotent_for_unchanged_entries() {
        let mut panel = EntryPanelModal::default();
        let entries = entries();

        panel.show(&entries);
        let first: Vec<_> = panel.rows().to_vec();
        panel.show(&entries);

        assert!(panel.is_open());
        assert_eq!(panel.rows(), first.as_slice());
    }

    #[test]
    fn show_drops_previous_selection() {
        let mut panel = EntryPanelModal::default();
        let entries = entries();

        panel.show(&entries);
        panel.set_checked(0, true);
        panel.show(&entries);

        assert!(panel.collect_selection().is_empty());
    }

    #[test]
    fn hide_keeps_rows_but_closes() {
        let mut panel = EntryPanelModal::default();
        panel.show(&entries());
        panel.hide();

        assert!(!panel.is_open());
        assert_eq!(panel.rows().len(), 2);
    }

    #[test]
    fn reshow_reflects_entry_changes() {
        let mut panel = EntryPanelModal::default();
        let mut entries = entries();
        panel.show(&entries);
        assert_eq!(panel.rows().len(), 2);

        entries[0].enabled = false;
        panel.show(&entries);
        assert_eq!(panel.rows().len(), 1);
        assert_eq!(panel.rows()[0].label, "Baz");
    }

    #[test]
    fn template_deserializes_with_field_defaults() {
        let template: PanelTemplate = serde_json::from_str("{}").unwrap();
        assert_eq!(template, PanelTemplate::default());

        let template: PanelTemplate =
            serde_json::from_str("{\"title\":\"Lore\"}").unwrap();
        assert_eq!(template.title, "Lore");
        assert_eq!(template.close_label, "Close");
    }
}
