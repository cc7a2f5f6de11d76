use anyhow::{bail, Result};
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use std::time::Duration;
use tracing::info;

use crate::catalog::{Catalog, CatalogEntry};
use crate::config::{Config, ThemeMode};
use crate::services::{Sink, Workspace};
use crate::shape::ShapeResult;
use crate::tui::{
    self,
    device_picker::{self, PickerAction, PickerState},
    Theme,
};

/// Outcome of a finished selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// User picked this device
    Chosen(CatalogEntry),
    /// User backed out of the vendor list
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Stage {
    Vendor,
    Model { vendor: String, vendor_index: usize },
}

/// Two-stage picker: vendors first, then that vendor's models.
///
/// Cancelling the model list returns to the vendor list with the previous
/// vendor still highlighted.
#[derive(Debug, Clone)]
pub struct DeviceSelection<'a> {
    catalog: &'a Catalog,
    stage: Stage,
    picker: PickerState,
}

impl<'a> DeviceSelection<'a> {
    /// Starts on the vendor list.
    #[must_use]
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            stage: Stage::Vendor,
            picker: Self::vendor_picker(catalog),
        }
    }

    fn vendor_picker(catalog: &Catalog) -> PickerState {
        let vendors = catalog.vendors().into_iter().map(str::to_string).collect();
        PickerState::new("Select vendor", vendors)
    }

    /// Picker currently shown.
    #[must_use]
    pub fn picker(&self) -> &PickerState {
        &self.picker
    }

    /// Feeds one key press. Returns the outcome once the user is done.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Selection> {
        let action = device_picker::handle_input(&mut self.picker, key)?;

        match (&self.stage, action) {
            (Stage::Vendor, PickerAction::Cancel) => Some(Selection::Cancelled),
            (Stage::Vendor, PickerAction::Select(index)) => {
                let vendor = self.picker.items.get(index)?.clone();
                let models = self
                    .catalog
                    .models(&vendor)
                    .into_iter()
                    .map(|entry| entry.model.clone())
                    .collect();
                self.picker = PickerState::new(format!("Select {vendor} model"), models);
                self.stage = Stage::Model {
                    vendor,
                    vendor_index: index,
                };
                None
            }
            (Stage::Model { vendor_index, .. }, PickerAction::Cancel) => {
                let mut picker = Self::vendor_picker(self.catalog);
                picker.selected = *vendor_index;
                self.picker = picker;
                self.stage = Stage::Vendor;
                None
            }
            (Stage::Model { vendor, .. }, PickerAction::Select(index)) => {
                let model = self.picker.items.get(index)?;
                self.catalog
                    .find(vendor, model)
                    .cloned()
                    .map(Selection::Chosen)
            }
        }
    }
}

/// Runs the vendor/model picker in the terminal.
///
/// Returns `None` when the user cancels.
pub fn run_device_picker_terminal(
    catalog: &Catalog,
    theme_mode: ThemeMode,
) -> Result<Option<CatalogEntry>> {
    if catalog.is_empty() {
        bail!("No devices found in {}", catalog.root().display());
    }

    let mut terminal = tui::setup_terminal()?;
    let mut selection = DeviceSelection::new(catalog);

    let outcome = loop {
        // Re-detect OS theme on each loop iteration to respond to system theme changes
        let theme = Theme::from_mode(theme_mode);

        if let Err(e) = terminal.draw(|f| device_picker::render(f, selection.picker(), &theme)) {
            tui::restore_terminal(terminal)?;
            return Err(e.into());
        }

        match event::poll(Duration::from_millis(100)) {
            Ok(false) => continue,
            Ok(true) => {}
            Err(e) => {
                tui::restore_terminal(terminal)?;
                return Err(e.into());
            }
        }

        match event::read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                if let Some(outcome) = selection.handle_key(key) {
                    break outcome;
                }
            }
            Ok(_) => {}
            Err(e) => {
                tui::restore_terminal(terminal)?;
                return Err(e.into());
            }
        }
    };

    tui::restore_terminal(terminal)?;

    Ok(match outcome {
        Selection::Chosen(entry) => Some(entry),
        Selection::Cancelled => None,
    })
}

/// Interactive flow: pick a device, render it, deliver to the configured sink.
///
/// Returns the delivered shape, or `None` when the user cancelled.
pub fn run_interactive(config: &Config, workspace: &Workspace) -> Result<Option<ShapeResult>> {
    let catalog = workspace.catalog()?;

    let Some(entry) = run_device_picker_terminal(&catalog, config.ui.theme_mode)? else {
        return Ok(None);
    };

    info!(vendor = %entry.vendor, model = %entry.model, "selected device");
    let device = entry.load()?;
    let shape = workspace.render(&device)?;
    Sink::from(config.output.sink).deliver(&shape)?;
    Ok(Some(shape))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};
    use std::path::PathBuf;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn entry(vendor: &str, model: &str) -> CatalogEntry {
        CatalogEntry {
            path: PathBuf::from(format!("/devices/{vendor}/{model}.json")),
            vendor: vendor.to_string(),
            model: model.to_string(),
        }
    }

    fn catalog() -> Catalog {
        Catalog::from_entries(
            PathBuf::from("/devices"),
            vec![
                entry("Blackmagic", "ATEM Mini"),
                entry("AJA", "Ki Pro"),
                entry("Blackmagic", "HyperDeck"),
            ],
        )
    }

    #[test]
    fn test_vendor_then_model() {
        let catalog = catalog();
        let mut selection = DeviceSelection::new(&catalog);
        assert_eq!(selection.picker().items, vec!["AJA", "Blackmagic"]);

        assert_eq!(selection.handle_key(key(KeyCode::Down)), None);
        assert_eq!(selection.handle_key(key(KeyCode::Enter)), None);
        assert_eq!(selection.picker().items, vec!["ATEM Mini", "HyperDeck"]);

        selection.handle_key(key(KeyCode::Down));
        assert_eq!(
            selection.handle_key(key(KeyCode::Enter)),
            Some(Selection::Chosen(entry("Blackmagic", "HyperDeck")))
        );
    }

    #[test]
    fn test_escape_from_models_returns_to_vendors() {
        let catalog = catalog();
        let mut selection = DeviceSelection::new(&catalog);
        selection.handle_key(key(KeyCode::Down));
        selection.handle_key(key(KeyCode::Enter));

        assert_eq!(selection.handle_key(key(KeyCode::Esc)), None);
        assert_eq!(selection.picker().items, vec!["AJA", "Blackmagic"]);
        assert_eq!(selection.picker().current(), Some("Blackmagic"));

        assert_eq!(
            selection.handle_key(key(KeyCode::Esc)),
            Some(Selection::Cancelled)
        );
    }

    #[test]
    fn test_empty_catalog_is_an_error() {
        let catalog = Catalog::from_entries(PathBuf::from("/nowhere"), Vec::new());
        let err = run_device_picker_terminal(&catalog, ThemeMode::Dark).unwrap_err();
        assert!(err.to_string().contains("No devices found"));
    }
}
