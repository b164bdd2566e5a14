//! Application shell: navigation plus the active demo page.

use crate::pages;
use crate::state::{DemoState, Page};

pub struct GridformApp {
    state: DemoState,
}

impl GridformApp {
    /// Called once before the first frame.
    pub fn new(state: DemoState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &DemoState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut DemoState {
        &mut self.state
    }
}

impl eframe::App for GridformApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.selectable_value(&mut self.state.page, Page::InputField, "Input Field");
                ui.selectable_value(&mut self.state.page, Page::DataTable, "Data Table");
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| match self.state.page {
            Page::Home => {
                ui.label("Select a component from above \u{2b06}");
            }
            Page::InputField => pages::input_page(&mut self.state, ui),
            Page::DataTable => pages::table_page(&mut self.state, ui),
        });
    }
}
