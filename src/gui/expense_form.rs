//! Expense Form Dialog
//! Five amount fields with OK/Cancel, plus the invalid-input notice.

use crate::data::{FormOutcome, EXPENSE_FIELDS};
use egui::{Align2, RichText};

const FORM_TITLE: &str = "Enter Expense Amounts for Today";
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input for amount.";

/// Entry dialog state. Field text survives between openings.
#[derive(Default)]
pub struct ExpenseForm {
    pub open: bool,
    pub fields: [String; 5],
}

impl ExpenseForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Draw the dialog while open; returns the outcome in the frame the user
    /// confirms or cancels.
    pub fn show(&mut self, ctx: &egui::Context) -> Option<FormOutcome> {
        if !self.open {
            return None;
        }

        let mut outcome = None;
        egui::Window::new(FORM_TITLE)
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                egui::Grid::new("expense_fields")
                    .num_columns(2)
                    .spacing([12.0, 6.0])
                    .show(ui, |ui| {
                        for (label, value) in EXPENSE_FIELDS.iter().zip(self.fields.iter_mut()) {
                            ui.label(format!("Amount for {label}:"));
                            ui.text_edit_singleline(value);
                            ui.end_row();
                        }
                    });

                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("OK").clicked() {
                        outcome = Some(FormOutcome::Submitted(self.fields.clone()));
                    }
                    if ui.button("Cancel").clicked() {
                        outcome = Some(FormOutcome::Cancelled);
                    }
                });
            });

        if outcome.is_some() {
            self.open = false;
        }
        outcome
    }
}

/// Error notice shown after a rejected submission.
#[derive(Default)]
pub struct ErrorNotice {
    message: Option<String>,
}

impl ErrorNotice {
    pub fn raise(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    pub fn is_open(&self) -> bool {
        self.message.is_some()
    }

    pub fn show(&mut self, ctx: &egui::Context) {
        let Some(message) = &self.message else {
            return;
        };

        let mut dismissed = false;
        egui::Window::new("Error")
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.label(RichText::new(message).color(egui::Color32::from_rgb(220, 53, 69)));
                ui.add_space(8.0);
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });

        if dismissed {
            self.message = None;
        }
    }
}
