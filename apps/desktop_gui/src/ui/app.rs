use crossbeam_channel::{Receiver, Sender, TrySendError};
use eframe::egui;
use shared::domain::{EnquiryForm, FieldEdit, Requirement, SubmissionStatus};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{status_notice, UiEvent};
use crate::controller::validation;

pub struct EnquiryApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    // Local mirror of the controller's form; every edit is forwarded.
    form: EnquiryForm,
    status: SubmissionStatus,
    problems: Vec<&'static str>,
    backend_gone: bool,
}

impl EnquiryApp {
    pub fn new(cmd_tx: Sender<BackendCommand>, ui_rx: Receiver<UiEvent>) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            form: EnquiryForm::default(),
            status: SubmissionStatus::Idle,
            problems: Vec::new(),
            backend_gone: false,
        }
    }

    fn dispatch(&mut self, cmd: BackendCommand) {
        match self.cmd_tx.try_send(cmd) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => {
                tracing::warn!("ui command queue is full; dropping command");
            }
            Err(TrySendError::Disconnected(_)) => self.backend_gone = true,
        }
    }

    fn edited(&mut self, edit: FieldEdit) {
        self.form.apply(edit.clone());
        self.dispatch(BackendCommand::Edit(edit));
    }

    fn drain_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::Status(status) => {
                    self.status = status;
                    if status == SubmissionStatus::Done {
                        // The controller reset its fields; mirror that.
                        self.form = EnquiryForm::default();
                    }
                }
                UiEvent::BackendGone => self.backend_gone = true,
            }
        }
    }

    fn text_field(
        &mut self,
        ui: &mut egui::Ui,
        label: &str,
        hint: &str,
        value: String,
        make_edit: fn(String) -> FieldEdit,
    ) {
        ui.label(label);
        let mut value = value;
        let edit = egui::TextEdit::singleline(&mut value)
            .hint_text(hint)
            .desired_width(f32::INFINITY);
        if ui.add(edit).changed() {
            self.edited(make_edit(value));
        }
        ui.add_space(6.0);
    }
}

impl eframe::App for EnquiryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_events();
        if self.status == SubmissionStatus::Sending {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Enquiry / Booking");
            ui.label("Fill out the form and we'll get back to you within 24 hours.");
            ui.add_space(12.0);

            self.text_field(
                ui,
                "Full Name *",
                "Enter your full name",
                self.form.full_name.clone(),
                FieldEdit::FullName,
            );
            self.text_field(
                ui,
                "Phone / WhatsApp *",
                "+91 98765 43210",
                self.form.phone.clone(),
                FieldEdit::Phone,
            );
            self.text_field(
                ui,
                "Email (optional)",
                "your@email.com",
                self.form.email.clone(),
                FieldEdit::Email,
            );

            let mut requirement = self.form.requirement;
            egui::ComboBox::from_label("Requirement")
                .selected_text(requirement.as_str())
                .show_ui(ui, |ui| {
                    for option in Requirement::ALL {
                        ui.selectable_value(&mut requirement, option, option.as_str());
                    }
                });
            if requirement != self.form.requirement {
                self.edited(FieldEdit::Requirement(requirement));
            }
            ui.add_space(6.0);

            self.text_field(
                ui,
                "Address",
                "Where are you staying now?",
                self.form.address.clone(),
                FieldEdit::Address,
            );

            ui.label("Message / Notes");
            let mut message = self.form.message.clone();
            let message_edit = egui::TextEdit::multiline(&mut message)
                .hint_text("Any special request...")
                .desired_width(f32::INFINITY)
                .desired_rows(4);
            if ui.add(message_edit).changed() {
                self.edited(FieldEdit::Message(message));
            }
            ui.add_space(12.0);

            let sending = self.status == SubmissionStatus::Sending;
            let submit_label = if sending { "Sending..." } else { "Submit Enquiry" };
            // The submit control stays disabled for the whole flight of
            // a request; the controller guards re-entrancy as well.
            let submit = ui.add_enabled(
                !sending && !self.backend_gone,
                egui::Button::new(submit_label),
            );
            if submit.clicked() {
                match validation::validate(&self.form) {
                    Ok(()) => {
                        self.problems.clear();
                        self.dispatch(BackendCommand::Submit);
                    }
                    Err(problems) => self.problems = problems,
                }
            }

            for problem in &self.problems {
                ui.colored_label(egui::Color32::LIGHT_RED, *problem);
            }
            if self.problems.is_empty() {
                if let Some(notice) = status_notice(self.status) {
                    ui.label(notice);
                }
            }
            if self.backend_gone {
                ui.colored_label(
                    egui::Color32::LIGHT_RED,
                    "The enquiry service is unavailable; restart the app.",
                );
            }
        });
    }
}
