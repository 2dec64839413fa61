use client_core::{ContactFormController, Field};
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::domain::{Contact, ContactId};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::{events::UiEvent, orchestration::dispatch_backend_command};

const FORM_FIELDS: [(Field, &str); 4] = [
    (Field::Name, "Name *"),
    (Field::Email, "Email *"),
    (Field::Phone, "Phone *"),
    (Field::Message, "Message (Optional)"),
];

pub struct ContactManagerApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    form: ContactFormController,
    contacts: Vec<Contact>,
    status: String,
}

impl ContactManagerApp {
    pub fn new(cmd_tx: Sender<BackendCommand>, ui_rx: Receiver<UiEvent>) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            form: ContactFormController::new(),
            contacts: Vec::new(),
            status: "Loading contacts...".to_string(),
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::Info(message) => {
                    self.status = message;
                }
                UiEvent::ContactsReplaced(contacts) => {
                    self.status = format!("{} contact(s)", contacts.len());
                    self.contacts = contacts;
                }
                UiEvent::SubmitFinished { created } => {
                    tracing::debug!(created, "submit finished");
                    self.form.finish_submit();
                }
                UiEvent::BackendUnavailable(message) => {
                    self.status = message;
                }
            }
        }
    }

    fn submit(&mut self) {
        let Some(draft) = self.form.begin_submit() else {
            return;
        };
        if !dispatch_backend_command(
            &self.cmd_tx,
            BackendCommand::Create { draft },
            &mut self.status,
        ) {
            self.form.finish_submit();
        }
    }

    fn delete(&mut self, id: ContactId) {
        dispatch_backend_command(&self.cmd_tx, BackendCommand::Delete { id }, &mut self.status);
    }

    fn show_form(&mut self, ui: &mut egui::Ui) {
        ui.heading("Add Contact");
        ui.add_space(8.0);

        for (field, hint) in FORM_FIELDS {
            let mut value = self.form.value(field).to_string();
            let edit = if field == Field::Message {
                egui::TextEdit::multiline(&mut value).desired_rows(3)
            } else {
                egui::TextEdit::singleline(&mut value)
            };
            let response = ui.add(
                edit.id_salt(field.as_str())
                    .hint_text(hint)
                    .desired_width(f32::INFINITY),
            );
            if response.changed() {
                self.form.update_field(field, value);
            }
            if let Some(error) = self.form.error(field) {
                ui.colored_label(ui.visuals().error_fg_color, error);
            }
            ui.add_space(6.0);
        }

        let label = if self.form.is_submitting() {
            "Adding..."
        } else {
            "Add Contact"
        };
        let enabled = self.form.is_valid() && !self.form.is_submitting();
        if ui.add_enabled(enabled, egui::Button::new(label)).clicked() {
            self.submit();
        }
    }

    fn show_list(&mut self, ui: &mut egui::Ui) {
        ui.heading("Contacts");
        ui.add_space(8.0);

        if self.contacts.is_empty() {
            ui.label("No contacts found.");
            return;
        }

        let mut delete_target = None;
        egui::ScrollArea::vertical().show(ui, |ui| {
            for contact in &self.contacts {
                ui.push_id(contact.id.as_str(), |ui| {
                    ui.group(|ui| {
                        ui.horizontal(|ui| {
                            ui.vertical(|ui| {
                                ui.strong(&contact.name);
                                ui.label(&contact.email);
                                ui.label(&contact.phone);
                                if !contact.message.is_empty() {
                                    ui.small(&contact.message);
                                }
                            });
                            ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                                if ui.button("X").clicked() {
                                    delete_target = Some(contact.id.clone());
                                }
                            });
                        });
                    });
                });
            }
        });

        if let Some(id) = delete_target {
            self.delete(id);
        }
    }
}

impl eframe::App for ContactManagerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        egui::TopBottomPanel::top("title_bar").show(ctx, |ui| {
            ui.heading("Contact Manager");
        });
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.label(&self.status);
        });
        egui::SidePanel::left("form_card")
            .resizable(false)
            .exact_width(320.0)
            .show(ctx, |ui| self.show_form(ui));
        egui::CentralPanel::default().show(ctx, |ui| self.show_list(ui));

        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::bounded;
    use shared::domain::ContactDraft;

    fn app() -> (ContactManagerApp, Receiver<BackendCommand>, Sender<UiEvent>) {
        let (cmd_tx, cmd_rx) = bounded(8);
        let (ui_tx, ui_rx) = bounded(8);
        (ContactManagerApp::new(cmd_tx, ui_rx), cmd_rx, ui_tx)
    }

    #[test]
    fn invalid_form_does_not_queue_create() {
        let (mut app, cmd_rx, _ui_tx) = app();
        app.form.update_field(Field::Email, "a@b.com");
        app.form.update_field(Field::Phone, "555");

        app.submit();

        assert!(cmd_rx.try_recv().is_err());
        assert!(!app.form.is_submitting());
    }

    #[test]
    fn valid_form_queues_create_and_waits_for_completion() {
        let (mut app, cmd_rx, ui_tx) = app();
        app.form.update_field(Field::Name, "Ana");
        app.form.update_field(Field::Email, "ana@x.com");
        app.form.update_field(Field::Phone, "555");

        app.submit();

        assert_eq!(
            cmd_rx.try_recv().ok(),
            Some(BackendCommand::Create {
                draft: ContactDraft {
                    name: "Ana".into(),
                    email: "ana@x.com".into(),
                    phone: "555".into(),
                    message: String::new(),
                }
            })
        );
        assert!(app.form.is_submitting());

        ui_tx
            .send(UiEvent::SubmitFinished { created: false })
            .expect("send");
        app.process_ui_events();
        assert!(!app.form.is_submitting());
        assert_eq!(app.form.draft(), &ContactDraft::default());
    }

    #[test]
    fn replaced_list_is_displayed_wholesale() {
        let (mut app, _cmd_rx, ui_tx) = app();
        let contact = Contact {
            id: ContactId::from("1"),
            name: "Bo".into(),
            email: "bo@x.com".into(),
            phone: "1".into(),
            message: String::new(),
        };
        ui_tx
            .send(UiEvent::ContactsReplaced(vec![contact.clone()]))
            .expect("send");
        app.process_ui_events();
        assert_eq!(app.contacts, vec![contact]);

        ui_tx.send(UiEvent::ContactsReplaced(Vec::new())).expect("send");
        app.process_ui_events();
        assert!(app.contacts.is_empty());
    }

    #[test]
    fn delete_queues_command_for_that_id() {
        let (mut app, cmd_rx, _ui_tx) = app();
        app.delete(ContactId::from("7"));
        assert_eq!(
            cmd_rx.try_recv().ok(),
            Some(BackendCommand::Delete {
                id: ContactId::from("7")
            })
        );
    }

    #[test]
    fn dropped_worker_releases_submitting_flag() {
        let (mut app, cmd_rx, _ui_tx) = app();
        drop(cmd_rx);
        app.form.update_field(Field::Name, "Ana");
        app.form.update_field(Field::Email, "ana@x.com");
        app.form.update_field(Field::Phone, "555");

        app.submit();

        assert!(!app.form.is_submitting());
        assert!(app.status.contains("disconnected"));
    }
}
