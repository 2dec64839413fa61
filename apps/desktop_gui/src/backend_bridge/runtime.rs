//! Runtime bridge between UI command queue and backend event intake.

use std::{sync::Arc, thread};

use client_core::{
    ContactStore, ContactsBackend, CreateOutcome, HttpContactsBackend, RefreshOutcome,
};
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

pub fn launch(cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>, api_base_url: String) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::BackendUnavailable(format!(
                    "backend worker startup failure: {err}"
                )));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            let backend = Arc::new(HttpContactsBackend::new(api_base_url));
            tracing::info!(api = %backend.base_url(), "backend worker ready");
            let mut store = ContactStore::new(backend);
            let _ = ui_tx.try_send(UiEvent::Info("Backend worker ready".to_string()));

            handle_command(&mut store, BackendCommand::Refresh, &ui_tx).await;
            while let Ok(cmd) = cmd_rx.recv() {
                handle_command(&mut store, cmd, &ui_tx).await;
            }
            tracing::info!("ui command queue closed; backend worker exiting");
        });
    });
}

fn publish_list<B: ContactsBackend + ?Sized>(
    store: &ContactStore<B>,
    outcome: RefreshOutcome,
    ui_tx: &Sender<UiEvent>,
) {
    if let RefreshOutcome::Replaced { .. } = outcome {
        let _ = ui_tx.try_send(UiEvent::ContactsReplaced(store.contacts().to_vec()));
    }
}

pub async fn handle_command<B: ContactsBackend + ?Sized>(
    store: &mut ContactStore<B>,
    cmd: BackendCommand,
    ui_tx: &Sender<UiEvent>,
) {
    match cmd {
        BackendCommand::Refresh => {
            let outcome = store.refresh().await;
            publish_list(store, outcome, ui_tx);
        }
        BackendCommand::Create { draft } => {
            let outcome = store.create(&draft).await;
            if let CreateOutcome::Created(refresh) = outcome {
                publish_list(store, refresh, ui_tx);
            }
            // The form stays in its submitting state until this arrives, so
            // wait for queue space instead of dropping it.
            if let Err(err) = ui_tx.send(UiEvent::SubmitFinished {
                created: outcome.is_created(),
            }) {
                tracing::warn!("ui gone before submit completion was delivered: {err}");
            }
        }
        BackendCommand::Delete { id } => {
            let outcome = store.remove(&id).await;
            publish_list(store, outcome.refresh(), ui_tx);
        }
    }
}
