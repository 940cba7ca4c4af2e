//! Backend worker thread: owns the tokio runtime and the HTTP client, turns
//! queued commands into collaborator calls and calls into UI events.

use std::thread;

use client_core::{
    config::{homepage_url, Settings},
    BabyVisionClient,
};
use crossbeam_channel::{Receiver, Sender};
use tracing::{error, info, warn};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{PreviewImage, UiEvent};

pub fn spawn_backend_thread(
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
    settings: Settings,
) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                error!("failed to build backend runtime: {err}");
                let _ = ui_tx.try_send(UiEvent::BackendStartupFailed {
                    reason: err.to_string(),
                });
                return;
            }
        };

        runtime.block_on(async move {
            let homepage = homepage_url(&settings.api_url);
            info!(api_url = %settings.api_url, %homepage, "backend worker ready");
            let client = BabyVisionClient::new(settings.api_url);
            let _ = ui_tx.try_send(UiEvent::BackendReady { homepage });

            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::GenerateNames { user_input } => {
                        match client.generate_names(&user_input).await {
                            Ok(batch) => {
                                let _ = ui_tx.try_send(UiEvent::NamesGenerated {
                                    names: batch.names,
                                    suggestions: batch.suggestions,
                                });
                            }
                            Err(err) => {
                                warn!(error = %err, "name generation failed");
                                let _ = ui_tx.try_send(UiEvent::NamesFailed);
                            }
                        }
                    }
                    BackendCommand::GeneratePhoto { age, gender } => {
                        match client.generate_photo(age, gender).await {
                            Ok(portrait) => {
                                let preview =
                                    load_portrait_preview(&client, &portrait.image_url).await;
                                let _ =
                                    ui_tx.try_send(UiEvent::PortraitGenerated { portrait, preview });
                            }
                            Err(err) => {
                                warn!(error = %err, "portrait generation failed");
                                let _ = ui_tx.try_send(UiEvent::PortraitFailed);
                            }
                        }
                    }
                }
            }
        });
    });
}

/// Downloads and decodes the portrait for display. Failure here does not fail
/// the flow: the portrait reference is already committed, so the UI falls back
/// to caption plus link.
async fn load_portrait_preview(client: &BabyVisionClient, image_url: &str) -> Option<PreviewImage> {
    let bytes = match client.fetch_image_bytes(image_url).await {
        Ok(bytes) => bytes,
        Err(err) => {
            warn!(error = %err, "portrait download failed; showing caption only");
            return None;
        }
    };

    let decoded = match image::load_from_memory(&bytes) {
        Ok(decoded) => decoded,
        Err(err) => {
            warn!(error = %err, "portrait decode failed; showing caption only");
            return None;
        }
    };

    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    Some(PreviewImage {
        width: width as usize,
        height: height as usize,
        rgba: rgba.into_raw(),
    })
}
