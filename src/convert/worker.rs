use image::RgbaImage;
use log::warn;
use serde::{Deserialize, Serialize};
use tokio::runtime::Handle;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

use super::{convert_image, ConvertOptions};
use crate::time::SystemClock;

/// One conversion job for the background worker.
pub struct ConvertRequest {
    pub image: RgbaImage,
    pub options: ConvertOptions,
}

/// The single reply a request gets: the serialized save, or one
/// human-readable message for whatever went wrong.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ConvertResponse {
    Success { result: Vec<u8> },
    Error { error: String },
}

/// Runs conversions off the caller's execution context, one at a time, in
/// submission order. Every submitted request produces exactly one response.
pub struct ConvertWorker {
    request_tx: UnboundedSender<ConvertRequest>,
    response_rx: UnboundedReceiver<ConvertResponse>,
}

impl ConvertWorker {
    /// Spawn the worker loop on the given runtime. The loop exits when the
    /// worker handle is dropped or the response side stops listening.
    pub fn spawn(handle: &Handle) -> Self {
        let (request_tx, mut request_rx) = unbounded_channel::<ConvertRequest>();
        let (response_tx, response_rx) = unbounded_channel::<ConvertResponse>();

        handle.spawn(async move {
            while let Some(request) = request_rx.recv().await {
                let response =
                    match convert_image(&request.image, &request.options, &SystemClock).await {
                        Ok(result) => ConvertResponse::Success { result },
                        Err(e) => ConvertResponse::Error {
                            error: e.to_string(),
                        },
                    };
                if response_tx.send(response).is_err() {
                    warn!("conversion finished but nobody was listening");
                    break;
                }
            }
        });

        Self {
            request_tx,
            response_rx,
        }
    }

    /// Queue a request. Returns false if the worker loop is gone.
    pub fn submit(&self, request: ConvertRequest) -> bool {
        self.request_tx.send(request).is_ok()
    }

    /// Wait for the next response, in the same order requests were
    /// submitted.
    pub async fn recv(&mut self) -> Option<ConvertResponse> {
        self.response_rx.recv().await
    }

    /// Pull a response without waiting, if one is ready.
    pub fn try_recv(&mut self) -> Option<ConvertResponse> {
        self.response_rx.try_recv().ok()
    }
}
