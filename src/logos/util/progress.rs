use std::convert::Infallible;

use bytes::Bytes;
use futures::{Stream, StreamExt};
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;

use crate::logos::{
    enums::progress_status::ProgressStatus,
    models::{logo_variant::LogoVariant, progress_event::ProgressEvent},
};

pub const PROGRESS_GENERATING: u8 = 10;
pub const PROGRESS_GENERATED: u8 = 30;
pub const PROGRESS_COMPLETED: u8 = 100;

const CHANNEL_CAPACITY: usize = 16;

// Progress after the n-th resize step, for ICON_SIZES in ascending order.
pub fn resize_step_progress(step: usize) -> u8 {
    match step {
        0 => 50,
        1 => 65,
        2 => 80,
        _ => 95,
    }
}

pub fn channel() -> (ProgressReporter, ReceiverStream<ProgressEvent>) {
    let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);
    (ProgressReporter::new(tx), ReceiverStream::new(rx))
}

pub fn into_ndjson_stream(
    events: ReceiverStream<ProgressEvent>,
) -> impl Stream<Item = Result<Bytes, Infallible>> {
    events.map(|event| Ok(Bytes::from(event.to_ndjson_line())))
}

/// Emits the events of one request. The terminal methods take `self`, so
/// nothing can be sent after `complete` or `fail`; dropping the reporter
/// closes the stream.
#[derive(Debug)]
pub struct ProgressReporter {
    tx: mpsc::Sender<ProgressEvent>,
    last_progress: u8,
}

impl ProgressReporter {
    pub fn new(tx: mpsc::Sender<ProgressEvent>) -> Self {
        Self {
            tx,
            last_progress: 0,
        }
    }

    pub async fn generating(&mut self, message: &str) {
        let event = ProgressEvent::new(ProgressStatus::Generating, PROGRESS_GENERATING, message);
        self.send(event).await;
    }

    pub async fn processing(&mut self, progress: u8, message: &str, original_url: Option<&str>) {
        let mut event = ProgressEvent::new(ProgressStatus::Processing, progress, message);
        event.original_url = original_url.map(|url| url.to_string());
        self.send(event).await;
    }

    pub async fn complete(mut self, original_url: Option<&str>, variants: Vec<LogoVariant>) {
        let mut event = ProgressEvent::new(
            ProgressStatus::Completed,
            PROGRESS_COMPLETED,
            "Logo generated successfully.",
        );
        event.original_url = original_url.map(|url| url.to_string());
        event.sizes = Some(variants);
        self.send(event).await;
    }

    pub async fn fail(mut self, message: &str) {
        let event = ProgressEvent::new(ProgressStatus::Error, self.last_progress, message);
        self.send(event).await;
    }

    async fn send(&mut self, mut event: ProgressEvent) {
        event.progress = event.progress.clamp(self.last_progress, PROGRESS_COMPLETED);
        self.last_progress = event.progress;

        if self.tx.send(event).await.is_err() {
            tracing::debug!("client disconnected, dropping progress event");
        }
    }
}
