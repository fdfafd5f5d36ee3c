use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecordStoreError {
    #[error("record store request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("record store rejected record: status={status}, body={body}")]
    Rejected { status: u16, body: String },
}
