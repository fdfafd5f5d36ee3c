use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::Instrument;

use crate::{
    app::envy::Envy,
    records::{
        errors::RecordStoreError,
        models::{audit_record::AuditRecord, record_store::RecordStore},
    },
};

pub async fn save_record(
    record: &AuditRecord,
    store: &RecordStore,
    client: &reqwest::Client,
) -> Result<(), RecordStoreError> {
    let mut request = client
        .post(store.records_url())
        .header("xc-token", &store.token)
        .json(record);

    if let Some(view_id) = &store.view_id {
        request = request.query(&[("viewId", view_id)]);
    }

    let res = request.send().await?;
    let status = res.status();

    if !status.is_success() {
        let body = res.text().await.unwrap_or_default();
        return Err(RecordStoreError::Rejected {
            status: status.as_u16(),
            body,
        });
    }

    Ok(())
}

// Best effort. Errors are logged here and never reach the caller.
pub async fn log_record(record: AuditRecord, envy: &Envy, client: &reqwest::Client) {
    let Some(store) = RecordStore::from_envy(envy) else {
        tracing::debug!("record store not configured, skipping audit record");
        return;
    };

    match save_record(&record, &store, client).await {
        Ok(_) => tracing::info!(status = record.status.value(), "audit record saved"),
        Err(e) => tracing::warn!(%e, "failed to save audit record"),
    }
}

// Runs in the caller's span so audit lines keep the request id.
pub fn spawn_log_record(
    record: AuditRecord,
    envy: Arc<Envy>,
    client: reqwest::Client,
) -> JoinHandle<()> {
    tokio::spawn(async move { log_record(record, &envy, &client).await }.in_current_span())
}
