pub mod audit_record;
pub mod record_store;
