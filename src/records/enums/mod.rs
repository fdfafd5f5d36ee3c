pub mod audit_status;
