pub mod ingest;
pub mod persistence;
