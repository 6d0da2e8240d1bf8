//! Shared test utilities for Gantry crates
//!
//! This crate provides:
//! - **Fixtures**: a canonical workspace snapshot and selectors
//! - **Builders**: fluent construction of snapshots and partition sets
//! - **Mocks**: a scriptable workspace host with call recording
//! - **Assertions**: helpers for the caller-facing error shapes
//!
//! # Example
//!
//! ```ignore
//! use gantry_query::PartitionSetCatalog;
//! use gantry_tests::{fixtures, mocks::MockHost};
//!
//! #[tokio::test]
//! async fn test_catalog() {
//!     let host = fixtures::snapshot_host();
//!     let catalog = PartitionSetCatalog::new(&host);
//!     let sets = catalog
//!         .for_pipeline(&fixtures::selector(), "ingest")
//!         .await
//!         .unwrap();
//!     // ...
//! }
//! ```

pub mod assertions;
pub mod builders;
pub mod fixtures;
pub mod mocks;

// Re-export commonly used items
pub use builders::{PartitionSetRecordBuilder, SnapshotBuilder};
pub use mocks::MockHost;
