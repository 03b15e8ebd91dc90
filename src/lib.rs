//! zoomsync-rs: minimap-to-chart viewport synchronization.
//!
//! This crate keeps a minimap's selection rectangle and a main price chart's
//! time/value windows consistent under timeframe selection and direct minimap
//! drags. Rendering and data ingestion stay with the host chart component;
//! this crate owns the coordinate mapping between the two viewports.

pub mod api;
pub mod core;
pub mod error;
pub mod format;
pub mod telemetry;

pub use api::{ChartViewport, InMemoryViewport, ViewportSynchronizer};
pub use error::{SyncError, SyncResult};
