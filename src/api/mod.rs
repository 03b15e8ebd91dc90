pub mod synchronizer;
pub mod viewport;

pub use synchronizer::ViewportSynchronizer;
pub use viewport::{ChartViewport, InMemoryViewport};
