//! # Outbound Ports (Driven Ports / SPI)

/// Abstract interface for the wall clock.
pub trait TimeSource: Send + Sync {
    /// Get current timestamp in seconds since epoch.
    fn now(&self) -> u64;
}

impl<T: TimeSource + ?Sized> TimeSource for std::sync::Arc<T> {
    fn now(&self) -> u64 {
        (**self).now()
    }
}
