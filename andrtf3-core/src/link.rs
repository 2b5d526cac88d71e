//! Link monitor
//!
//! Debounces the sensor's reserved fault codes so a single transient
//! sentinel response does not flap the connectivity verdict. Transport and
//! data errors carry no such ambiguity and disconnect immediately.

/// Consecutive sentinel responses before the link is declared down
pub const SENTINEL_DISCONNECT_THRESHOLD: u8 = 3;

/// Connectivity tracking with sentinel-fault hysteresis
///
/// Sentinel codes (0x0000 / 0xFFFF) increment a consecutive-failure
/// counter; the link is only downgraded once the counter reaches
/// [`SENTINEL_DISCONNECT_THRESHOLD`]. Any successful decode resets the
/// counter and restores the link. Transport or data errors mean the
/// transport itself is known unreachable, so they bypass the counter and
/// disconnect at once.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LinkMonitor {
    connected: bool,
    consecutive_sentinels: u8,
    last_error_ms: u32,
}

impl LinkMonitor {
    /// Create a monitor in the disconnected state with a zeroed counter
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successful decode: counter resets, link is up
    pub fn record_success(&mut self) {
        self.consecutive_sentinels = 0;
        self.connected = true;
    }

    /// Record a sentinel fault code
    ///
    /// Below the threshold the previous verdict is kept. Returns the
    /// verdict after this occurrence.
    pub fn record_sentinel(&mut self, now_ms: u32) -> bool {
        self.consecutive_sentinels = self.consecutive_sentinels.saturating_add(1);
        self.last_error_ms = now_ms;

        if self.consecutive_sentinels >= SENTINEL_DISCONNECT_THRESHOLD {
            self.connected = false;
        }

        self.connected
    }

    /// Record a transport or data error: disconnect immediately
    ///
    /// The sentinel counter is left untouched; it tracks sentinel codes
    /// only.
    pub fn record_failure(&mut self, now_ms: u32) {
        self.last_error_ms = now_ms;
        self.connected = false;
    }

    /// Current connectivity verdict
    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Consecutive sentinel codes since the last success
    pub fn consecutive_sentinels(&self) -> u8 {
        self.consecutive_sentinels
    }

    /// Time of the most recent failure of any kind
    pub fn last_error_ms(&self) -> u32 {
        self.last_error_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn connected_monitor() -> LinkMonitor {
        let mut monitor = LinkMonitor::new();
        monitor.record_success();
        monitor
    }

    #[test]
    fn test_starts_disconnected() {
        let monitor = LinkMonitor::new();
        assert!(!monitor.is_connected());
        assert_eq!(monitor.consecutive_sentinels(), 0);
    }

    #[test]
    fn test_success_connects() {
        let mut monitor = LinkMonitor::new();
        monitor.record_success();
        assert!(monitor.is_connected());
    }

    #[test]
    fn test_two_sentinels_keep_link_up() {
        let mut monitor = connected_monitor();
        assert!(monitor.record_sentinel(100));
        assert!(monitor.record_sentinel(200));
        assert!(monitor.is_connected());
        assert_eq!(monitor.consecutive_sentinels(), 2);
    }

    #[test]
    fn test_third_sentinel_disconnects() {
        let mut monitor = connected_monitor();
        monitor.record_sentinel(100);
        monitor.record_sentinel(200);
        assert!(!monitor.record_sentinel(300));
        assert!(!monitor.is_connected());
        assert_eq!(monitor.last_error_ms(), 300);
    }

    #[test]
    fn test_success_resets_counter() {
        let mut monitor = connected_monitor();
        monitor.record_sentinel(100);
        monitor.record_sentinel(200);
        monitor.record_success();
        assert!(monitor.is_connected());
        assert_eq!(monitor.consecutive_sentinels(), 0);

        // Counter starts over, two more sentinels do not disconnect
        monitor.record_sentinel(300);
        monitor.record_sentinel(400);
        assert!(monitor.is_connected());
    }

    #[test]
    fn test_transport_failure_disconnects_immediately() {
        let mut monitor = connected_monitor();
        monitor.record_failure(100);
        assert!(!monitor.is_connected());
        // Counter untouched
        assert_eq!(monitor.consecutive_sentinels(), 0);
    }

    #[test]
    fn test_failure_does_not_feed_sentinel_counter() {
        let mut monitor = connected_monitor();
        monitor.record_sentinel(100);
        monitor.record_failure(200);
        monitor.record_success();
        // One sentinel after recovery: still connected
        assert!(monitor.record_sentinel(300));
    }

    #[test]
    fn test_counter_saturates() {
        let mut monitor = connected_monitor();
        for t in 0..300u32 {
            monitor.record_sentinel(t);
        }
        assert_eq!(monitor.consecutive_sentinels(), u8::MAX);
        assert!(!monitor.is_connected());
    }
}
