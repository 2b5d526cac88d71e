//! Read orchestration
//!
//! One read cycle per request: fetch the temperature register, classify
//! the raw word, fold the outcome into the reading snapshot, the link
//! monitor and the bound slots. Synchronous reads resolve within the
//! call; push-based transports resolve via [`Andrtf3::handle_frame`] or
//! by letting the configured timeout elapse.

use core::sync::atomic::{AtomicBool, AtomicI16, AtomicU32, Ordering};

use andrtf3_core::decode::{classify_raw, RawSample, FUNCTION_CODE, REGISTER_COUNT, TEMP_REGISTER};
use andrtf3_core::{
    ErrorCategory, ErrorTelemetry, LinkMonitor, NullTelemetry, Priority, ReadStart,
    RegisterTransport, SensorConfig, TemperatureReading, TransportError,
};

use crate::binding::TemperatureBinding;

/// ANDRTF3/MD temperature sensor driver
///
/// Generic over the injected register transport `T` and telemetry sink
/// `M`. At most one request is in flight per driver instance; the pending
/// flag is atomic because [`handle_frame`](Self::handle_frame) may run
/// from a transport callback context while the primary control path polls.
/// All other state is reached only through `&mut self`.
///
/// Time is passed in as wrapping milliseconds so the driver carries no
/// clock dependency.
pub struct Andrtf3<'a, T, M = NullTelemetry> {
    config: SensorConfig,
    transport: T,
    telemetry: M,
    reading: TemperatureReading,
    link: LinkMonitor,
    pending: AtomicBool,
    pending_since_ms: AtomicU32,
    binding: TemperatureBinding<'a>,
}

impl<'a, T: RegisterTransport> Andrtf3<'a, T> {
    /// Create a driver with the default configuration (address 3, 200 ms
    /// timeout) and no telemetry sink
    pub fn new(transport: T) -> Self {
        Self::with_telemetry(transport, NullTelemetry)
    }

    /// Create a driver for a non-default server address
    pub fn with_address(transport: T, address: u8) -> Self {
        let mut driver = Self::new(transport);
        driver.config.address = address;
        driver
    }
}

impl<'a, T: RegisterTransport, M: ErrorTelemetry> Andrtf3<'a, T, M> {
    /// Create a driver that reports outcomes into an external telemetry
    /// sink
    pub fn with_telemetry(transport: T, telemetry: M) -> Self {
        Self {
            config: SensorConfig::default(),
            transport,
            telemetry,
            reading: TemperatureReading::default(),
            link: LinkMonitor::new(),
            pending: AtomicBool::new(false),
            pending_since_ms: AtomicU32::new(0),
            binding: TemperatureBinding::new(),
        }
    }

    /// Perform one blocking read cycle
    ///
    /// Returns whether the attempt produced a valid new value. On any
    /// failure the previous temperature is kept and the reason is
    /// recorded in the snapshot.
    pub fn read_now(&mut self, now_ms: u32) -> bool {
        let result = self.transport.read_registers(
            self.config.address,
            TEMP_REGISTER,
            REGISTER_COUNT,
            Priority::Sensor,
        );

        match result {
            Ok(values) => match values.first() {
                Some(&raw) => self.apply_sample(raw, now_ms),
                None => {
                    self.apply_data_error("No data returned", now_ms);
                    false
                }
            },
            Err(e) => {
                self.apply_transport_error(e, now_ms);
                false
            }
        }
    }

    /// Issue a read without blocking
    ///
    /// Returns false with no state change while a prior request is still
    /// pending and within the timeout. A stale pending request whose
    /// timeout has elapsed is first resolved as a timeout failure, then
    /// the new request is issued. Transports that resolve synchronously
    /// leave the pending flag clear on return, with the result already
    /// folded in; a transport error at issue time is folded in the same
    /// way as a blocking-read failure.
    pub fn request_async(&mut self, now_ms: u32) -> bool {
        if self.pending.load(Ordering::Acquire) {
            if self.pending_elapsed(now_ms) >= u32::from(self.config.timeout_ms) {
                self.resolve_timeout(now_ms);
            } else {
                debug!("read request rejected: previous request still pending");
                return false;
            }
        }

        self.pending_since_ms.store(now_ms, Ordering::Relaxed);
        self.pending.store(true, Ordering::Release);

        let started = self.transport.start_read(
            self.config.address,
            TEMP_REGISTER,
            REGISTER_COUNT,
            Priority::Sensor,
        );

        match started {
            Ok(ReadStart::Immediate(values)) => {
                self.pending.store(false, Ordering::Release);
                match values.first() {
                    Some(&raw) => {
                        self.apply_sample(raw, now_ms);
                    }
                    None => self.apply_data_error("No data returned", now_ms),
                }
                true
            }
            Ok(ReadStart::Deferred) => true,
            Err(e) => {
                self.pending.store(false, Ordering::Release);
                self.apply_transport_error(e, now_ms);
                false
            }
        }
    }

    /// Check whether the current cycle has resolved
    ///
    /// True once no request is pending. A pending request whose timeout
    /// has elapsed is resolved here: the pending flag is cleared, the
    /// snapshot is marked invalid with a timeout reason and the link is
    /// downgraded.
    pub fn poll_completion(&mut self, now_ms: u32) -> bool {
        if !self.pending.load(Ordering::Acquire) {
            return true;
        }

        if self.pending_elapsed(now_ms) >= u32::from(self.config.timeout_ms) {
            self.resolve_timeout(now_ms);
            return true;
        }

        false
    }

    /// Fold in a pushed response frame
    ///
    /// Frames for another function code or register are ignored and leave
    /// the pending request untouched. A matching frame that arrives while
    /// no request is pending is a stray completion from an abandoned
    /// cycle and is discarded; by the time it lands, the pending flag may
    /// already belong to a newer request (known race window). A matching
    /// frame consumed here always clears the pending flag, whatever the
    /// decode outcome.
    pub fn handle_frame(&mut self, function_code: u8, register: u16, payload: &[u8], now_ms: u32) {
        if function_code != FUNCTION_CODE || register != TEMP_REGISTER {
            return;
        }

        if !self.pending.load(Ordering::Acquire) {
            debug!("stray frame for register {}: no read pending", register);
            return;
        }
        self.pending.store(false, Ordering::Release);

        if payload.len() < 2 {
            self.apply_data_error("Invalid response length", now_ms);
            return;
        }

        let raw = u16::from_be_bytes([payload[0], payload[1]]);
        self.apply_sample(raw, now_ms);
    }

    /// Copy of the current reading snapshot, no side effects
    pub fn last_reading(&self) -> TemperatureReading {
        self.reading
    }

    /// Temperature from the last successful decode, in 0.1 °C units
    pub fn temperature_x10(&self) -> i16 {
        self.reading.celsius_x10
    }

    /// Current connectivity verdict (sentinel faults debounced, transport
    /// errors immediate)
    pub fn is_connected(&self) -> bool {
        self.link.is_connected()
    }

    /// Configured Modbus server address
    pub fn device_address(&self) -> u8 {
        self.config.address
    }

    /// Current configuration
    pub fn config(&self) -> SensorConfig {
        self.config
    }

    /// Replace the configuration; takes effect from the next read cycle
    pub fn set_config(&mut self, config: SensorConfig) {
        if !config.is_valid() {
            warn!(
                "suspicious sensor config: address {}, timeout {} ms",
                config.address, config.timeout_ms
            );
        }
        self.config = config;
    }

    /// Bind caller-owned slots that mirror the reading after every
    /// completion; `(None, None)` unbinds
    ///
    /// The slots stay owned by the caller; the driver only writes through
    /// them. Binding exactly one slot is accepted but produces an
    /// incoherent observer.
    pub fn bind(&mut self, value_slot: Option<&'a AtomicI16>, valid_slot: Option<&'a AtomicBool>) {
        self.binding.bind(value_slot, valid_slot);
        if self.binding.is_partial() {
            warn!("partial slot binding: value and validity should be bound together");
        }
    }

    /// Remove any bound slots
    pub fn unbind(&mut self) {
        self.bind(None, None);
    }

    fn pending_elapsed(&self, now_ms: u32) -> u32 {
        now_ms.wrapping_sub(self.pending_since_ms.load(Ordering::Relaxed))
    }

    /// Classify one raw register word and fold the outcome into reading,
    /// link, binding and telemetry. Identical for all three entry points.
    fn apply_sample(&mut self, raw: u16, now_ms: u32) -> bool {
        match classify_raw(raw) {
            RawSample::Temperature(v) => {
                self.reading.accept(v, now_ms);
                self.link.record_success();
                self.binding.store_success(v);
                self.telemetry.record_success(self.config.address);
                true
            }
            RawSample::SentinelZero => {
                self.apply_sentinel("Sensor returned 0x0000", now_ms);
                false
            }
            RawSample::SentinelAbsent => {
                self.apply_sentinel("Modbus error 0xFFFF", now_ms);
                false
            }
            RawSample::OutOfRange(_) => {
                self.apply_data_error("Temperature out of range", now_ms);
                false
            }
        }
    }

    fn apply_sentinel(&mut self, reason: &'static str, now_ms: u32) {
        self.reading.reject(reason);
        let still_connected = self.link.record_sentinel(now_ms);
        self.binding.store_failure();
        self.telemetry
            .record_error(self.config.address, ErrorCategory::Sentinel);

        if still_connected {
            warn!(
                "sentinel fault code ({}), {} consecutive",
                reason,
                self.link.consecutive_sentinels()
            );
        } else {
            error!(
                "sensor fault confirmed after {} consecutive sentinel codes",
                self.link.consecutive_sentinels()
            );
        }
    }

    fn apply_data_error(&mut self, reason: &'static str, now_ms: u32) {
        self.reading.reject(reason);
        self.link.record_failure(now_ms);
        self.binding.store_failure();
        self.telemetry
            .record_error(self.config.address, ErrorCategory::Data);
        error!("read failed: {}", reason);
    }

    fn apply_transport_error(&mut self, error: TransportError, now_ms: u32) {
        self.reading.reject(error.as_str());
        self.link.record_failure(now_ms);
        self.binding.store_failure();
        self.telemetry
            .record_error(self.config.address, ErrorCategory::Transport);
        error!("transport error: {}", error.as_str());
    }

    fn resolve_timeout(&mut self, now_ms: u32) {
        self.pending.store(false, Ordering::Release);
        self.apply_transport_error(TransportError::Timeout, now_ms);
    }
}
