//! Load-time settings for the device.

/// Settings used when the device is loaded.
///
/// The host (the CLI, or an embedding application) fills this in and passes it to
/// [`LfsrModule::start`](crate::LfsrModule::start).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LfsrConfig {
    /// Name the device is registered under.
    pub device_name: String,

    /// Fixed seed for the register. If `None`, the seed is drawn from the operating system's
    /// entropy source when the device is loaded.
    pub seed: Option<u64>,
}

/// Name used when none is configured.
pub const DEFAULT_DEVICE_NAME: &str = "lfsr";

impl Default for LfsrConfig {
    fn default() -> Self {
        Self {
            device_name: String::from(DEFAULT_DEVICE_NAME),
            seed: None,
        }
    }
}

impl LfsrConfig {
    /// Returns the default configuration with a fixed seed, for reproducible streams.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }
}
