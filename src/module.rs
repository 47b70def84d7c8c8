use rand::{rngs::OsRng, RngCore};

use crate::{
    config::LfsrConfig,
    device::LfsrDevice,
    error::DeviceError,
    lfsr::Lfsr,
    registry::Registrar,
};

/// A loaded LFSR device: the seeded register plus its registration with the host.
///
/// The device is unregistered when the module is stopped or dropped.
pub struct LfsrModule<'h, H>
where
    H: Registrar + ?Sized,
{
    host: &'h H,
    name: String,
    major: u32,
    device: LfsrDevice,
}

impl<'h, H> LfsrModule<'h, H>
where
    H: Registrar + ?Sized,
{
    /// Loads the device: seeds the register and registers the device with `host`.
    ///
    /// The seed is `config.seed` if set, and otherwise comes from the operating system's entropy
    /// source.
    ///
    /// # Example
    /// ```
    /// # use lfsr::{LfsrConfig, LfsrModule, Registry};
    /// let registry = Registry::new();
    /// let module = LfsrModule::start(&registry, &LfsrConfig::default()).unwrap();
    ///
    /// assert_eq!(registry.lookup("lfsr"), Some(module.major()));
    /// module.stop();
    /// assert!(registry.is_empty());
    /// ```
    pub fn start(host: &'h H, config: &LfsrConfig) -> Result<Self, DeviceError> {
        match config.seed {
            Some(seed) => Self::load(host, config, seed),
            None => Self::start_with_entropy(host, config, &mut OsRng),
        }
    }

    /// Loads the device, drawing the seed from `entropy`. A fixed seed in `config` takes
    /// precedence and `entropy` is not used.
    pub fn start_with_entropy<E>(
        host: &'h H,
        config: &LfsrConfig,
        entropy: &mut E,
    ) -> Result<Self, DeviceError>
    where
        E: RngCore + ?Sized,
    {
        let seed = match config.seed {
            Some(seed) => seed,
            None => {
                let mut bytes = [0; 8];
                if let Err(e) = entropy.try_fill_bytes(&mut bytes) {
                    log::error!("lfsr load failed: no entropy: {e}");
                    return Err(DeviceError::Entropy(e));
                }
                u64::from_le_bytes(bytes)
            }
        };
        Self::load(host, config, seed)
    }

    fn load(host: &'h H, config: &LfsrConfig, seed: u64) -> Result<Self, DeviceError> {
        let device = LfsrDevice::new(Lfsr::from_seed(seed));
        let major = host.register(&config.device_name).map_err(|e| {
            log::error!("lfsr load failed: {e}");
            DeviceError::Registration(e)
        })?;
        log::info!("lfsr module has been loaded: {major}");
        Ok(Self {
            host,
            name: config.device_name.clone(),
            major,
            device,
        })
    }

    /// Unloads the device.
    pub fn stop(self) {
        drop(self);
    }

    /// The major number the host allocated.
    pub fn major(&self) -> u32 {
        self.major
    }

    /// The name the device is registered under.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn device(&self) -> &LfsrDevice {
        &self.device
    }
}

impl<H> Drop for LfsrModule<'_, H>
where
    H: Registrar + ?Sized,
{
    fn drop(&mut self) {
        self.host.unregister(self.major, &self.name);
        log::info!("lfsr module has been unloaded");
    }
}
