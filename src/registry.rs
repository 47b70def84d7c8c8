use std::{
    collections::BTreeMap,
    sync::{LazyLock, Mutex, PoisonError},
};

use crate::error::RegistrationError;

/// The highest major number handed out to dynamically registered devices.
pub const DYNAMIC_MAJOR_HIGH: u32 = 254;

/// The lowest major number handed out to dynamically registered devices.
pub const DYNAMIC_MAJOR_LOW: u32 = 234;

static GLOBAL: LazyLock<Registry> = LazyLock::new(Registry::new);

/// A host that character devices register themselves with.
pub trait Registrar {
    /// Registers `name` and returns the major number allocated to it.
    fn register(&self, name: &str) -> Result<u32, RegistrationError>;

    /// Releases the major number `major` previously returned for `name`.
    fn unregister(&self, major: u32, name: &str);
}

#[derive(Debug, Default)]
/// An in-process table of character devices.
///
/// Major numbers are allocated from the dynamic range, highest first, the same way a kernel
/// allocates them when a driver asks for major `0`.
pub struct Registry {
    devices: Mutex<BTreeMap<u32, String>>,
}

impl Registry {
    /// Returns an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the process-wide table.
    pub fn global() -> &'static Registry {
        &GLOBAL
    }

    /// Returns the major number registered under `name`, if any.
    ///
    /// # Example
    /// ```
    /// # use lfsr::{Registrar, Registry};
    /// let registry = Registry::new();
    /// let major = registry.register("lfsr").unwrap();
    ///
    /// assert_eq!(registry.lookup("lfsr"), Some(major));
    /// registry.unregister(major, "lfsr");
    /// assert_eq!(registry.lookup("lfsr"), None);
    /// ```
    pub fn lookup(&self, name: &str) -> Option<u32> {
        let devices = self.devices.lock().unwrap_or_else(PoisonError::into_inner);
        devices
            .iter()
            .find(|(_, registered)| registered.as_str() == name)
            .map(|(&major, _)| major)
    }

    /// Returns the number of registered devices.
    pub fn len(&self) -> usize {
        self.devices.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Registrar for Registry {
    fn register(&self, name: &str) -> Result<u32, RegistrationError> {
        if name.is_empty() || name.contains('/') {
            return Err(RegistrationError::InvalidName);
        }
        let mut devices = self.devices.lock().unwrap_or_else(PoisonError::into_inner);
        if devices.values().any(|registered| registered == name) {
            return Err(RegistrationError::NameInUse(name.to_owned()));
        }
        let major = (DYNAMIC_MAJOR_LOW..=DYNAMIC_MAJOR_HIGH)
            .rev()
            .find(|major| !devices.contains_key(major))
            .ok_or(RegistrationError::Exhausted)?;
        devices.insert(major, name.to_owned());
        Ok(major)
    }

    fn unregister(&self, major: u32, name: &str) {
        let mut devices = self.devices.lock().unwrap_or_else(PoisonError::into_inner);
        if devices.get(&major).is_some_and(|registered| registered == name) {
            devices.remove(&major);
        }
    }
}
