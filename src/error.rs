use std::{fmt, io};

/// Failures to register a device with the host's character-device table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    /// The device name is empty or contains a path separator.
    InvalidName,
    /// Another device is already registered under this name.
    NameInUse(String),
    /// Every dynamic major number is taken.
    Exhausted,
}

impl fmt::Display for RegistrationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistrationError::InvalidName => write!(f, "invalid device name"),
            RegistrationError::NameInUse(name) => {
                write!(f, "device name {name:?} is already registered")
            }
            RegistrationError::Exhausted => write!(f, "no dynamic major numbers left"),
        }
    }
}

impl std::error::Error for RegistrationError {}

/// Errors reported by the device and its lifecycle hooks.
#[derive(Debug)]
pub enum DeviceError {
    /// The device could not be registered at load time.
    Registration(RegistrationError),
    /// The entropy source failed to produce a seed at load time.
    Entropy(rand::Error),
    /// The destination stopped accepting bytes in the middle of a read. `delivered` bytes from
    /// earlier chunks of the same read had already been handed over.
    Delivery { delivered: usize, source: io::Error },
    /// The device is read-only.
    PermissionDenied,
}

impl fmt::Display for DeviceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceError::Registration(e) => write!(f, "registration failed: {e}"),
            DeviceError::Entropy(e) => write!(f, "failed to seed from the entropy source: {e}"),
            DeviceError::Delivery { delivered, source } => {
                write!(f, "delivery failed after {delivered} bytes: {source}")
            }
            DeviceError::PermissionDenied => write!(f, "device is read-only"),
        }
    }
}

impl std::error::Error for DeviceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DeviceError::Registration(e) => Some(e),
            DeviceError::Entropy(e) => Some(e),
            DeviceError::Delivery { source, .. } => Some(source),
            DeviceError::PermissionDenied => None,
        }
    }
}

impl From<RegistrationError> for DeviceError {
    fn from(e: RegistrationError) -> Self {
        DeviceError::Registration(e)
    }
}

impl From<DeviceError> for io::Error {
    fn from(e: DeviceError) -> Self {
        match e {
            DeviceError::Delivery { source, .. } => source,
            DeviceError::PermissionDenied => io::Error::new(io::ErrorKind::PermissionDenied, e),
            other => io::Error::new(io::ErrorKind::Other, other),
        }
    }
}
