//! A read-only pseudo-random byte stream backed by a 128-bit linear-feedback shift register.
//!
//! The crate models a small character device: a module is loaded once ([`LfsrModule::start`]),
//! which seeds an [`Lfsr`] from the operating system's entropy source and registers the device
//! with a host ([`Registrar`]). Readers open the [`LfsrDevice`] and receive bytes assembled
//! least-significant bit first from the register's output, in chunks of at most
//! [`CHUNK_CAPACITY`] bytes. Writes are always refused.
//!
//! The generator is deterministic and **not** cryptographically secure.
//!
//! ```
//! use lfsr::{LfsrConfig, LfsrModule, Registry};
//! use std::io::Read;
//!
//! let registry = Registry::new();
//! let module = LfsrModule::start(&registry, &LfsrConfig::with_seed(1234)).unwrap();
//!
//! let mut bytes = [0; 16];
//! module.device().open().read_exact(&mut bytes).unwrap();
//! assert_eq!(bytes[..8], [1, 0, 0, 0, 0, 0, 0, 0]);
//! ```

mod config;
mod device;
mod error;
mod lfsr;
mod module;
mod rand_support;
mod registry;

#[cfg(test)]
mod tests;

pub use config::{LfsrConfig, DEFAULT_DEVICE_NAME};
pub use device::{Handle, LfsrDevice, CHUNK_CAPACITY};
pub use error::{DeviceError, RegistrationError};
pub use lfsr::{Lfsr, TAPS, WIDTH};
pub use module::LfsrModule;
pub use registry::{Registrar, Registry, DYNAMIC_MAJOR_HIGH, DYNAMIC_MAJOR_LOW};
