use std::{
    io::{self, Read, Write},
    sync::{Mutex, PoisonError},
};

use crate::{error::DeviceError, lfsr::Lfsr};

/// The number of bytes generated per chunk of a read.
pub const CHUNK_CAPACITY: usize = 128;

#[derive(Debug)]
/// A read-only character device that streams the output of an [`Lfsr`].
///
/// The register is shared by every reader. Each chunk of a read is generated while holding the
/// lock, so concurrent readers always receive whole bytes from consecutive register steps, and
/// the lock is released before the chunk is delivered.
pub struct LfsrDevice {
    lfsr: Mutex<Lfsr>,
}

impl LfsrDevice {
    pub fn new(lfsr: Lfsr) -> Self {
        Self {
            lfsr: Mutex::new(lfsr),
        }
    }

    /// Opens the device. Nothing is allocated; the handle only logs when it is opened and
    /// closed.
    ///
    /// # Example
    /// ```
    /// # use lfsr::{Lfsr, LfsrDevice};
    /// use std::io::Read;
    ///
    /// let device = LfsrDevice::new(Lfsr::from_seed(1234));
    /// let mut handle = device.open();
    /// let mut buffer = [0; 300];
    /// handle.read_exact(&mut buffer).unwrap();
    /// ```
    pub fn open(&self) -> Handle<'_> {
        log::info!("lfsr device opened");
        Handle { device: self }
    }

    /// Generates `len` bytes and writes them to `dest`, one chunk of at most [`CHUNK_CAPACITY`]
    /// bytes at a time. Returns the number of bytes delivered, which is always `len`.
    ///
    /// If `dest` fails, the read stops at once with [`DeviceError::Delivery`]. Chunks delivered
    /// before the failure stay delivered, and the register is not rewound for the chunk that
    /// failed.
    ///
    /// # Example
    /// ```
    /// # use lfsr::{Lfsr, LfsrDevice};
    /// let device = LfsrDevice::new(Lfsr::from_seed(1234));
    /// let mut output = Vec::new();
    ///
    /// assert_eq!(device.read(300, &mut output).unwrap(), 300);
    /// assert_eq!(output.len(), 300);
    /// ```
    pub fn read<W>(&self, len: usize, dest: &mut W) -> Result<usize, DeviceError>
    where
        W: Write + ?Sized,
    {
        let mut chunk = [0; CHUNK_CAPACITY];
        let mut delivered = 0;
        while delivered < len {
            let count = (len - delivered).min(CHUNK_CAPACITY);
            self.lock().fill_bytes(&mut chunk[..count]);
            if let Err(source) = dest.write_all(&chunk[..count]) {
                log::debug!("lfsr read aborted after {delivered} of {len} bytes: {source}");
                return Err(DeviceError::Delivery { delivered, source });
            }
            delivered += count;
            log::trace!("lfsr delivered {count} bytes ({delivered}/{len})");
        }
        Ok(delivered)
    }

    /// Rejects the write. The device is read-only, so this always fails with
    /// [`DeviceError::PermissionDenied`] and leaves the register untouched.
    pub fn write(&self, _data: &[u8]) -> Result<usize, DeviceError> {
        log::warn!("Sorry, lfsr is read only");
        Err(DeviceError::PermissionDenied)
    }

    /// Returns a copy of the register as it is now.
    pub fn snapshot(&self) -> Lfsr {
        self.lock().clone()
    }

    /// Fills `dest` directly, holding the lock for one chunk at a time.
    pub(crate) fn fill(&self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(CHUNK_CAPACITY) {
            self.lock().fill_bytes(chunk);
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Lfsr> {
        // The register is a plain integer that is always valid, so a panic elsewhere while the
        // lock was held cannot have left it in a bad state.
        self.lfsr.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[derive(Debug)]
/// An open file on an [`LfsrDevice`]. Dropping it closes the file.
pub struct Handle<'a> {
    device: &'a LfsrDevice,
}

impl Handle<'_> {
    /// Reads `len` bytes from the device into `dest`. See [`LfsrDevice::read`].
    pub fn read_to<W>(&mut self, len: usize, dest: &mut W) -> Result<usize, DeviceError>
    where
        W: Write + ?Sized,
    {
        self.device.read(len, dest)
    }
}

impl Read for Handle<'_> {
    /// Fills the whole of `buf`. Reads from the device are never short.
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.device.fill(buf);
        Ok(buf.len())
    }
}

impl Write for Handle<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(self.device.write(buf)?)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for Handle<'_> {
    fn drop(&mut self) {
        log::info!("lfsr device closed");
    }
}
