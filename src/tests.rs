use std::{io::Read, sync::Arc, thread};

use crate as lfsr;

#[test]
fn readme_example() {
    use lfsr::{LfsrConfig, LfsrModule, Registry};

    // Load the device on the process-wide table, under a name no other test uses
    let config = LfsrConfig {
        device_name: "lfsr-readme".into(),
        seed: None,
    };
    let module = LfsrModule::start(Registry::global(), &config).unwrap();
    assert_eq!(Registry::global().lookup("lfsr-readme"), Some(module.major()));

    let mut handle = module.device().open();
    let mut buffer = [0; 4096];
    handle.read_exact(&mut buffer).unwrap();
    drop(handle);

    module.stop();
    assert_eq!(Registry::global().lookup("lfsr-readme"), None);
}

#[test]
fn concurrent_readers_share_one_sequence() {
    use lfsr::{Lfsr, LfsrDevice, CHUNK_CAPACITY};

    const READERS: usize = 4;
    const CHUNKS: usize = 50;

    let device = Arc::new(LfsrDevice::new(Lfsr::from_seed(0xFEED)));
    let handles: Vec<_> = (0..READERS)
        .map(|_| {
            let device = Arc::clone(&device);
            thread::spawn(move || {
                let mut chunks = Vec::new();
                for _ in 0..CHUNKS {
                    let mut chunk = Vec::new();
                    device.read(CHUNK_CAPACITY, &mut chunk).unwrap();
                    chunks.push(chunk);
                }
                chunks
            })
        })
        .collect();

    let mut received: Vec<Vec<u8>> = handles
        .into_iter()
        .flat_map(|handle| handle.join().unwrap())
        .collect();

    // Every chunk came from a contiguous run of the register, so the chunks are exactly the
    // chunks of a single-threaded stream, in some order.
    let mut reference = Lfsr::from_seed(0xFEED);
    let mut expected: Vec<Vec<u8>> = (0..READERS * CHUNKS)
        .map(|_| {
            let mut chunk = vec![0; CHUNK_CAPACITY];
            reference.fill_bytes(&mut chunk);
            chunk
        })
        .collect();

    received.sort();
    expected.sort();
    assert_eq!(received, expected);
    assert_eq!(device.snapshot(), reference);
}

#[test]
fn bits_are_balanced() {
    use lfsr::Lfsr;

    // Skip the seeding prefix, where the register still holds mostly zeros.
    let mut lfsr = Lfsr::from_seed(0x9E37_79B9_7F4A_7C15);
    lfsr.discard(4096);

    let mut buffer = vec![0; 1 << 16];
    lfsr.fill_bytes(&mut buffer);
    let ones: u64 = buffer.iter().map(|byte| byte.count_ones() as u64).sum();
    let bits = buffer.len() as u64 * 8;

    // Well within five standard deviations of an even split.
    let deviation = ones.abs_diff(bits / 2);
    assert!(deviation < 5 * 362, "{ones} ones out of {bits} bits");
}
