// Licensed under the Apache-2.0 license

//! End-to-end register access semantics against an in-memory device.

use anyhow::Result;
use log::LevelFilter;
use mem_transport::{MemoryTransport, RamTransport, SharedTransport};
use registers_map::{accessor_tree, AccessError};
use simple_logger::SimpleLogger;
use tests_integration::{board, board_ram, ProbeTransport, BOARD_BASE};

#[test]
fn round_trip_covers_the_full_field_domain() -> Result<()> {
    let mut mem = board_ram();
    let live = accessor_tree(&board());
    // 8-bit field: walk every representable value.
    let threshold = live.links[0].asics[0].channels[0].threshold;
    for value in 0..=0xff {
        threshold.write(&mut mem, value)?;
        assert_eq!(threshold.read(&mut mem)?, value);
    }
    // 1-bit field.
    let pulse = live.links[1].asics[2].channels[5].pulse;
    for value in [1, 0, 1] {
        pulse.write(&mut mem, value)?;
        assert_eq!(pulse.read(&mut mem)?, value);
    }
    Ok(())
}

#[test]
fn round_trip_samples_the_full_word() -> Result<()> {
    use rand::Rng;

    let mut mem = board_ram();
    let live = accessor_tree(&board());
    let config = live.links[0].asics[3].config;
    let mut rng = rand::thread_rng();
    for _ in 0..100 {
        let value: u32 = rng.gen();
        config.write(&mut mem, value)?;
        assert_eq!(config.read(&mut mem)?, value);
    }
    Ok(())
}

#[test]
fn masked_write_preserves_the_rest_of_the_word() -> Result<()> {
    let mut mem = board_ram();
    let live = accessor_tree(&board());
    let threshold = live.links[0].asics[0].channels[0].threshold;
    let word_addr = threshold.spec().address();

    mem.write_word(word_addr, 0xa5a5_a5a5)?;
    threshold.write(&mut mem, 0x12)?;
    assert_eq!(mem.read_word(word_addr)?, 0xa5a5_a512);
    assert_eq!(threshold.read(&mut mem)?, 0x12);
    Ok(())
}

#[test]
fn permission_violations_never_reach_the_device() {
    let mut mem = ProbeTransport::new(board_ram());
    let live = accessor_tree(&board());

    assert!(matches!(
        live.reset.read(&mut mem),
        Err(AccessError::NotReadable { .. })
    ));
    assert!(matches!(
        live.firmware_version.write(&mut mem, 1),
        Err(AccessError::NotWritable { .. })
    ));
    assert!(matches!(
        live.links[0].ready.write(&mut mem, 1),
        Err(AccessError::NotWritable { .. })
    ));
    assert_eq!(mem.operations(), 0);
}

#[test]
fn oversized_values_never_reach_the_device() {
    let mut mem = ProbeTransport::new(board_ram());
    let live = accessor_tree(&board());
    let threshold = live.links[0].asics[0].channels[0].threshold;

    for value in [0x100, 0x1_0000, u32::MAX] {
        assert!(matches!(
            threshold.write(&mut mem, value),
            Err(AccessError::ValueOutOfRange { .. })
        ));
    }
    assert_eq!(mem.operations(), 0);
}

#[test]
fn access_costs_match_the_contract() -> Result<()> {
    let mut mem = ProbeTransport::new(board_ram());
    let live = accessor_tree(&board());

    // Read: always one device access.
    live.links[0].asics[0].status.read(&mut mem)?;
    assert_eq!((mem.reads, mem.writes), (1, 0));

    // Full-word write: a single store.
    live.links[0].asics[0].config.write(&mut mem, 0xdead_beef)?;
    assert_eq!((mem.reads, mem.writes), (1, 1));

    // Partial-mask write: read-modify-write.
    live.links[0].asics[0].channels[0].threshold.write(&mut mem, 0x7f)?;
    assert_eq!((mem.reads, mem.writes), (2, 2));
    Ok(())
}

#[test]
fn write_only_registers_store_without_reading_back() -> Result<()> {
    let mut mem = ProbeTransport::new(board_ram());
    let live = accessor_tree(&board());

    live.reset.write(&mut mem, 0x1)?;
    assert_eq!((mem.reads, mem.writes), (0, 1));
    assert_eq!(mem.read_word(BOARD_BASE + 0x4)?, 0x1);
    Ok(())
}

#[test]
fn transport_failures_surface_verbatim() {
    let _ = SimpleLogger::new().with_level(LevelFilter::Debug).init();

    // A window too small for the map: everything past the board-level
    // registers faults.
    let mut mem = RamTransport::new(BOARD_BASE, 4);
    let live = accessor_tree(&board());

    assert!(matches!(
        live.links[0].ready.read(&mut mem),
        Err(AccessError::Transport(_))
    ));
    // Board-level registers inside the window still work.
    assert!(live.firmware_version.read(&mut mem).is_ok());
}

#[test]
fn shared_transport_clones_drive_one_device() -> Result<()> {
    let shared = SharedTransport::new(board_ram());
    let live = accessor_tree(&board());

    let handles: Vec<_> = (0..8usize)
        .map(|i| {
            let mut owner = shared.clone();
            let threshold = live.links[0].asics[0].channels[i].threshold;
            std::thread::spawn(move || threshold.write(&mut owner, i as u32 + 1).unwrap())
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let mut reader = shared.clone();
    for i in 0..8usize {
        let threshold = live.links[0].asics[0].channels[i].threshold;
        assert_eq!(threshold.read(&mut reader)?, i as u32 + 1);
    }
    Ok(())
}
