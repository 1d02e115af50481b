use breadbox::{Error, LoadMode, System};
use breadbox_mos6502::mos6502::RESET_VECTOR_ADDRESS;

#[test]
fn functional_mode_loads_at_zero_with_entry_0x400() {
    let system = System::from_bytes(&[0xEA, 0xEA, 0xEA], LoadMode::Functional).unwrap();

    assert_eq!(system.program.load_address, 0x0000);
    assert_eq!(system.program.entry, 0x0400);
    assert_eq!(system.cpu.memory.read(0x0000), 0xEA);
    assert_eq!(system.cpu.memory.read(0x0002), 0xEA);
}

#[test]
fn tmpx_mode_loads_at_the_prefixed_address() {
    let system = System::from_bytes(&[0x00, 0x10, 0xA9, 0x42], LoadMode::Tmpx).unwrap();

    assert_eq!(system.program.load_address, 0x1000);
    assert_eq!(system.program.entry, 0x1000);
    assert_eq!(system.cpu.memory.read(0x1000), 0xA9);
    assert_eq!(system.cpu.memory.read(0x1001), 0x42);
}

#[test]
fn the_reset_vector_patch_is_jsr_entry_then_nop() {
    let system = System::from_bytes(&[0x00, 0x10, 0xEA], LoadMode::Tmpx).unwrap();

    assert_eq!(system.cpu.memory.read(RESET_VECTOR_ADDRESS), 0x20);
    assert_eq!(system.cpu.memory.read(RESET_VECTOR_ADDRESS + 1), 0x00);
    assert_eq!(system.cpu.memory.read(RESET_VECTOR_ADDRESS + 2), 0x10);
    assert_eq!(system.cpu.memory.read(RESET_VECTOR_ADDRESS + 3), 0xEA);
    assert_eq!(system.cpu.pc, RESET_VECTOR_ADDRESS);
}

#[test]
fn the_patch_carries_execution_into_the_program_and_back() {
    // A functional image padded out so the program sits at the entry point.
    let mut image = vec![0x00; 0x0400];
    image.extend_from_slice(&[
        0xA9, 0x42, // 0x0400: LDA #$42
        0x60, // 0x0402: RTS
    ]);
    let mut system = System::from_bytes(&image, LoadMode::Functional).unwrap();

    let jsr_cycles = system.step(1);
    assert_eq!(system.cpu.pc, 0x0400);
    assert_eq!(jsr_cycles, 6);

    let cycles = system.step(2); // LDA, RTS
    assert_eq!(system.cpu.a, 0x42);
    // RTS returns onto the trailing NOP of the patch.
    assert_eq!(system.cpu.pc, 0xFFFF);
    assert_eq!(cycles, 2 + 6);
    assert_eq!(system.cpu.sp, 0xFF);
}

#[test]
fn empty_images_are_rejected() {
    assert!(matches!(
        System::from_bytes(&[], LoadMode::Functional),
        Err(Error::EmptyProgram)
    ));
    assert!(matches!(
        System::from_bytes(&[0x00, 0x10], LoadMode::Tmpx),
        Err(Error::EmptyProgram)
    ));
}

#[test]
fn tmpx_images_need_a_load_address() {
    assert!(matches!(
        System::from_bytes(&[0x00], LoadMode::Tmpx),
        Err(Error::MissingLoadAddress)
    ));
}

#[test]
fn tmpx_load_wraps_at_the_end_of_memory() {
    let system = System::from_bytes(&[0xFE, 0xFF, 0x11, 0x22, 0x33, 0x44], LoadMode::Tmpx).unwrap();

    // The tail of the image wrapped past 0xFFFF; the bytes that landed on
    // the vector itself were then overwritten by the reset patch.
    assert_eq!(system.cpu.memory.read(0x0000), 0x33);
    assert_eq!(system.cpu.memory.read(0x0001), 0x44);
    assert_eq!(system.cpu.memory.read(RESET_VECTOR_ADDRESS), 0x20);
}

#[test]
fn from_file_reads_the_image() {
    let path = std::env::temp_dir().join("breadbox_from_file_test.bin");
    std::fs::write(&path, [0x00u8, 0x10, 0xA9, 0x42]).unwrap();

    let system = System::from_file(&path, LoadMode::Tmpx).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(system.program.load_address, 0x1000);
    assert_eq!(system.cpu.memory.read(0x1000), 0xA9);
}

#[test]
fn missing_files_fail_before_execution() {
    let path = std::env::temp_dir().join("breadbox_no_such_file.bin");
    assert!(matches!(
        System::from_file(&path, LoadMode::Functional),
        Err(Error::Io(_))
    ));
}
