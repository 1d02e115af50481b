use super::super::addressing::{resolve, Access, AddressingMode, RMW_ABSOLUTE_X_CYCLES};
use super::super::handler::Handler;
use super::super::register::Register;
use super::super::{Byte, Cpu, CyclesTaken};
use super::set_nz;

pub const INC_ZP: Byte = 0xE6;
pub const INC_ZPX: Byte = 0xF6;
pub const INC_ABS: Byte = 0xEE;
pub const INC_ABSX: Byte = 0xFE;

pub const DEC_ZP: Byte = 0xC6;
pub const DEC_ZPX: Byte = 0xD6;
pub const DEC_ABS: Byte = 0xCE;
pub const DEC_ABSX: Byte = 0xDE;

pub const INX: Byte = 0xE8;
pub const INY: Byte = 0xC8;
pub const DEX: Byte = 0xCA;
pub const DEY: Byte = 0x88;

fn increment(cpu: &mut dyn Cpu, cycles: &mut CyclesTaken, opcode: Byte) {
    modify(cpu, cycles, opcode, |value| value.wrapping_add(1));
}

fn decrement(cpu: &mut dyn Cpu, cycles: &mut CyclesTaken, opcode: Byte) {
    modify(cpu, cycles, opcode, |value| value.wrapping_sub(1));
}

fn modify(cpu: &mut dyn Cpu, cycles: &mut CyclesTaken, opcode: Byte, f: fn(Byte) -> Byte) {
    let mode = addressing_mode(opcode);
    let reference = resolve(cpu, cycles, mode, Access::Read);

    let value = cpu.read_reference(cycles, reference);
    let result = f(value);
    *cycles += 1;
    cpu.write_reference(cycles, reference, result);
    set_nz(cpu, result);

    // The absolute,X form always costs seven cycles, page cross or not.
    if mode == AddressingMode::AbsoluteX {
        *cycles = RMW_ABSOLUTE_X_CYCLES;
    }
}

/// `INX`/`INY`/`DEX`/`DEY`: step an index register and refresh `N`/`Z`.
fn step_index(cpu: &mut dyn Cpu, cycles: &mut CyclesTaken, opcode: Byte) {
    let (register, delta) = match opcode {
        INX => (Register::X, 1),
        INY => (Register::Y, 1),
        DEX => (Register::X, 0xFF),
        DEY => (Register::Y, 0xFF),
        _ => unreachable!("opcode {opcode:#04x} is not an index step"),
    };

    let result = cpu.read_register(register).wrapping_add(delta);
    cpu.write_register(register, result);
    set_nz(cpu, result);
    *cycles += 1;
}

fn addressing_mode(opcode: Byte) -> AddressingMode {
    match opcode {
        INC_ZP | DEC_ZP => AddressingMode::ZeroPage,
        INC_ZPX | DEC_ZPX => AddressingMode::ZeroPageX,
        INC_ABS | DEC_ABS => AddressingMode::Absolute,
        INC_ABSX | DEC_ABSX => AddressingMode::AbsoluteX,
        _ => unreachable!("opcode {opcode:#04x} is not a memory increment"),
    }
}

const HANDLERS: [Handler; 12] = [
    Handler { opcode: INC_ZP, legal: true, name: "INC - increment memory [zero page]", execute: increment },
    Handler { opcode: INC_ZPX, legal: true, name: "INC - increment memory [zero page,X]", execute: increment },
    Handler { opcode: INC_ABS, legal: true, name: "INC - increment memory [absolute]", execute: increment },
    Handler { opcode: INC_ABSX, legal: true, name: "INC - increment memory [absolute,X]", execute: increment },
    Handler { opcode: DEC_ZP, legal: true, name: "DEC - decrement memory [zero page]", execute: decrement },
    Handler { opcode: DEC_ZPX, legal: true, name: "DEC - decrement memory [zero page,X]", execute: decrement },
    Handler { opcode: DEC_ABS, legal: true, name: "DEC - decrement memory [absolute]", execute: decrement },
    Handler { opcode: DEC_ABSX, legal: true, name: "DEC - decrement memory [absolute,X]", execute: decrement },
    Handler { opcode: INX, legal: true, name: "INX - increment X [implied]", execute: step_index },
    Handler { opcode: INY, legal: true, name: "INY - increment Y [implied]", execute: step_index },
    Handler { opcode: DEX, legal: true, name: "DEX - decrement X [implied]", execute: step_index },
    Handler { opcode: DEY, legal: true, name: "DEY - decrement Y [implied]", execute: step_index },
];

pub fn register(table: &mut [Handler; 256]) {
    for handler in HANDLERS {
        table[handler.opcode as usize] = handler;
    }
}
