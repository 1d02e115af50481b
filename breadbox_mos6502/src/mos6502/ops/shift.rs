use super::super::addressing::{
    resolve, Access, AddressingMode, ACCUMULATOR_RMW_CYCLES, RMW_ABSOLUTE_X_CYCLES,
};
use super::super::handler::Handler;
use super::super::status::StatusFlag;
use super::super::{Byte, Cpu, CyclesTaken};
use super::set_nz;

pub const ASL_ACC: Byte = 0x0A;
pub const ASL_ZP: Byte = 0x06;
pub const ASL_ZPX: Byte = 0x16;
pub const ASL_ABS: Byte = 0x0E;
pub const ASL_ABSX: Byte = 0x1E;

pub const LSR_ACC: Byte = 0x4A;
pub const LSR_ZP: Byte = 0x46;
pub const LSR_ZPX: Byte = 0x56;
pub const LSR_ABS: Byte = 0x4E;
pub const LSR_ABSX: Byte = 0x5E;

pub const ROL_ACC: Byte = 0x2A;
pub const ROL_ZP: Byte = 0x26;
pub const ROL_ZPX: Byte = 0x36;
pub const ROL_ABS: Byte = 0x2E;
pub const ROL_ABSX: Byte = 0x3E;

pub const ROR_ACC: Byte = 0x6A;
pub const ROR_ZP: Byte = 0x66;
pub const ROR_ZPX: Byte = 0x76;
pub const ROR_ABS: Byte = 0x6E;
pub const ROR_ABSX: Byte = 0x7E;

fn arithmetic_shift_left(cpu: &mut dyn Cpu, cycles: &mut CyclesTaken, opcode: Byte) {
    shift(cpu, cycles, opcode, |value, _carry| {
        (value << 1, value & 0x80 != 0)
    });
}

fn logical_shift_right(cpu: &mut dyn Cpu, cycles: &mut CyclesTaken, opcode: Byte) {
    shift(cpu, cycles, opcode, |value, _carry| {
        (value >> 1, value & 0x01 != 0)
    });
}

fn rotate_left(cpu: &mut dyn Cpu, cycles: &mut CyclesTaken, opcode: Byte) {
    shift(cpu, cycles, opcode, |value, carry| {
        ((value << 1) | carry as Byte, value & 0x80 != 0)
    });
}

fn rotate_right(cpu: &mut dyn Cpu, cycles: &mut CyclesTaken, opcode: Byte) {
    shift(cpu, cycles, opcode, |value, carry| {
        ((value >> 1) | ((carry as Byte) << 7), value & 0x01 != 0)
    });
}

/// Shared read-modify-write path: the old carry feeds the rotates, the
/// shifted-out bit becomes the new carry and `N`/`Z` follow the result.
fn shift(
    cpu: &mut dyn Cpu,
    cycles: &mut CyclesTaken,
    opcode: Byte,
    f: fn(Byte, bool) -> (Byte, bool),
) {
    let mode = addressing_mode(opcode);
    let reference = resolve(cpu, cycles, mode, Access::Read);

    let value = cpu.read_reference(cycles, reference);
    let carry_in = cpu.flag(StatusFlag::Carry);
    let (result, carry_out) = f(value, carry_in);
    *cycles += 1;
    cpu.write_reference(cycles, reference, result);

    cpu.set_flag(StatusFlag::Carry, carry_out);
    set_nz(cpu, result);

    // Shift timing is fixed for the accumulator and absolute,X forms; the
    // latter never charges a page-crossing penalty.
    match mode {
        AddressingMode::Accumulator => *cycles = ACCUMULATOR_RMW_CYCLES,
        AddressingMode::AbsoluteX => *cycles = RMW_ABSOLUTE_X_CYCLES,
        _ => {}
    }
}

fn addressing_mode(opcode: Byte) -> AddressingMode {
    match opcode {
        ASL_ACC | LSR_ACC | ROL_ACC | ROR_ACC => AddressingMode::Accumulator,
        ASL_ZP | LSR_ZP | ROL_ZP | ROR_ZP => AddressingMode::ZeroPage,
        ASL_ZPX | LSR_ZPX | ROL_ZPX | ROR_ZPX => AddressingMode::ZeroPageX,
        ASL_ABS | LSR_ABS | ROL_ABS | ROR_ABS => AddressingMode::Absolute,
        ASL_ABSX | LSR_ABSX | ROL_ABSX | ROR_ABSX => AddressingMode::AbsoluteX,
        _ => unreachable!("opcode {opcode:#04x} is not a shift"),
    }
}

const HANDLERS: [Handler; 20] = [
    Handler { opcode: ASL_ACC, legal: true, name: "ASL - arithmetic shift left [accumulator]", execute: arithmetic_shift_left },
    Handler { opcode: ASL_ZP, legal: true, name: "ASL - arithmetic shift left [zero page]", execute: arithmetic_shift_left },
    Handler { opcode: ASL_ZPX, legal: true, name: "ASL - arithmetic shift left [zero page,X]", execute: arithmetic_shift_left },
    Handler { opcode: ASL_ABS, legal: true, name: "ASL - arithmetic shift left [absolute]", execute: arithmetic_shift_left },
    Handler { opcode: ASL_ABSX, legal: true, name: "ASL - arithmetic shift left [absolute,X]", execute: arithmetic_shift_left },
    Handler { opcode: LSR_ACC, legal: true, name: "LSR - logical shift right [accumulator]", execute: logical_shift_right },
    Handler { opcode: LSR_ZP, legal: true, name: "LSR - logical shift right [zero page]", execute: logical_shift_right },
    Handler { opcode: LSR_ZPX, legal: true, name: "LSR - logical shift right [zero page,X]", execute: logical_shift_right },
    Handler { opcode: LSR_ABS, legal: true, name: "LSR - logical shift right [absolute]", execute: logical_shift_right },
    Handler { opcode: LSR_ABSX, legal: true, name: "LSR - logical shift right [absolute,X]", execute: logical_shift_right },
    Handler { opcode: ROL_ACC, legal: true, name: "ROL - rotate left [accumulator]", execute: rotate_left },
    Handler { opcode: ROL_ZP, legal: true, name: "ROL - rotate left [zero page]", execute: rotate_left },
    Handler { opcode: ROL_ZPX, legal: true, name: "ROL - rotate left [zero page,X]", execute: rotate_left },
    Handler { opcode: ROL_ABS, legal: true, name: "ROL - rotate left [absolute]", execute: rotate_left },
    Handler { opcode: ROL_ABSX, legal: true, name: "ROL - rotate left [absolute,X]", execute: rotate_left },
    Handler { opcode: ROR_ACC, legal: true, name: "ROR - rotate right [accumulator]", execute: rotate_right },
    Handler { opcode: ROR_ZP, legal: true, name: "ROR - rotate right [zero page]", execute: rotate_right },
    Handler { opcode: ROR_ZPX, legal: true, name: "ROR - rotate right [zero page,X]", execute: rotate_right },
    Handler { opcode: ROR_ABS, legal: true, name: "ROR - rotate right [absolute]", execute: rotate_right },
    Handler { opcode: ROR_ABSX, legal: true, name: "ROR - rotate right [absolute,X]", execute: rotate_right },
];

pub fn register(table: &mut [Handler; 256]) {
    for handler in HANDLERS {
        table[handler.opcode as usize] = handler;
    }
}
