use log::error;

use super::super::addressing::{resolve, Access, AddressingMode};
use super::super::handler::Handler;
use super::super::register::Register;
use super::super::{Byte, Cpu, CyclesTaken};

pub const STA_ZP: Byte = 0x85;
pub const STA_ZPX: Byte = 0x95;
pub const STA_ABS: Byte = 0x8D;
pub const STA_ABSX: Byte = 0x9D;
pub const STA_ABSY: Byte = 0x99;
pub const STA_INDX: Byte = 0x81;
pub const STA_INDY: Byte = 0x91;

pub const STX_ZP: Byte = 0x86;
pub const STX_ZPY: Byte = 0x96;
pub const STX_ABS: Byte = 0x8E;

pub const STY_ZP: Byte = 0x84;
pub const STY_ZPX: Byte = 0x94;
pub const STY_ABS: Byte = 0x8C;

/// Write the register named by the opcode's low two bits to the effective
/// address. Stores never touch the flags.
fn store(cpu: &mut dyn Cpu, cycles: &mut CyclesTaken, opcode: Byte) {
    let source = match Register::from_opcode(opcode) {
        Ok(register) => register,
        Err(err) => {
            error!("{err}");
            return;
        }
    };

    let reference = resolve(cpu, cycles, addressing_mode(opcode), Access::Write);
    let value = cpu.read_register(source);
    cpu.write_reference(cycles, reference, value);
}

fn addressing_mode(opcode: Byte) -> AddressingMode {
    match opcode {
        STA_ZP | STX_ZP | STY_ZP => AddressingMode::ZeroPage,
        STA_ZPX | STY_ZPX => AddressingMode::ZeroPageX,
        STX_ZPY => AddressingMode::ZeroPageY,
        STA_ABS | STX_ABS | STY_ABS => AddressingMode::Absolute,
        STA_ABSX => AddressingMode::AbsoluteX,
        STA_ABSY => AddressingMode::AbsoluteY,
        STA_INDX => AddressingMode::IndirectX,
        STA_INDY => AddressingMode::IndirectY,
        _ => unreachable!("opcode {opcode:#04x} is not a store"),
    }
}

const HANDLERS: [Handler; 13] = [
    Handler { opcode: STA_ZP, legal: true, name: "STA - store accumulator [zero page]", execute: store },
    Handler { opcode: STA_ZPX, legal: true, name: "STA - store accumulator [zero page,X]", execute: store },
    Handler { opcode: STA_ABS, legal: true, name: "STA - store accumulator [absolute]", execute: store },
    Handler { opcode: STA_ABSX, legal: true, name: "STA - store accumulator [absolute,X]", execute: store },
    Handler { opcode: STA_ABSY, legal: true, name: "STA - store accumulator [absolute,Y]", execute: store },
    Handler { opcode: STA_INDX, legal: true, name: "STA - store accumulator [(indirect,X)]", execute: store },
    Handler { opcode: STA_INDY, legal: true, name: "STA - store accumulator [(indirect),Y]", execute: store },
    Handler { opcode: STX_ZP, legal: true, name: "STX - store X [zero page]", execute: store },
    Handler { opcode: STX_ZPY, legal: true, name: "STX - store X [zero page,Y]", execute: store },
    Handler { opcode: STX_ABS, legal: true, name: "STX - store X [absolute]", execute: store },
    Handler { opcode: STY_ZP, legal: true, name: "STY - store Y [zero page]", execute: store },
    Handler { opcode: STY_ZPX, legal: true, name: "STY - store Y [zero page,X]", execute: store },
    Handler { opcode: STY_ABS, legal: true, name: "STY - store Y [absolute]", execute: store },
];

pub fn register(table: &mut [Handler; 256]) {
    for handler in HANDLERS {
        table[handler.opcode as usize] = handler;
    }
}
