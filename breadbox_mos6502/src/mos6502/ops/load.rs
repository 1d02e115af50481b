use log::error;

use super::super::addressing::AddressingMode;
use super::super::handler::Handler;
use super::super::register::Register;
use super::super::{Byte, Cpu, CyclesTaken};
use super::{read_operand, set_nz};

pub const LDA_IMM: Byte = 0xA9;
pub const LDA_ZP: Byte = 0xA5;
pub const LDA_ZPX: Byte = 0xB5;
pub const LDA_ABS: Byte = 0xAD;
pub const LDA_ABSX: Byte = 0xBD;
pub const LDA_ABSY: Byte = 0xB9;
pub const LDA_INDX: Byte = 0xA1;
pub const LDA_INDY: Byte = 0xB1;

pub const LDX_IMM: Byte = 0xA2;
pub const LDX_ZP: Byte = 0xA6;
pub const LDX_ZPY: Byte = 0xB6;
pub const LDX_ABS: Byte = 0xAE;
pub const LDX_ABSY: Byte = 0xBE;

pub const LDY_IMM: Byte = 0xA0;
pub const LDY_ZP: Byte = 0xA4;
pub const LDY_ZPX: Byte = 0xB4;
pub const LDY_ABS: Byte = 0xAC;
pub const LDY_ABSX: Byte = 0xBC;

/// Load the addressed byte into the register named by the opcode's low two
/// bits and refresh `N`/`Z`.
fn load(cpu: &mut dyn Cpu, cycles: &mut CyclesTaken, opcode: Byte) {
    let target = match Register::from_opcode(opcode) {
        Ok(register) => register,
        Err(err) => {
            error!("{err}");
            return;
        }
    };

    let value = read_operand(cpu, cycles, addressing_mode(opcode));
    cpu.write_register(target, value);
    set_nz(cpu, value);
}

fn addressing_mode(opcode: Byte) -> AddressingMode {
    match opcode {
        LDA_IMM | LDX_IMM | LDY_IMM => AddressingMode::Immediate,
        LDA_ZP | LDX_ZP | LDY_ZP => AddressingMode::ZeroPage,
        LDA_ZPX | LDY_ZPX => AddressingMode::ZeroPageX,
        LDX_ZPY => AddressingMode::ZeroPageY,
        LDA_ABS | LDX_ABS | LDY_ABS => AddressingMode::Absolute,
        LDA_ABSX | LDY_ABSX => AddressingMode::AbsoluteX,
        LDA_ABSY | LDX_ABSY => AddressingMode::AbsoluteY,
        LDA_INDX => AddressingMode::IndirectX,
        LDA_INDY => AddressingMode::IndirectY,
        _ => unreachable!("opcode {opcode:#04x} is not a load"),
    }
}

const HANDLERS: [Handler; 18] = [
    Handler { opcode: LDA_IMM, legal: true, name: "LDA - load accumulator [immediate]", execute: load },
    Handler { opcode: LDA_ZP, legal: true, name: "LDA - load accumulator [zero page]", execute: load },
    Handler { opcode: LDA_ZPX, legal: true, name: "LDA - load accumulator [zero page,X]", execute: load },
    Handler { opcode: LDA_ABS, legal: true, name: "LDA - load accumulator [absolute]", execute: load },
    Handler { opcode: LDA_ABSX, legal: true, name: "LDA - load accumulator [absolute,X]", execute: load },
    Handler { opcode: LDA_ABSY, legal: true, name: "LDA - load accumulator [absolute,Y]", execute: load },
    Handler { opcode: LDA_INDX, legal: true, name: "LDA - load accumulator [(indirect,X)]", execute: load },
    Handler { opcode: LDA_INDY, legal: true, name: "LDA - load accumulator [(indirect),Y]", execute: load },
    Handler { opcode: LDX_IMM, legal: true, name: "LDX - load X [immediate]", execute: load },
    Handler { opcode: LDX_ZP, legal: true, name: "LDX - load X [zero page]", execute: load },
    Handler { opcode: LDX_ZPY, legal: true, name: "LDX - load X [zero page,Y]", execute: load },
    Handler { opcode: LDX_ABS, legal: true, name: "LDX - load X [absolute]", execute: load },
    Handler { opcode: LDX_ABSY, legal: true, name: "LDX - load X [absolute,Y]", execute: load },
    Handler { opcode: LDY_IMM, legal: true, name: "LDY - load Y [immediate]", execute: load },
    Handler { opcode: LDY_ZP, legal: true, name: "LDY - load Y [zero page]", execute: load },
    Handler { opcode: LDY_ZPX, legal: true, name: "LDY - load Y [zero page,X]", execute: load },
    Handler { opcode: LDY_ABS, legal: true, name: "LDY - load Y [absolute]", execute: load },
    Handler { opcode: LDY_ABSX, legal: true, name: "LDY - load Y [absolute,X]", execute: load },
];

pub fn register(table: &mut [Handler; 256]) {
    for handler in HANDLERS {
        table[handler.opcode as usize] = handler;
    }
}
