use thiserror::Error;

use super::{Address, Byte};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("illegal opcode {opcode:#04x} at {pc:#06x}")]
    IllegalOpcode { opcode: Byte, pc: Address },

    #[error("opcode {0:#04x} does not select an index register")]
    InvalidIndexRegister(Byte),
}
