use std::str::FromStr;

use breadbox_mos6502::mos6502::{Address, Byte};

use crate::error::Error;
use crate::Result;

/// How a program image maps into memory.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum LoadMode {
    /// A raw memory image copied to `0x0000`. Execution enters at `0x0400`,
    /// the convention of the 6502 functional test binaries.
    Functional,

    /// The first two bytes are the little-endian load address and execution
    /// enters there. This is the layout TMPx and most C64 assemblers emit.
    Tmpx,
}

impl FromStr for LoadMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<LoadMode, String> {
        match s {
            "functional" => Ok(LoadMode::Functional),
            "tmpx" => Ok(LoadMode::Tmpx),
            other => Err(format!(
                "unknown load mode `{other}` (expected `functional` or `tmpx`)"
            )),
        }
    }
}

/// A program image after parsing: where it loads, where it starts, and the
/// payload that goes into memory.
#[derive(PartialEq, Eq, Debug)]
pub struct Program {
    pub load_address: Address,
    pub entry: Address,
    pub bytes: Vec<Byte>,
}

impl Program {
    const FUNCTIONAL_ENTRY: Address = 0x0400;

    pub fn parse(bytes: &[Byte], mode: LoadMode) -> Result<Program> {
        match mode {
            LoadMode::Functional => {
                if bytes.is_empty() {
                    return Err(Error::EmptyProgram);
                }

                Ok(Program {
                    load_address: 0x0000,
                    entry: Program::FUNCTIONAL_ENTRY,
                    bytes: bytes.to_vec(),
                })
            }

            LoadMode::Tmpx => match bytes {
                [lo, hi, payload @ ..] => {
                    if payload.is_empty() {
                        return Err(Error::EmptyProgram);
                    }

                    let load_address = Address::from_le_bytes([*lo, *hi]);
                    Ok(Program {
                        load_address,
                        entry: load_address,
                        bytes: payload.to_vec(),
                    })
                }
                _ => Err(Error::MissingLoadAddress),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_mode_parses_from_cli_words() {
        assert_eq!("functional".parse(), Ok(LoadMode::Functional));
        assert_eq!("tmpx".parse(), Ok(LoadMode::Tmpx));
        assert!("prg".parse::<LoadMode>().is_err());
    }

    #[test]
    fn tmpx_strips_the_load_address_prefix() {
        let program = Program::parse(&[0x00, 0x10, 0xA9, 0x42], LoadMode::Tmpx).unwrap();

        assert_eq!(program.load_address, 0x1000);
        assert_eq!(program.entry, 0x1000);
        assert_eq!(program.bytes, vec![0xA9, 0x42]);
    }

    #[test]
    fn functional_images_keep_every_byte() {
        let program = Program::parse(&[0xEA, 0xEA], LoadMode::Functional).unwrap();

        assert_eq!(program.load_address, 0x0000);
        assert_eq!(program.entry, 0x0400);
        assert_eq!(program.bytes, vec![0xEA, 0xEA]);
    }
}
