/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! Opcode decoding.
//!
//! An opcode byte is split in three fields:
//!
//! ```text
//!  7 6 | 5 4 3 | 2 1 0
//!  top | ddd   | sss
//!      | pp q  |
//! ```
//!
//! `sss` is a source register, `ddd` is a destination register, an ALU operation, a
//! condition or a `RST` vector depending on the instruction family, and `pp` is a register
//! pair. The family itself comes from [`OPCODE_TABLE`](static.OPCODE_TABLE.html).

pub mod asm;
mod opcodes;

pub use self::opcodes::{AluOp, Condition, Instruction, Reg16, Register, M};

use self::opcodes::Instruction::*;

/// Instruction family of each of the 256 opcodes, indexed by opcode.
#[rustfmt::skip]
pub static OPCODE_TABLE: [Instruction; 256] = [
    // 0x00
    Nop, Lxi, Stax, Inx, Inr, Dcr, Mvi, Rlc,
    Undefined, Dad, Ldax, Dcx, Inr, Dcr, Mvi, Rrc,
    // 0x10
    Undefined, Lxi, Stax, Inx, Inr, Dcr, Mvi, Ral,
    Undefined, Dad, Ldax, Dcx, Inr, Dcr, Mvi, Rar,
    // 0x20
    Undefined, Lxi, Shld, Inx, Inr, Dcr, Mvi, Daa,
    Undefined, Dad, Lhld, Dcx, Inr, Dcr, Mvi, Cma,
    // 0x30
    Undefined, Lxi, Sta, Inx, Inr, Dcr, Mvi, Stc,
    Undefined, Dad, Lda, Dcx, Inr, Dcr, Mvi, Cmc,
    // 0x40
    Mov, Mov, Mov, Mov, Mov, Mov, Mov, Mov,
    Mov, Mov, Mov, Mov, Mov, Mov, Mov, Mov,
    // 0x50
    Mov, Mov, Mov, Mov, Mov, Mov, Mov, Mov,
    Mov, Mov, Mov, Mov, Mov, Mov, Mov, Mov,
    // 0x60
    Mov, Mov, Mov, Mov, Mov, Mov, Mov, Mov,
    Mov, Mov, Mov, Mov, Mov, Mov, Mov, Mov,
    // 0x70
    Mov, Mov, Mov, Mov, Mov, Mov, Hlt, Mov,
    Mov, Mov, Mov, Mov, Mov, Mov, Mov, Mov,
    // 0x80
    Alu, Alu, Alu, Alu, Alu, Alu, Alu, Alu,
    Alu, Alu, Alu, Alu, Alu, Alu, Alu, Alu,
    // 0x90
    Alu, Alu, Alu, Alu, Alu, Alu, Alu, Alu,
    Alu, Alu, Alu, Alu, Alu, Alu, Alu, Alu,
    // 0xa0
    Alu, Alu, Alu, Alu, Alu, Alu, Alu, Alu,
    Alu, Alu, Alu, Alu, Alu, Alu, Alu, Alu,
    // 0xb0
    Alu, Alu, Alu, Alu, Alu, Alu, Alu, Alu,
    Alu, Alu, Alu, Alu, Alu, Alu, Alu, Alu,
    // 0xc0
    RetIf, Pop, JmpIf, Jmp, CallIf, Push, AluImmediate, Rst,
    RetIf, Ret, JmpIf, Undefined, CallIf, Call, AluImmediate, Rst,
    // 0xd0
    RetIf, Pop, JmpIf, Out, CallIf, Push, AluImmediate, Rst,
    RetIf, Undefined, JmpIf, In, CallIf, Undefined, AluImmediate, Rst,
    // 0xe0
    RetIf, Pop, JmpIf, Xthl, CallIf, Push, AluImmediate, Rst,
    RetIf, Pchl, JmpIf, Xchg, CallIf, Undefined, AluImmediate, Rst,
    // 0xf0
    RetIf, Pop, JmpIf, Di, CallIf, Push, AluImmediate, Rst,
    RetIf, Sphl, JmpIf, Ei, CallIf, Undefined, AluImmediate, Rst,
];

pub fn instruction(opcode: u8) -> Instruction {
    OPCODE_TABLE[opcode as usize]
}

/// Source register field, bits 0-2.
pub fn source_field(opcode: u8) -> u8 {
    opcode & 0x07
}

/// Destination register, ALU operation, condition or `RST` vector field, bits 3-5.
pub fn destination_field(opcode: u8) -> u8 {
    (opcode >> 3) & 0x07
}

/// Register pair field, bits 4-5.
pub fn pair_field(opcode: u8) -> u8 {
    (opcode >> 4) & 0x03
}

pub fn condition(opcode: u8) -> Condition {
    Condition::from_field(destination_field(opcode))
}

pub fn alu_op(opcode: u8) -> AluOp {
    AluOp::from_field(destination_field(opcode))
}

/// Target address of `RST n`.
pub fn rst_vector(opcode: u8) -> u16 {
    (destination_field(opcode) as u16) * 8
}

fn register_name(field: u8) -> String {
    Register::from_field(field)
        .map(|reg| reg.to_string())
        .unwrap_or_else(|| "M".to_string())
}

fn pair_name(opcode: u8) -> &'static str {
    match pair_field(opcode) {
        0 => "B",
        1 => "D",
        2 => "H",
        _ if instruction(opcode) == Push || instruction(opcode) == Pop => "PSW",
        _ => "SP",
    }
}

/// Assembly mnemonic of an opcode with its register, pair or condition operand. Immediate
/// operands are not part of the opcode and are left out.
pub fn mnemonic(opcode: u8) -> String {
    let dst = destination_field(opcode);
    let src = source_field(opcode);
    match instruction(opcode) {
        Nop => "NOP".to_string(),
        Undefined => format!("DB ${:02x}", opcode),
        Hlt => "HLT".to_string(),
        Mov => format!("MOV {},{}", register_name(dst), register_name(src)),
        Mvi => format!("MVI {}", register_name(dst)),
        Lxi => format!("LXI {}", pair_name(opcode)),
        Lda => "LDA".to_string(),
        Sta => "STA".to_string(),
        Lhld => "LHLD".to_string(),
        Shld => "SHLD".to_string(),
        Ldax => format!("LDAX {}", pair_name(opcode)),
        Stax => format!("STAX {}", pair_name(opcode)),
        Xchg => "XCHG".to_string(),
        Alu => format!("{} {}", alu_op(opcode).register_mnemonic(), register_name(src)),
        AluImmediate => alu_op(opcode).immediate_mnemonic().to_string(),
        Inr => format!("INR {}", register_name(dst)),
        Dcr => format!("DCR {}", register_name(dst)),
        Inx => format!("INX {}", pair_name(opcode)),
        Dcx => format!("DCX {}", pair_name(opcode)),
        Dad => format!("DAD {}", pair_name(opcode)),
        Daa => "DAA".to_string(),
        Rlc => "RLC".to_string(),
        Rrc => "RRC".to_string(),
        Ral => "RAL".to_string(),
        Rar => "RAR".to_string(),
        Cma => "CMA".to_string(),
        Cmc => "CMC".to_string(),
        Stc => "STC".to_string(),
        Jmp => "JMP".to_string(),
        JmpIf => format!("J{}", condition(opcode)),
        Call => "CALL".to_string(),
        CallIf => format!("C{}", condition(opcode)),
        Ret => "RET".to_string(),
        RetIf => format!("R{}", condition(opcode)),
        Rst => format!("RST {}", dst),
        Pchl => "PCHL".to_string(),
        Push => format!("PUSH {}", pair_name(opcode)),
        Pop => format!("POP {}", pair_name(opcode)),
        Xthl => "XTHL".to_string(),
        Sphl => "SPHL".to_string(),
        In => "IN".to_string(),
        Out => "OUT".to_string(),
        Ei => "EI".to_string(),
        Di => "DI".to_string(),
    }
}
