/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use std::fmt::{self, Display, Formatter};

use crate::proc_state::Flags;

/// The seven 8-bit registers. The memory pseudo-register `M` is not one of them: register
/// field value 6 has no variant and is resolved through memory by the processor.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Register {
    A,
    B,
    C,
    D,
    E,
    H,
    L,
}

/// Register field value designating the memory pseudo-register `M`.
pub const M: u8 = 6;

impl Register {
    /// Decodes a 3-bit register field (`B C D E H L M A`). Returns `None` for `M`.
    pub fn from_field(field: u8) -> Option<Register> {
        match field & 0x07 {
            0 => Some(Register::B),
            1 => Some(Register::C),
            2 => Some(Register::D),
            3 => Some(Register::E),
            4 => Some(Register::H),
            5 => Some(Register::L),
            7 => Some(Register::A),
            _ => None,
        }
    }
}

impl Display for Register {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Register pairs addressable by the 2-bit pair field of `LXI`, `INX`, `DCX` and `DAD`.
///
/// `PUSH` and `POP` use the same field but read value 3 as the processor status word.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Reg16 {
    B,
    D,
    H,
    SP,
}

impl Reg16 {
    pub fn from_field(field: u8) -> Reg16 {
        match field & 0x03 {
            0 => Reg16::B,
            1 => Reg16::D,
            2 => Reg16::H,
            _ => Reg16::SP,
        }
    }
}

impl Display for Reg16 {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Condition field of conditional jumps, calls and returns.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Condition {
    NotZero,
    Zero,
    NoCarry,
    Carry,
    ParityOdd,
    ParityEven,
    Plus,
    Minus,
}

impl Condition {
    pub fn from_field(field: u8) -> Condition {
        match field & 0x07 {
            0 => Condition::NotZero,
            1 => Condition::Zero,
            2 => Condition::NoCarry,
            3 => Condition::Carry,
            4 => Condition::ParityOdd,
            5 => Condition::ParityEven,
            6 => Condition::Plus,
            _ => Condition::Minus,
        }
    }

    pub fn holds(self, flags: &Flags) -> bool {
        match self {
            Condition::NotZero => !flags.z,
            Condition::Zero => flags.z,
            Condition::NoCarry => !flags.cy,
            Condition::Carry => flags.cy,
            Condition::ParityOdd => !flags.p,
            Condition::ParityEven => flags.p,
            Condition::Plus => !flags.s,
            Condition::Minus => flags.s,
        }
    }
}

impl Display for Condition {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let suffix = match *self {
            Condition::NotZero => "NZ",
            Condition::Zero => "Z",
            Condition::NoCarry => "NC",
            Condition::Carry => "C",
            Condition::ParityOdd => "PO",
            Condition::ParityEven => "PE",
            Condition::Plus => "P",
            Condition::Minus => "M",
        };
        write!(f, "{}", suffix)
    }
}

/// Accumulator operation selected by bits 3-5 of `ADD`..`CMP` and `ADI`..`CPI`.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum AluOp {
    Add,
    Adc,
    Sub,
    Sbb,
    Ana,
    Xra,
    Ora,
    Cmp,
}

impl AluOp {
    pub fn from_field(field: u8) -> AluOp {
        match field & 0x07 {
            0 => AluOp::Add,
            1 => AluOp::Adc,
            2 => AluOp::Sub,
            3 => AluOp::Sbb,
            4 => AluOp::Ana,
            5 => AluOp::Xra,
            6 => AluOp::Ora,
            _ => AluOp::Cmp,
        }
    }

    fn mnemonics(self) -> (&'static str, &'static str) {
        match self {
            AluOp::Add => ("ADD", "ADI"),
            AluOp::Adc => ("ADC", "ACI"),
            AluOp::Sub => ("SUB", "SUI"),
            AluOp::Sbb => ("SBB", "SBI"),
            AluOp::Ana => ("ANA", "ANI"),
            AluOp::Xra => ("XRA", "XRI"),
            AluOp::Ora => ("ORA", "ORI"),
            AluOp::Cmp => ("CMP", "CPI"),
        }
    }

    pub fn register_mnemonic(self) -> &'static str {
        self.mnemonics().0
    }

    pub fn immediate_mnemonic(self) -> &'static str {
        self.mnemonics().1
    }
}

/// Instruction family of an opcode.
///
/// Opcodes of the same family share their semantics and only differ by the register,
/// register pair, condition or ALU operation encoded in the opcode bits. Those operands are
/// decoded from the instruction register when the instruction executes.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Instruction {
    Nop,
    /// One of the twelve unassigned opcodes. Executes as `Nop`.
    Undefined,
    Hlt,

    // Data transfer
    Mov,
    Mvi,
    Lxi,
    Lda,
    Sta,
    Lhld,
    Shld,
    Ldax,
    Stax,
    Xchg,

    // Arithmetic and logic
    Alu,
    AluImmediate,
    Inr,
    Dcr,
    Inx,
    Dcx,
    Dad,
    Daa,
    Rlc,
    Rrc,
    Ral,
    Rar,
    Cma,
    Cmc,
    Stc,

    // Branch
    Jmp,
    JmpIf,
    Call,
    CallIf,
    Ret,
    RetIf,
    Rst,
    Pchl,

    // Stack, I/O, and Machine Control
    Push,
    Pop,
    Xthl,
    Sphl,
    In,
    Out,
    Ei,
    Di,
}
