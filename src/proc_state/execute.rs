/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use crate::alu;
use crate::opcode::{self, AluOp, Instruction, Reg16};
use crate::opcode::Instruction::*;
use super::{DataBus, Flags, Proc8080};

impl<Bus: DataBus> Proc8080<Bus> {

    /// Applies `instruction` for the opcode held in the instruction register. The program
    /// counter already points after the opcode, immediate operands are fetched here.
    pub(super) fn execute(&mut self, instruction: Instruction) {
        let ir = self.instruction_register;
        match instruction {
            Nop => (),
            Undefined => log::debug!(
                "undefined opcode 0x{:02x} at 0x{:04x}, executed as NOP",
                ir, self.registers.pc.wrapping_sub(1)
            ),
            Hlt => {
                self.halted = true;
                log::debug!("halted at 0x{:04x} after {} instructions", self.registers.pc, self.executed + 1);
            }

            // Data transfer
            Mov => {
                let value = self.operand(opcode::source_field(ir));
                self.set_operand(opcode::destination_field(ir), value);
            }
            Mvi => {
                let value = self.fetch();
                self.set_operand(opcode::destination_field(ir), value);
            }
            Lxi => {
                let value = self.fetch_word();
                self.registers.set_reg_16_val(Self::pair(ir), value);
            }
            Lda => {
                let addr = self.fetch_word();
                self.registers.a = self.memory.read(addr);
            }
            Sta => {
                let addr = self.fetch_word();
                self.memory.write(addr, self.registers.a);
            }
            Lhld => {
                let addr = self.fetch_word();
                let value = self.memory.read_word(addr);
                self.registers.set_reg_16_val(Reg16::H, value);
            }
            Shld => {
                let addr = self.fetch_word();
                self.memory.write_word(addr, self.registers.hl());
            }
            Ldax => {
                let addr = self.registers.reg_16_val(Self::pair(ir));
                self.registers.a = self.memory.read(addr);
            }
            Stax => {
                let addr = self.registers.reg_16_val(Self::pair(ir));
                self.memory.write(addr, self.registers.a);
            }
            Xchg => self.xchg(),

            // Arithmetic and logic
            Alu => {
                let value = self.operand(opcode::source_field(ir));
                self.apply_alu(opcode::alu_op(ir), value);
            }
            AluImmediate => {
                let value = self.fetch();
                self.apply_alu(opcode::alu_op(ir), value);
            }
            Inr => self.apply_to_operand(opcode::destination_field(ir), alu::inr),
            Dcr => self.apply_to_operand(opcode::destination_field(ir), alu::dcr),
            Inx => {
                let pair = Self::pair(ir);
                let value = self.registers.reg_16_val(pair).wrapping_add(1);
                self.registers.set_reg_16_val(pair, value);
            }
            Dcx => {
                let pair = Self::pair(ir);
                let value = self.registers.reg_16_val(pair).wrapping_sub(1);
                self.registers.set_reg_16_val(pair, value);
            }
            Dad => {
                let value = self.registers.reg_16_val(Self::pair(ir));
                let (result, flags) = alu::dad(self.registers.hl(), value, self.flags);
                self.registers.set_reg_16_val(Reg16::H, result);
                self.flags = flags;
            }
            Daa => self.apply_to_accumulator(alu::daa),
            Rlc => self.apply_to_accumulator(alu::rlc),
            Rrc => self.apply_to_accumulator(alu::rrc),
            Ral => self.apply_to_accumulator(alu::ral),
            Rar => self.apply_to_accumulator(alu::rar),
            Cma => self.registers.a = !self.registers.a,
            Cmc => self.flags.cy = !self.flags.cy,
            Stc => self.flags.cy = true,

            // Branch
            Jmp => self.registers.pc = self.fetch_word(),
            JmpIf => {
                let addr = self.fetch_word();
                if self.condition_holds(ir) {
                    self.registers.pc = addr;
                }
            }
            Call => {
                let addr = self.fetch_word();
                self.call(addr);
            }
            CallIf => {
                let addr = self.fetch_word();
                if self.condition_holds(ir) {
                    self.call(addr);
                }
            }
            Ret => self.registers.pc = self.pop(),
            RetIf => {
                if self.condition_holds(ir) {
                    self.registers.pc = self.pop();
                }
            }
            Rst => self.call(opcode::rst_vector(ir)),
            Pchl => self.registers.pc = self.registers.hl(),

            // Stack, I/O, and Machine Control
            Push => {
                let value = self.stack_pair(ir);
                self.push(value);
            }
            Pop => {
                let value = self.pop();
                self.set_stack_pair(ir, value);
            }
            Xthl => self.xthl(),
            Sphl => self.registers.sp = self.registers.hl(),
            In => {
                let port = self.fetch();
                if let Some(value) = self.data_bus.read_port(port) {
                    self.registers.a = value;
                }
            }
            Out => {
                let port = self.fetch();
                self.data_bus.write_port(port, self.registers.a);
            }
            Ei => self.interrupts_enabled = true,
            Di => self.interrupts_enabled = false,
        }
    }

    fn pair(ir: u8) -> Reg16 {
        Reg16::from_field(opcode::pair_field(ir))
    }

    fn condition_holds(&self, ir: u8) -> bool {
        opcode::condition(ir).holds(&self.flags)
    }

    fn apply_alu(&mut self, op: AluOp, value: u8) {
        let a = self.registers.a;
        let cy = self.flags.cy;
        let (result, flags) = match op {
            AluOp::Add => alu::add(a, value),
            AluOp::Adc => alu::adc(a, value, cy),
            AluOp::Sub => alu::sub(a, value),
            AluOp::Sbb => alu::sbb(a, value, cy),
            AluOp::Ana => alu::ana(a, value),
            AluOp::Xra => alu::xra(a, value),
            AluOp::Ora => alu::ora(a, value),
            AluOp::Cmp => (a, alu::cmp(a, value)),
        };
        self.registers.a = result;
        self.flags = flags;
    }

    fn apply_to_operand(&mut self, field: u8, op: fn(u8, Flags) -> (u8, Flags)) {
        let value = self.operand(field);
        let (result, flags) = op(value, self.flags);
        self.set_operand(field, result);
        self.flags = flags;
    }

    fn apply_to_accumulator(&mut self, op: fn(u8, Flags) -> (u8, Flags)) {
        let (result, flags) = op(self.registers.a, self.flags);
        self.registers.a = result;
        self.flags = flags;
    }

    fn xchg(&mut self) {
        let d = self.registers.reg_16_val(Reg16::D);
        let h = self.registers.reg_16_val(Reg16::H);

        self.registers.set_reg_16_val(Reg16::D, h);
        self.registers.set_reg_16_val(Reg16::H, d);
    }

    fn xthl(&mut self) {
        let addr = self.registers.sp;
        let top = self.memory.read_word(addr);
        self.memory.write_word(addr, self.registers.hl());
        self.registers.set_reg_16_val(Reg16::H, top);
    }

    fn call(&mut self, addr: u16) {
        let pc = self.registers.pc;
        self.push(pc);
        self.registers.pc = addr;
    }

    // PUSH and POP read pair 3 as PSW instead of SP.

    fn stack_pair(&self, ir: u8) -> u16 {
        match opcode::pair_field(ir) {
            3 => self.psw(),
            _ => self.registers.reg_16_val(Self::pair(ir)),
        }
    }

    fn set_stack_pair(&mut self, ir: u8, value: u16) {
        match opcode::pair_field(ir) {
            3 => self.set_psw(value),
            _ => self.registers.set_reg_16_val(Self::pair(ir), value),
        }
    }
}
