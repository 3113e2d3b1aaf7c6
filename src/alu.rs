/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! Arithmetic and logic primitives of the 8080.
//!
//! Every function is pure: it takes the operands (and the current flags when the
//! instruction keeps some of them) and returns the result with the new flags. The processor
//! decides where the result goes.
//!
//! Subtraction works like the real adder does: the one's complement of the operand is added
//! with an inverted borrow as carry in. The auxiliary carry is the raw carry out of bit 3 of
//! that addition while the carry flag is inverted, so `cy == true` means a borrow occurred.

use crate::proc_state::Flags;

fn add_with_carry_in(acc: u8, operand: u8, carry_in: bool) -> (u8, Flags) {
    let sum = acc as u16 + operand as u16 + carry_in as u16;
    let result = sum as u8;
    let mut flags = Flags::for_result(result);
    flags.cy = sum > 0xff;
    flags.ac = (acc & 0x0f) + (operand & 0x0f) + carry_in as u8 > 0x0f;
    (result, flags)
}

pub fn add(acc: u8, operand: u8) -> (u8, Flags) {
    add_with_carry_in(acc, operand, false)
}

pub fn adc(acc: u8, operand: u8, carry: bool) -> (u8, Flags) {
    add_with_carry_in(acc, operand, carry)
}

pub fn sub(acc: u8, operand: u8) -> (u8, Flags) {
    sbb(acc, operand, false)
}

pub fn sbb(acc: u8, operand: u8, borrow: bool) -> (u8, Flags) {
    let (result, mut flags) = add_with_carry_in(acc, !operand, !borrow);
    flags.cy = !flags.cy;
    (result, flags)
}

pub fn ana(acc: u8, operand: u8) -> (u8, Flags) {
    let result = acc & operand;
    (result, Flags::for_result(result))
}

pub fn xra(acc: u8, operand: u8) -> (u8, Flags) {
    let result = acc ^ operand;
    (result, Flags::for_result(result))
}

pub fn ora(acc: u8, operand: u8) -> (u8, Flags) {
    let result = acc | operand;
    (result, Flags::for_result(result))
}

/// Flags of `acc - operand`. The accumulator is not part of the output.
pub fn cmp(acc: u8, operand: u8) -> Flags {
    sub(acc, operand).1
}

/// `value + 1`, the carry is kept from `flags`.
pub fn inr(value: u8, flags: Flags) -> (u8, Flags) {
    let (result, new_flags) = add(value, 1);
    (result, new_flags.keep_carry_of(flags))
}

/// `value - 1`, the carry is kept from `flags`.
pub fn dcr(value: u8, flags: Flags) -> (u8, Flags) {
    let (result, new_flags) = sub(value, 1);
    (result, new_flags.keep_carry_of(flags))
}

// Rotates only touch the carry.

pub fn rlc(acc: u8, flags: Flags) -> (u8, Flags) {
    (acc.rotate_left(1), Flags { cy: (acc & 0x80) != 0, ..flags })
}

pub fn rrc(acc: u8, flags: Flags) -> (u8, Flags) {
    (acc.rotate_right(1), Flags { cy: (acc & 0x01) != 0, ..flags })
}

pub fn ral(acc: u8, flags: Flags) -> (u8, Flags) {
    ((acc << 1) | flags.cy as u8, Flags { cy: (acc & 0x80) != 0, ..flags })
}

pub fn rar(acc: u8, flags: Flags) -> (u8, Flags) {
    ((acc >> 1) | ((flags.cy as u8) << 7), Flags { cy: (acc & 0x01) != 0, ..flags })
}

/// 16-bit addition used by `DAD`, done as a low byte `add` followed by a high byte `adc`.
/// Only the carry of the high byte ends up in the returned flags.
pub fn dad(hl: u16, value: u16, flags: Flags) -> (u16, Flags) {
    let (low, low_flags) = add(hl as u8, value as u8);
    let (high, high_flags) = adc((hl >> 8) as u8, (value >> 8) as u8, low_flags.cy);
    (((high as u16) << 8) | low as u16, Flags { cy: high_flags.cy, ..flags })
}

/// Decimal adjust of the accumulator after a BCD addition.
///
/// The carry can be set but never cleared by the adjustment.
pub fn daa(acc: u8, flags: Flags) -> (u8, Flags) {
    let mut correction = 0;
    let mut carry = flags.cy;
    if flags.ac || (acc & 0x0f) > 9 {
        correction |= 0x06;
    }
    if flags.cy || acc > 0x99 {
        correction |= 0x60;
        carry = true;
    }
    let (result, mut new_flags) = add(acc, correction);
    new_flags.cy = carry;
    (result, new_flags)
}
