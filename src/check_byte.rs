// 🔀 Check Byte Derivation - Iterated shift/xor mixing
// Seeds from the BCD balance bytes, mixes once per iteration count.
//
// All arithmetic is done in u16 and masked back to 8 bits after every
// shift or add, so the wraparound is explicit rather than implied by u8.

use tracing::trace;

const BYTE_MASK: u16 = 0xff;

/// One mixing round.
///
/// `val` is shifted left by one; the bit rotated into position 0 is bit 7 of
/// an auxiliary value built from `val` with three shift/xor steps (shifts of
/// 1, 1 and 2). This is neither a CRC nor a plain rotation, so the exact step
/// order matters.
///
/// Example: 0x2c → 0x58, 0xb0 → 0x61
pub fn mix_round(val: u8) -> u8 {
    let v = u16::from(val);

    let mut tmp = ((v << 1) & BYTE_MASK) ^ v;
    tmp = ((tmp << 1) & BYTE_MASK) ^ v;
    tmp = ((tmp << 2) & BYTE_MASK) ^ v;

    let mut next = (v << 1) & BYTE_MASK;
    if tmp & 0x80 != 0 {
        next |= 0x01;
    }

    next as u8
}

/// Initial mixing value: the sum of both balance bytes, never zero.
///
/// A zero seed would stay zero through every round.
pub fn seed(dollar_high: u8, dollar_low: u8) -> u8 {
    let sum = (u16::from(dollar_high) + u16::from(dollar_low)) & BYTE_MASK;
    if sum == 0 {
        1
    } else {
        sum as u8
    }
}

/// Derive the check byte from the balance bytes and the name checksum.
///
/// An iteration count of zero (empty or checksum-wrapping name) still runs
/// one round.
pub fn derive_check_byte(dollar_high: u8, dollar_low: u8, iteration_count: u8) -> u8 {
    let rounds = iteration_count.max(1);
    let mut val = seed(dollar_high, dollar_low);

    for round in 1..=rounds {
        val = mix_round(val);
        trace!(round, val = %format!("{:#04x}", val), "mix round");
    }

    val
}

// ============================================================================
// TESTS
// ============================================================================
