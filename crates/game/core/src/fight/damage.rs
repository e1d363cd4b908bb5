//! Incoming damage mitigation.

/// Damage split after defensive reductions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Mitigation {
    /// Damage that reaches the health pool (before clamping at zero).
    pub effective: u32,
    /// Damage removed by blocking and shielding.
    pub prevented: u32,
}

/// Computes how much of an incoming hit gets through.
///
/// # Formula
///
/// ```text
/// after_block  = blocking ? amount / block_divisor : amount
/// effective    = after_block - shield_absorb   (saturating)
/// prevented    = amount - effective
/// ```
///
/// A zero divisor is treated as no reduction; `CombatConfig::validate`
/// rejects it up front.
pub fn mitigate(amount: u32, blocking: bool, block_divisor: u32, shield_absorb: u32) -> Mitigation {
    let after_block = if blocking {
        amount.checked_div(block_divisor).unwrap_or(amount)
    } else {
        amount
    };
    let effective = after_block.saturating_sub(shield_absorb);

    Mitigation {
        effective,
        prevented: amount - effective,
    }
}
