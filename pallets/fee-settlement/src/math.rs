//! Constant-product quoting, price impact and basis-point splitting.
//!
//! All functions floor their results and return `None` instead of overflowing.

use primitives::{Balance, BasisPoints, params::BPS_DENOMINATOR};
use sp_arithmetic::{Rounding, helpers_128bit::multiply_by_rational_with_rounding};

/// Output of swapping `amount_in` against `(reserve_in, reserve_out)` with `fee_bps`.
///
/// `amount_in·(D−fee)·reserve_out / (reserve_in·D + amount_in·(D−fee))`, `D = 10000`.
pub fn get_amount_out(
  amount_in: Balance,
  reserve_in: Balance,
  reserve_out: Balance,
  fee_bps: BasisPoints,
) -> Option<Balance> {
  if reserve_in == 0 || reserve_out == 0 || fee_bps > BPS_DENOMINATOR {
    return None;
  }
  let denominator = Balance::from(BPS_DENOMINATOR);
  let amount_in_with_fee = amount_in.checked_mul(denominator - Balance::from(fee_bps))?;
  let divisor = reserve_in
    .checked_mul(denominator)?
    .checked_add(amount_in_with_fee)?;
  if divisor == 0 {
    return None;
  }
  multiply_by_rational_with_rounding(amount_in_with_fee, reserve_out, divisor, Rounding::Down)
}

/// Deviation of the fee-free average rate from the spot rate, in basis points.
///
/// Spot `reserve_out/reserve_in` against average `reserve_out/(reserve_in + amount_in)`
/// reduces to `amount_in / (reserve_in + amount_in)`.
pub fn price_impact_bps(amount_in: Balance, reserve_in: Balance) -> Option<BasisPoints> {
  let depth = reserve_in.checked_add(amount_in)?;
  if depth == 0 {
    return None;
  }
  let impact = multiply_by_rational_with_rounding(
    amount_in,
    Balance::from(BPS_DENOMINATOR),
    depth,
    Rounding::Down,
  )?;
  BasisPoints::try_from(impact).ok()
}

/// Split `amount` into `(external, remainder)` with `external = floor(amount·bps/10000)`.
///
/// Rounding always favours the remainder. Percentages above 100% clamp to 100%.
pub fn split_by_bps(amount: Balance, share_bps: BasisPoints) -> (Balance, Balance) {
  let share_bps = share_bps.min(BPS_DENOMINATOR);
  let external = multiply_by_rational_with_rounding(
    amount,
    Balance::from(share_bps),
    Balance::from(BPS_DENOMINATOR),
    Rounding::Down,
  )
  .unwrap_or(0);
  (external, amount.saturating_sub(external))
}
