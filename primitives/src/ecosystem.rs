//! Ecosystem constants for the protocol fee settlement stack.
//!
//! Pallet IDs and the basis-point parameters shared by the settlement pallet and
//! any runtime that wires it up.

/// Balance type alias for consistency across ecosystem
pub type Balance = u128;

/// Basis points: integer units of 1/10000
pub type BasisPoints = u32;

/// Pallet identifiers for deriving pallet-owned accounts.
///
/// Used by Polkadot SDK's `PalletId::into_account_truncating()`.
pub mod pallet_ids {
  /// Fee Settlement pallet ID (protocol fee redemption and routing)
  pub const FEE_SETTLEMENT_PALLET_ID: &[u8; 8] = b"feesttl0";
}

/// Parameters of the fee settlement engine.
pub mod params {
  use super::{Balance, BasisPoints};

  /// Precision scalar for amounts in tests and fixtures (10^12).
  pub const PRECISION: Balance = 1_000_000_000_000;

  /// Denominator for every basis-point value (100%).
  pub const BPS_DENOMINATOR: BasisPoints = 10_000;

  /// Default maximum price impact accepted when converting to the settlement asset (1%).
  pub const DEFAULT_MAX_PRICE_IMPACT_BPS: BasisPoints = 100;

  /// Upper bound on pools accepted by a single `settle` call.
  pub const MAX_POOLS_PER_SETTLE: u32 = 64;
}
