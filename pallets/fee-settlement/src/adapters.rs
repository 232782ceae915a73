//! Adapter traits for the fee settlement pallet.
//!
//! The liquidity pools are external collaborators: the pallet only sees them through
//! these two traits, and the runtime decides what backs them.

use frame::prelude::*;
use primitives::{AssetKind, Balance, BasisPoints};

/// Redeemable-share and swap capability of a two-asset constant-product pool.
///
/// Every `(a, b)` tuple is ordered like [`FeePool::pair`].
pub trait FeePool<AccountId, PoolId> {
  /// The two constituent assets, or `None` if `pool` is not a pool.
  fn pair(pool: &PoolId) -> Option<(AssetKind, AssetKind)>;

  /// Account holding the pool's reserves. Swap input is deposited here.
  fn pool_account(pool: &PoolId) -> AccountId;

  /// Share tokens of `pool` held by `who`.
  fn share_balance(pool: &PoolId, who: &AccountId) -> Balance;

  /// Outstanding share supply of `pool`.
  fn total_shares(pool: &PoolId) -> Balance;

  fn reserves(pool: &PoolId) -> Option<(Balance, Balance)>;

  /// Swap fee charged on input, in basis points.
  fn swap_fee_bps(pool: &PoolId) -> BasisPoints;

  /// Burn every share `who` holds and release the proportional reserves to `who`.
  fn redeem(pool: &PoolId, who: &AccountId) -> Result<(Balance, Balance), DispatchError>;

  /// Constant-product swap primitive. The input must already sit on `pool_account`
  /// above the recorded reserves.
  fn swap(
    pool: &PoolId,
    amount_out_a: Balance,
    amount_out_b: Balance,
    to: &AccountId,
  ) -> DispatchResult;
}

/// Discovery of the sibling pool pairing an asset with the settlement asset.
pub trait SettlementPoolLocator<PoolId> {
  fn find_settlement_pool(asset: AssetKind, settlement_asset: AssetKind) -> Option<PoolId>;
}
