//! Fee Settlement Pallet
//!
//! Protocol fee sink for constant-product pools. Pools mint their protocol cut as share
//! tokens to the pallet account; `settle` redeems those shares, converts each underlying
//! asset into the settlement asset when a sibling pool is deep enough, falls back to
//! raw distribution otherwise, and splits proceeds between the configured beneficiaries
//! and an optional per-pool external receiver. Nothing stays on the pallet account
//! between calls.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub use pallet::*;

pub mod adapters;
pub use adapters::{FeePool, SettlementPoolLocator};

pub mod math;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

pub mod weights;
pub use weights::WeightInfo;

pub const LOG_TARGET: &str = "runtime::fee-settlement";

/// Helper for benchmarking
#[cfg(feature = "runtime-benchmarks")]
pub trait BenchmarkHelper<PoolId, AccountId> {
  /// Create the `index`-th fee pool with protocol-fee shares owned by `holder`, plus a
  /// settlement pool deep enough to convert its non-settlement asset.
  fn setup_pool_with_fees(
    index: u32,
    holder: &AccountId,
  ) -> Result<PoolId, frame::deps::sp_runtime::DispatchError>;
}

#[frame::pallet]
pub mod pallet {
  use super::{FeePool, LOG_TARGET, SettlementPoolLocator, WeightInfo, math};
  use frame::deps::{
    frame_support::{
      storage::with_storage_layer,
      traits::{
        fungible::{Inspect as NativeInspect, Mutate as NativeMutate},
        fungibles::{Inspect as FungiblesInspect, Mutate as FungiblesMutate},
        tokens::Preservation,
      },
    },
    sp_runtime::{
      DispatchError,
      traits::{AccountIdConversion, Zero},
    },
  };
  use frame::prelude::*;
  use primitives::{AssetKind, Balance, BasisPoints, params::BPS_DENOMINATOR};

  /// Configuration trait for the fee settlement pallet
  #[pallet::config]
  pub trait Config: frame_system::Config<RuntimeEvent: From<Event<Self>>> {
    /// The assets pallet for local and foreign fungible tokens
    type Assets: FungiblesInspect<Self::AccountId, AssetId = u32, Balance = u128>
      + FungiblesMutate<Self::AccountId, AssetId = u32, Balance = u128>;

    /// The currency trait for native tokens (AssetKind::Native)
    type Currency: NativeInspect<Self::AccountId, Balance = u128>
      + NativeMutate<Self::AccountId, Balance = u128>;

    /// Handle identifying a liquidity pool
    type PoolId: Parameter + Member + MaxEncodedLen + Copy + Ord;

    /// Redeem and swap capability of the liquidity pools
    type Pools: FeePool<Self::AccountId, Self::PoolId>;

    /// Lookup of the sibling pool pairing an asset with the settlement asset
    type Locator: SettlementPoolLocator<Self::PoolId>;

    /// Canonical asset delivered to the primary beneficiary
    #[pallet::constant]
    type SettlementAsset: Get<AssetKind>;

    /// The pallet ID for the settlement account
    #[pallet::constant]
    type PalletId: Get<PalletId>;

    /// Default maximum price impact, in basis points, accepted for a conversion
    #[pallet::constant]
    type DefaultMaxPriceImpact: Get<BasisPoints>;

    /// Maximum number of pools in one `settle` call
    #[pallet::constant]
    type MaxPoolsPerSettle: Get<u32>;

    /// Weight information for extrinsics
    type WeightInfo: WeightInfo;

    /// Helper for benchmarking
    #[cfg(feature = "runtime-benchmarks")]
    type BenchmarkHelper: crate::BenchmarkHelper<Self::PoolId, Self::AccountId>;
  }

  /// Default recipients of settled fees.
  #[derive(
    Clone, Debug, Decode, DecodeWithMemTracking, Encode, Eq, PartialEq, TypeInfo, MaxEncodedLen,
  )]
  pub struct BeneficiaryPair<AccountId> {
    /// Receives settlement-asset proceeds
    pub primary: AccountId,
    /// Receives assets that could not be converted
    pub fallback: AccountId,
  }

  /// Per-pool external split. The default value means "no external receiver".
  #[derive(
    Clone, Debug, Decode, DecodeWithMemTracking, Encode, Eq, PartialEq, TypeInfo, MaxEncodedLen,
  )]
  pub struct ExternalFeeReceiver<AccountId> {
    pub receiver: Option<AccountId>,
    pub share_bps: BasisPoints,
  }

  impl<AccountId> Default for ExternalFeeReceiver<AccountId> {
    fn default() -> Self {
      Self {
        receiver: None,
        share_bps: 0,
      }
    }
  }

  impl<AccountId> ExternalFeeReceiver<AccountId> {
    /// Receiver and share, only when both are set.
    pub fn active(&self) -> Option<(&AccountId, BasisPoints)> {
      match &self.receiver {
        Some(receiver) if self.share_bps > 0 => Some((receiver, self.share_bps)),
        _ => None,
      }
    }
  }

  /// Why an asset was distributed as-is instead of converted.
  #[derive(
    Clone,
    Copy,
    Debug,
    Decode,
    DecodeWithMemTracking,
    Encode,
    Eq,
    PartialEq,
    TypeInfo,
    MaxEncodedLen,
  )]
  pub enum FallbackReason {
    /// No pool pairs the asset with the settlement asset
    NoSettlementPool,
    /// The settlement pool has an empty side
    EmptyReserves,
    /// The swap would return nothing
    ZeroQuote,
    /// The quote overflowed or the pool reported a fee above 100%
    QuoteFailed,
    /// The trade is too large for the settlement pool depth
    PriceImpactTooHigh,
    /// The pool rejected the swap
    SwapFailed,
  }

  struct ConversionQuote<PoolId> {
    pool: PoolId,
    asset_is_a: bool,
    amount_out: Balance,
  }

  /// The pallet struct
  #[pallet::pallet]
  pub struct Pallet<T>(PhantomData<T>);

  /// Account allowed to change the configuration
  #[pallet::storage]
  #[pallet::getter(fn owner)]
  pub type Owner<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

  /// Primary (settlement asset) and fallback (raw asset) beneficiaries
  #[pallet::storage]
  #[pallet::getter(fn beneficiaries)]
  pub type Beneficiaries<T: Config> = StorageValue<_, BeneficiaryPair<T::AccountId>, OptionQuery>;

  /// Current maximum price impact in basis points (can be updated by the owner)
  #[pallet::storage]
  #[pallet::getter(fn max_price_impact)]
  pub type MaxPriceImpact<T: Config> =
    StorageValue<_, BasisPoints, ValueQuery, T::DefaultMaxPriceImpact>;

  /// External fee receiver per pool
  #[pallet::storage]
  #[pallet::getter(fn external_fee_receiver)]
  pub type ExternalFeeReceivers<T: Config> = StorageMap<
    _,
    Blake2_128Concat,
    T::PoolId,
    ExternalFeeReceiver<T::AccountId>,
    ValueQuery,
  >;

  /// Events for the fee settlement pallet
  #[pallet::event]
  #[pallet::generate_deposit(pub(super) fn deposit_event)]
  pub enum Event<T: Config> {
    /// A batch of pools was settled
    ProtocolFeeSettled {
      caller: T::AccountId,
      primary: T::AccountId,
      pools: u32,
    },
    /// Protocol-fee shares were redeemed into the pool's assets
    FeeRedeemed {
      pool: T::PoolId,
      shares: Balance,
      asset_a: AssetKind,
      amount_a: Balance,
      asset_b: AssetKind,
      amount_b: Balance,
    },
    /// A redeemed asset was swapped into the settlement asset
    FeeConverted {
      pool: T::PoolId,
      asset: AssetKind,
      amount_in: Balance,
      via: T::PoolId,
      settlement_out: Balance,
    },
    /// A redeemed asset was sent to the fallback beneficiary unconverted
    FeeDistributedRaw {
      pool: T::PoolId,
      asset: AssetKind,
      amount: Balance,
      reason: FallbackReason,
    },
    /// External receiver of a pool changed
    ExternalReceiverSet {
      pool: T::PoolId,
      receiver: Option<T::AccountId>,
    },
    /// External share of a pool changed
    ExternalSharePercentSet {
      pool: T::PoolId,
      old_bps: BasisPoints,
      new_bps: BasisPoints,
    },
    /// Maximum price impact updated
    MaxPriceImpactUpdated {
      old_bps: BasisPoints,
      new_bps: BasisPoints,
    },
    /// Beneficiaries updated
    BeneficiariesUpdated {
      primary: T::AccountId,
      fallback: T::AccountId,
    },
    /// Ownership moved to a new account
    OwnershipTransferred {
      old_owner: T::AccountId,
      new_owner: T::AccountId,
    },
  }

  /// Errors for the fee settlement pallet
  #[pallet::error]
  pub enum Error<T> {
    /// Caller is not the owner
    NotOwner,
    /// Max price impact must be strictly between 0 and 10000 basis points
    InvalidPriceImpact,
    /// External share must not exceed 10000 basis points
    InvalidSharePercent,
    /// The pool has no external receiver to give a share to
    ExternalReceiverNotSet,
    /// Beneficiaries have not been configured
    BeneficiariesNotSet,
    /// Empty pool list
    NoPools,
    /// Shares are held for a handle that does not resolve to a pool
    UnknownPool,
    /// The pool left shares on the settlement account after redeeming
    SharesNotRedeemed,
    /// Transfer to a beneficiary failed
    TransferFailed,
    /// The settlement account cannot receive its own payouts
    InvalidBeneficiary,
    /// Arithmetic overflow occurred
    ArithmeticOverflow,
  }

  #[pallet::hooks]
  impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {
    fn integrity_test() {
      let default_impact = T::DefaultMaxPriceImpact::get();
      assert!(
        default_impact > 0 && default_impact < BPS_DENOMINATOR,
        "DefaultMaxPriceImpact must be inside (0, 10000)"
      );
      assert!(
        T::MaxPoolsPerSettle::get() > 0,
        "MaxPoolsPerSettle must be positive"
      );
    }
  }

  #[pallet::call]
  impl<T: Config> Pallet<T> {
    /// Redeem, convert and distribute the protocol fees accrued in `pools`.
    ///
    /// Callable by anyone; proceeds always go to the configured beneficiaries.
    /// Pools with no redeemable shares are skipped. Conversion shortfalls fall back to
    /// raw distribution; transfer failures abort the whole call.
    #[pallet::call_index(0)]
    #[pallet::weight(T::WeightInfo::settle(pools.len() as u32))]
    pub fn settle(
      origin: OriginFor<T>,
      pools: BoundedVec<T::PoolId, T::MaxPoolsPerSettle>,
    ) -> DispatchResult {
      let caller = ensure_signed(origin)?;
      ensure!(!pools.is_empty(), Error::<T>::NoPools);
      let beneficiaries = Beneficiaries::<T>::get().ok_or(Error::<T>::BeneficiariesNotSet)?;
      let mut settled: Balance = Zero::zero();
      for pool in pools.iter() {
        let owed = Self::settle_pool(pool, &beneficiaries)?;
        settled = settled
          .checked_add(owed)
          .ok_or(Error::<T>::ArithmeticOverflow)?;
      }
      // One payment to the primary beneficiary for the whole batch
      Self::pay(T::SettlementAsset::get(), &beneficiaries.primary, settled)?;
      log::debug!(
        target: LOG_TARGET,
        "settled {} pools, {} settlement units to primary",
        pools.len(),
        settled
      );
      Self::deposit_event(Event::ProtocolFeeSettled {
        caller,
        primary: beneficiaries.primary,
        pools: pools.len() as u32,
      });
      Ok(())
    }

    /// Set or clear the external fee receiver of `pool` (owner only).
    ///
    /// Clearing also resets the pool's external share.
    #[pallet::call_index(1)]
    #[pallet::weight(T::WeightInfo::set_external_receiver())]
    pub fn set_external_receiver(
      origin: OriginFor<T>,
      pool: T::PoolId,
      receiver: Option<T::AccountId>,
    ) -> DispatchResult {
      Self::ensure_owner(origin)?;
      if let Some(account) = &receiver {
        Self::ensure_valid_beneficiary(account)?;
      }
      match &receiver {
        Some(account) => ExternalFeeReceivers::<T>::mutate(pool, |config| {
          config.receiver = Some(account.clone());
        }),
        None => ExternalFeeReceivers::<T>::remove(pool),
      }
      Self::deposit_event(Event::ExternalReceiverSet { pool, receiver });
      Ok(())
    }

    /// Set the share of `pool`'s fees routed to its external receiver (owner only).
    #[pallet::call_index(2)]
    #[pallet::weight(T::WeightInfo::set_external_share_percent())]
    pub fn set_external_share_percent(
      origin: OriginFor<T>,
      pool: T::PoolId,
      share_bps: BasisPoints,
    ) -> DispatchResult {
      Self::ensure_owner(origin)?;
      ensure!(
        share_bps <= BPS_DENOMINATOR,
        Error::<T>::InvalidSharePercent
      );
      let old_bps = ExternalFeeReceivers::<T>::try_mutate(
        pool,
        |config| -> Result<BasisPoints, DispatchError> {
          ensure!(
            config.receiver.is_some(),
            Error::<T>::ExternalReceiverNotSet
          );
          Ok(core::mem::replace(&mut config.share_bps, share_bps))
        },
      )?;
      Self::deposit_event(Event::ExternalSharePercentSet {
        pool,
        old_bps,
        new_bps: share_bps,
      });
      Ok(())
    }

    /// Update the maximum price impact accepted for conversions (owner only).
    #[pallet::call_index(3)]
    #[pallet::weight(T::WeightInfo::set_max_price_impact())]
    pub fn set_max_price_impact(origin: OriginFor<T>, new_bps: BasisPoints) -> DispatchResult {
      Self::ensure_owner(origin)?;
      ensure!(
        new_bps > 0 && new_bps < BPS_DENOMINATOR,
        Error::<T>::InvalidPriceImpact
      );
      let old_bps = MaxPriceImpact::<T>::get();
      MaxPriceImpact::<T>::put(new_bps);
      Self::deposit_event(Event::MaxPriceImpactUpdated { old_bps, new_bps });
      Ok(())
    }

    /// Update primary and fallback beneficiaries (owner only).
    #[pallet::call_index(4)]
    #[pallet::weight(T::WeightInfo::set_beneficiaries())]
    pub fn set_beneficiaries(
      origin: OriginFor<T>,
      primary: T::AccountId,
      fallback: T::AccountId,
    ) -> DispatchResult {
      Self::ensure_owner(origin)?;
      Self::ensure_valid_beneficiary(&primary)?;
      Self::ensure_valid_beneficiary(&fallback)?;
      Beneficiaries::<T>::put(BeneficiaryPair {
        primary: primary.clone(),
        fallback: fallback.clone(),
      });
      Self::deposit_event(Event::BeneficiariesUpdated { primary, fallback });
      Ok(())
    }

    /// Hand the owner role to `new_owner` (owner only).
    #[pallet::call_index(5)]
    #[pallet::weight(T::WeightInfo::transfer_ownership())]
    pub fn transfer_ownership(origin: OriginFor<T>, new_owner: T::AccountId) -> DispatchResult {
      let old_owner = Self::ensure_owner(origin)?;
      Owner::<T>::put(&new_owner);
      Self::deposit_event(Event::OwnershipTransferred {
        old_owner,
        new_owner,
      });
      Ok(())
    }
  }

  impl<T: Config> Pallet<T> {
    pub fn account_id() -> T::AccountId {
      T::PalletId::get().into_account_truncating()
    }

    fn ensure_owner(origin: OriginFor<T>) -> Result<T::AccountId, DispatchError> {
      let who = ensure_signed(origin)?;
      ensure!(Owner::<T>::get() == Some(who.clone()), Error::<T>::NotOwner);
      Ok(who)
    }

    /// The settlement account is never a payout destination.
    fn ensure_valid_beneficiary(who: &T::AccountId) -> DispatchResult {
      ensure!(*who != Self::account_id(), Error::<T>::InvalidBeneficiary);
      Ok(())
    }

    /// Redeem one pool and route both assets. Returns the settlement amount owed to the
    /// primary beneficiary for the end-of-batch payment.
    fn settle_pool(
      pool: &T::PoolId,
      beneficiaries: &BeneficiaryPair<T::AccountId>,
    ) -> Result<Balance, DispatchError> {
      let account = Self::account_id();
      let shares = T::Pools::share_balance(pool, &account);
      if shares.is_zero() {
        log::debug!(target: LOG_TARGET, "pool {:?}: nothing to redeem", pool);
        return Ok(Zero::zero());
      }
      let (asset_a, asset_b) = T::Pools::pair(pool).ok_or(Error::<T>::UnknownPool)?;
      // Amounts are taken from our own balances, not from what the pool reports
      let before_a = Self::balance_of(asset_a, &account);
      let before_b = Self::balance_of(asset_b, &account);
      T::Pools::redeem(pool, &account)?;
      ensure!(
        T::Pools::share_balance(pool, &account).is_zero(),
        Error::<T>::SharesNotRedeemed
      );
      let amount_a = Self::balance_of(asset_a, &account).saturating_sub(before_a);
      let amount_b = Self::balance_of(asset_b, &account).saturating_sub(before_b);
      Self::deposit_event(Event::FeeRedeemed {
        pool: *pool,
        shares,
        asset_a,
        amount_a,
        asset_b,
        amount_b,
      });

      let external = ExternalFeeReceivers::<T>::get(pool);
      let owed_a = Self::settle_asset(pool, asset_a, amount_a, &external, beneficiaries)?;
      let owed_b = Self::settle_asset(pool, asset_b, amount_b, &external, beneficiaries)?;
      owed_a
        .checked_add(owed_b)
        .ok_or(Error::<T>::ArithmeticOverflow.into())
    }

    fn settle_asset(
      pool: &T::PoolId,
      asset: AssetKind,
      amount: Balance,
      external: &ExternalFeeReceiver<T::AccountId>,
      beneficiaries: &BeneficiaryPair<T::AccountId>,
    ) -> Result<Balance, DispatchError> {
      if amount.is_zero() {
        return Ok(Zero::zero());
      }
      match Self::convert(pool, asset, amount) {
        Ok(settled) => {
          let (external_cut, remainder) = Self::split(settled, external);
          if let Some((receiver, cut)) = external_cut {
            Self::pay(T::SettlementAsset::get(), receiver, cut)?;
          }
          Ok(remainder)
        }
        Err(reason) => {
          log::debug!(
            target: LOG_TARGET,
            "pool {:?}: {:?} {} distributed raw ({:?})",
            pool,
            asset,
            amount,
            reason
          );
          let (external_cut, remainder) = Self::split(amount, external);
          if let Some((receiver, cut)) = external_cut {
            Self::pay(asset, receiver, cut)?;
          }
          Self::pay(asset, &beneficiaries.fallback, remainder)?;
          Self::deposit_event(Event::FeeDistributedRaw {
            pool: *pool,
            asset,
            amount,
            reason,
          });
          Ok(Zero::zero())
        }
      }
    }

    /// Turn `amount` of `asset` into the settlement asset, or say why not.
    fn convert(pool: &T::PoolId, asset: AssetKind, amount: Balance) -> Result<Balance, FallbackReason> {
      if asset == T::SettlementAsset::get() {
        return Ok(amount);
      }
      let quote = Self::quote_conversion(asset, amount)?;
      let settled = Self::execute_conversion(&quote, asset, amount).map_err(|e| {
        log::warn!(
          target: LOG_TARGET,
          "swap of {:?} {} through {:?} failed: {:?}",
          asset,
          amount,
          quote.pool,
          e
        );
        FallbackReason::SwapFailed
      })?;
      Self::deposit_event(Event::FeeConverted {
        pool: *pool,
        asset,
        amount_in: amount,
        via: quote.pool,
        settlement_out: settled,
      });
      Ok(settled)
    }

    /// Read-only half of a conversion: locate the sibling pool, quote, and apply the
    /// price impact guard.
    fn quote_conversion(
      asset: AssetKind,
      amount: Balance,
    ) -> Result<ConversionQuote<T::PoolId>, FallbackReason> {
      let settlement_asset = T::SettlementAsset::get();
      let sibling = T::Locator::find_settlement_pool(asset, settlement_asset)
        .ok_or(FallbackReason::NoSettlementPool)?;
      let asset_is_a = match T::Pools::pair(&sibling) {
        Some((a, b)) if a == asset && b == settlement_asset => true,
        Some((a, b)) if a == settlement_asset && b == asset => false,
        _ => return Err(FallbackReason::NoSettlementPool),
      };
      let (reserve_a, reserve_b) =
        T::Pools::reserves(&sibling).ok_or(FallbackReason::EmptyReserves)?;
      let (reserve_in, reserve_out) = if asset_is_a {
        (reserve_a, reserve_b)
      } else {
        (reserve_b, reserve_a)
      };
      if reserve_in.is_zero() || reserve_out.is_zero() {
        return Err(FallbackReason::EmptyReserves);
      }
      let amount_out =
        math::get_amount_out(amount, reserve_in, reserve_out, T::Pools::swap_fee_bps(&sibling))
          .ok_or(FallbackReason::QuoteFailed)?;
      if amount_out.is_zero() {
        return Err(FallbackReason::ZeroQuote);
      }
      let impact = math::price_impact_bps(amount, reserve_in).unwrap_or(BPS_DENOMINATOR);
      if impact > MaxPriceImpact::<T>::get() {
        return Err(FallbackReason::PriceImpactTooHigh);
      }
      Ok(ConversionQuote {
        pool: sibling,
        asset_is_a,
        amount_out,
      })
    }

    /// Deposit into the sibling pool and swap, inside a nested storage layer so a
    /// rejected swap leaves the asset on the settlement account.
    fn execute_conversion(
      quote: &ConversionQuote<T::PoolId>,
      asset: AssetKind,
      amount: Balance,
    ) -> Result<Balance, DispatchError> {
      let account = Self::account_id();
      let settlement_asset = T::SettlementAsset::get();
      with_storage_layer(|| {
        let before = Self::balance_of(settlement_asset, &account);
        Self::transfer(
          asset,
          &account,
          &T::Pools::pool_account(&quote.pool),
          amount,
        )?;
        let (out_a, out_b) = if quote.asset_is_a {
          (Zero::zero(), quote.amount_out)
        } else {
          (quote.amount_out, Zero::zero())
        };
        T::Pools::swap(&quote.pool, out_a, out_b, &account)?;
        Ok(Self::balance_of(settlement_asset, &account).saturating_sub(before))
      })
    }

    fn split<'a>(
      amount: Balance,
      external: &'a ExternalFeeReceiver<T::AccountId>,
    ) -> (Option<(&'a T::AccountId, Balance)>, Balance) {
      match external.active() {
        Some((receiver, share_bps)) => {
          let (cut, remainder) = math::split_by_bps(amount, share_bps);
          (Some((receiver, cut)), remainder)
        }
        None => (None, amount),
      }
    }

    /// Pay `amount` out of the settlement account. Zero amounts are skipped.
    fn pay(asset: AssetKind, to: &T::AccountId, amount: Balance) -> DispatchResult {
      if amount.is_zero() {
        return Ok(());
      }
      Self::transfer(asset, &Self::account_id(), to, amount).map_err(|e| {
        log::error!(
          target: LOG_TARGET,
          "transfer of {:?} {} to {:?} failed: {:?}",
          asset,
          amount,
          to,
          e
        );
        Error::<T>::TransferFailed.into()
      })
    }

    fn transfer(
      asset: AssetKind,
      from: &T::AccountId,
      to: &T::AccountId,
      amount: Balance,
    ) -> DispatchResult {
      match asset {
        AssetKind::Native => {
          T::Currency::transfer(from, to, amount, Preservation::Expendable)?;
        }
        AssetKind::Local(id) | AssetKind::Foreign(id) => {
          T::Assets::transfer(id, from, to, amount, Preservation::Expendable)?;
        }
      }
      Ok(())
    }

    fn balance_of(asset: AssetKind, who: &T::AccountId) -> Balance {
      match asset {
        AssetKind::Native => T::Currency::balance(who),
        AssetKind::Local(id) | AssetKind::Foreign(id) => T::Assets::balance(id, who),
      }
    }
  }

  /// Genesis configuration
  #[pallet::genesis_config]
  #[derive(frame::prelude::DefaultNoBound)]
  pub struct GenesisConfig<T: Config> {
    pub owner: Option<T::AccountId>,
    /// `(primary, fallback)`
    pub beneficiaries: Option<(T::AccountId, T::AccountId)>,
    pub max_price_impact: Option<BasisPoints>,
  }

  #[pallet::genesis_build]
  impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
    fn build(&self) {
      if let Some(owner) = &self.owner {
        Owner::<T>::put(owner);
      }
      if let Some((primary, fallback)) = &self.beneficiaries {
        let account = Pallet::<T>::account_id();
        assert!(
          *primary != account && *fallback != account,
          "beneficiaries must not be the settlement account"
        );
        Beneficiaries::<T>::put(BeneficiaryPair {
          primary: primary.clone(),
          fallback: fallback.clone(),
        });
      }
      if let Some(bps) = self.max_price_impact {
        assert!(
          bps > 0 && bps < BPS_DENOMINATOR,
          "max_price_impact must be inside (0, 10000)"
        );
        MaxPriceImpact::<T>::put(bps);
      }
      // Settlement account survives zero native balance via provider reference
      frame_system::Pallet::<T>::inc_providers(&Pallet::<T>::account_id());
    }
  }
}
