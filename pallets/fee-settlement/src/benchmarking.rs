extern crate alloc;

use crate::*;
use alloc::vec::Vec;
use polkadot_sdk::frame_benchmarking::v2::*;
use polkadot_sdk::frame_support::{BoundedVec, traits::Get};
use polkadot_sdk::frame_system::RawOrigin;

fn setup_owner<T: Config>() -> T::AccountId {
  let owner: T::AccountId = whitelisted_caller();
  Owner::<T>::put(&owner);
  owner
}

#[benchmarks]
mod benches {
  use super::*;

  #[benchmark]
  fn settle(n: Linear<1, { T::MaxPoolsPerSettle::get() }>) {
    let caller: T::AccountId = whitelisted_caller();
    let primary: T::AccountId = account("primary", 0, 0);
    let fallback: T::AccountId = account("fallback", 0, 0);
    Beneficiaries::<T>::put(BeneficiaryPair {
      primary: primary.clone(),
      fallback,
    });
    let settlement_account = Pallet::<T>::account_id();
    let pools: Vec<T::PoolId> = (0..n)
      .map(|i| T::BenchmarkHelper::setup_pool_with_fees(i, &settlement_account))
      .collect::<Result<_, _>>()
      .expect("Failed to set up fee pools");
    let pools: BoundedVec<T::PoolId, T::MaxPoolsPerSettle> =
      pools.try_into().expect("n is bounded by MaxPoolsPerSettle");

    #[extrinsic_call]
    settle(RawOrigin::Signed(caller), pools.clone());

    for pool in pools.iter() {
      assert_eq!(T::Pools::share_balance(pool, &settlement_account), 0);
    }
  }

  #[benchmark]
  fn set_external_receiver() {
    let owner = setup_owner::<T>();
    let receiver: T::AccountId = account("receiver", 0, 0);
    let pool = T::BenchmarkHelper::setup_pool_with_fees(0, &owner).expect("Failed to set up pool");

    #[extrinsic_call]
    set_external_receiver(RawOrigin::Signed(owner), pool, Some(receiver.clone()));

    assert_eq!(
      ExternalFeeReceivers::<T>::get(pool).receiver,
      Some(receiver)
    );
  }

  #[benchmark]
  fn set_external_share_percent() {
    let owner = setup_owner::<T>();
    let receiver: T::AccountId = account("receiver", 0, 0);
    let pool = T::BenchmarkHelper::setup_pool_with_fees(0, &owner).expect("Failed to set up pool");
    ExternalFeeReceivers::<T>::insert(
      pool,
      ExternalFeeReceiver {
        receiver: Some(receiver),
        share_bps: 0,
      },
    );

    #[extrinsic_call]
    set_external_share_percent(RawOrigin::Signed(owner), pool, 2_000);

    assert_eq!(ExternalFeeReceivers::<T>::get(pool).share_bps, 2_000);
  }

  #[benchmark]
  fn set_max_price_impact() {
    let owner = setup_owner::<T>();

    #[extrinsic_call]
    set_max_price_impact(RawOrigin::Signed(owner), 500);

    assert_eq!(MaxPriceImpact::<T>::get(), 500);
  }

  #[benchmark]
  fn set_beneficiaries() {
    let owner = setup_owner::<T>();
    let primary: T::AccountId = account("primary", 0, 0);
    let fallback: T::AccountId = account("fallback", 0, 0);

    #[extrinsic_call]
    set_beneficiaries(RawOrigin::Signed(owner), primary, fallback);
  }

  #[benchmark]
  fn transfer_ownership() {
    let owner = setup_owner::<T>();
    let new_owner: T::AccountId = account("new_owner", 0, 0);

    #[extrinsic_call]
    transfer_ownership(RawOrigin::Signed(owner), new_owner.clone());

    assert_eq!(Owner::<T>::get(), Some(new_owner));
  }

  #[cfg(test)]
  use crate::mock::{Test, new_test_ext};
  #[cfg(test)]
  impl_benchmark_test_suite!(Pallet, new_test_ext(), Test);
}
