#![cfg_attr(rustfmt, rustfmt_skip)]
#![allow(unused_parens)]
#![allow(unused_imports)]
#![allow(missing_docs)]

use polkadot_sdk::frame_support::{traits::Get, weights::{Weight, constants::RocksDbWeight}};
use core::marker::PhantomData;

pub trait WeightInfo {
	fn settle(n: u32) -> Weight;
	fn set_external_receiver() -> Weight;
	fn set_external_share_percent() -> Weight;
	fn set_max_price_impact() -> Weight;
	fn set_beneficiaries() -> Weight;
	fn transfer_ownership() -> Weight;
}

pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: polkadot_sdk::frame_system::Config> WeightInfo for SubstrateWeight<T> {
	/// Per pool: share balance, pair, redeem, two sibling lookups, reserves and
	/// up to six asset transfers.
	fn settle(n: u32) -> Weight {
		Weight::from_parts(40_000_000, 4000)
			.saturating_add(Weight::from_parts(180_000_000, 12000).saturating_mul(n.into()))
			.saturating_add(T::DbWeight::get().reads(2))
			.saturating_add(T::DbWeight::get().reads(14_u64.saturating_mul(n.into())))
			.saturating_add(T::DbWeight::get().writes(2))
			.saturating_add(T::DbWeight::get().writes(12_u64.saturating_mul(n.into())))
	}
	fn set_external_receiver() -> Weight {
		Weight::from_parts(18_000_000, 2000)
			.saturating_add(T::DbWeight::get().reads(2))
			.saturating_add(T::DbWeight::get().writes(1))
	}
	fn set_external_share_percent() -> Weight {
		Weight::from_parts(18_000_000, 2000)
			.saturating_add(T::DbWeight::get().reads(2))
			.saturating_add(T::DbWeight::get().writes(1))
	}
	fn set_max_price_impact() -> Weight {
		Weight::from_parts(15_000_000, 1500)
			.saturating_add(T::DbWeight::get().reads(2))
			.saturating_add(T::DbWeight::get().writes(1))
	}
	fn set_beneficiaries() -> Weight {
		Weight::from_parts(15_000_000, 1500)
			.saturating_add(T::DbWeight::get().reads(1))
			.saturating_add(T::DbWeight::get().writes(1))
	}
	fn transfer_ownership() -> Weight {
		Weight::from_parts(15_000_000, 1500)
			.saturating_add(T::DbWeight::get().reads(1))
			.saturating_add(T::DbWeight::get().writes(1))
	}
}

impl WeightInfo for () {
	fn settle(n: u32) -> Weight {
		Weight::from_parts(40_000_000, 4000)
			.saturating_add(Weight::from_parts(180_000_000, 12000).saturating_mul(n.into()))
			.saturating_add(RocksDbWeight::get().reads(2))
			.saturating_add(RocksDbWeight::get().reads(14_u64.saturating_mul(n.into())))
			.saturating_add(RocksDbWeight::get().writes(2))
			.saturating_add(RocksDbWeight::get().writes(12_u64.saturating_mul(n.into())))
	}
	fn set_external_receiver() -> Weight {
		Weight::from_parts(18_000_000, 2000)
	}
	fn set_external_share_percent() -> Weight {
		Weight::from_parts(18_000_000, 2000)
	}
	fn set_max_price_impact() -> Weight {
		Weight::from_parts(15_000_000, 1500)
	}
	fn set_beneficiaries() -> Weight {
		Weight::from_parts(15_000_000, 1500)
	}
	fn transfer_ownership() -> Weight {
		Weight::from_parts(15_000_000, 1500)
	}
}
