#![cfg_attr(rustfmt, rustfmt_skip)]
#![allow(unused_parens)]
#![allow(unused_imports)]
#![allow(missing_docs)]

use core::marker::PhantomData;
use polkadot_sdk::frame_support::{
  traits::Get,
  weights::{constants::RocksDbWeight, Weight},
};

pub trait WeightInfo {
  fn new_auto_top_up(r: u32) -> Weight;
  fn deposit() -> Weight;
  fn withdraw() -> Weight;
  fn start_auto_pay() -> Weight;
  fn stop_auto_pay() -> Weight;
  fn exec() -> Weight;
  fn transfer_ownership() -> Weight;
}

pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: polkadot_sdk::frame_system::Config + crate::Config> WeightInfo for SubstrateWeight<T> {
  fn new_auto_top_up(r: u32) -> Weight {
    let receivers = u64::from(r.min(T::MaxReceivers::get()));
    Weight::from_parts(40_000_000, 3000)
      .saturating_add(Weight::from_parts(4_000_000, 120).saturating_mul(receivers))
      .saturating_add(T::DbWeight::get().reads(5))
      .saturating_add(T::DbWeight::get().writes(8))
  }

  fn deposit() -> Weight {
    Weight::from_parts(20_000_000, 1800)
      .saturating_add(T::DbWeight::get().reads(3))
      .saturating_add(T::DbWeight::get().writes(2))
  }

  fn withdraw() -> Weight {
    Weight::from_parts(22_000_000, 1800)
      .saturating_add(T::DbWeight::get().reads(3))
      .saturating_add(T::DbWeight::get().writes(2))
  }

  fn start_auto_pay() -> Weight {
    let scan = u64::from(T::MaxReceivers::get());
    Weight::from_parts(14_000_000, 1500)
      .saturating_add(Weight::from_parts(300_000, 0).saturating_mul(scan))
      .saturating_add(T::DbWeight::get().reads(2))
      .saturating_add(T::DbWeight::get().writes(1))
  }

  fn stop_auto_pay() -> Weight {
    let scan = u64::from(T::MaxReceivers::get());
    Weight::from_parts(12_000_000, 1500)
      .saturating_add(Weight::from_parts(300_000, 0).saturating_mul(scan))
      .saturating_add(T::DbWeight::get().reads(2))
      .saturating_add(T::DbWeight::get().writes(1))
  }

  fn exec() -> Weight {
    let scan = u64::from(T::MaxReceivers::get());
    Weight::from_parts(45_000_000, 3600)
      .saturating_add(Weight::from_parts(300_000, 0).saturating_mul(scan))
      .saturating_add(T::DbWeight::get().reads(6))
      .saturating_add(T::DbWeight::get().writes(3))
  }

  fn transfer_ownership() -> Weight {
    Weight::from_parts(16_000_000, 1500)
      .saturating_add(T::DbWeight::get().reads(3))
      .saturating_add(T::DbWeight::get().writes(3))
  }
}

impl WeightInfo for () {
  fn new_auto_top_up(r: u32) -> Weight {
    Weight::from_parts(40_000_000u64.saturating_add(u64::from(r).saturating_mul(4_000_000)), 3000)
  }
  fn deposit() -> Weight { Weight::from_parts(20_000_000, 1800) }
  fn withdraw() -> Weight { Weight::from_parts(22_000_000, 1800) }
  fn start_auto_pay() -> Weight { Weight::from_parts(14_000_000, 1500) }
  fn stop_auto_pay() -> Weight { Weight::from_parts(12_000_000, 1500) }
  fn exec() -> Weight { Weight::from_parts(45_000_000, 3600) }
  fn transfer_ownership() -> Weight { Weight::from_parts(16_000_000, 1500) }
}
