#![cfg(feature = "runtime-benchmarks")]

use crate::*;
use alloc::{vec, vec::Vec};
use frame::prelude::*;
use polkadot_sdk::frame_benchmarking::{account, v2::*};
use polkadot_sdk::frame_support::traits::fungible::{Inspect, Mutate};
use polkadot_sdk::frame_system::RawOrigin;

#[benchmarks]
mod benches {
  use super::*;

  fn funded<T: Config>(name: &'static str, index: u32) -> T::AccountId {
    let who: T::AccountId = account(name, index, 0);
    let amount = T::Currency::minimum_balance().saturating_mul(1_000_000u32.into());
    let _ = T::Currency::set_balance(&who, amount);
    who
  }

  fn vault_with_receivers<T: Config>(
    owner: &T::AccountId,
    count: u32,
  ) -> (VaultId, VaultInfoOf<T>) {
    let (vault_id, vault) = Pallet::<T>::do_create_vault(owner.clone()).unwrap();
    let unit = T::Currency::minimum_balance();
    for i in 0..count {
      Pallet::<T>::do_start_auto_pay(vault_id, &vault, account("receiver", i, 0), unit, unit)
        .unwrap();
    }
    (vault_id, vault)
  }

  fn fund_vault<T: Config>(vault: &VaultInfoOf<T>, amount: T::Balance) {
    let _ = T::Currency::set_balance(&vault.sovereign_account, amount);
  }

  #[benchmark]
  fn new_auto_top_up(r: Linear<0, { T::MaxReceivers::get() }>) {
    let caller = funded::<T>("owner", 0);
    let amount = T::Currency::minimum_balance();
    let receivers: Vec<T::AccountId> = (0..r).map(|i| account("receiver", i, 0)).collect();
    let receivers = BoundedVec::try_from(receivers).unwrap();
    let amounts = BoundedVec::try_from(vec![amount; r as usize]).unwrap();
    let thresholds = BoundedVec::try_from(vec![amount; r as usize]).unwrap();
    let funding = amount.saturating_mul(100u32.into());
    let vault_id = NextVaultId::<T>::get();

    #[extrinsic_call]
    _(
      RawOrigin::Signed(caller),
      receivers,
      amounts,
      thresholds,
      None,
      funding,
    );

    assert!(Vaults::<T>::contains_key(vault_id));
    assert_eq!(Policies::<T>::get(vault_id).len() as u32, r);
  }

  #[benchmark]
  fn deposit() {
    let owner = funded::<T>("owner", 0);
    let depositor = funded::<T>("depositor", 0);
    let (vault_id, vault) = vault_with_receivers::<T>(&owner, 0);
    let amount = T::Currency::minimum_balance().saturating_mul(10u32.into());

    #[extrinsic_call]
    _(RawOrigin::Signed(depositor), vault_id, amount);

    assert_eq!(T::Currency::balance(&vault.sovereign_account), amount);
  }

  #[benchmark]
  fn withdraw() {
    let owner = funded::<T>("owner", 0);
    let destination = funded::<T>("destination", 0);
    let (vault_id, vault) = vault_with_receivers::<T>(&owner, 0);
    let amount = T::Currency::minimum_balance().saturating_mul(10u32.into());
    fund_vault::<T>(&vault, amount.saturating_mul(2u32.into()));

    #[extrinsic_call]
    _(RawOrigin::Signed(owner), vault_id, amount, destination);

    assert_eq!(T::Currency::balance(&vault.sovereign_account), amount);
  }

  #[benchmark]
  fn start_auto_pay() {
    let owner = funded::<T>("owner", 0);
    let (vault_id, _) =
      vault_with_receivers::<T>(&owner, T::MaxReceivers::get().saturating_sub(1));
    let receiver: T::AccountId = account("new-receiver", 0, 0);
    let unit = T::Currency::minimum_balance();

    #[extrinsic_call]
    _(RawOrigin::Signed(owner), vault_id, receiver.clone(), unit, unit);

    assert_eq!(
      Pallet::<T>::receivers(vault_id).last(),
      Some(&receiver)
    );
  }

  #[benchmark]
  fn stop_auto_pay() {
    let owner = funded::<T>("owner", 0);
    let count = T::MaxReceivers::get();
    let (vault_id, _) = vault_with_receivers::<T>(&owner, count);
    let receiver: T::AccountId = account("receiver", count.saturating_sub(1), 0);

    #[extrinsic_call]
    _(RawOrigin::Signed(owner), vault_id, receiver);

    assert_eq!(
      Policies::<T>::get(vault_id).len() as u32,
      count.saturating_sub(1)
    );
  }

  #[benchmark]
  fn exec() {
    let owner = funded::<T>("owner", 0);
    let collector = funded::<T>("collector", 0);
    let executor = T::TaskAutomation::executor();
    let (vault_id, vault) =
      vault_with_receivers::<T>(&owner, T::MaxReceivers::get().saturating_sub(1));
    // Last in evaluation order
    let receiver: T::AccountId = account("due", 0, 0);
    let amount = T::Currency::minimum_balance();
    Pallet::<T>::do_start_auto_pay(
      vault_id,
      &vault,
      receiver.clone(),
      amount,
      amount.saturating_mul(2u32.into()),
    )
    .unwrap();
    let fee = T::MaxExecutionFee::get();
    fund_vault::<T>(
      &vault,
      amount.saturating_mul(100u32.into()).saturating_add(fee),
    );
    let instruction = TopUpInstruction {
      vault_id,
      receiver: receiver.clone(),
      amount,
    };

    #[extrinsic_call]
    _(RawOrigin::Signed(executor), instruction, fee, collector, false);

    assert_eq!(T::Currency::balance(&receiver), amount);
  }

  #[benchmark]
  fn transfer_ownership() {
    let owner = funded::<T>("owner", 0);
    let new_owner: T::AccountId = account("new-owner", 0, 0);
    let (vault_id, _) = vault_with_receivers::<T>(&owner, 0);

    #[extrinsic_call]
    _(RawOrigin::Signed(owner), vault_id, new_owner.clone());

    assert_eq!(Vaults::<T>::get(vault_id).map(|vault| vault.owner), Some(new_owner));
  }

  impl_benchmark_test_suite!(Pallet, crate::mock::new_test_ext(), crate::mock::Test);
}
