use crate as pallet_auto_top_up;
use crate::TaskAutomation;
use frame::prelude::*;
use polkadot_sdk::{
  frame_support::{
    PalletId, construct_runtime, derive_impl, parameter_types,
    traits::{ConstU32, ConstU128},
  },
  frame_system,
  sp_runtime::{
    BuildStorage,
    traits::{BlakeTwo256, IdentityLookup},
  },
};
use primitives::{
  CheckerCall, TaskId,
  pallet_ids::AUTO_TOP_UP_PALLET_ID,
  params::{MAX_EXECUTION_FEE, UNIT},
};
use std::cell::RefCell;
use std::collections::BTreeMap;

type Block = frame_system::mocking::MockBlock<Test>;
pub type AccountId = u64;
pub type Balance = u128;

pub const ALICE: AccountId = 1;
pub const BOB: AccountId = 2;
pub const CHARLIE: AccountId = 3;
pub const DAVE: AccountId = 4;
pub const EXECUTOR: AccountId = 100;
pub const FEE_COLLECTOR: AccountId = 101;

pub const EXISTENTIAL_DEPOSIT: Balance = 1_000;
pub const INITIAL_BALANCE: Balance = 1_000 * UNIT;

// Registry state for the stateful automation mock
thread_local! {
    // Creator -> task ids, oldest first
    static TASKS: RefCell<BTreeMap<AccountId, Vec<TaskId>>> = const { RefCell::new(BTreeMap::new()) };

    // Task id -> stored checker call
    static CHECKERS: RefCell<BTreeMap<TaskId, CheckerCall<Balance>>> = const { RefCell::new(BTreeMap::new()) };

    static TASK_NONCE: RefCell<u64> = const { RefCell::new(0) };

    // When set, create_task fails like an unreachable registry
    static REGISTRY_OFFLINE: RefCell<bool> = const { RefCell::new(false) };
}

pub fn set_registry_offline(offline: bool) {
  REGISTRY_OFFLINE.with(|flag| *flag.borrow_mut() = offline);
}

pub fn stored_checker(task_id: &TaskId) -> Option<CheckerCall<Balance>> {
  CHECKERS.with(|checkers| checkers.borrow().get(task_id).copied())
}

fn reset_registry() {
  TASKS.with(|tasks| tasks.borrow_mut().clear());
  CHECKERS.with(|checkers| checkers.borrow_mut().clear());
  TASK_NONCE.with(|nonce| *nonce.borrow_mut() = 0);
  set_registry_offline(false);
}

pub struct MockTaskAutomation;

impl TaskAutomation<AccountId, Balance> for MockTaskAutomation {
  fn executor() -> AccountId {
    EXECUTOR
  }

  fn create_task(
    creator: &AccountId,
    checker: CheckerCall<Balance>,
  ) -> Result<TaskId, DispatchError> {
    if REGISTRY_OFFLINE.with(|flag| *flag.borrow()) {
      return Err(DispatchError::Other("registry offline"));
    }
    let nonce = TASK_NONCE.with(|nonce| {
      let mut nonce = nonce.borrow_mut();
      *nonce += 1;
      *nonce
    });
    let task_id = frame::hashing::blake2_256(&(creator, checker, nonce).encode());
    TASKS.with(|tasks| tasks.borrow_mut().entry(*creator).or_default().push(task_id));
    CHECKERS.with(|checkers| checkers.borrow_mut().insert(task_id, checker));
    Ok(task_id)
  }

  fn task_ids_by_user(who: &AccountId) -> Vec<TaskId> {
    TASKS.with(|tasks| tasks.borrow().get(who).cloned().unwrap_or_default())
  }
}

construct_runtime!(
  pub struct Test {
    System: frame_system,
    Balances: polkadot_sdk::pallet_balances,
    AutoTopUp: pallet_auto_top_up,
  }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
  type Block = Block;
  type AccountId = AccountId;
  type Lookup = IdentityLookup<Self::AccountId>;
  type Hash = polkadot_sdk::sp_core::H256;
  type Hashing = BlakeTwo256;
  type AccountData = polkadot_sdk::pallet_balances::AccountData<Balance>;
}

impl polkadot_sdk::pallet_balances::Config for Test {
  type MaxLocks = ();
  type MaxReserves = ();
  type ReserveIdentifier = [u8; 8];
  type Balance = Balance;
  type DustRemoval = ();
  type RuntimeEvent = RuntimeEvent;
  type ExistentialDeposit = ConstU128<EXISTENTIAL_DEPOSIT>;
  type AccountStore = System;
  type WeightInfo = ();
  type FreezeIdentifier = ();
  type MaxFreezes = ();
  type RuntimeHoldReason = ();
  type RuntimeFreezeReason = ();
  type DoneSlashHandler = ();
}

parameter_types! {
  pub const AutoTopUpPalletId: PalletId = PalletId(*AUTO_TOP_UP_PALLET_ID);
}

impl pallet_auto_top_up::Config for Test {
  type Balance = Balance;
  type Currency = Balances;
  type TaskAutomation = MockTaskAutomation;
  type PalletId = AutoTopUpPalletId;
  type MaxReceivers = ConstU32<4>;
  type MaxVaultsPerOwner = ConstU32<3>;
  type MaxExecutionFee = ConstU128<MAX_EXECUTION_FEE>;
  type WeightInfo = ();
}

/// Force an account's free balance, as if it spent or received funds elsewhere.
pub fn set_balance(who: AccountId, amount: Balance) {
  use polkadot_sdk::frame_support::traits::fungible::Mutate;
  assert!(<Balances as Mutate<AccountId>>::set_balance(&who, amount) == amount);
}

pub fn new_test_ext() -> polkadot_sdk::sp_io::TestExternalities {
  new_test_ext_with_vaults(Vec::new())
}

pub fn new_test_ext_with_vaults(
  vaults: Vec<(AccountId, Vec<(AccountId, Balance, Balance)>)>,
) -> polkadot_sdk::sp_io::TestExternalities {
  reset_registry();
  let mut storage = frame_system::GenesisConfig::<Test>::default()
    .build_storage()
    .unwrap();
  polkadot_sdk::pallet_balances::GenesisConfig::<Test> {
    balances: vec![
      (ALICE, INITIAL_BALANCE),
      (BOB, INITIAL_BALANCE),
      (CHARLIE, 100 * UNIT),
      (EXECUTOR, INITIAL_BALANCE),
      (FEE_COLLECTOR, INITIAL_BALANCE),
    ],
    dev_accounts: None,
  }
  .assimilate_storage(&mut storage)
  .unwrap();
  pallet_auto_top_up::GenesisConfig::<Test> { vaults }
    .assimilate_storage(&mut storage)
    .unwrap();
  let mut ext = polkadot_sdk::sp_io::TestExternalities::new(storage);
  ext.execute_with(|| System::set_block_number(1));
  ext
}
