//! Adapter trait for the external task-automation registry
//!
//! The registry lives outside this pallet. It stores checker calls, polls the
//! checker, and asks its executor account to call `exec` when a top-up is due.

use alloc::vec::Vec;
use frame::prelude::*;
use primitives::{CheckerCall, TaskId};

/// Task-automation registry as seen by the policy engine.
pub trait TaskAutomation<AccountId, Balance> {
  /// Account the registry dispatches `exec` from.
  ///
  /// Captured into each vault at creation as its gateway authority.
  fn executor() -> AccountId;

  /// Register a checker call on behalf of `creator` and return the task id.
  fn create_task(
    creator: &AccountId,
    checker: CheckerCall<Balance>,
  ) -> Result<TaskId, DispatchError>;

  /// Task ids registered by `who`, oldest first.
  fn task_ids_by_user(who: &AccountId) -> Vec<TaskId>;
}

/// Registry stub for configurations without automation: refuses every task.
impl<AccountId: Default, Balance> TaskAutomation<AccountId, Balance> for () {
  fn executor() -> AccountId {
    AccountId::default()
  }

  fn create_task(_: &AccountId, _: CheckerCall<Balance>) -> Result<TaskId, DispatchError> {
    Err(DispatchError::Other("TaskAutomation not configured"))
  }

  fn task_ids_by_user(_: &AccountId) -> Vec<TaskId> {
    Vec::new()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  type Unconfigured = ();

  #[test]
  fn unconfigured_registry_refuses_tasks() {
    let checker = CheckerCall::<u128> {
      vault_id: 0,
      max_gas_price: None,
    };
    assert_eq!(<Unconfigured as TaskAutomation<u64, u128>>::executor(), 0);
    assert_eq!(
      <Unconfigured as TaskAutomation<u64, u128>>::create_task(&1, checker),
      Err(DispatchError::Other("TaskAutomation not configured"))
    );
    assert!(<Unconfigured as TaskAutomation<u64, u128>>::task_ids_by_user(&1).is_empty());
  }
}
