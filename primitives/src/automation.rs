//! Identifiers shared with the external task-automation registry.
//!
//! The registry stores a checker call per task and later hands the checker's
//! payload back to the executor gateway. Both sides agree on the types below.

use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

/// Index of a top-up vault inside the policy engine.
pub type VaultId = u64;

/// Task identifier assigned by the external registry.
pub type TaskId = [u8; 32];

/// Checker invocation stored by the registry at task creation.
///
/// `max_gas_price` is the ceiling baked into the task. `None` means the task
/// admits any gas price.
#[derive(
  Clone,
  Copy,
  Debug,
  Decode,
  DecodeWithMemTracking,
  Encode,
  Eq,
  MaxEncodedLen,
  PartialEq,
  TypeInfo,
  Serialize,
  Deserialize,
)]
pub struct CheckerCall<Balance> {
  pub vault_id: VaultId,
  pub max_gas_price: Option<Balance>,
}

impl<Balance: PartialOrd> CheckerCall<Balance> {
  /// Gas-price admission: rejects only a price strictly above the ceiling.
  pub fn admits(&self, gas_price: &Balance) -> bool {
    match &self.max_gas_price {
      Some(ceiling) => gas_price <= ceiling,
      None => true,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn absent_ceiling_admits_everything() {
    let call = CheckerCall::<u128> {
      vault_id: 0,
      max_gas_price: None,
    };
    assert!(call.admits(&0));
    assert!(call.admits(&u128::MAX));
  }

  #[test]
  fn ceiling_is_inclusive() {
    let call = CheckerCall::<u128> {
      vault_id: 7,
      max_gas_price: Some(90),
    };
    assert!(call.admits(&89));
    assert!(call.admits(&90));
    assert!(!call.admits(&91));
  }
}
