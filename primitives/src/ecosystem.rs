//! Ecosystem Constants for the Auto Top-Up workspace
//!
//! Pallet identifiers and default bounds shared by runtime configurations and
//! test mocks. Keeping them here means every runtime derives the same vault
//! accounts and starts from the same limits.

/// Balance type alias for consistency across ecosystem
pub type Balance = u128;

/// Pallet identifiers for deriving pallet-owned accounts.
///
/// Vault sovereign accounts are sub-accounts of this id, so it must never
/// change once vaults exist on chain.
pub mod pallet_ids {
  /// Auto top-up pallet ID (vault sovereign accounts)
  pub const AUTO_TOP_UP_PALLET_ID: &[u8; 8] = b"py/topup";
}

/// Default parameters for runtimes that do not need custom limits.
pub mod params {
  use super::Balance;

  /// One native token in base units (10^12).
  pub const UNIT: Balance = 1_000_000_000_000;

  /// Receivers per vault.
  ///
  /// Bounds the evaluator scan and the factory input.
  pub const MAX_RECEIVERS_PER_VAULT: u32 = 32;

  /// Vaults indexed per owner.
  pub const MAX_VAULTS_PER_OWNER: u32 = 16;

  /// Upper bound for a single executor fee (1 token).
  ///
  /// Protects the vault from a registry that quotes a fee out of proportion
  /// to the top-up it settles.
  pub const MAX_EXECUTION_FEE: Balance = UNIT;
}
