//! Auto Top-Up Pallet
//!
//! Keeps receiver accounts above a native-balance floor. Each vault is a sovereign
//! account funded by its owner and holding an ordered list of receiver policies
//! `(receiver, amount, threshold)`. An external task-automation registry polls
//! [`Pallet::checker`] and, when a receiver has dropped below its threshold, its
//! executor calls [`Pallet::exec`] with the checker's instruction. `exec` re-reads
//! live state before moving any funds, so a stale or replayed instruction is
//! rejected instead of paying twice.
//!
//! Policies are recurring: a successful top-up leaves the policy in place and it
//! becomes due again the next time the receiver's balance falls below threshold.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub use pallet::*;

pub mod adapters;
pub use adapters::TaskAutomation;

pub mod weights;
pub use weights::WeightInfo;

#[cfg(test)]
mod mock;

#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

pub(crate) const LOG_TARGET: &str = "runtime::auto-top-up";

#[frame::pallet]
pub mod pallet {
  use super::{LOG_TARGET, TaskAutomation, WeightInfo};
  use alloc::vec::Vec;
  use frame::prelude::*;
  use polkadot_sdk::{
    frame_support::{
      PalletId,
      traits::{
        fungible::{Inspect as NativeInspect, Mutate as NativeMutate},
        tokens::{Fortitude, Preservation},
      },
    },
    sp_runtime::traits::{AccountIdConversion, TrailingZeroInput, Zero},
  };
  use primitives::{CheckerCall, TaskId};

  pub type VaultId = primitives::VaultId;

  #[derive(
    Clone, Debug, Decode, DecodeWithMemTracking, Encode, Eq, PartialEq, TypeInfo, MaxEncodedLen,
  )]
  pub struct VaultInfo<AccountId, BlockNumber> {
    pub owner: AccountId,
    /// Holds the vault's native funds.
    pub sovereign_account: AccountId,
    /// Registry executor allowed to call `exec`, fixed at creation.
    pub gateway_authority: AccountId,
    pub created_at: BlockNumber,
  }

  #[derive(
    Clone, Debug, Decode, DecodeWithMemTracking, Encode, Eq, PartialEq, TypeInfo, MaxEncodedLen,
  )]
  pub struct ReceiverPolicy<AccountId, Balance> {
    pub receiver: AccountId,
    /// Transferred per top-up.
    pub amount: Balance,
    /// Due while the receiver's balance is strictly below this.
    pub threshold: Balance,
  }

  /// Checker output handed back to `exec` by the registry.
  ///
  /// Only `vault_id` and `receiver` are trusted at execution time. The amount is
  /// re-read from the live policy.
  #[derive(
    Clone, Debug, Decode, DecodeWithMemTracking, Encode, Eq, PartialEq, TypeInfo, MaxEncodedLen,
  )]
  pub struct TopUpInstruction<AccountId, Balance> {
    pub vault_id: VaultId,
    pub receiver: AccountId,
    pub amount: Balance,
  }

  #[pallet::config]
  pub trait Config: frame_system::Config<RuntimeEvent: From<Event<Self>>> {
    type Balance: Parameter
      + Member
      + AtLeast32BitUnsigned
      + Default
      + Copy
      + MaybeSerializeDeserialize
      + MaxEncodedLen;

    /// Native currency held by vaults and paid to receivers
    type Currency: NativeInspect<Self::AccountId, Balance = Self::Balance>
      + NativeMutate<Self::AccountId, Balance = Self::Balance>;

    /// External registry that polls the checker and dispatches `exec`
    type TaskAutomation: TaskAutomation<Self::AccountId, Self::Balance>;

    /// Seed for vault sovereign accounts
    #[pallet::constant]
    type PalletId: Get<PalletId>;

    #[pallet::constant]
    type MaxReceivers: Get<u32>;

    #[pallet::constant]
    type MaxVaultsPerOwner: Get<u32>;

    /// Largest fee a single `exec` may settle
    #[pallet::constant]
    type MaxExecutionFee: Get<Self::Balance>;

    type WeightInfo: WeightInfo;
  }

  pub type BalanceOf<T> = <T as Config>::Balance;

  pub type VaultInfoOf<T> =
    VaultInfo<<T as frame_system::Config>::AccountId, BlockNumberFor<T>>;

  pub type ReceiverPolicyOf<T> =
    ReceiverPolicy<<T as frame_system::Config>::AccountId, <T as Config>::Balance>;

  pub type PoliciesOf<T> = BoundedVec<ReceiverPolicyOf<T>, <T as Config>::MaxReceivers>;

  pub type TopUpInstructionOf<T> =
    TopUpInstruction<<T as frame_system::Config>::AccountId, <T as Config>::Balance>;

  #[pallet::pallet]
  pub struct Pallet<T>(_);

  #[pallet::storage]
  #[pallet::getter(fn next_vault_id)]
  pub type NextVaultId<T> = StorageValue<_, VaultId, ValueQuery>;

  #[pallet::storage]
  #[pallet::getter(fn vaults)]
  pub type Vaults<T: Config> = StorageMap<_, Blake2_128Concat, VaultId, VaultInfoOf<T>, OptionQuery>;

  /// Receiver policies per vault in evaluation order.
  #[pallet::storage]
  #[pallet::getter(fn policies)]
  pub type Policies<T: Config> = StorageMap<_, Blake2_128Concat, VaultId, PoliciesOf<T>, ValueQuery>;

  #[pallet::storage]
  #[pallet::getter(fn owner_index)]
  pub type OwnerIndex<T: Config> = StorageMap<
    _,
    Blake2_128Concat,
    T::AccountId,
    BoundedVec<VaultId, T::MaxVaultsPerOwner>,
    ValueQuery,
  >;

  #[pallet::storage]
  #[pallet::getter(fn sovereign_index)]
  pub type SovereignIndex<T: Config> =
    StorageMap<_, Blake2_128Concat, T::AccountId, VaultId, OptionQuery>;

  #[pallet::event]
  #[pallet::generate_deposit(pub(super) fn deposit_event)]
  pub enum Event<T: Config> {
    /// A vault was created by the factory and registered with the automation registry.
    AutoTopUpCreated {
      vault_id: VaultId,
      owner: T::AccountId,
      sovereign_account: T::AccountId,
      task_id: TaskId,
    },
    FundsDeposited {
      vault_id: VaultId,
      from: T::AccountId,
      amount: BalanceOf<T>,
    },
    FundsWithdrawn {
      vault_id: VaultId,
      to: T::AccountId,
      amount: BalanceOf<T>,
    },
    ReceiverAdded {
      vault_id: VaultId,
      receiver: T::AccountId,
      amount: BalanceOf<T>,
      threshold: BalanceOf<T>,
    },
    ReceiverRemoved {
      vault_id: VaultId,
      receiver: T::AccountId,
    },
    /// `fee` is the part paid by the vault (zero when settled by the registry treasury).
    TopUpExecuted {
      vault_id: VaultId,
      receiver: T::AccountId,
      amount: BalanceOf<T>,
      fee: BalanceOf<T>,
    },
    ExecutionFeePaid {
      vault_id: VaultId,
      collector: T::AccountId,
      fee: BalanceOf<T>,
    },
    OwnershipTransferred {
      vault_id: VaultId,
      previous_owner: T::AccountId,
      new_owner: T::AccountId,
    },
  }

  #[pallet::error]
  pub enum Error<T> {
    /// Caller is not the vault owner, or not the vault's gateway authority.
    Unauthorized,
    /// Receiver already has an active policy in this vault.
    DuplicateReceiver,
    /// No active policy for this receiver.
    PolicyNotFound,
    /// Vault balance cannot cover the transfer (plus fee), or would be left
    /// non-zero but below the existential deposit.
    InsufficientFunds,
    /// Receiver is no longer due, or its policy is gone.
    StaleInstruction,
    /// Destination refused the funds.
    TransferFailed,
    /// Factory receivers, amounts and thresholds differ in length.
    LengthMismatch,
    VaultNotFound,
    VaultIdOverflow,
    TooManyReceivers,
    OwnerIndexFull,
    SovereignAccountCollision,
    /// Zero account or the vault's own sovereign account (as receiver,
    /// withdrawal destination or fee collector).
    InvalidReceiver,
    AmountZero,
    /// Fee exceeds `MaxExecutionFee`.
    ExcessiveFee,
  }

  #[pallet::hooks]
  impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {
    fn integrity_test() {
      assert!(
        T::MaxReceivers::get() > 0,
        "MaxReceivers must be greater than zero"
      );
      assert!(
        T::MaxVaultsPerOwner::get() > 0,
        "MaxVaultsPerOwner must be greater than zero"
      );
    }
  }

  #[pallet::call]
  impl<T: Config> Pallet<T> {
    /// Create a vault owned by the caller.
    ///
    /// Seeds one policy per `(receiver, amount, threshold)` triple, moves
    /// `initial_funding` from the caller into the vault and registers the
    /// checker call `(vault_id, max_gas_price)` with the automation registry.
    /// Any failure aborts the whole call.
    #[pallet::call_index(0)]
    #[pallet::weight(T::WeightInfo::new_auto_top_up(receivers.len() as u32))]
    pub fn new_auto_top_up(
      origin: OriginFor<T>,
      receivers: BoundedVec<T::AccountId, T::MaxReceivers>,
      amounts: BoundedVec<BalanceOf<T>, T::MaxReceivers>,
      thresholds: BoundedVec<BalanceOf<T>, T::MaxReceivers>,
      max_gas_price: Option<BalanceOf<T>>,
      initial_funding: BalanceOf<T>,
    ) -> DispatchResult {
      let owner = ensure_signed(origin)?;
      ensure!(
        receivers.len() == amounts.len() && amounts.len() == thresholds.len(),
        Error::<T>::LengthMismatch
      );
      let (vault_id, vault) = Self::do_create_vault(owner.clone())?;
      for ((receiver, amount), threshold) in receivers.into_iter().zip(amounts).zip(thresholds) {
        Self::do_start_auto_pay(vault_id, &vault, receiver, amount, threshold)?;
      }
      if !initial_funding.is_zero() {
        Self::do_deposit(vault_id, &vault, &owner, initial_funding)?;
      }
      // Registry state is not rolled back by a failing call: nothing may fail after this
      let task_id = T::TaskAutomation::create_task(
        &owner,
        CheckerCall {
          vault_id,
          max_gas_price,
        },
      )?;
      log::debug!(
        target: LOG_TARGET,
        "vault {} created for {:?} with task {:?}",
        vault_id,
        owner,
        task_id,
      );
      Self::deposit_event(Event::AutoTopUpCreated {
        vault_id,
        owner,
        sovereign_account: vault.sovereign_account,
        task_id,
      });
      Ok(())
    }

    /// Fund a vault. Open to any signed origin.
    #[pallet::call_index(1)]
    #[pallet::weight(T::WeightInfo::deposit())]
    pub fn deposit(
      origin: OriginFor<T>,
      vault_id: VaultId,
      amount: BalanceOf<T>,
    ) -> DispatchResult {
      let who = ensure_signed(origin)?;
      ensure!(!amount.is_zero(), Error::<T>::AmountZero);
      let vault = Self::vault_info(vault_id)?;
      Self::do_deposit(vault_id, &vault, &who, amount)
    }

    #[pallet::call_index(2)]
    #[pallet::weight(T::WeightInfo::withdraw())]
    pub fn withdraw(
      origin: OriginFor<T>,
      vault_id: VaultId,
      amount: BalanceOf<T>,
      destination: T::AccountId,
    ) -> DispatchResult {
      let vault = Self::ensure_owner(origin, vault_id)?;
      ensure!(
        destination != vault.sovereign_account,
        Error::<T>::InvalidReceiver
      );
      let available = Self::spendable(&vault);
      ensure!(
        amount <= available && Self::leaves_no_dust(available, amount),
        Error::<T>::InsufficientFunds
      );
      Self::transfer_out(&vault.sovereign_account, &destination, amount)?;
      Self::deposit_event(Event::FundsWithdrawn {
        vault_id,
        to: destination,
        amount,
      });
      Ok(())
    }

    /// Append a receiver policy to the end of the vault's evaluation order.
    #[pallet::call_index(3)]
    #[pallet::weight(T::WeightInfo::start_auto_pay())]
    pub fn start_auto_pay(
      origin: OriginFor<T>,
      vault_id: VaultId,
      receiver: T::AccountId,
      amount: BalanceOf<T>,
      threshold: BalanceOf<T>,
    ) -> DispatchResult {
      let vault = Self::ensure_owner(origin, vault_id)?;
      Self::do_start_auto_pay(vault_id, &vault, receiver, amount, threshold)
    }

    #[pallet::call_index(4)]
    #[pallet::weight(T::WeightInfo::stop_auto_pay())]
    pub fn stop_auto_pay(
      origin: OriginFor<T>,
      vault_id: VaultId,
      receiver: T::AccountId,
    ) -> DispatchResult {
      Self::ensure_owner(origin, vault_id)?;
      Policies::<T>::try_mutate(vault_id, |policies| -> DispatchResult {
        let index = policies
          .iter()
          .position(|policy| policy.receiver == receiver)
          .ok_or(Error::<T>::PolicyNotFound)?;
        policies.remove(index);
        Ok(())
      })?;
      Self::deposit_event(Event::ReceiverRemoved { vault_id, receiver });
      Ok(())
    }

    /// Executor gateway.
    ///
    /// - `origin`: must be the vault's gateway authority.
    /// - `instruction`: checker output; addresses the vault and receiver.
    /// - `fee`: executor compensation, bounded by `MaxExecutionFee`.
    /// - `fee_collector`: registry account receiving the fee.
    /// - `use_task_treasury`: the registry settles the fee itself; the vault pays none.
    #[pallet::call_index(5)]
    #[pallet::weight(T::WeightInfo::exec())]
    pub fn exec(
      origin: OriginFor<T>,
      instruction: TopUpInstructionOf<T>,
      fee: BalanceOf<T>,
      fee_collector: T::AccountId,
      use_task_treasury: bool,
    ) -> DispatchResult {
      let who = ensure_signed(origin)?;
      let vault_id = instruction.vault_id;
      let vault = Self::vault_info(vault_id)?;
      ensure!(who == vault.gateway_authority, Error::<T>::Unauthorized);
      ensure!(fee <= T::MaxExecutionFee::get(), Error::<T>::ExcessiveFee);
      let Some(policy) = Self::due_policy(vault_id, &instruction.receiver) else {
        log::debug!(
          target: LOG_TARGET,
          "stale instruction for vault {} receiver {:?}",
          vault_id,
          instruction.receiver,
        );
        return Err(Error::<T>::StaleInstruction.into());
      };
      let vault_fee: BalanceOf<T> = if use_task_treasury { Zero::zero() } else { fee };
      ensure!(
        vault_fee.is_zero() || fee_collector != vault.sovereign_account,
        Error::<T>::InvalidReceiver
      );
      let available = Self::spendable(&vault);
      let total = policy.amount.saturating_add(vault_fee);
      // Fee leg settles first: the remainder after each leg must be zero or above the existential deposit
      ensure!(
        total <= available
          && Self::leaves_no_dust(available, vault_fee)
          && Self::leaves_no_dust(available, total),
        Error::<T>::InsufficientFunds
      );
      if !vault_fee.is_zero() {
        Self::transfer_out(&vault.sovereign_account, &fee_collector, vault_fee)?;
        Self::deposit_event(Event::ExecutionFeePaid {
          vault_id,
          collector: fee_collector,
          fee: vault_fee,
        });
      }
      Self::transfer_out(&vault.sovereign_account, &policy.receiver, policy.amount)?;
      log::debug!(
        target: LOG_TARGET,
        "vault {} topped up {:?} with {:?} (fee {:?})",
        vault_id,
        policy.receiver,
        policy.amount,
        vault_fee,
      );
      Self::deposit_event(Event::TopUpExecuted {
        vault_id,
        receiver: policy.receiver,
        amount: policy.amount,
        fee: vault_fee,
      });
      Ok(())
    }

    #[pallet::call_index(6)]
    #[pallet::weight(T::WeightInfo::transfer_ownership())]
    pub fn transfer_ownership(
      origin: OriginFor<T>,
      vault_id: VaultId,
      new_owner: T::AccountId,
    ) -> DispatchResult {
      let vault = Self::ensure_owner(origin, vault_id)?;
      let previous_owner = vault.owner.clone();
      OwnerIndex::<T>::mutate(&previous_owner, |owned| owned.retain(|id| *id != vault_id));
      OwnerIndex::<T>::try_mutate(&new_owner, |owned| {
        owned
          .try_push(vault_id)
          .map_err(|_| Error::<T>::OwnerIndexFull)
      })?;
      Vaults::<T>::insert(
        vault_id,
        VaultInfo {
          owner: new_owner.clone(),
          ..vault
        },
      );
      Self::deposit_event(Event::OwnershipTransferred {
        vault_id,
        previous_owner,
        new_owner,
      });
      Ok(())
    }
  }

  impl<T: Config> Pallet<T> {
    /// First due receiver in evaluation order, or `None`.
    ///
    /// Read-only. Returns `None` when `gas_price` is above `max_gas_price`, when
    /// the vault does not exist or when no receiver is below its threshold.
    pub fn evaluate(
      vault_id: VaultId,
      max_gas_price: Option<BalanceOf<T>>,
      gas_price: BalanceOf<T>,
    ) -> Option<TopUpInstructionOf<T>> {
      let call = CheckerCall {
        vault_id,
        max_gas_price,
      };
      if !call.admits(&gas_price) || !Vaults::<T>::contains_key(vault_id) {
        return None;
      }
      Policies::<T>::get(vault_id)
        .into_iter()
        .find(Self::is_due)
        .map(|policy| TopUpInstruction {
          vault_id,
          receiver: policy.receiver,
          amount: policy.amount,
        })
    }

    /// Registry-facing checker: `(can_exec, encoded instruction)`.
    pub fn checker(
      vault_id: VaultId,
      max_gas_price: Option<BalanceOf<T>>,
      gas_price: BalanceOf<T>,
    ) -> (bool, Vec<u8>) {
      match Self::evaluate(vault_id, max_gas_price, gas_price) {
        Some(instruction) => (true, instruction.encode()),
        None => (false, Vec::new()),
      }
    }

    /// Active receivers in evaluation order.
    pub fn receivers(vault_id: VaultId) -> Vec<T::AccountId> {
      Policies::<T>::get(vault_id)
        .into_iter()
        .map(|policy| policy.receiver)
        .collect()
    }

    pub fn vault_balance(vault_id: VaultId) -> Option<BalanceOf<T>> {
      Vaults::<T>::get(vault_id).map(|vault| Self::spendable(&vault))
    }

    pub fn sovereign_account_id(vault_id: VaultId) -> T::AccountId {
      let mut seed_input = b"topup".to_vec();
      seed_input.extend_from_slice(&vault_id.to_le_bytes());
      let seed = frame::hashing::blake2_256(&seed_input);
      // Folded into the PalletId bytes: small AccountId types truncate the sub-account payload
      let mut id_bytes = T::PalletId::get().0;
      for (i, b) in seed.iter().enumerate() {
        id_bytes[i % 8] ^= b;
      }
      PalletId(id_bytes).into_sub_account_truncating(vault_id)
    }

    pub(crate) fn do_create_vault(
      owner: T::AccountId,
    ) -> Result<(VaultId, VaultInfoOf<T>), DispatchError> {
      let vault_id = NextVaultId::<T>::get();
      let next_id = vault_id.checked_add(1).ok_or(Error::<T>::VaultIdOverflow)?;
      let sovereign_account = Self::sovereign_account_id(vault_id);
      ensure!(
        !SovereignIndex::<T>::contains_key(&sovereign_account),
        Error::<T>::SovereignAccountCollision
      );
      OwnerIndex::<T>::try_mutate(&owner, |owned| {
        owned
          .try_push(vault_id)
          .map_err(|_| Error::<T>::OwnerIndexFull)
      })?;
      let vault = VaultInfo {
        owner,
        sovereign_account: sovereign_account.clone(),
        gateway_authority: T::TaskAutomation::executor(),
        created_at: frame_system::Pallet::<T>::block_number(),
      };
      // Sovereign account survives a zero balance via provider reference
      frame_system::Pallet::<T>::inc_providers(&sovereign_account);
      SovereignIndex::<T>::insert(&sovereign_account, vault_id);
      Vaults::<T>::insert(vault_id, vault.clone());
      NextVaultId::<T>::put(next_id);
      Ok((vault_id, vault))
    }

    pub(crate) fn do_start_auto_pay(
      vault_id: VaultId,
      vault: &VaultInfoOf<T>,
      receiver: T::AccountId,
      amount: BalanceOf<T>,
      threshold: BalanceOf<T>,
    ) -> DispatchResult {
      ensure!(!amount.is_zero(), Error::<T>::AmountZero);
      ensure!(
        Self::is_valid_receiver(&receiver, vault),
        Error::<T>::InvalidReceiver
      );
      Policies::<T>::try_mutate(vault_id, |policies| -> DispatchResult {
        ensure!(
          !policies.iter().any(|policy| policy.receiver == receiver),
          Error::<T>::DuplicateReceiver
        );
        policies
          .try_push(ReceiverPolicy {
            receiver: receiver.clone(),
            amount,
            threshold,
          })
          .map_err(|_| Error::<T>::TooManyReceivers)?;
        Ok(())
      })?;
      Self::deposit_event(Event::ReceiverAdded {
        vault_id,
        receiver,
        amount,
        threshold,
      });
      Ok(())
    }

    fn do_deposit(
      vault_id: VaultId,
      vault: &VaultInfoOf<T>,
      from: &T::AccountId,
      amount: BalanceOf<T>,
    ) -> DispatchResult {
      T::Currency::transfer(
        from,
        &vault.sovereign_account,
        amount,
        Preservation::Preserve,
      )?;
      Self::deposit_event(Event::FundsDeposited {
        vault_id,
        from: from.clone(),
        amount,
      });
      Ok(())
    }

    fn vault_info(vault_id: VaultId) -> Result<VaultInfoOf<T>, Error<T>> {
      Vaults::<T>::get(vault_id).ok_or(Error::<T>::VaultNotFound)
    }

    fn ensure_owner(origin: OriginFor<T>, vault_id: VaultId) -> Result<VaultInfoOf<T>, DispatchError> {
      let who = ensure_signed(origin)?;
      let vault = Self::vault_info(vault_id)?;
      ensure!(who == vault.owner, Error::<T>::Unauthorized);
      Ok(vault)
    }

    fn spendable(vault: &VaultInfoOf<T>) -> BalanceOf<T> {
      T::Currency::reducible_balance(
        &vault.sovereign_account,
        Preservation::Expendable,
        Fortitude::Polite,
      )
    }

    /// Balances below the existential deposit are dusted, so a debit may drain
    /// the vault completely or leave at least the minimum balance.
    fn leaves_no_dust(available: BalanceOf<T>, debit: BalanceOf<T>) -> bool {
      let remainder = available.saturating_sub(debit);
      remainder.is_zero() || remainder >= T::Currency::minimum_balance()
    }

    fn is_due(policy: &ReceiverPolicyOf<T>) -> bool {
      T::Currency::balance(&policy.receiver) < policy.threshold
    }

    /// Live policy for `receiver`, only if it is due right now.
    fn due_policy(vault_id: VaultId, receiver: &T::AccountId) -> Option<ReceiverPolicyOf<T>> {
      Policies::<T>::get(vault_id)
        .into_iter()
        .find(|policy| policy.receiver == *receiver)
        .filter(Self::is_due)
    }

    fn is_valid_receiver(receiver: &T::AccountId, vault: &VaultInfoOf<T>) -> bool {
      if *receiver == vault.sovereign_account {
        return false;
      }
      match T::AccountId::decode(&mut TrailingZeroInput::zeroes()) {
        Ok(zero) => *receiver != zero,
        Err(_) => true,
      }
    }

    fn transfer_out(
      from: &T::AccountId,
      to: &T::AccountId,
      amount: BalanceOf<T>,
    ) -> DispatchResult {
      T::Currency::transfer(from, to, amount, Preservation::Expendable)
        .map(|_| ())
        .map_err(|error| {
          log::debug!(
            target: LOG_TARGET,
            "transfer of {:?} to {:?} refused: {:?}",
            amount,
            to,
            error,
          );
          Error::<T>::TransferFailed.into()
        })
    }
  }

  #[pallet::genesis_config]
  #[derive(DefaultNoBound)]
  pub struct GenesisConfig<T: Config> {
    /// `(owner, [(receiver, amount, threshold)])` per vault, created unfunded.
    pub vaults: Vec<(T::AccountId, Vec<(T::AccountId, BalanceOf<T>, BalanceOf<T>)>)>,
  }

  #[pallet::genesis_build]
  impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
    fn build(&self) {
      for (owner, policies) in &self.vaults {
        let (vault_id, vault) =
          Pallet::<T>::do_create_vault(owner.clone()).expect("genesis vault must be creatable");
        for (receiver, amount, threshold) in policies {
          Pallet::<T>::do_start_auto_pay(vault_id, &vault, receiver.clone(), *amount, *threshold)
            .expect("genesis receiver policy must be valid");
        }
      }
    }
  }
}
