#![no_std]

multiversx_sc::imports!();

pub mod errors;
pub mod types;

use errors::*;
use types::{Bill, BillStatus};

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait CheckSplitter {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    /// The deployer becomes the owner for the lifetime of the contract.
    #[init]
    fn init(&self) {
        let caller = self.blockchain().get_caller();
        self.owner().set(&caller);
        self.bill().set(Bill::<Self::Api>::empty());
        self.collected().set(BigUint::zero());
        self.total_swept().set(BigUint::zero());
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: registerParticipant
    // Owner-only. Registry is append-only and frozen while
    // a bill is active so the share never moves mid-cycle.
    // ========================================================

    #[endpoint(registerParticipant)]
    fn register_participant(&self, participant: ManagedAddress) {
        self.require_not_locked();
        self.require_owner();
        require!(!participant.is_zero(), ERR_INVALID_IDENTITY);
        require!(
            !self.participants().contains(&participant),
            ERR_ALREADY_REGISTERED
        );
        require!(!self.bill().get().is_active(), ERR_BILL_ACTIVE);

        self.participants().insert(participant.clone());

        let count = self.participants().len() as u32;
        self.participant_registered_event(&participant, count);
    }

    // ========================================================
    // ENDPOINT: initializeBill
    // Starts a cycle. Allowed on a fresh contract or after
    // the previous cycle was swept.
    // ========================================================

    #[endpoint(initializeBill)]
    fn initialize_bill(&self, total_amount: BigUint) {
        self.require_not_locked();
        self.require_owner();
        require!(total_amount > 0u64, ERR_ZERO_AMOUNT);

        let previous = self.bill().get();
        require!(!previous.is_active(), ERR_ALREADY_INITIALIZED);

        let count = self.participants().len() as u64;
        require!(count > 0, ERR_NO_PARTICIPANTS);
        require!(
            &total_amount % &BigUint::from(count) == 0u64,
            ERR_INDIVISIBLE_AMOUNT
        );

        let bill = Bill {
            total_amount,
            status: BillStatus::Active,
            cycle: previous.cycle + 1,
        };
        self.bill().set(&bill);

        let share = self.share_of(&bill);
        self.bill_initialized_event(bill.cycle, &bill.total_amount, &share);
    }

    // ========================================================
    // ENDPOINT: contribute
    // Declared amount must match the attached EGLD exactly.
    // ========================================================

    #[endpoint(contribute)]
    #[payable("EGLD")]
    fn contribute(&self, amount: BigUint) {
        self.require_not_locked();
        let caller = self.blockchain().get_caller();
        self.require_participant(&caller);

        let bill = self.bill().get();
        require!(bill.is_active(), ERR_BILL_NOT_INITIALIZED);
        require!(amount > 0u64, ERR_ZERO_AMOUNT);

        let payment = self.call_value().egld_value().clone_value();
        require!(payment == amount, ERR_VALUE_MISMATCH);

        let paid_after = &self.amount_paid(&caller).get() + &amount;
        require!(paid_after <= self.share_of(&bill), ERR_SHARE_EXCEEDED);

        self.amount_paid(&caller).set(&paid_after);
        self.collected().update(|c| *c += &amount);

        self.contribution_event(&caller, &amount, &paid_after);
    }

    // ========================================================
    // ENDPOINT: withdraw
    // Balance is debited before the EGLD leaves the contract.
    // ========================================================

    #[endpoint(withdraw)]
    fn withdraw(&self, amount: BigUint) {
        self.require_not_locked();
        let caller = self.blockchain().get_caller();
        self.require_participant(&caller);
        require!(amount > 0u64, ERR_ZERO_AMOUNT);

        let paid = self.amount_paid(&caller).get();
        require!(amount <= paid, ERR_INSUFFICIENT_BALANCE);

        let paid_after = &paid - &amount;
        self.amount_paid(&caller).set(&paid_after);
        self.collected().update(|c| *c -= &amount);

        self.send_guarded(&caller, &amount);
        self.withdrawal_event(&caller, &amount, &paid_after);
    }

    // ========================================================
    // ENDPOINT: transferRemaining
    // Owner sweeps a fully paid bill. Closes the cycle and
    // zeroes every participant's counter for the next one.
    // ========================================================

    #[endpoint(transferRemaining)]
    fn transfer_remaining(&self) {
        self.require_not_locked();
        self.require_owner();

        let mut bill = self.bill().get();
        require!(bill.is_active(), ERR_BILL_NOT_INITIALIZED);
        require!(self.all_shares_paid(&bill), ERR_INCOMPLETE_CONTRIBUTIONS);

        let amount = self.collected().get();
        require!(amount > 0u64, ERR_NO_REMAINING_BALANCE);

        self.collected().set(BigUint::zero());
        self.total_swept().update(|s| *s += &amount);
        for participant in self.participants().iter() {
            self.amount_paid(&participant).clear();
        }
        bill.status = BillStatus::Swept;
        self.bill().set(&bill);

        let owner = self.owner().get();
        self.send_guarded(&owner, &amount);
        self.bill_swept_event(&owner, bill.cycle, &amount);
    }

    // ========================================================
    // INTERNAL: guards
    // ========================================================

    fn require_owner(&self) {
        let caller = self.blockchain().get_caller();
        require!(caller == self.owner().get(), ERR_UNAUTHORIZED);
    }

    fn require_participant(&self, address: &ManagedAddress) {
        require!(self.participants().contains(address), ERR_NOT_PARTICIPANT);
    }

    fn require_not_locked(&self) {
        require!(!self.transfer_lock().get(), ERR_REENTRANCY);
    }

    /// Outbound EGLD may reach a contract. The lock keeps it from
    /// calling back into any mutating endpoint before we return.
    fn send_guarded(&self, to: &ManagedAddress, amount: &BigUint) {
        self.transfer_lock().set(true);
        self.send().direct_egld(to, amount);
        self.transfer_lock().clear();
    }

    // ========================================================
    // INTERNAL: share accounting
    // ========================================================

    /// Equal share of `bill`. Totals are checked to divide evenly at
    /// initialization, so there is no remainder to allocate.
    fn share_of(&self, bill: &Bill<Self::Api>) -> BigUint {
        let count = self.participants().len() as u64;
        if count == 0 {
            return BigUint::zero();
        }
        &bill.total_amount / &BigUint::from(count)
    }

    fn all_shares_paid(&self, bill: &Bill<Self::Api>) -> bool {
        let share = self.share_of(bill);
        self.participants()
            .iter()
            .all(|participant| self.amount_paid(&participant).get() == share)
    }

    // ========================================================
    // VIEWS — read-only queries
    // ========================================================

    #[view(isParticipant)]
    fn is_participant(&self, address: &ManagedAddress) -> bool {
        self.participants().contains(address)
    }

    #[view(getParticipantDetails)]
    fn get_participant_details(&self, address: &ManagedAddress) -> MultiValue2<bool, BigUint> {
        self.require_participant(address);
        (true, self.amount_paid(address).get()).into()
    }

    #[view(totalBill)]
    fn total_bill(&self) -> BigUint {
        self.bill().get().total_amount
    }

    #[view(getShare)]
    fn get_share(&self) -> BigUint {
        let bill = self.bill().get();
        self.share_of(&bill)
    }

    #[view(getBillStatus)]
    fn get_bill_status(&self) -> BillStatus {
        self.bill().get().status
    }

    #[view(getCycle)]
    fn get_cycle(&self) -> u64 {
        self.bill().get().cycle
    }

    /// True when the active bill is fully paid and can be swept.
    #[view(isComplete)]
    fn is_complete(&self) -> bool {
        let bill = self.bill().get();
        bill.is_active() && self.all_shares_paid(&bill)
    }

    #[view(getParticipantCount)]
    fn get_participant_count(&self) -> u32 {
        self.participants().len() as u32
    }

    #[view(getParticipants)]
    fn get_participants(&self) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for participant in self.participants().iter() {
            result.push(participant);
        }
        result
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("participantRegistered")]
    fn participant_registered_event(
        &self,
        #[indexed] participant: &ManagedAddress,
        participant_count: u32,
    );

    #[event("billInitialized")]
    fn bill_initialized_event(
        &self,
        #[indexed] cycle: u64,
        #[indexed] total_amount: &BigUint,
        share: &BigUint,
    );

    #[event("contribution")]
    fn contribution_event(
        &self,
        #[indexed] participant: &ManagedAddress,
        #[indexed] amount: &BigUint,
        amount_paid: &BigUint,
    );

    #[event("withdrawal")]
    fn withdrawal_event(
        &self,
        #[indexed] participant: &ManagedAddress,
        #[indexed] amount: &BigUint,
        amount_paid: &BigUint,
    );

    #[event("billSwept")]
    fn bill_swept_event(
        &self,
        #[indexed] owner: &ManagedAddress,
        #[indexed] cycle: u64,
        amount: &BigUint,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    // ── Access control ──

    #[view(owner)]
    #[storage_mapper("owner")]
    fn owner(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("transferLock")]
    fn transfer_lock(&self) -> SingleValueMapper<bool>;

    // ── Bill ──

    #[view(getBill)]
    #[storage_mapper("bill")]
    fn bill(&self) -> SingleValueMapper<Bill<Self::Api>>;

    /// Sum of every participant's `amount_paid` for the current cycle
    #[view(getCollected)]
    #[storage_mapper("collected")]
    fn collected(&self) -> SingleValueMapper<BigUint>;

    /// Lifetime total sent to the owner across all cycles
    #[view(getTotalSwept)]
    #[storage_mapper("totalSwept")]
    fn total_swept(&self) -> SingleValueMapper<BigUint>;

    // ── Participants ──

    #[storage_mapper("participants")]
    fn participants(&self) -> UnorderedSetMapper<ManagedAddress>;

    #[storage_mapper("amountPaid")]
    fn amount_paid(&self, participant: &ManagedAddress) -> SingleValueMapper<BigUint>;
}
