multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Bill Status — lifecycle of a billing cycle
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum BillStatus {
    /// No bill has ever been declared.
    Uninitialized,
    /// Bill declared. Participants contribute and withdraw toward their share.
    Active,
    /// Every share was paid and the owner swept the balance.
    /// A new cycle may be started from here.
    Swept,
}

// ============================================================
// Bill — the amount owed for the current cycle
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Bill<M: ManagedTypeApi> {
    pub total_amount: BigUint<M>,
    pub status: BillStatus,
    /// 1-based; 0 until the first bill is initialized
    pub cycle: u64,
}

impl<M: ManagedTypeApi> Bill<M> {
    pub fn empty() -> Self {
        Bill {
            total_amount: BigUint::zero(),
            status: BillStatus::Uninitialized,
            cycle: 0,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == BillStatus::Active
    }
}
