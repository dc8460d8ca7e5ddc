//! Stable failure reasons. Every rejected call aborts with exactly one of
//! these messages, so callers can match on the cause.

pub const ERR_UNAUTHORIZED: &str = "Unauthorized: caller is not the owner";
pub const ERR_INVALID_IDENTITY: &str = "Invalid identity: zero address";
pub const ERR_ALREADY_REGISTERED: &str = "Participant already registered";
pub const ERR_NOT_PARTICIPANT: &str = "Not a registered participant";
pub const ERR_BILL_NOT_INITIALIZED: &str = "Bill not initialized";
pub const ERR_ALREADY_INITIALIZED: &str = "Bill already initialized";
pub const ERR_ZERO_AMOUNT: &str = "Amount must be greater than zero";
pub const ERR_VALUE_MISMATCH: &str = "Transferred value does not match declared amount";
pub const ERR_SHARE_EXCEEDED: &str = "Contribution exceeds participant share";
pub const ERR_INSUFFICIENT_BALANCE: &str = "Withdrawal exceeds amount paid";
pub const ERR_INCOMPLETE_CONTRIBUTIONS: &str = "Not all participants have paid their share";
pub const ERR_NO_REMAINING_BALANCE: &str = "No remaining balance to transfer";

pub const ERR_BILL_ACTIVE: &str = "Cannot register participants while a bill is active";
pub const ERR_NO_PARTICIPANTS: &str = "No participants registered";
pub const ERR_INDIVISIBLE_AMOUNT: &str = "Total amount must divide evenly between participants";
pub const ERR_REENTRANCY: &str = "Transfer in progress";
