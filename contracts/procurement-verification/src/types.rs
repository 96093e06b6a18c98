use soroban_sdk::{contracttype, Address, String};

/// Threshold applied to departments without an explicit rule.
pub const DEFAULT_THRESHOLD: i128 = 10_000;

/// Verification count applied to departments without an explicit rule.
pub const DEFAULT_REQUIRED_VERIFICATIONS: u32 = 1;

/// Storage keys for the contract
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Admin,
    /// Address of the expenditure tracking contract
    ExpenditureContract,
    Verifier(Address),
    Rules(Address),
    Verification(u64),
}

/// Role record for a verifier. Removal flips `active` rather than deleting.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VerifierRole {
    pub active: bool,
}

/// Per-department procurement rule
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProcurementRule {
    /// Minimum expenditure amount that may be verified
    pub threshold: i128,
    pub required_verifications: u32,
}

impl ProcurementRule {
    pub fn default_rule() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            required_verifications: DEFAULT_REQUIRED_VERIFICATIONS,
        }
    }
}

/// Outcome of a successful `verify_procurement` call
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Verification {
    pub verifier: Address,
    pub verified: bool,
    /// Ledger sequence at which the verification was recorded
    pub timestamp: u32,
}

/// Expenditure record as returned by the expenditure tracking contract.
/// Field names must match the collaborator's type for the cross-contract
/// decode to succeed.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Expenditure {
    pub department: Address,
    pub amount: i128,
    pub description: String,
    pub timestamp: u32,
}
