//! # Procurement Verification Contract
//!
//! Gate that lets registered verifiers sign off on departmental expenditures
//! once they reach the department's procurement threshold.
//!
//! Expenditures are owned by the expenditure tracking contract; this contract
//! only reads them through a cross-contract call and stores the verification
//! outcome under the expenditure id.
//!
//! ## Error codes
//!
//! | Code | Meaning |
//! |------|---------|
//! | 300  | caller is not the admin |
//! | 301  | `required_verifications` must be positive |
//! | 302  | expenditure does not exist |
//! | 303  | caller is not an active verifier |
//! | 304  | expenditure already verified |
//! | 305  | amount below the department threshold |
//! | 306  | only the admin may transfer adminship |

#![no_std]

mod events;
mod types;


use soroban_sdk::{
    contract, contracterror, contractimpl, log, vec, Address, Env, IntoVal, Symbol,
};

pub use crate::events::ProcurementEvents;
pub use crate::types::{
    DataKey, Expenditure, ProcurementRule, Verification, VerifierRole,
    DEFAULT_REQUIRED_VERIFICATIONS, DEFAULT_THRESHOLD,
};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ProcurementError {
    Unauthorized = 300,
    InvalidVerificationCount = 301,
    ExpenditureNotFound = 302,
    NotVerifier = 303,
    AlreadyVerified = 304,
    BelowThreshold = 305,
    AdminTransferUnauthorized = 306,
    AlreadyInitialized = 307,
    NotInitialized = 308,
}

#[contract]
pub struct ProcurementVerificationContract;

#[contractimpl]
impl ProcurementVerificationContract {
    /// Initializes the contract.
    ///
    /// # Arguments
    /// * `admin` - Address allowed to manage verifiers and rules
    /// * `expenditure_contract` - Expenditure tracking contract to read from
    pub fn initialize(
        env: Env,
        admin: Address,
        expenditure_contract: Address,
    ) -> Result<(), ProcurementError> {
        if env.storage().instance().has(&DataKey::Admin) {
            return Err(ProcurementError::AlreadyInitialized);
        }

        admin.require_auth();

        env.storage().instance().set(&DataKey::Admin, &admin);
        env.storage()
            .instance()
            .set(&DataKey::ExpenditureContract, &expenditure_contract);
        Ok(())
    }

    // ── Verifier management ──────────────────────────────────────────────────

    pub fn add_verifier(env: Env, caller: Address, verifier: Address) -> Result<(), ProcurementError> {
        caller.require_auth();
        Self::require_admin(&env, &caller, ProcurementError::Unauthorized)?;

        Self::set_verifier_active(&env, &verifier, true);
        Ok(())
    }

    pub fn remove_verifier(
        env: Env,
        caller: Address,
        verifier: Address,
    ) -> Result<(), ProcurementError> {
        caller.require_auth();
        Self::require_admin(&env, &caller, ProcurementError::Unauthorized)?;

        Self::set_verifier_active(&env, &verifier, false);
        Ok(())
    }

    // ── Rules ────────────────────────────────────────────────────────────────

    /// Sets the procurement threshold and verification count for a department,
    /// replacing any previous rule.
    pub fn set_procurement_rules(
        env: Env,
        caller: Address,
        department: Address,
        threshold: i128,
        required_verifications: u32,
    ) -> Result<(), ProcurementError> {
        caller.require_auth();
        Self::require_admin(&env, &caller, ProcurementError::Unauthorized)?;

        if required_verifications == 0 {
            return Err(ProcurementError::InvalidVerificationCount);
        }

        let rule = ProcurementRule {
            threshold,
            required_verifications,
        };
        env.storage()
            .persistent()
            .set(&DataKey::Rules(department.clone()), &rule);

        ProcurementEvents::rules_updated(&env, &department, &rule);
        Ok(())
    }

    // ── Verification ─────────────────────────────────────────────────────────

    /// Verifies an expenditure on behalf of `caller`.
    ///
    /// A single successful call marks the expenditure verified; the
    /// department's `required_verifications` is recorded but not counted.
    pub fn verify_procurement(
        env: Env,
        caller: Address,
        expenditure_id: u64,
    ) -> Result<(), ProcurementError> {
        caller.require_auth();

        let expenditure = Self::fetch_expenditure(&env, expenditure_id)?
            .ok_or(ProcurementError::ExpenditureNotFound)?;

        if !Self::is_authorized(env.clone(), caller.clone()) {
            return Err(ProcurementError::NotVerifier);
        }

        if Self::is_verified(env.clone(), expenditure_id) {
            return Err(ProcurementError::AlreadyVerified);
        }

        let rule = Self::get_procurement_rules(env.clone(), expenditure.department.clone());
        if expenditure.amount < rule.threshold {
            log!(
                &env,
                "expenditure below procurement threshold",
                expenditure_id,
                expenditure.amount,
                rule.threshold
            );
            return Err(ProcurementError::BelowThreshold);
        }

        let verification = Verification {
            verifier: caller.clone(),
            verified: true,
            timestamp: env.ledger().sequence(),
        };
        env.storage()
            .persistent()
            .set(&DataKey::Verification(expenditure_id), &verification);

        ProcurementEvents::verified(&env, expenditure_id, &caller, expenditure.amount);
        Ok(())
    }

    // ── Admin ────────────────────────────────────────────────────────────────

    pub fn transfer_admin(
        env: Env,
        caller: Address,
        new_admin: Address,
    ) -> Result<(), ProcurementError> {
        caller.require_auth();
        Self::require_admin(&env, &caller, ProcurementError::AdminTransferUnauthorized)?;

        env.storage().instance().set(&DataKey::Admin, &new_admin);

        ProcurementEvents::admin_transferred(&env, &caller, &new_admin);
        Ok(())
    }

    // ── Views ────────────────────────────────────────────────────────────────

    pub fn get_admin(env: Env) -> Option<Address> {
        env.storage().instance().get(&DataKey::Admin)
    }

    pub fn is_admin(env: Env, address: Address) -> bool {
        match Self::get_admin(env) {
            Some(admin) => admin == address,
            None => false,
        }
    }

    /// Returns true if `address` is an active verifier.
    pub fn is_authorized(env: Env, address: Address) -> bool {
        env.storage()
            .persistent()
            .get::<_, VerifierRole>(&DataKey::Verifier(address))
            .map(|role| role.active)
            .unwrap_or(false)
    }

    pub fn is_verified(env: Env, expenditure_id: u64) -> bool {
        Self::get_verification_details(env, expenditure_id)
            .map(|v| v.verified)
            .unwrap_or(false)
    }

    pub fn get_verification_details(env: Env, expenditure_id: u64) -> Option<Verification> {
        env.storage()
            .persistent()
            .get(&DataKey::Verification(expenditure_id))
    }

    /// Returns the department's rule, or the default rule when none is set.
    pub fn get_procurement_rules(env: Env, department: Address) -> ProcurementRule {
        env.storage()
            .persistent()
            .get(&DataKey::Rules(department))
            .unwrap_or_else(ProcurementRule::default_rule)
    }

    pub fn get_expenditure_contract(env: Env) -> Option<Address> {
        env.storage().instance().get(&DataKey::ExpenditureContract)
    }

    // ── Private helpers ──────────────────────────────────────────────────────

    fn require_admin(
        env: &Env,
        caller: &Address,
        denied: ProcurementError,
    ) -> Result<(), ProcurementError> {
        let admin: Address = env
            .storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(ProcurementError::NotInitialized)?;

        if *caller != admin {
            return Err(denied);
        }
        Ok(())
    }

    fn set_verifier_active(env: &Env, verifier: &Address, active: bool) {
        env.storage()
            .persistent()
            .set(&DataKey::Verifier(verifier.clone()), &VerifierRole { active });
        ProcurementEvents::verifier_updated(env, verifier, active);
    }

    /// Reads an expenditure from the expenditure tracking contract.
    fn fetch_expenditure(
        env: &Env,
        expenditure_id: u64,
    ) -> Result<Option<Expenditure>, ProcurementError> {
        let contract: Address = env
            .storage()
            .instance()
            .get(&DataKey::ExpenditureContract)
            .ok_or(ProcurementError::NotInitialized)?;

        Ok(env.invoke_contract::<Option<Expenditure>>(
            &contract,
            &Symbol::new(env, "get_expenditure"),
            vec![env, expenditure_id.into_val(env)],
        ))
    }
}
