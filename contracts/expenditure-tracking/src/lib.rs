//! # Expenditure Tracking Contract
//!
//! Append-only ledger of departmental expenditures. Records are written by
//! the admin and read by other contracts (procurement verification) through
//! `get_expenditure`.

#![no_std]

use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, symbol_short, Address, Env, String,
};

/// Storage keys used by the expenditure tracking contract.
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Admin,
    /// Last assigned expenditure id. Ids start at 1.
    ExpenditureCount,
    Expenditure(u64),
}

/// A single expenditure booked against a department.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Expenditure {
    pub department: Address,
    pub amount: i128,
    pub description: String,
    /// Ledger sequence at which the expenditure was recorded
    pub timestamp: u32,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ExpenditureError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    InvalidAmount = 4,
}

pub struct ExpenditureEvents;

impl ExpenditureEvents {
    pub fn recorded(env: &Env, id: u64, expenditure: &Expenditure) {
        let topics = (symbol_short!("expend"), symbol_short!("recorded"), id);
        env.events()
            .publish(topics, (expenditure.department.clone(), expenditure.amount));
    }
}

#[contract]
pub struct ExpenditureTrackingContract;

#[contractimpl]
impl ExpenditureTrackingContract {
    /// Initializes the contract with the address allowed to book expenditures.
    pub fn initialize(env: Env, admin: Address) -> Result<(), ExpenditureError> {
        if env.storage().instance().has(&DataKey::Admin) {
            return Err(ExpenditureError::AlreadyInitialized);
        }

        admin.require_auth();

        env.storage().instance().set(&DataKey::Admin, &admin);
        env.storage()
            .instance()
            .set(&DataKey::ExpenditureCount, &0u64);
        Ok(())
    }

    /// Books a new expenditure and returns its id.
    pub fn record_expenditure(
        env: Env,
        caller: Address,
        department: Address,
        amount: i128,
        description: String,
    ) -> Result<u64, ExpenditureError> {
        caller.require_auth();
        Self::require_admin(&env, &caller)?;

        if amount <= 0 {
            return Err(ExpenditureError::InvalidAmount);
        }

        let mut count: u64 = env
            .storage()
            .instance()
            .get(&DataKey::ExpenditureCount)
            .unwrap_or(0);
        count += 1;

        let expenditure = Expenditure {
            department,
            amount,
            description,
            timestamp: env.ledger().sequence(),
        };

        env.storage()
            .persistent()
            .set(&DataKey::Expenditure(count), &expenditure);
        env.storage()
            .instance()
            .set(&DataKey::ExpenditureCount, &count);

        ExpenditureEvents::recorded(&env, count, &expenditure);
        Ok(count)
    }

    pub fn get_expenditure(env: Env, id: u64) -> Option<Expenditure> {
        env.storage().persistent().get(&DataKey::Expenditure(id))
    }

    pub fn get_expenditure_count(env: Env) -> u64 {
        env.storage()
            .instance()
            .get(&DataKey::ExpenditureCount)
            .unwrap_or(0)
    }

    pub fn get_admin(env: Env) -> Option<Address> {
        env.storage().instance().get(&DataKey::Admin)
    }

    fn require_admin(env: &Env, caller: &Address) -> Result<(), ExpenditureError> {
        let admin: Address = env
            .storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(ExpenditureError::NotInitialized)?;

        if *caller != admin {
            return Err(ExpenditureError::Unauthorized);
        }
        Ok(())
    }
}
