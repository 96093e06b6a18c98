use soroban_sdk::{symbol_short, Address, Env};

use crate::types::ProcurementRule;

/// Events emitted by the procurement verification contract.
pub struct ProcurementEvents;

impl ProcurementEvents {
    pub fn verifier_updated(env: &Env, verifier: &Address, active: bool) {
        let topics = (symbol_short!("procure"), symbol_short!("verifier"));
        env.events().publish(topics, (verifier.clone(), active));
    }

    pub fn rules_updated(env: &Env, department: &Address, rule: &ProcurementRule) {
        let topics = (symbol_short!("procure"), symbol_short!("rules"));
        env.events().publish(
            topics,
            (
                department.clone(),
                rule.threshold,
                rule.required_verifications,
            ),
        );
    }

    pub fn verified(env: &Env, expenditure_id: u64, verifier: &Address, amount: i128) {
        let topics = (symbol_short!("procure"), symbol_short!("verified"), expenditure_id);
        env.events().publish(
            topics,
            (verifier.clone(), amount, env.ledger().sequence()),
        );
    }

    pub fn admin_transferred(env: &Env, previous: &Address, new_admin: &Address) {
        let topics = (symbol_short!("procure"), symbol_short!("admtfr"));
        env.events()
            .publish(topics, (previous.clone(), new_admin.clone()));
    }
}
