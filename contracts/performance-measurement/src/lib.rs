//! # Performance Measurement Contract
//!
//! Registry of public-works projects with per-project managers who report
//! performance metrics and track milestones.
//!
//! ## Features
//!
//! - **Project Registry**: Admin registers projects with a budget and a
//!   duration measured in ledgers
//! - **Manager Roles**: Admin grants and revokes manager rights per project
//! - **Metrics**: Managers record the latest value of named metrics
//! - **Milestones**: Managers add milestones and complete each one exactly once
//!
//! All timestamps are ledger sequence numbers.

#![no_std]

mod events;
mod types;


use soroban_sdk::{contract, contracterror, contractimpl, Address, Env, String};

pub use crate::events::PerformanceEvents;
pub use crate::types::{DataKey, ManagerRole, Milestone, PerformanceMetric, Project};

/// Error codes for the performance measurement contract.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum PerformanceError {
    /// Caller is not the admin
    Unauthorized = 400,
    /// Budget must be positive
    InvalidBudget = 401,
    /// Duration must be positive
    InvalidDuration = 402,
    ProjectNotFound = 403,
    /// Caller is not an active manager of the project
    NotProjectManager = 404,
    MilestoneNotFound = 405,
    MilestoneAlreadyCompleted = 406,
    AlreadyInitialized = 407,
    NotInitialized = 408,
    /// Milestone id is already taken for this project
    MilestoneExists = 409,
}

#[contract]
pub struct PerformanceMeasurementContract;

#[contractimpl]
impl PerformanceMeasurementContract {
    /// Initializes the contract with its admin. The admin cannot be changed
    /// afterwards.
    pub fn initialize(env: Env, admin: Address) -> Result<(), PerformanceError> {
        if env.storage().instance().has(&DataKey::Admin) {
            return Err(PerformanceError::AlreadyInitialized);
        }

        admin.require_auth();

        env.storage().instance().set(&DataKey::Admin, &admin);
        env.storage().instance().set(&DataKey::ProjectCount, &0u64);
        Ok(())
    }

    /// Registers a new project and returns its id.
    ///
    /// The project starts at the current ledger and ends `duration` ledgers
    /// later. Budget and duration are validated before the caller.
    ///
    /// # Arguments
    /// * `caller` - Must be the admin
    /// * `name` - Human readable project name
    /// * `department` - Department responsible for the project
    /// * `budget` - Allocated budget, must be positive
    /// * `duration` - Project length in ledgers, must be positive
    pub fn register_project(
        env: Env,
        caller: Address,
        name: String,
        department: Address,
        budget: i128,
        duration: u32,
    ) -> Result<u64, PerformanceError> {
        caller.require_auth();

        if budget <= 0 {
            return Err(PerformanceError::InvalidBudget);
        }
        if duration == 0 {
            return Err(PerformanceError::InvalidDuration);
        }
        Self::require_admin(&env, &caller)?;

        let project_id: u64 = env
            .storage()
            .instance()
            .get(&DataKey::ProjectCount)
            .unwrap_or(0);

        let start_block = env.ledger().sequence();
        let project = Project {
            name,
            department,
            budget,
            start_block,
            end_block: start_block.saturating_add(duration),
        };

        env.storage()
            .persistent()
            .set(&DataKey::Project(project_id), &project);
        env.storage()
            .instance()
            .set(&DataKey::ProjectCount, &(project_id + 1));

        PerformanceEvents::project_registered(&env, project_id, &project);
        Ok(project_id)
    }

    // ── Managers ─────────────────────────────────────────────────────────────

    pub fn add_project_manager(
        env: Env,
        caller: Address,
        project_id: u64,
        manager: Address,
    ) -> Result<(), PerformanceError> {
        Self::set_manager_active(&env, &caller, project_id, &manager, true)
    }

    pub fn remove_project_manager(
        env: Env,
        caller: Address,
        project_id: u64,
        manager: Address,
    ) -> Result<(), PerformanceError> {
        Self::set_manager_active(&env, &caller, project_id, &manager, false)
    }

    // ── Metrics ──────────────────────────────────────────────────────────────

    /// Records the current value of a metric, replacing any earlier reading.
    pub fn record_performance_metric(
        env: Env,
        caller: Address,
        project_id: u64,
        metric_name: String,
        value: i128,
    ) -> Result<(), PerformanceError> {
        caller.require_auth();
        Self::require_manager(&env, &caller, project_id)?;
        Self::require_project(&env, project_id)?;

        let metric = PerformanceMetric {
            value,
            recorded_by: caller.clone(),
            timestamp: env.ledger().sequence(),
        };
        env.storage()
            .persistent()
            .set(&DataKey::Metric(project_id, metric_name.clone()), &metric);

        PerformanceEvents::metric_recorded(&env, project_id, &metric_name, value, &caller);
        Ok(())
    }

    // ── Milestones ───────────────────────────────────────────────────────────

    pub fn add_milestone(
        env: Env,
        caller: Address,
        project_id: u64,
        milestone_id: u32,
        description: String,
        target_block: u32,
    ) -> Result<(), PerformanceError> {
        caller.require_auth();
        Self::require_manager(&env, &caller, project_id)?;
        Self::require_project(&env, project_id)?;

        let key = DataKey::Milestone(project_id, milestone_id);
        if env.storage().persistent().has(&key) {
            return Err(PerformanceError::MilestoneExists);
        }

        let milestone = Milestone {
            description,
            target_block,
            completed: false,
            completion_block: 0,
        };
        env.storage().persistent().set(&key, &milestone);

        PerformanceEvents::milestone_added(&env, project_id, milestone_id, target_block);
        Ok(())
    }

    pub fn complete_milestone(
        env: Env,
        caller: Address,
        project_id: u64,
        milestone_id: u32,
    ) -> Result<(), PerformanceError> {
        caller.require_auth();
        Self::require_manager(&env, &caller, project_id)?;

        let key = DataKey::Milestone(project_id, milestone_id);
        let mut milestone: Milestone = env
            .storage()
            .persistent()
            .get(&key)
            .ok_or(PerformanceError::MilestoneNotFound)?;

        if milestone.completed {
            return Err(PerformanceError::MilestoneAlreadyCompleted);
        }

        milestone.completed = true;
        milestone.completion_block = env.ledger().sequence();
        env.storage().persistent().set(&key, &milestone);

        PerformanceEvents::milestone_completed(
            &env,
            project_id,
            milestone_id,
            milestone.completion_block,
        );
        Ok(())
    }

    // ── Views ────────────────────────────────────────────────────────────────

    pub fn get_admin(env: Env) -> Option<Address> {
        env.storage().instance().get(&DataKey::Admin)
    }

    pub fn get_project_count(env: Env) -> u64 {
        env.storage()
            .instance()
            .get(&DataKey::ProjectCount)
            .unwrap_or(0)
    }

    pub fn get_project(env: Env, project_id: u64) -> Option<Project> {
        env.storage().persistent().get(&DataKey::Project(project_id))
    }

    /// Returns true if `address` is an active manager of `project_id`.
    pub fn is_project_manager(env: Env, address: Address, project_id: u64) -> bool {
        env.storage()
            .persistent()
            .get::<_, ManagerRole>(&DataKey::Manager(project_id, address))
            .map(|role| role.active)
            .unwrap_or(false)
    }

    pub fn get_performance_metric(
        env: Env,
        project_id: u64,
        metric_name: String,
    ) -> Option<PerformanceMetric> {
        env.storage()
            .persistent()
            .get(&DataKey::Metric(project_id, metric_name))
    }

    pub fn get_project_milestone(env: Env, project_id: u64, milestone_id: u32) -> Option<Milestone> {
        env.storage()
            .persistent()
            .get(&DataKey::Milestone(project_id, milestone_id))
    }

    // ── Private helpers ──────────────────────────────────────────────────────

    fn set_manager_active(
        env: &Env,
        caller: &Address,
        project_id: u64,
        manager: &Address,
        active: bool,
    ) -> Result<(), PerformanceError> {
        caller.require_auth();
        Self::require_admin(env, caller)?;
        Self::require_project(env, project_id)?;

        env.storage().persistent().set(
            &DataKey::Manager(project_id, manager.clone()),
            &ManagerRole { active },
        );

        PerformanceEvents::manager_updated(env, project_id, manager, active);
        Ok(())
    }

    fn require_admin(env: &Env, caller: &Address) -> Result<(), PerformanceError> {
        let admin: Address = env
            .storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(PerformanceError::NotInitialized)?;

        if *caller != admin {
            return Err(PerformanceError::Unauthorized);
        }
        Ok(())
    }

    fn require_manager(env: &Env, caller: &Address, project_id: u64) -> Result<(), PerformanceError> {
        if !Self::is_project_manager(env.clone(), caller.clone(), project_id) {
            return Err(PerformanceError::NotProjectManager);
        }
        Ok(())
    }

    fn require_project(env: &Env, project_id: u64) -> Result<(), PerformanceError> {
        if !env.storage().persistent().has(&DataKey::Project(project_id)) {
            return Err(PerformanceError::ProjectNotFound);
        }
        Ok(())
    }
}
