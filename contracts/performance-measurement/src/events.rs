use soroban_sdk::{symbol_short, Address, Env, String};

use crate::types::Project;

/// Events emitted by the performance measurement contract.
pub struct PerformanceEvents;

impl PerformanceEvents {
    pub fn project_registered(env: &Env, project_id: u64, project: &Project) {
        let topics = (symbol_short!("perf"), symbol_short!("project"), project_id);
        env.events().publish(
            topics,
            (
                project.department.clone(),
                project.budget,
                project.start_block,
                project.end_block,
            ),
        );
    }

    pub fn manager_updated(env: &Env, project_id: u64, manager: &Address, active: bool) {
        let topics = (symbol_short!("perf"), symbol_short!("manager"), project_id);
        env.events().publish(topics, (manager.clone(), active));
    }

    pub fn metric_recorded(
        env: &Env,
        project_id: u64,
        metric_name: &String,
        value: i128,
        recorded_by: &Address,
    ) {
        let topics = (symbol_short!("perf"), symbol_short!("metric"), project_id);
        env.events()
            .publish(topics, (metric_name.clone(), value, recorded_by.clone()));
    }

    pub fn milestone_added(env: &Env, project_id: u64, milestone_id: u32, target_block: u32) {
        let topics = (symbol_short!("perf"), symbol_short!("milestone"), project_id);
        env.events().publish(topics, (milestone_id, target_block));
    }

    pub fn milestone_completed(
        env: &Env,
        project_id: u64,
        milestone_id: u32,
        completion_block: u32,
    ) {
        let topics = (symbol_short!("perf"), symbol_short!("completed"), project_id);
        env.events()
            .publish(topics, (milestone_id, completion_block));
    }
}
