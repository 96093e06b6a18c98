use soroban_sdk::{contracttype, Address, String};

/// Storage keys for the contract
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Admin,
    /// Number of registered projects; also the next project id
    ProjectCount,
    Project(u64),
    Manager(u64, Address),
    Metric(u64, String),
    Milestone(u64, u32),
}

/// A registered public-works project
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Project {
    pub name: String,
    /// Department responsible for delivery
    pub department: Address,
    pub budget: i128,
    pub start_block: u32,
    pub end_block: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ManagerRole {
    pub active: bool,
}

/// Latest reading of a named metric. Re-recording overwrites it.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PerformanceMetric {
    pub value: i128,
    pub recorded_by: Address,
    pub timestamp: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Milestone {
    pub description: String,
    pub target_block: u32,
    pub completed: bool,
    /// Zero until the milestone is completed
    pub completion_block: u32,
}
