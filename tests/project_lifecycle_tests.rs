use soroban_sdk::{
    testutils::{Address as _, Ledger},
    Address, Env, String,
};

use performance_measurement::{
    PerformanceError, PerformanceMeasurementContract, PerformanceMeasurementContractClient,
};

fn setup_registry() -> (Env, Address, PerformanceMeasurementContractClient<'static>) {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_sequence_number(10);

    let contract_id = env.register(PerformanceMeasurementContract, ());
    let client = PerformanceMeasurementContractClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    client.initialize(&admin);

    (env, admin, client)
}

#[test]
fn test_full_project_lifecycle() {
    let (env, admin, client) = setup_registry();
    let department = Address::generate(&env);
    let manager = Address::generate(&env);
    let progress = String::from_str(&env, "completion-percentage");

    let project_id = client.register_project(
        &admin,
        &String::from_str(&env, "Road Construction"),
        &department,
        &1_000_000,
        &5_000,
    );
    client.add_project_manager(&admin, &project_id, &manager);

    client.add_milestone(
        &manager,
        &project_id,
        &1,
        &String::from_str(&env, "Foundation complete"),
        &1_000,
    );
    client.add_milestone(
        &manager,
        &project_id,
        &2,
        &String::from_str(&env, "Surface laid"),
        &4_000,
    );

    env.ledger().set_sequence_number(900);
    client.record_performance_metric(&manager, &project_id, &progress, &40);
    client.complete_milestone(&manager, &project_id, &1);

    env.ledger().set_sequence_number(3_800);
    client.record_performance_metric(&manager, &project_id, &progress, &100);
    client.complete_milestone(&manager, &project_id, &2);

    let first = client.get_project_milestone(&project_id, &1).unwrap();
    let second = client.get_project_milestone(&project_id, &2).unwrap();
    assert_eq!(first.completion_block, 900);
    assert_eq!(second.completion_block, 3_800);

    let metric = client.get_performance_metric(&project_id, &progress).unwrap();
    assert_eq!(metric.value, 100);
    assert_eq!(metric.recorded_by, manager);
    assert_eq!(metric.timestamp, 3_800);

    let project = client.get_project(&project_id).unwrap();
    assert_eq!(project.start_block, 10);
    assert_eq!(project.end_block, 5_010);
}

#[test]
fn test_manager_handover_between_projects() {
    let (env, admin, client) = setup_registry();
    let department = Address::generate(&env);
    let alice = Address::generate(&env);
    let bob = Address::generate(&env);
    let progress = String::from_str(&env, "completion-percentage");

    let bridge = client.register_project(
        &admin,
        &String::from_str(&env, "Bridge Repair"),
        &department,
        &250_000,
        &2_000,
    );
    let school = client.register_project(
        &admin,
        &String::from_str(&env, "School Roof"),
        &department,
        &80_000,
        &600,
    );

    client.add_project_manager(&admin, &bridge, &alice);
    client.add_project_manager(&admin, &school, &bob);

    assert_eq!(
        client.try_record_performance_metric(&alice, &school, &progress, &10),
        Err(Ok(PerformanceError::NotProjectManager))
    );

    client.remove_project_manager(&admin, &bridge, &alice);
    client.add_project_manager(&admin, &bridge, &bob);

    assert_eq!(
        client.try_record_performance_metric(&alice, &bridge, &progress, &10),
        Err(Ok(PerformanceError::NotProjectManager))
    );
    client.record_performance_metric(&bob, &bridge, &progress, &10);
    client.record_performance_metric(&bob, &school, &progress, &55);

    assert_eq!(
        client
            .get_performance_metric(&bridge, &progress)
            .unwrap()
            .value,
        10
    );
    assert_eq!(
        client
            .get_performance_metric(&school, &progress)
            .unwrap()
            .value,
        55
    );
}
