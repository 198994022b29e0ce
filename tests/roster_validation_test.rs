// ==========================================
// RosterValidator 集成测试
// ==========================================
// 覆盖范围: 保留人数、红衫/海外资格、轮次冲突、缺失轮次、输出顺序
// ==========================================

mod helpers;

use helpers::test_data_builder::{
    catalog, int_stash, keep, keep_at_round, redshirt, PlayerBuilder,
};
use keeper_league::domain::player::PlayerCatalog;
use keeper_league::domain::types::Severity;
use keeper_league::engine::{RosterValidator, RoundAssignmentEngine, DEFAULT_MAX_KEEPERS};

#[test]
fn test_round_collision_reported_once_per_round() {
    let validator = RosterValidator::new();
    let entries = vec![keep_at_round("a", 4), keep_at_round("b", 4), keep_at_round("c", 6)];

    let violations = validator.validate_roster(&entries, &PlayerCatalog::new(), DEFAULT_MAX_KEEPERS);

    assert_eq!(violations.len(), 1);
    let violation = &violations[0];
    assert_eq!(violation.severity, Severity::Error);
    assert_eq!(violation.field, "keeper_round");
    assert!(violation.message.contains('4'));
    assert!(violation.message.contains('2'));
}

#[test]
fn test_keeper_count_overflow() {
    let validator = RosterValidator::new();
    let entries: Vec<_> = (1..=9).map(|r| keep_at_round(&format!("p{}", r), r)).collect();

    let violations = validator.validate_roster(&entries, &PlayerCatalog::new(), DEFAULT_MAX_KEEPERS);

    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].field, "keepers");
    assert!(violations[0].message.contains('9'));
    assert!(violations[0].message.contains('8'));

    // 自定义上限
    assert!(validator
        .validate_roster(&entries, &PlayerCatalog::new(), 9)
        .is_empty());
}

#[test]
fn test_preflight_before_assignment_warns_every_keeper() {
    let validator = RosterValidator::new();
    let entries = vec![keep("a", 3), keep("b", 5)];

    let violations = validator.validate_roster(&entries, &PlayerCatalog::new(), DEFAULT_MAX_KEEPERS);

    assert_eq!(violations.len(), 2);
    assert!(violations.iter().all(|v| v.severity == Severity::Warning));

    // 分配后不再有警告
    let assigned = RoundAssignmentEngine::new().assign_rounds(&entries);
    assert!(validator
        .validate_roster(&assigned.entries, &PlayerCatalog::new(), DEFAULT_MAX_KEEPERS)
        .is_empty());
}

#[test]
fn test_findings_follow_canonical_order() {
    let validator = RosterValidator::new();
    let players = catalog(vec![
        PlayerBuilder::new("vet").salary(5_000_000).build(),
        PlayerBuilder::new("dom").build(),
        PlayerBuilder::new("rk").rookie().rookie_draft(2, true).build(),
        PlayerBuilder::new("eu").int_eligible().build(),
    ]);

    let mut entries: Vec<_> = (1..=8).map(|r| keep_at_round(&format!("k{}", r), r)).collect();
    entries.push(keep_at_round("dup", 8));
    entries.push(keep("unassigned", 10));
    entries.push(redshirt("vet"));
    entries.push(redshirt("rk"));
    entries.push(int_stash("dom"));
    entries.push(int_stash("eu"));

    let violations = validator.validate_roster(&entries, &players, DEFAULT_MAX_KEEPERS);

    let fields: Vec<&str> = violations.iter().map(|v| v.field.as_str()).collect();
    assert_eq!(
        fields,
        vec!["keepers", "redshirt", "int_stash", "keeper_round", "keeper_round"]
    );
    assert_eq!(violations[1].player_id.as_deref(), Some("vet"));
    assert_eq!(violations[2].player_id.as_deref(), Some("dom"));
    assert_eq!(violations[3].severity, Severity::Error);
    assert_eq!(violations[4].severity, Severity::Warning);
    assert_eq!(violations[4].player_id.as_deref(), Some("unassigned"));
}

#[test]
fn test_rookie_without_draft_info_may_redshirt() {
    let validator = RosterValidator::new();
    let players = catalog(vec![PlayerBuilder::new("rk").rookie().build()]);

    let violations = validator.validate_roster(&[redshirt("rk")], &players, DEFAULT_MAX_KEEPERS);

    assert!(violations.is_empty());
}

#[test]
fn test_eligible_draft_info_but_not_rookie_is_rejected() {
    let validator = RosterValidator::new();
    let players = catalog(vec![PlayerBuilder::new("x").rookie_draft(1, true).build()]);

    let violations = validator.validate_roster(&[redshirt("x")], &players, DEFAULT_MAX_KEEPERS);

    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].field, "redshirt");
}

#[test]
fn test_validation_does_not_mutate_input() {
    let validator = RosterValidator::new();
    let entries = vec![keep_at_round("a", 2), keep_at_round("b", 2)];
    let snapshot = entries.clone();

    let _ = validator.validate_roster(&entries, &PlayerCatalog::new(), DEFAULT_MAX_KEEPERS);

    assert_eq!(entries, snapshot);
}
