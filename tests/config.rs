use std::fs;

use fairdraw::config::GiveawayConfig;
use fairdraw::{DrawError, draw};

const GIVEAWAY: &str = r#"{
    "prize": "A hug",
    "target_block": 840123,
    "winners": 3,
    "participants": ["alice", "bob", "carol", "dave", "erin", "frank", "grace"],
    "seed": "00000000000000000002A7C4C1E48D76C5A37902165A270156B7A8D72728A054"
}"#;

#[test]
fn config_file_drives_a_draw() {
    let path = std::env::temp_dir().join(format!("fairdraw-config-{}.json", std::process::id()));
    fs::write(&path, GIVEAWAY).unwrap();

    let cfg = GiveawayConfig::from_path(&path).unwrap();
    fs::remove_file(&path).ok();

    assert_eq!(cfg.prize.as_deref(), Some("A hug"));
    assert_eq!(cfg.target_block, Some(840_123));

    let (seed, pool) = cfg.resolve(None).unwrap();
    let outcome = draw(&seed, &pool, cfg.winners).unwrap();

    assert_eq!(outcome.winners, vec!["carol", "grace", "frank"]);
}

#[test]
fn missing_file_is_a_config_error() {
    let err = GiveawayConfig::from_path("/definitely/not/here.json").unwrap_err();

    assert!(matches!(err, DrawError::Config(_)));
}

#[test]
fn duplicate_registrations_fail_validation() {
    let cfg = GiveawayConfig::from_json(r#"{ "participants": ["a", "b", "a"] }"#).unwrap();

    assert!(matches!(cfg.validate(), Err(DrawError::DuplicateParticipant(_))));
}

#[test]
fn empty_participants_fail_validation() {
    let cfg = GiveawayConfig::from_json(r#"{ "participants": [] }"#).unwrap();

    assert_eq!(cfg.validate(), Err(DrawError::EmptyParticipants));
}
