mod common;
use common::TestFixture;
use predicates::prelude::*;

#[test]
fn test_init_seeds_one_thousand_records() {
    let fixture = TestFixture::new();

    let result = fixture.json(&["init"]).expect("init failed");

    assert_eq!(result["content"]["record_count"], 1000);
    assert_eq!(result["content"]["freshly_seeded"], true);
    assert_eq!(result["content"]["config_created"], true);
    assert_eq!(result["badge"]["level"], "success");
    assert!(fixture.data_dir().join("rowdesk.db").exists());
    assert!(fixture.data_dir().join("config.toml").exists());
}

#[test]
fn test_second_init_does_not_reseed() {
    let fixture = TestFixture::with_seed(20);

    fixture.json(&["init"]).expect("first init failed");
    fixture.json(&["delete", "1"]).expect("delete failed");
    let result = fixture.json(&["init"]).expect("second init failed");

    assert_eq!(result["content"]["record_count"], 19);
    assert_eq!(result["content"]["freshly_seeded"], false);
    assert_eq!(result["content"]["config_created"], false);
}

#[test]
fn test_init_plain_output() {
    let fixture = TestFixture::with_seed(5);

    fixture
        .command()
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Seeded 5 records"))
        .stdout(predicate::str::contains("rowdesk browse"));
}

#[test]
fn test_unusable_data_dir_fails_with_store_unavailable() {
    let fixture = TestFixture::new();
    let blocker = fixture.data_dir().with_file_name("blocker");
    std::fs::write(&blocker, "not a directory").unwrap();

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("rowdesk");
    cmd.env_remove("ROWDESK_PATH")
        .arg("--data-dir")
        .arg(blocker.join("data"))
        .arg("list")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: Record store unavailable"));
}

#[test]
fn test_no_command_prints_guidance() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .assert()
        .success()
        .stdout(predicate::str::contains("rowdesk init"));
}

#[test]
fn test_ephemeral_init_leaves_no_files() {
    let fixture = TestFixture::new();

    let result = fixture
        .json(&["--ephemeral", "init"])
        .expect("ephemeral init failed");

    assert_eq!(result["content"]["record_count"], 1000);
    assert!(result["content"].get("db_path").is_none());
    assert!(!fixture.data_dir().join("rowdesk.db").exists());
}
