use std::path::PathBuf;

use stockroom_cli::{Config, run_demo};

fn config_in(dir: &tempfile::TempDir) -> Config {
    Config {
        inventory_path: dir.path().join("inventory.json"),
        ..Config::default()
    }
}

#[test]
fn demo_prints_expected_console_output() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(&dir);
    let mut out = Vec::new();

    let store = run_demo(&config, &mut out).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Apple stock: 7\nLow items: [\"banana\"]\n\nItems Report\napple -> 7\nbanana -> 2\n"
    );
    assert_eq!(store.quantity("orange"), 0);
}

#[test]
fn demo_leaves_saved_stock_file_behind() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(&dir);

    run_demo(&config, &mut Vec::new()).unwrap();

    let text = std::fs::read_to_string(&config.inventory_path).unwrap();
    assert_eq!(text, "{\n    \"apple\": 7,\n    \"banana\": 2\n}");
}

#[test]
fn demo_threshold_comes_from_config() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        low_stock_threshold: 10,
        ..config_in(&dir)
    };
    let mut out = Vec::new();

    run_demo(&config, &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Low items: [\"apple\", \"banana\"]"));
}

#[test]
fn demo_fails_when_stock_file_cannot_be_written() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        inventory_path: PathBuf::from(dir.path()).join("missing").join("inventory.json"),
        ..Config::default()
    };

    let err = run_demo(&config, &mut Vec::new()).unwrap_err();
    assert!(err.to_string().contains("failed to save inventory"));
}
