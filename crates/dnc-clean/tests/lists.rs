use dnc_clean::error::CleanError;
use dnc_clean::load_exclusion_set;
use std::fs;
use tempfile::TempDir;

#[test]
fn load_merges_all_list_files() {
    let temp = TempDir::new().expect("temp dir");
    fs::write(temp.path().join("federal.txt"), "5551234567\n5559876543\n").expect("write federal");
    fs::write(temp.path().join("state.txt"), "5559876543\r\n15550001111\r\n").expect("write state");

    let set = load_exclusion_set(temp.path()).expect("load");
    assert_eq!(set.len(), 3);
    assert!(set.contains("5551234567"));
    assert!(set.contains("5559876543"));
    assert!(set.contains("15550001111"));
}

#[test]
fn load_trims_entries_and_skips_blank_lines() {
    let temp = TempDir::new().expect("temp dir");
    fs::write(temp.path().join("list.txt"), "  5551234567  \n\n   \n\t5559876543\n")
        .expect("write list");

    let set = load_exclusion_set(temp.path()).expect("load");
    assert_eq!(set.len(), 2);
    assert!(set.matches_token("5551234567"));
    assert!(set.matches_token("5559876543"));
}

#[test]
fn load_keeps_entries_verbatim() {
    let temp = TempDir::new().expect("temp dir");
    fs::write(temp.path().join("list.txt"), "+15551234567\n555-987-6543\n").expect("write list");

    let set = load_exclusion_set(temp.path()).expect("load");
    assert!(set.contains("+15551234567"));
    assert!(set.contains("555-987-6543"));
    assert!(!set.matches_token("+15551234567"));
}

#[test]
fn load_ignores_subdirectories() {
    let temp = TempDir::new().expect("temp dir");
    fs::write(temp.path().join("list.txt"), "5551234567\n").expect("write list");
    let nested = temp.path().join("archive");
    fs::create_dir(&nested).expect("mkdir");
    fs::write(nested.join("old.txt"), "5559876543\n").expect("write nested");

    let set = load_exclusion_set(temp.path()).expect("load");
    assert_eq!(set.len(), 1);
}

#[test]
fn load_empty_directory_yields_empty_set() {
    let temp = TempDir::new().expect("temp dir");
    let set = load_exclusion_set(temp.path()).expect("load");
    assert!(set.is_empty());
}

#[test]
fn load_missing_directory_fails() {
    let temp = TempDir::new().expect("temp dir");
    let missing = temp.path().join("DNC-Lists");
    let err = load_exclusion_set(&missing).expect_err("missing dir should fail");
    assert!(matches!(err, CleanError::ListDirectory { .. }));
}

#[test]
fn load_drops_byte_order_mark_from_first_entry() {
    let temp = TempDir::new().expect("temp dir");
    fs::write(temp.path().join("list.txt"), "\u{feff}5551234567\n5559876543\n")
        .expect("write list");

    let set = load_exclusion_set(temp.path()).expect("load");
    assert_eq!(set.len(), 2);
    assert!(set.matches_token("5551234567"));
    assert!(!set.contains("\u{feff}5551234567"));
}

#[test]
fn load_splits_on_bare_carriage_returns() {
    let temp = TempDir::new().expect("temp dir");
    fs::write(temp.path().join("mac.txt"), "5551234567\r5559876543\r").expect("write list");

    let set = load_exclusion_set(temp.path()).expect("load");
    assert_eq!(set.len(), 2);
    assert!(set.matches_token("5551234567"));
    assert!(set.matches_token("5559876543"));
}
