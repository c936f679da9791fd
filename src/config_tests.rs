#![allow(clippy::unwrap_used)]

use super::*;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_db_flag_is_removed() {
    let config = Config::from_args(&args(&["spendlog", "--db", "/tmp/x.db", "list"])).unwrap();
    assert_eq!(config.db_path, PathBuf::from("/tmp/x.db"));
    assert_eq!(config.args, args(&["spendlog", "list"]));
}

#[test]
fn test_db_flag_equals_form() {
    let config = Config::from_args(&args(&["spendlog", "summary", "--db=/tmp/y.db"])).unwrap();
    assert_eq!(config.db_path, PathBuf::from("/tmp/y.db"));
    assert_eq!(config.args, args(&["spendlog", "summary"]));
}

#[test]
fn test_db_flag_without_value() {
    assert!(Config::from_args(&args(&["spendlog", "--db"])).is_err());
}

#[test]
fn test_other_args_untouched() {
    let (db, rest) = split_db_flag(&args(&["spendlog", "list", "--sort", "high"])).unwrap();
    assert_eq!(db, None);
    assert_eq!(rest, args(&["spendlog", "list", "--sort", "high"]));
}

#[test]
fn test_ensure_parent_dir_creates_it() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        db_path: dir.path().join("nested").join("spendlog.db"),
        args: Vec::new(),
    };
    config.ensure_parent_dir().unwrap();
    assert!(dir.path().join("nested").is_dir());
}
