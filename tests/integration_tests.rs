//! Integration tests for filelist

use filelist::{Config, FileList, Item, LineEnding};
use tempfile::TempDir;

// =============================================================================
// End-to-end Scenario
// =============================================================================

#[test]
fn test_add_remove_save_load_scenario() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("test.txt");

    let mut list = FileList::new();
    list.add("test", "");
    list.add_once("test", "");
    list.add("test2", "comment");
    list.add("test3", "");
    list.remove("test3");
    list.save(&path).unwrap();

    let loaded = FileList::load(&path).unwrap();
    assert_eq!(loaded.count(), 2);
    assert_eq!(
        loaded.items(),
        &[Item::new("test", ""), Item::new("test2", "comment")]
    );
    assert!(!loaded.changed());
}

#[test]
fn test_edit_loaded_file_and_save_again() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("hosts.txt");
    std::fs::write(
        &path,
        "// blocked hosts\r\nads.example\t//ads\r\ntrack.example\t//tracking\r\n",
    )
    .unwrap();

    let config = Config::builder().line_ending(LineEnding::Cr).build();
    let mut list = FileList::load_with_config(&path, config).unwrap();
    list.add_once("ads.example", "ads");
    assert!(!list.changed());

    list.add_once("more-ads.example", "ads");
    list.remove("track.example");
    assert!(list.changed());
    list.save(&path).unwrap();

    assert_eq!(
        std::fs::read(&path).unwrap(),
        b"ads.example\t//ads\rmore-ads.example\t//ads\r"
    );

    let reloaded = FileList::load(&path).unwrap();
    assert_eq!(reloaded.get_all_with_comment("ads").len(), 2);
    assert!(!reloaded.exists("track.example"));
}
