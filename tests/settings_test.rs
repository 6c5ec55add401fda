// Settings persistence

use tabscore::models::Tuning;
use tabscore::settings::{
    ScoreTheme, SettingsError, SettingsTree, DEFAULT_TUNING, LAST_ZOOM_LEVEL,
    PREVIOUS_DIRECTORY, RECENT_FILES, SCORE_THEME,
};
use tempfile::tempdir;

#[test]
fn test_missing_file_loads_empty() {
    let dir = tempdir().unwrap();
    let tree = SettingsTree::load(&dir.path().join("settings.json")).unwrap();

    assert!(tree.is_empty());
    assert_eq!(tree.get(&LAST_ZOOM_LEVEL), 100);
    assert_eq!(tree.get(&*PREVIOUS_DIRECTORY), "");
    assert_eq!(tree.get(&*DEFAULT_TUNING), Tuning::default());
}

#[test]
fn test_save_and_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");

    let drop_d = Tuning {
        name: "Drop_D".to_string(),
        music_notation_offset: 0,
        sharps: true,
        notes: vec![64, 59, 55, 50, 45, 38],
    };

    let mut tree = SettingsTree::new();
    tree.set(&LAST_ZOOM_LEVEL, &150);
    tree.set(&SCORE_THEME, &ScoreTheme::Dark);
    tree.set(&*RECENT_FILES, &vec!["/tmp/song.pt2".to_string()]);
    tree.set(&*DEFAULT_TUNING, &drop_d);
    tree.save(&path).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains("\"app/score_theme\": \"dark\""));
    assert!(contents.contains("Drop_D 0 1 6 64 59 55 50 45 38"));

    let loaded = SettingsTree::load(&path).unwrap();
    assert_eq!(loaded, tree);
    assert_eq!(loaded.get(&LAST_ZOOM_LEVEL), 150);
    assert_eq!(loaded.get(&SCORE_THEME), ScoreTheme::Dark);
    assert_eq!(loaded.get(&*RECENT_FILES), vec!["/tmp/song.pt2".to_string()]);
    assert_eq!(loaded.get(&*DEFAULT_TUNING), drop_d);
}

#[test]
fn test_corrupt_file_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{ not json").unwrap();

    assert!(matches!(SettingsTree::load(&path), Err(SettingsError::Json(_))));
}
