use std::fs;
use std::path::Path;

use nbe_app::{EditorSession, Settings, WindowConfig, detect_install_mode, load_settings};
use proptest::prelude::*;

fn touch_media(dir: &Path) {
    fs::create_dir_all(dir.join("media")).unwrap();
    fs::write(dir.join("media").join("sky.jpg"), b"").unwrap();
}

#[test]
fn media_in_start_directory() {
    let root = tempfile::tempdir().unwrap();
    touch_media(root.path());

    let layout = detect_install_mode(root.path());
    assert_eq!(layout.working_dir.as_deref(), Some(root.path()));
    assert!(!layout.installed);
}

#[test]
fn media_in_parent_of_build_directory() {
    let root = tempfile::tempdir().unwrap();
    touch_media(root.path());
    let build = root.path().join("bin");
    fs::create_dir_all(&build).unwrap();

    let layout = detect_install_mode(&build);
    assert_eq!(layout.working_dir.as_deref(), Some(root.path()));
    assert!(!layout.installed);
}

#[test]
fn shared_data_means_installed() {
    let prefix = tempfile::tempdir().unwrap();
    let bin = prefix.path().join("bin");
    let shared = prefix.path().join("share").join("nodeboxeditor");
    fs::create_dir_all(&bin).unwrap();
    touch_media(&shared);

    let layout = detect_install_mode(&bin);
    assert_eq!(layout.working_dir, Some(shared));
    assert!(layout.installed);
}

#[test]
fn no_media_anywhere() {
    let root = tempfile::tempdir().unwrap();
    let start = root.path().join("a");
    fs::create_dir_all(&start).unwrap();

    let layout = detect_install_mode(&start);
    assert!(layout.working_dir.is_none());
    assert!(!layout.installed);
}

#[test]
fn settings_file_overrides_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("editor.conf");
    fs::write(&path, "width = 1280\nvsync = false\ndriver = Software\n").unwrap();

    let settings = load_settings(true, &path).unwrap();
    assert!(settings.get_bool("installed"));
    assert_eq!(settings.get("snapping"), "true");

    let window = WindowConfig::from_settings(&settings);
    assert_eq!(window.width, 1280);
    assert_eq!(window.height, 520);
    assert!(!window.vsync);
    assert_eq!(window.driver, nbe_app::Driver::Software);
}

#[test]
fn missing_settings_file_keeps_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let settings = load_settings(false, &dir.path().join("absent.conf")).unwrap();

    let mut expected = Settings::default();
    expected.set("installed", false);
    assert_eq!(settings, expected);
}

#[test]
fn unreadable_settings_path_is_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(load_settings(false, dir.path()).is_err());
}

#[test]
fn settings_save_and_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("editor.conf");

    let mut settings = Settings::default();
    settings.set("save_directory", "/srv/nodes");
    settings.set("width", 1024);
    settings.save(&path).unwrap();

    let mut reloaded = Settings::empty();
    assert!(reloaded.load(&path).unwrap());
    assert_eq!(reloaded, settings);
}

#[test]
fn session_context_follows_settings() {
    let mut session = EditorSession::default();
    assert_eq!(session.format_context().mod_name, "default");

    session.settings.set("export_mod_name", " doors ");
    assert_eq!(session.format_context().mod_name, "doors");

    session.settings.set("export_mod_name", "");
    assert_eq!(session.format_context().mod_name, "default");
}

proptest! {
    #[test]
    fn settings_roundtrip_text(
        entries in proptest::collection::btree_map("[a-z_]{1,10}", "[a-zA-Z0-9/ ._-]{0,16}", 0..8)
    ) {
        let mut settings = Settings::empty();
        for (key, value) in &entries {
            settings.set(key.as_str(), value.trim());
        }

        let mut reloaded = Settings::empty();
        reloaded.apply(&settings.to_text());
        prop_assert_eq!(reloaded, settings);
    }
}
