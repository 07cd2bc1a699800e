use super::*;

#[test]
fn test_pre_config_order_without_override() {
    let got = pre_config_candidates(
        Path::new("/home/claw/.picoclaw/config.json"),
        None,
        Some(Path::new("/work")),
    );

    assert_eq!(
        got,
        vec![
            PathBuf::from("/home/claw/.picoclaw/.env.picoclaw"),
            PathBuf::from("/home/claw/.picoclaw/.env"),
            PathBuf::from("/work/.env"),
        ]
    );
}

#[test]
fn test_pre_config_override_comes_first_and_is_trimmed() {
    let got = pre_config_candidates(
        Path::new("/home/claw/.picoclaw/config.json"),
        Some("  ~/secrets/.env.custom "),
        Some(Path::new("/work")),
    );

    assert_eq!(got.len(), 4);
    assert_eq!(got[0], PathBuf::from("~/secrets/.env.custom"));
    assert_eq!(got[3], PathBuf::from("/work/.env"));
}

#[test]
fn test_pre_config_blank_override_and_unknown_cwd_are_skipped() {
    let got = pre_config_candidates(Path::new("/cfg/config.json"), Some("   "), None);

    assert_eq!(
        got,
        vec![
            PathBuf::from("/cfg/.env.picoclaw"),
            PathBuf::from("/cfg/.env"),
        ]
    );
}

#[test]
fn test_post_config_candidates() {
    assert!(post_config_candidates(Path::new("")).is_empty());
    assert!(post_config_candidates(Path::new("  ")).is_empty());
    assert_eq!(
        post_config_candidates(Path::new("/ws")),
        vec![PathBuf::from("/ws/.env.picoclaw"), PathBuf::from("/ws/.env")]
    );
}
