use super::*;

#[test]
fn test_expand_home_only_handles_bare_and_slash_forms() {
    let home = Path::new("/home/claw");

    assert_eq!(expand_home("~", Some(home)), PathBuf::from("/home/claw"));
    assert_eq!(
        expand_home("~/notes/.env", Some(home)),
        PathBuf::from("/home/claw/notes/.env")
    );
    assert_eq!(expand_home("~other/x", Some(home)), PathBuf::from("~other/x"));
    assert_eq!(expand_home("~/x", None), PathBuf::from("~/x"));
}

#[test]
fn test_extra_slashes_after_tilde_stay_under_home() {
    let home = Some(Path::new("/home/claw"));
    let cwd = Some(Path::new("/cwd"));

    assert_eq!(expand_home("~//x", home), PathBuf::from("/home/claw/x"));
    assert_eq!(normalize_path("~//x", home, cwd), normalize_path("~/x", home, cwd));
    assert_eq!(normalize_path("~//", home, cwd), Some(PathBuf::from("/home/claw")));
}

#[test]
fn test_clean_path_folds_dots_and_separators() {
    assert_eq!(clean_path(Path::new("/a//b/./c/../d")), PathBuf::from("/a/b/d"));
    assert_eq!(clean_path(Path::new("/../x")), PathBuf::from("/x"));
    assert_eq!(clean_path(Path::new("../x/./y")), PathBuf::from("../x/y"));
    assert_eq!(clean_path(Path::new("a/..")), PathBuf::from("."));
}

#[test]
fn test_normalize_blank_is_none() {
    assert_eq!(normalize_path("", None, None), None);
    assert_eq!(normalize_path("   \t", Some(Path::new("/h")), None), None);
}

#[test]
fn test_normalize_relative_joins_cwd() {
    let got = normalize_path(" ./sub/../.env ", None, Some(Path::new("/work/dir")));
    assert_eq!(got, Some(PathBuf::from("/work/dir/.env")));
}

#[test]
fn test_normalize_expands_home_before_cleaning() {
    let got = normalize_path("~/.picoclaw/./.env", Some(Path::new("/home/claw")), None);
    assert_eq!(got, Some(PathBuf::from("/home/claw/.picoclaw/.env")));
}

#[test]
fn test_normalize_without_home_keeps_tilde() {
    let got = normalize_path("~/a/../b", None, Some(Path::new("/cwd")));
    assert_eq!(got, Some(PathBuf::from("~/b")));
}

#[test]
fn test_normalize_without_cwd_only_cleans() {
    assert_eq!(
        normalize_path("rel/./x", None, None),
        Some(PathBuf::from("rel/x"))
    );
}

#[test]
fn test_different_spellings_share_a_normal_form() {
    let home = Some(Path::new("/home/claw"));
    let cwd = Some(Path::new("/home/claw/.picoclaw"));

    let a = normalize_path("~/.picoclaw/.env", home, cwd);
    let b = normalize_path("/home/claw//.picoclaw/workspace/../.env", home, cwd);
    let c = normalize_path(".env", home, cwd);

    assert_eq!(a, b);
    assert_eq!(b, c);
}
