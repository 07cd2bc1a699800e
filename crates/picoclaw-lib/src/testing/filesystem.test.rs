use super::*;

#[test]
fn test_write_file_creates_parents() {
    let fixture = TempDirFixture::new().unwrap();
    fixture.write_file(".picoclaw/workspace/.env", "A=1\n").unwrap();

    assert!(fixture.file_exists(".picoclaw/workspace/.env"));
    assert_eq!(
        fs::read_to_string(fixture.path().join(".picoclaw/workspace/.env")).unwrap(),
        "A=1\n"
    );
}

#[test]
fn test_create_dir_and_cleanup() {
    let root = {
        let fixture = TempDirFixture::new().unwrap();
        fixture.create_dir("skills/git-summary").unwrap();
        assert!(fixture.path().join("skills/git-summary").is_dir());
        fixture.path().to_path_buf()
    };
    assert!(!root.exists());
}
