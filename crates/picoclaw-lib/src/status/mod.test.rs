use super::*;
use crate::envfile::MemoryEnvironmentProvider;
use crate::testing::TempDirFixture;

struct StubProbe(&'static [&'static str]);

impl BinaryProbe for StubProbe {
    fn lookup(&self, name: &str) -> Option<PathBuf> {
        self.0
            .iter()
            .any(|bin| *bin == name)
            .then(|| PathBuf::from("/usr/bin").join(name))
    }
}

fn workspace_with_skills(skills: &[&str]) -> TempDirFixture {
    let fixture = TempDirFixture::new().unwrap();
    for skill in skills {
        fixture
            .write_file(&format!("skills/{skill}/SKILL.md"), "# test")
            .unwrap();
    }
    fixture
}

fn config_for(workspace: &Path, restrict: bool) -> Config {
    let mut config = Config::default();
    config.agents.defaults.workspace = workspace.to_string_lossy().into_owned();
    config.agents.defaults.restrict_to_workspace = restrict;
    config
}

#[test]
fn test_report_lists_skills_vars_bins_and_outside_repos() {
    let workspace = workspace_with_skills(&["todoist-manager", "git-summary"]);
    let outside = TempDirFixture::new().unwrap();
    let outside_repo = outside.path().join("outside-repo");
    let env = MemoryEnvironmentProvider::new()
        .with_var("TODOIST_API_TOKEN", "token")
        .with_var("GIT_REPOS", &outside_repo.to_string_lossy());

    let report = build_skills_env_health_report(
        &config_for(workspace.path(), true),
        &[PathBuf::from("/home/test/.picoclaw/.env.picoclaw")],
        &StubProbe(&["git", "curl"]),
        &env,
    );

    assert!(report.contains("Skills Env Health:"));
    assert!(report.contains("Env files loaded:\n  - /home/test/.picoclaw/.env.picoclaw"));
    assert!(report.contains("  - todoist-manager\n  - git-summary"));
    assert!(report.contains("TODOIST_API_TOKEN: ✓"));
    assert!(report.contains("GIT_REPOS: ✓"));
    assert!(report.contains("git: ✓"));
    assert!(report.contains("jq: missing"));
    assert!(report.contains("python3: missing"));
    assert!(!report.contains("gh:"));
    assert!(report.contains("Warning: restrict_to_workspace=true may block 1 GIT_REPOS"));
    assert!(report.contains(&outside_repo.display().to_string()));
    assert!(!report.ends_with('\n'));
}

#[test]
fn test_report_without_tracked_skills() {
    let workspace = TempDirFixture::new().unwrap();
    let env = MemoryEnvironmentProvider::new();

    let report = build_skills_env_health_report(
        &config_for(workspace.path(), false),
        &[],
        &StubProbe(&[]),
        &env,
    );

    assert!(report.contains("Env files loaded: none"));
    assert!(report.contains("Tracked skills found: none in workspace/skills"));
    assert!(!report.contains("Required env vars:"));
    assert!(report.contains("git: missing"));
}

#[test]
fn test_blank_required_var_counts_as_missing() {
    let workspace = workspace_with_skills(&["email-digest"]);
    let env = MemoryEnvironmentProvider::new()
        .with_var("EMAIL_IMAP_HOST", "imap.test")
        .with_var("EMAIL_ADDRESS", "   ");

    let report = build_skills_env_health_report(
        &config_for(workspace.path(), true),
        &[],
        &StubProbe(&[]),
        &env,
    );

    assert!(report.contains("EMAIL_IMAP_HOST: ✓"));
    assert!(report.contains("EMAIL_ADDRESS: missing"));
    assert!(report.contains("EMAIL_PASSWORD: missing"));
}

#[test]
fn test_remote_git_refs_require_gh() {
    let workspace = workspace_with_skills(&["git-summary"]);
    let env = MemoryEnvironmentProvider::new().with_var(
        "GIT_REPOS",
        "thisisprabha/time-left,https://github.com/thisisprabha/networth",
    );

    let report = build_skills_env_health_report(
        &config_for(workspace.path(), true),
        &[],
        &StubProbe(&["git", "curl", "jq", "python3"]),
        &env,
    );

    assert!(report.contains("gh: missing"));
    assert!(!report.contains("Warning:"));
}

#[test]
fn test_unrestricted_workspace_skips_outside_warning() {
    let workspace = workspace_with_skills(&["git-summary"]);
    let env = MemoryEnvironmentProvider::new().with_var("GIT_REPOS", "/definitely/elsewhere");

    let report = build_skills_env_health_report(
        &config_for(workspace.path(), false),
        &[],
        &StubProbe(&[]),
        &env,
    );

    assert!(!report.contains("Warning:"));
}

#[test]
fn test_render_status_shows_providers_only_with_config_file() {
    let home = TempDirFixture::new().unwrap();
    let env = MemoryEnvironmentProvider::new().with_home(home.path());
    let config_path = home.path().join(".picoclaw/config.json");
    let mut config = Config::default();
    config.providers.anthropic.api_key = "sk-test".to_string();
    config.providers.ollama.api_base = "http://localhost:11434".to_string();

    let without = render_status(&config, &config_path, &[], &StubProbe(&[]), &env);
    assert!(without.contains(&format!("Config: {} ✗", config_path.display())));
    assert!(without.contains("Workspace: "));
    assert!(!without.contains("Anthropic API"));

    home.write_file(".picoclaw/config.json", "{}").unwrap();
    let with = render_status(&config, &config_path, &[], &StubProbe(&[]), &env);
    assert!(with.contains(&format!("Config: {} ✓", config_path.display())));
    assert!(with.contains("Anthropic API: ✓"));
    assert!(with.contains("OpenAI API: not set"));
    assert!(with.contains("Ollama: ✓ http://localhost:11434"));
    assert!(with.contains("vLLM/Local: not set"));
    assert!(with.contains("Skills Env Health:"));
}

#[test]
fn test_version_starts_with_package_version() {
    assert!(format_version().starts_with(env!("CARGO_PKG_VERSION")));
}
