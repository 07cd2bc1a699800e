//! Human-readable status report
//!
//! Consumes the cascade's outputs (structured config, loaded env files)
//! and renders what an operator needs to see: provider credentials, skill
//! prerequisites, and repositories a restricted workspace would block.

pub mod probe;

pub use probe::{BinaryProbe, PathProbe};

use crate::config::Config;
use crate::envfile::EnvironmentProvider;
use crate::workspace::{find_repos_outside_workspace, has_remote_repo_refs};
use std::collections::HashSet;
use std::fmt::Write;
use std::path::{Path, PathBuf};

pub const LOGO: &str = "🦞";

/// Skills whose prerequisites are checked, in report order
pub const TRACKED_SKILLS: [&str; 3] = ["email-digest", "todoist-manager", "git-summary"];

/// Binaries every installation is expected to have
pub const BASE_REQUIRED_BINS: [&str; 4] = ["git", "curl", "jq", "python3"];

const GIT_REPOS_VAR: &str = "GIT_REPOS";

fn skill_env_requirements(skill: &str) -> &'static [&'static str] {
    match skill {
        "email-digest" => &["EMAIL_IMAP_HOST", "EMAIL_ADDRESS", "EMAIL_PASSWORD"],
        "todoist-manager" => &["TODOIST_API_TOKEN"],
        "git-summary" => &[GIT_REPOS_VAR],
        _ => &[],
    }
}

/// Version string, with the commit when the build embeds one
pub fn format_version() -> String {
    let version = env!("CARGO_PKG_VERSION");
    match option_env!("PICOCLAW_GIT_COMMIT") {
        Some(commit) if !commit.is_empty() => format!("{version} (git: {commit})"),
        _ => version.to_string(),
    }
}

fn marker(ok: bool) -> &'static str {
    if ok { "✓" } else { "missing" }
}

/// Tracked skills that have a `SKILL.md` under `<workspace>/skills`
pub fn detect_installed_skills(workspace: &Path) -> HashSet<&'static str> {
    TRACKED_SKILLS
        .into_iter()
        .filter(|name| workspace.join("skills").join(name).join("SKILL.md").is_file())
        .collect()
}

fn required_vars(installed: &HashSet<&'static str>) -> Vec<&'static str> {
    let mut seen = HashSet::new();
    TRACKED_SKILLS
        .into_iter()
        .filter(|skill| installed.contains(skill))
        .flat_map(skill_env_requirements)
        .copied()
        .filter(|key| seen.insert(*key))
        .collect()
}

fn required_bins(installed: &HashSet<&'static str>, git_repos: &str) -> Vec<&'static str> {
    let mut bins = BASE_REQUIRED_BINS.to_vec();
    if installed.contains("git-summary") && has_remote_repo_refs(git_repos) {
        bins.push("gh");
    }
    bins
}

/// The "Skills Env Health" section of the status report
pub fn build_skills_env_health_report(
    config: &Config,
    loaded_env_files: &[PathBuf],
    probe: &dyn BinaryProbe,
    env: &dyn EnvironmentProvider,
) -> String {
    let mut out = String::from("\nSkills Env Health:\n");

    if loaded_env_files.is_empty() {
        out.push_str("Env files loaded: none\n");
    } else {
        out.push_str("Env files loaded:\n");
        for path in loaded_env_files {
            let _ = writeln!(out, "  - {}", path.display());
        }
    }

    let workspace = config.workspace_path(env.home_dir().as_deref());
    let installed = detect_installed_skills(&workspace);
    if installed.is_empty() {
        out.push_str("Tracked skills found: none in workspace/skills\n");
    } else {
        out.push_str("Tracked skills found:\n");
        for name in TRACKED_SKILLS.into_iter().filter(|name| installed.contains(name)) {
            let _ = writeln!(out, "  - {name}");
        }
    }

    let vars = required_vars(&installed);
    if !vars.is_empty() {
        out.push_str("Required env vars:\n");
        for key in vars {
            let present = env.var(key).is_some_and(|v| !v.trim().is_empty());
            let _ = writeln!(out, "  - {key}: {}", marker(present));
        }
    }

    let git_repos = env.var(GIT_REPOS_VAR).unwrap_or_default();
    out.push_str("Required binaries:\n");
    for bin in required_bins(&installed, &git_repos) {
        let _ = writeln!(out, "  - {bin}: {}", marker(probe.lookup(bin).is_some()));
    }

    if config.agents.defaults.restrict_to_workspace {
        let outside = find_repos_outside_workspace(env, &workspace.to_string_lossy(), &git_repos);
        if !outside.is_empty() {
            let _ = writeln!(
                out,
                "Warning: restrict_to_workspace=true may block {} GIT_REPOS path(s) outside workspace:",
                outside.len()
            );
            for repo in outside {
                let _ = writeln!(out, "  - {}", repo.display());
            }
        }
    }

    out.trim_end_matches('\n').to_string()
}

/// Full `picoclaw status` output for a successfully loaded configuration
pub fn render_status(
    config: &Config,
    config_path: &Path,
    loaded_env_files: &[PathBuf],
    probe: &dyn BinaryProbe,
    env: &dyn EnvironmentProvider,
) -> String {
    let check = |ok: bool| if ok { "✓" } else { "✗" };
    let mut out = String::new();

    let _ = writeln!(out, "{LOGO} picoclaw Status");
    let _ = writeln!(out, "Version: {}\n", format_version());

    let config_exists = config_path.exists();
    let _ = writeln!(out, "Config: {} {}", config_path.display(), check(config_exists));
    let workspace = config.workspace_path(env.home_dir().as_deref());
    let _ = writeln!(out, "Workspace: {} {}", workspace.display(), check(workspace.exists()));

    if config_exists {
        let _ = writeln!(out, "Model: {}", config.model_name());
        let p = &config.providers;
        let keyed = [
            ("OpenRouter API", &p.openrouter),
            ("Anthropic API", &p.anthropic),
            ("OpenAI API", &p.openai),
            ("Gemini API", &p.gemini),
            ("Zhipu API", &p.zhipu),
            ("Qwen API", &p.qwen),
            ("Groq API", &p.groq),
            ("Moonshot API", &p.moonshot),
            ("DeepSeek API", &p.deepseek),
            ("VolcEngine API", &p.volcengine),
            ("Nvidia API", &p.nvidia),
        ];
        for (label, provider) in keyed {
            let status = if provider.api_key.is_empty() { "not set" } else { "✓" };
            let _ = writeln!(out, "{label}: {status}");
        }
        for (label, provider) in [("vLLM/Local", &p.vllm), ("Ollama", &p.ollama)] {
            if provider.api_base.is_empty() {
                let _ = writeln!(out, "{label}: not set");
            } else {
                let _ = writeln!(out, "{label}: ✓ {}", provider.api_base);
            }
        }
    }

    out.push_str(&build_skills_env_health_report(config, loaded_env_files, probe, env));
    out
}

#[cfg(test)]
mod tests {
    include!("mod.test.rs");
}
