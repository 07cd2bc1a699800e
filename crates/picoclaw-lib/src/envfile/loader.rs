//! Load one dotenv file into the environment port

use super::{EnvironmentProvider, parser::parse_line};
use crate::paths::expand_home;
use crate::primitives::EnvFileError;
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::PathBuf;

/// Apply the variables of the dotenv file at `path`
///
/// Returns `Ok(false)` for a blank path or a file that does not exist, and
/// `Ok(true)` once the file has been read to the end, however many
/// variables it actually applied. Unless `overwrite` is set, a key already
/// present in `env` is left alone.
pub fn load_env_file(
    env: &dyn EnvironmentProvider,
    path: &str,
    overwrite: bool,
) -> Result<bool, EnvFileError> {
    let path = path.trim();
    if path.is_empty() {
        return Ok(false);
    }
    let path: PathBuf = expand_home(path, env.home_dir().as_deref());

    let file = match File::open(&path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::trace!(path = %path.display(), "env file not present");
            return Ok(false);
        }
        Err(source) => return Err(EnvFileError::Read { path, source }),
    };

    let mut applied = 0usize;
    let mut preserved = 0usize;
    for line in BufReader::new(file).split(b'\n') {
        let line = line.map_err(|source| EnvFileError::Read {
            path: path.clone(),
            source,
        })?;
        // Lines that are not UTF-8 are malformed and skipped like any other.
        let Some(var) = std::str::from_utf8(&line).ok().and_then(parse_line) else {
            continue;
        };

        if !overwrite && env.contains(&var.key) {
            tracing::trace!(key = %var.key, "keeping existing environment value");
            preserved += 1;
            continue;
        }
        env.set_var(&var.key, &var.value)?;
        applied += 1;
    }

    tracing::debug!(path = %path.display(), applied, preserved, "loaded env file");
    Ok(true)
}

#[cfg(test)]
mod tests {
    include!("loader.test.rs");
}
