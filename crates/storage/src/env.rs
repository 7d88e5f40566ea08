//! `KEY=VALUE` environment files.
//!
//! One pair per `\n`-separated line, split at the first `=`. Blank lines are
//! skipped, a line without `=` maps its key to an empty value, and a later
//! duplicate overwrites an earlier one.

use std::collections::BTreeMap;

/// Parsed environment file.
pub type EnvMap = BTreeMap<String, String>;

/// Parse environment-file text.
pub fn parse_env(text: &str) -> EnvMap {
    let mut env = EnvMap::new();
    for line in text.split('\n') {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.trim().is_empty() {
            continue;
        }
        let (key, value) = line.split_once('=').unwrap_or((line, ""));
        env.insert(key.to_string(), value.to_string());
    }
    env
}
