use anyhow::Context;
use natal::BirthDefaults;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "NATAL_CONFIG";

const SEARCH_PATHS: [&str; 2] = ["configs/natal.toml", "../../configs/natal.toml"];

#[derive(Debug, Clone, Deserialize)]
struct RootConfigToml {
    #[serde(default)]
    birth_defaults: Option<BirthDefaults>,
}

/// Config text from `$NATAL_CONFIG`, or the first readable of
/// `configs/natal.toml` and `../../configs/natal.toml`.
pub fn read_config_text() -> anyhow::Result<(PathBuf, String)> {
    let explicit = std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from);
    read_config_text_in(explicit.as_deref(), &SEARCH_PATHS)
}

fn read_config_text_in<P: AsRef<Path>>(
    explicit: Option<&Path>,
    search_paths: &[P],
) -> anyhow::Result<(PathBuf, String)> {
    if let Some(path) = explicit {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Could not read {} from {}", CONFIG_ENV_VAR, path.display()))?;
        return Ok((path.to_path_buf(), text));
    }
    for p in search_paths {
        if let Ok(text) = fs::read_to_string(p) {
            return Ok((p.as_ref().to_path_buf(), text));
        }
    }
    let tried: Vec<_> = search_paths.iter().map(|p| p.as_ref().display().to_string()).collect();
    anyhow::bail!("Could not load natal.toml from {:?}", tried);
}

/// Parse `[birth_defaults]` out of config text. A missing table yields the
/// built-in defaults; missing keys inside it fall back individually.
pub fn parse_birth_defaults(text: &str) -> anyhow::Result<BirthDefaults> {
    let root: RootConfigToml = toml::from_str(text)
        .map_err(|e| anyhow::anyhow!("Failed to parse natal.toml for birth_defaults: {e}"))?;
    Ok(root.birth_defaults.unwrap_or_default())
}

/// Load birth defaults from a specific file.
pub fn load_birth_defaults_from(path: &Path) -> anyhow::Result<BirthDefaults> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Could not read config file {}", path.display()))?;
    parse_birth_defaults(&text)
}

/// Load birth defaults from the usual locations, falling back to the
/// built-in defaults when no config file exists. A file that exists but
/// does not parse is still an error, as is a `$NATAL_CONFIG` that cannot be read.
pub fn load_birth_defaults() -> anyhow::Result<BirthDefaults> {
    let explicit = std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from);
    load_birth_defaults_in(explicit.as_deref(), &SEARCH_PATHS)
}

fn load_birth_defaults_in<P: AsRef<Path>>(
    explicit: Option<&Path>,
    search_paths: &[P],
) -> anyhow::Result<BirthDefaults> {
    match read_config_text_in(explicit, search_paths) {
        Ok((path, text)) => {
            let defaults = parse_birth_defaults(&text)?;
            log::info!("Loaded birth defaults from {}", path.display());
            Ok(defaults)
        }
        Err(e) if explicit.is_none() => {
            log::info!("{e}; using built-in birth defaults");
            Ok(BirthDefaults::default())
        }
        Err(e) => Err(e),
    }
}
