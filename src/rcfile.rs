use lazycalc::{shared_buffer, LazyCalculator, SharedBuffer};
use std::env;
use std::path::PathBuf;

#[cfg(feature = "config")]
use lazycalc::CalcConfig;
#[cfg(feature = "config")]
use std::path::Path;

/// Get home directory
pub(crate) fn dirs_home() -> Option<PathBuf> {
    env::var_os("HOME").map(PathBuf::from)
}

/// Default config location: $LAZYCALC_CONFIG, else ~/.lazycalc.toml
#[cfg(feature = "config")]
fn default_config_path() -> Option<PathBuf> {
    env::var_os("LAZYCALC_CONFIG")
        .map(PathBuf::from)
        .or_else(|| dirs_home().map(|h| h.join(".lazycalc.toml")))
}

/// Where the calculator setup comes from
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ConfigSource {
    /// Default location; silently skipped if missing, warned about if broken
    Default,
    /// Given with --config; any failure is fatal
    Explicit(String),
    /// --no-config
    Disabled,
}

/// Build the calculator and its output buffer, applying the config file if any
pub(crate) fn load_calculator(
    source: &ConfigSource,
    trace: bool,
) -> Result<(LazyCalculator, SharedBuffer), String> {
    let buffer = shared_buffer();
    let mut calc = configured_calculator(source, &buffer)?;
    if trace {
        calc.set_trace_mode(true);
    }
    Ok((calc, buffer))
}

#[cfg(feature = "config")]
fn configured_calculator(
    source: &ConfigSource,
    buffer: &SharedBuffer,
) -> Result<LazyCalculator, String> {
    match source {
        ConfigSource::Disabled => Ok(LazyCalculator::new()),
        ConfigSource::Explicit(path) => CalcConfig::load(Path::new(path))
            .and_then(|config| config.build(buffer))
            .map_err(|e| format!("{}: {}", path, e)),
        ConfigSource::Default => {
            let path = match default_config_path() {
                Some(p) if p.exists() => p,
                _ => return Ok(LazyCalculator::new()),
            };
            match CalcConfig::load(&path).and_then(|config| config.build(buffer)) {
                Ok(calc) => Ok(calc),
                Err(e) => {
                    eprintln!("Warning: {}: {}", path.display(), e);
                    Ok(LazyCalculator::new())
                }
            }
        }
    }
}

#[cfg(not(feature = "config"))]
fn configured_calculator(
    source: &ConfigSource,
    _buffer: &SharedBuffer,
) -> Result<LazyCalculator, String> {
    if let ConfigSource::Explicit(path) = source {
        eprintln!("Warning: {}: built without config support, ignoring", path);
    }
    Ok(LazyCalculator::new())
}
