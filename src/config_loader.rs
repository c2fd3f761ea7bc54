use crate::config::IrmsConfig;
use crate::errors::{IrmsError, IrmsResult};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "irms.toml";
pub const CONFIG_PATH_VAR: &str = "IRMS_CONFIG_PATH";

/// Layered figment: defaults, then the TOML file (if present), then `IRMS_*` env vars
pub fn figment_for(path: &Path) -> Figment {
    Figment::from(Serialized::defaults(IrmsConfig::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("IRMS_").ignore(&["config_path"]).split("__"))
}

/// Load configuration from `IRMS_CONFIG_PATH` or `irms.toml` in the working directory.
/// Only the implicit `irms.toml` may be absent; an explicit path must exist.
pub fn load_config() -> IrmsResult<IrmsConfig> {
    match std::env::var_os(CONFIG_PATH_VAR) {
        Some(raw) => {
            let path = PathBuf::from(raw);
            if !path.is_file() {
                return Err(IrmsError::config(format!(
                    "{CONFIG_PATH_VAR} points to missing file {}",
                    path.display()
                )));
            }
            load_config_from(&path)
        }
        None => load_config_from(Path::new(DEFAULT_CONFIG_FILE)),
    }
}

pub fn load_config_from(path: &Path) -> IrmsResult<IrmsConfig> {
    let config: IrmsConfig = figment_for(path).extract()?;
    config.validate()?;
    Ok(config)
}
