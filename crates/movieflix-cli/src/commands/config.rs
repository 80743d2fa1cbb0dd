use crate::commands::prompts;
use crate::output::Output;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use movieflix_config::{Config, OmdbConfig, PathManager, SearchOptions};

/// Load the profile config, insisting it is usable for remote calls.
pub fn load_validated(paths: &PathManager) -> Result<Config> {
    let path = paths.config_file();
    if !path.exists() {
        return Err(eyre!(
            "No configuration found at {}; run `movieflix config set-key`",
            path.display()
        ));
    }
    let config = Config::load_from_file(&path).map_err(|e| eyre!("{}", e))?;
    config.validate().map_err(|e| eyre!("{}", e))?;
    Ok(config)
}

fn mask(secret: &str) -> String {
    if secret.len() <= 2 {
        return "****".to_string();
    }
    format!("{}****", &secret[..2])
}

pub fn run_show(paths: &PathManager, full: bool, output: &Output) -> Result<()> {
    let path = paths.config_file();
    if !path.exists() {
        output.info(format!("No configuration at {}", path.display()));
        return Ok(());
    }

    let config = Config::load_from_file(&path).map_err(|e| eyre!("{}", e))?;
    let api_key = if full {
        config.omdb.api_key.clone()
    } else {
        mask(&config.omdb.api_key)
    };

    output.info(format!("OMDb api_key:   {}", api_key));
    output.info(format!("OMDb base_url:  {}", config.omdb.base_url));
    output.info(format!("debounce_ms:    {}", config.search.debounce_ms));
    output.info(format!("default_query:  {}", config.search.default_query));
    Ok(())
}

pub fn run_set_key(paths: &PathManager, api_key: Option<String>, output: &Output) -> Result<()> {
    paths
        .ensure_directories()
        .map_err(|e| eyre!("{}", e))?;

    let api_key = match api_key {
        Some(key) => key,
        None => prompts::prompt_string("OMDb API key", None)?,
    };

    let path = paths.config_file();
    let mut config = if path.exists() {
        Config::load_from_file(&path).map_err(|e| eyre!("{}", e))?
    } else {
        Config {
            omdb: OmdbConfig {
                api_key: String::new(),
                base_url: "https://www.omdbapi.com/".to_string(),
            },
            search: SearchOptions::default(),
        }
    };

    config.omdb.api_key = api_key;
    config.validate().map_err(|e| eyre!("{}", e))?;
    config.save_to_file(&path).map_err(|e| eyre!("{}", e))?;

    output.success(format!("Configuration saved to {}", path.display()));
    Ok(())
}
