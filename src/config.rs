use serde::Deserialize;

fn default_listen_addr() -> String {
    "127.0.0.1:8080".to_string()
}

/// Gateway configuration.
///
/// Loaded from a YAML file named by `WICKET_CONFIG`, else from the `LISTEN`
/// environment variable, else built-in defaults.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
        }
    }
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        if let Ok(path) = std::env::var("WICKET_CONFIG") {
            let raw = std::fs::read_to_string(&path)?;
            return Self::from_yaml(&raw);
        }

        if let Ok(addr) = std::env::var("LISTEN") {
            return Ok(Self { listen_addr: addr });
        }

        Ok(Self::default())
    }

    pub fn from_yaml(raw: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(raw)?)
    }
}
