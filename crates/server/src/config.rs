/// Port used when neither `BIND_ADDR` nor `PORT` is set.
const DEFAULT_PORT: u16 = 5000;
/// Actix worker threads when `WORKERS` is unset.
const DEFAULT_WORKERS: usize = 4;

/// Runtime settings read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind: String,
    pub workers: usize,
}

impl Config {
    /// Reads `BIND_ADDR`, `PORT`, and `WORKERS`.
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }
    /// `BIND_ADDR` wins outright; otherwise bind all interfaces on `PORT`.
    pub fn from_vars<F>(var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = var("PORT")
            .and_then(|p| p.trim().parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);
        let bind = var("BIND_ADDR")
            .filter(|b| !b.trim().is_empty())
            .unwrap_or_else(|| format!("0.0.0.0:{}", port));
        let workers = var("WORKERS")
            .and_then(|w| w.trim().parse::<usize>().ok())
            .filter(|w| *w > 0)
            .unwrap_or(DEFAULT_WORKERS);
        Self { bind, workers }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_vars(|_| None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    fn config(pairs: &[(&str, &str)]) -> Config {
        let vars = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>();
        Config::from_vars(|key| vars.get(key).cloned())
    }
    #[test]
    fn defaults() {
        assert_eq!(
            Config::default(),
            Config {
                bind: "0.0.0.0:5000".into(),
                workers: 4
            }
        );
    }
    #[test]
    fn port_only() {
        assert_eq!(config(&[("PORT", "8080")]).bind, "0.0.0.0:8080");
    }
    #[test]
    fn bind_addr_wins() {
        let config = config(&[("PORT", "8080"), ("BIND_ADDR", "127.0.0.1:9000")]);
        assert_eq!(config.bind, "127.0.0.1:9000");
    }
    #[test]
    fn garbage_falls_back() {
        let config = config(&[("PORT", "eighty"), ("WORKERS", "0")]);
        assert_eq!(config.bind, "0.0.0.0:5000");
        assert_eq!(config.workers, 4);
    }
}
