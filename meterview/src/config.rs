use std::env;

use meterview_core::MeterConfig;
use meterview_metronome::DEFAULT_BASE_URL;

/// Prefix for generic overrides: `MV__HTTP__PORT=4000` → `http.port`.
pub const ENV_PREFIX: &str = "MV";

/// Build the app configuration from the process environment.
///
/// Precedence: `MV__*` overrides > named variables > defaults.
/// No billing credential is ever read here; operators paste theirs per session.
pub fn config() -> MeterConfig {
    config_from(env::vars())
}

pub fn config_from<I>(vars: I) -> MeterConfig
where
    I: IntoIterator<Item = (String, String)>,
{
    let vars: Vec<(String, String)> = vars.into_iter().collect();
    let lookup = |name: &str| {
        vars.iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.clone())
    };

    let mut cfg = MeterConfig::new();
    cfg.merge_prefixed(ENV_PREFIX, vars.iter().cloned());

    configure_http(&mut cfg, &lookup);
    configure_metronome(&mut cfg, &lookup);

    cfg
}

fn configure_http(cfg: &mut MeterConfig, lookup: &dyn Fn(&str) -> Option<String>) {
    cfg.set_default("http.host", lookup("HTTP_HOST").unwrap_or_else(|| "127.0.0.1".to_string()));
    cfg.set_default("http.port", lookup("HTTP_PORT").unwrap_or_else(|| "3000".to_string()));
}

fn configure_metronome(cfg: &mut MeterConfig, lookup: &dyn Fn(&str) -> Option<String>) {
    // merge_prefixed lowercases keys; keep the camelCase key the client reads
    if let Some(url) = cfg.get("metronome.baseurl").map(str::to_string) {
        cfg.set_default("metronome.baseUrl", url);
    }
    cfg.set_default(
        "metronome.baseUrl",
        lookup("METRONOME_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
    );
}
