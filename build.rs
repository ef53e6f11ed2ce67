use std::env;
use std::fs;
use std::path::Path;

/// Variables que `config.rs` lee con `option_env!`
const FORWARDED_KEYS: &[&str] = &[
    "SHENATION_ENVIRONMENT",
    "SHENATION_API_URL_DEVELOPMENT",
    "SHENATION_API_URL_PRODUCTION",
    "SHENATION_ENABLE_LOGGING",
    "SHENATION_NOTIFICATION_POLL_SECONDS",
    "SHENATION_NATIVE_ALERT_WINDOW_SECONDS",
    "SHENATION_BOOKING_WINDOW_MINUTES",
];

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env");
    for key in FORWARDED_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }

    let env_file = Path::new(".env");
    let contents = match fs::read_to_string(env_file) {
        Ok(contents) => contents,
        Err(_) => {
            println!("cargo:warning=No .env file found, using compiled-in defaults");
            return;
        }
    };

    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        let value = value.trim().trim_matches('"');

        // Solo claves conocidas; el entorno real tiene prioridad sobre .env
        if FORWARDED_KEYS.contains(&key) && env::var(key).is_err() {
            println!("cargo:rustc-env={}={}", key, value);
        }
    }
}
