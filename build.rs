use std::env;
use std::fs;
use std::path::Path;

fn main() {
    // Load .env into compile-time env vars (read by config.rs via option_env!)
    let env_file = Path::new(".env");

    if env_file.exists() {
        println!("cargo:rerun-if-changed=.env");

        if let Ok(contents) = fs::read_to_string(env_file) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }

                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches('"');

                    // Real environment wins over .env
                    if env::var(key).is_err() {
                        println!("cargo:rustc-env={}={}", key, value);
                    }
                }
            }
        }
    } else {
        println!("cargo:warning=No .env file found. Using default values (see .env.example).");
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env.example");
    for key in [
        "API_BASE_URL",
        "ENABLE_LOGGING",
        "LOG_LEVEL",
        "NUMBER_LOCALE",
        "CACHE_TTL_SECONDS",
        "ANIMATION_BASE_URL",
        "MAP_CENTER_LAT",
        "MAP_CENTER_LNG",
        "MAP_ZOOM",
        "TILE_URL_TEMPLATE",
        "MARKER_ICON_URL",
    ] {
        println!("cargo:rerun-if-env-changed={}", key);
    }
}
