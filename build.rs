use std::env;
use std::fs;
use std::path::Path;

// Keys forwarded from `.env` to `option_env!` in `src/config.rs`.
const CONFIG_KEYS: &[&str] = &[
    "API_BASE_URL",
    "PUBLIC_API_BASE_URL",
    "ENVIRONMENT",
    "ENABLE_LOGGING",
    "NOTIFICATION_POLL_SECONDS",
    "TOAST_DURATION_MS",
    "DEFAULT_PAGE_SIZE",
];

fn main() {
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

                    if !CONFIG_KEYS.contains(&key) {
                        println!("cargo:warning=Ignoring unknown key {} in .env", key);
                        continue;
                    }

                    // A variable already set in the environment wins over .env
                    if env::var(key).is_err() {
                        println!("cargo:rustc-env={}={}", key, value);
                    }
                }
            }
        }
    } else {
        println!("cargo:warning=No .env file found. Using default values. Copy .env.example to .env to point at your backend.");
    }

    for key in CONFIG_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env.example");
}
