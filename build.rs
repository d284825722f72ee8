// Carga .env en tiempo de compilación para config.rs (option_env!).
// Cada clave se valida; un valor inválido se descarta con un warning y
// config.rs usa su default.

use std::env;
use std::fs;
use std::path::Path;

const KNOWN_KEYS: [&str; 9] = [
    "LIST_API_URL",
    "MENU_API_URL",
    "CDN_URL",
    "DEFAULT_LAT",
    "DEFAULT_LNG",
    "ENVIRONMENT",
    "ENABLE_LOGGING",
    "RETRY_ATTEMPTS",
    "DEFAULT_USER_NAME",
];

fn parse_line(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let (key, value) = line.split_once('=')?;
    Some((key.trim(), value.trim().trim_matches('"')))
}

fn in_range(value: &str, limit: f64) -> Result<(), String> {
    match value.parse::<f64>() {
        Ok(v) if v.is_finite() && v.abs() <= limit => Ok(()),
        Ok(v) => Err(format!("{} fuera de rango (±{})", v, limit)),
        Err(_) => Err(format!("'{}' no es un número", value)),
    }
}

fn validate(key: &str, value: &str) -> Result<(), String> {
    match key {
        "LIST_API_URL" | "CDN_URL" => {
            if value.starts_with("http://") || value.starts_with("https://") {
                Ok(())
            } else {
                Err(format!("'{}' no es una URL http(s)", value))
            }
        }
        "MENU_API_URL" => {
            if !value.starts_with("http") {
                Err(format!("'{}' no es una URL http(s)", value))
            } else if !value.ends_with("restaurantId=") {
                Err("debe terminar en 'restaurantId=' (el id se concatena)".to_string())
            } else {
                Ok(())
            }
        }
        "DEFAULT_LAT" => in_range(value, 90.0),
        "DEFAULT_LNG" => in_range(value, 180.0),
        "ENABLE_LOGGING" => value
            .parse::<bool>()
            .map(|_| ())
            .map_err(|_| format!("'{}' no es true/false", value)),
        "RETRY_ATTEMPTS" => match value.parse::<u32>() {
            Ok(n) if n >= 1 => Ok(()),
            _ => Err(format!("'{}' debe ser un entero >= 1", value)),
        },
        "ENVIRONMENT" | "DEFAULT_USER_NAME" if value.is_empty() => Err("vacío".to_string()),
        _ => Ok(()),
    }
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env");

    let env_file = Path::new(".env");
    let Ok(contents) = fs::read_to_string(env_file) else {
        println!("cargo:warning=No .env file found. Using default catalog endpoints. Copy .env.example to .env to override them.");
        return;
    };

    for (key, value) in contents.lines().filter_map(parse_line) {
        if !KNOWN_KEYS.contains(&key) {
            println!("cargo:warning=.env: clave desconocida '{}', ignorada", key);
            continue;
        }
        // Las variables del entorno tienen prioridad sobre .env
        if env::var(key).is_ok() {
            continue;
        }
        match validate(key, value) {
            Ok(()) => println!("cargo:rustc-env={}={}", key, value),
            Err(reason) => {
                println!("cargo:warning=.env: {} inválido ({}), se usa el default", key, reason)
            }
        }
    }
}
