use std::env;

#[derive(Debug, Clone)]
pub struct Settings {
    pub host: String,
    pub port: u16,

    pub alerts_file: String,
    pub alphavantage_api_key: String,
    pub cors_origin: String,
}


pub fn load() -> Settings {
    // Loads .env if present (no crash if missing)
    dotenvy::dotenv().ok();

    let host = env::var("HOST")
        .unwrap_or_else(|_| "127.0.0.1".to_string());

    let port = env::var("PORT")
        .ok()
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(3001);

    let alerts_file = env::var("ALERTS_FILE")
        .unwrap_or_else(|_| "data/alerts.json".to_string());

    // Alpha Vantage hands out a rate-limited "demo" key; real keys go in .env
    let alphavantage_api_key =
        env::var("ALPHAVANTAGE_API_KEY").unwrap_or_else(|_| "demo".to_string());

    let cors_origin = env::var("CORS_ORIGIN")
        .unwrap_or_else(|_| "http://localhost:3000".to_string());

    Settings {
        host,
        port,
        alerts_file,
        alphavantage_api_key,
        cors_origin,
    }
}
