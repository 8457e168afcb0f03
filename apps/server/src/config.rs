/// Server configuration loaded from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP listener binds to.
    pub listen_addr: String,
}

impl Config {
    /// Loads configuration from the environment, reading a `.env` file
    /// first when one is present.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let listen_addr =
            std::env::var("MONETA_LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
        Self { listen_addr }
    }
}
