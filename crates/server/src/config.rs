use std::{
    env,
    net::{Ipv4Addr, SocketAddr},
    path::PathBuf,
};

/// Server configuration read from the environment at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub db_path: PathBuf,
    pub addr: SocketAddr,
}

impl Config {
    pub fn from_env() -> Self {
        let db_path = env::var("COVALENT_DB_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("covalent.db"));
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3400);
        Self {
            db_path,
            addr: SocketAddr::from((Ipv4Addr::LOCALHOST, port)),
        }
    }
}
