use thiserror::Error;

#[derive(Error, Debug)]
pub enum VillageError {
    #[error("Unknown building type: {0}")]
    UnknownBuildingType(String),

    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    #[error("Config parse error: {0}")]
    ConfigParse(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, VillageError>;
