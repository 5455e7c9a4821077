use super::Format;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O operation failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("failed to parse cell template: {0}")]
    TemplateParse(#[from] toml::de::Error),

    #[error("failed to serialize cell template: {0}")]
    TemplateSerialize(#[from] toml::ser::Error),

    #[error("unknown cell preset '{0}'")]
    UnknownPreset(String),

    #[error("the network is empty; nothing to write in {0} format")]
    EmptyNetwork(Format),

    #[error("invalid {format} export settings: {details}")]
    InvalidSettings { format: Format, details: String },

    #[error("failed to convert data model: {0}")]
    Conversion(String),
}
