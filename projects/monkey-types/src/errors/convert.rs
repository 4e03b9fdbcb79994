use super::*;

impl From<MonkeyErrorKind> for MonkeyError {
    fn from(value: MonkeyErrorKind) -> Self {
        Self { kind: Box::new(value) }
    }
}

impl From<std::io::Error> for MonkeyError {
    fn from(error: std::io::Error) -> Self {
        Self::io(error.to_string())
    }
}

#[cfg(feature = "serde")]
impl From<serde_json::Error> for MonkeyError {
    fn from(error: serde_json::Error) -> Self {
        Self::internal(format!("JSON error: {}", error))
    }
}

#[cfg(feature = "serde")]
impl From<toml::de::Error> for MonkeyError {
    fn from(error: toml::de::Error) -> Self {
        Self::config(format!("failed to parse monkey.toml: {}", error))
    }
}

#[cfg(feature = "serde")]
impl From<toml::ser::Error> for MonkeyError {
    fn from(error: toml::ser::Error) -> Self {
        Self::config(format!("failed to serialize config: {}", error))
    }
}
