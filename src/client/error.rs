use std::fmt;

#[derive(Debug)]
pub enum ClientError {
    /// Server answered with a non-success status
    Api { status: u16, message: String },
    /// Request never completed (rede fora, DNS, timeout)
    Transport(String),
    /// Body did not match the expected shape
    Decode(String),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Api { status, message } => write!(f, "API error {}: {}", status, message),
            ClientError::Transport(msg) => write!(f, "Transport error: {}", msg),
            ClientError::Decode(msg) => write!(f, "Decode error: {}", msg),
        }
    }
}

impl std::error::Error for ClientError {}
