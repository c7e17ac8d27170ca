use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("network error: {0}")]
    Network(String),
    #[error("http status {status}")]
    Http { status: u16 },
    #[error("decode error: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClientError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            ClientError::Http {
                status: status.as_u16(),
            }
        } else {
            ClientError::Network(err.to_string())
        }
    }
}
