use serde::Deserialize;

/// Registration payload; absent fields deserialize empty and are rejected
/// by validation rather than by the JSON layer
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub username: String,

    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub password: String,
}
