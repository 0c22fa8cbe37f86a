use serde::Deserialize;

/// Expected shape of a server error body
///
/// Both fields are optional so a body carrying only one of them (or neither)
/// still parses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorResponseDto {
    #[serde(default)]
    pub message: Option<String>,

    #[serde(default)]
    pub code: Option<i64>,
}
