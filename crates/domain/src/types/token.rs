//! Access/refresh token pair

use super::secret::SecretString;

/// Credentials used against the game API
///
/// The access token authorizes every game API call. The refresh token is
/// consumed and replaced exactly once per successful refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPair {
    pub access_token: SecretString,
    pub refresh_token: SecretString,
}

impl TokenPair {
    pub fn new(access_token: impl Into<SecretString>, refresh_token: impl Into<SecretString>) -> Self {
        Self { access_token: access_token.into(), refresh_token: refresh_token.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_never_prints_tokens() {
        let pair = TokenPair::new("A1", "R1");
        let debug = format!("{pair:?}");

        assert!(!debug.contains("A1"));
        assert!(!debug.contains("R1"));
        assert_eq!(pair.access_token.expose(), "A1");
        assert_eq!(pair.refresh_token.expose(), "R1");
    }
}
