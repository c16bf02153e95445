//! Configuration integration tests
//!
//! Loading from files and variable sources, and the startup failure modes.

#[cfg(test)]
mod tests {
    use crate::common::SECRET_32;
    use bank_token::{AppState, AuthError, Config, MakerKind};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_file_config_builds_working_state() {
        let file = write_config(&format!(
            "token:\n  maker: jwt\n  symmetric_key: \"{SECRET_32}\"\n  access_token_duration: 300\n"
        ));

        let config = Config::from_file(file.path()).await.unwrap();
        let state = AppState::new(config).unwrap();
        let login = state.issue_access_token("alice").unwrap();

        assert_eq!(state.verify_access_token(&login.access_token).unwrap().subject(), "alice");
    }

    #[tokio::test]
    async fn test_wrong_length_key_fails_at_load() {
        let file = write_config("token:\n  maker: sealed\n  symmetric_key: \"too-short\"\n");

        let result = Config::from_file(file.path()).await;
        assert!(matches!(result, Err(AuthError::Config(msg)) if msg.contains("exactly 32")));
    }

    #[tokio::test]
    async fn test_unknown_maker_fails_at_load() {
        let file = write_config(&format!(
            "token:\n  maker: paseto\n  symmetric_key: \"{SECRET_32}\"\n"
        ));

        assert!(Config::from_file(file.path()).await.is_err());
    }

    #[test]
    fn test_lookup_selects_maker() {
        let config = Config::from_lookup(|key| match key {
            "TOKEN_SYMMETRIC_KEY" => Some(SECRET_32.to_string()),
            "TOKEN_MAKER" => Some("jwt".to_string()),
            _ => None,
        })
        .unwrap();

        assert_eq!(config.token.maker, MakerKind::Jwt);
        assert_eq!(config.token.access_token_duration, 900);
    }
}
