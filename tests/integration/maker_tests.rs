//! Token maker integration tests
//!
//! Properties every maker must hold, checked through the public API.

#[cfg(test)]
mod tests {
    use crate::common::{SECRET_32, all_makers};
    use bank_token::{JwtMaker, MakerKind, SealedMaker, TokenError, TokenMaker, build_maker};
    use chrono::Utc;
    use std::time::Duration;

    /// Issue then verify immediately
    #[test]
    fn test_alice_round_trip() {
        for (kind, maker) in all_makers() {
            let before = Utc::now();
            let (token, issued) = maker.create_token("alice", Duration::from_secs(60)).unwrap();
            let after = Utc::now();

            let payload = maker.verify_token(&token).unwrap();
            assert_eq!(payload, issued, "{kind}");
            assert_eq!(payload.subject(), "alice");
            assert!(payload.issued_at() >= before && payload.issued_at() <= after);
            assert_eq!(
                payload.expires_at() - payload.issued_at(),
                chrono::Duration::minutes(1)
            );
        }
    }

    /// The same token expires once 61 seconds have passed
    #[test]
    fn test_alice_expires_after_a_minute() {
        for (kind, maker) in all_makers() {
            let (token, issued) = maker.create_token("alice", Duration::from_secs(60)).unwrap();

            let just_before = issued.issued_at() + chrono::Duration::seconds(59);
            assert!(maker.verify_token_at(&token, just_before).is_ok(), "{kind}");

            let later = issued.issued_at() + chrono::Duration::seconds(61);
            assert_eq!(
                maker.verify_token_at(&token, later).unwrap_err(),
                TokenError::Expired,
                "{kind}"
            );
        }
    }

    /// Expiry is only reported for tokens that otherwise verify
    #[test]
    fn test_tampered_expired_token_is_invalid() {
        for (kind, maker) in all_makers() {
            let (token, issued) = maker.create_token("alice", Duration::from_secs(60)).unwrap();
            let mut tampered = token.into_bytes();
            let last = tampered.len() - 10;
            tampered[last] = if tampered[last] == b'x' { b'y' } else { b'x' };
            let tampered = String::from_utf8(tampered).unwrap();

            let later = issued.issued_at() + chrono::Duration::hours(1);
            assert_eq!(
                maker.verify_token_at(&tampered, later).unwrap_err(),
                TokenError::Invalid,
                "{kind}"
            );
        }
    }

    #[test]
    fn test_makers_reject_each_other() {
        let jwt = JwtMaker::new(SECRET_32).unwrap();
        let sealed = SealedMaker::new(SECRET_32).unwrap();

        for _ in 0..16 {
            let (token, _) = jwt.create_token("alice", Duration::from_secs(60)).unwrap();
            assert_eq!(sealed.verify_token(&token).unwrap_err(), TokenError::Invalid);

            let (token, _) = sealed.create_token("alice", Duration::from_secs(60)).unwrap();
            assert_eq!(jwt.verify_token(&token).unwrap_err(), TokenError::Invalid);
        }
    }

    #[test]
    fn test_construction_fails_before_use() {
        let short = "x".repeat(31);

        assert!(JwtMaker::new(&short).is_err());
        assert!(SealedMaker::new(&short).is_err());
        assert!(SealedMaker::new(&"x".repeat(33)).is_err());
        assert!(JwtMaker::new(&"x".repeat(64)).is_ok());

        for kind in [MakerKind::Jwt, MakerKind::Sealed] {
            let err = build_maker(kind, &short).err().unwrap();
            assert!(err.is_configuration());
        }
    }

    #[test]
    fn test_token_ids_are_unique() {
        for (_, maker) in all_makers() {
            let ids: std::collections::HashSet<_> = (0..100)
                .map(|_| maker.create_token("alice", Duration::from_secs(60)).unwrap().1.id())
                .collect();
            assert_eq!(ids.len(), 100);
        }
    }

    #[test]
    fn test_garbage_is_invalid() {
        for (kind, maker) in all_makers() {
            for token in ["", " ", "v1.local.", "eyJhbGciOiJIUzI1NiJ9..", "Bearer abc"] {
                assert_eq!(
                    maker.verify_token(token).unwrap_err(),
                    TokenError::Invalid,
                    "{kind} accepted {token:?}"
                );
            }
        }
    }
}
