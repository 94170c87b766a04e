//! Bearer Token Signing and Verification
//!
//! Token format: `base64url(claims JSON) "." base64url(HMAC-SHA256)`.
//! The signature covers the encoded payload. Claims are the minimal
//! `{id, userName}` set plus an optional `exp` (unix seconds).

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use uuid::Uuid;

use crate::application::config::AccountConfig;
use crate::error::{AccountError, AccountResult};

/// Claim set embedded in a bearer token
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenClaims {
    pub id: Uuid,
    pub user_name: String,
    /// Expiry in unix seconds; absent for unexpiring tokens
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
}

/// Sign a claim set for the given user
pub fn issue_token(config: &AccountConfig, user_id: Uuid, user_name: &str) -> AccountResult<String> {
    let exp = config
        .token_ttl
        .map(|ttl| chrono::Utc::now().timestamp() + ttl.as_secs() as i64);

    let claims = TokenClaims {
        id: user_id,
        user_name: user_name.to_string(),
        exp,
    };

    let payload_json =
        serde_json::to_vec(&claims).map_err(|e| AccountError::Internal(e.to_string()))?;
    let payload = URL_SAFE_NO_PAD.encode(payload_json);

    // Create HMAC signature over the encoded payload
    let mut mac = Hmac::<Sha256>::new_from_slice(&config.token_secret)
        .expect("HMAC can take key of any size");
    mac.update(payload.as_bytes());
    let signature = mac.finalize().into_bytes();

    Ok(format!(
        "{}.{}",
        payload,
        URL_SAFE_NO_PAD.encode(signature)
    ))
}

/// Verify signature and expiry, returning the decoded claim set
pub fn verify_token(config: &AccountConfig, token: &str) -> AccountResult<TokenClaims> {
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 2 {
        return Err(AccountError::TokenInvalid);
    }

    let payload = parts[0];
    let signature_b64 = parts[1];

    // Verify signature before touching the payload
    let mut mac = Hmac::<Sha256>::new_from_slice(&config.token_secret)
        .expect("HMAC can take key of any size");
    mac.update(payload.as_bytes());

    let signature = URL_SAFE_NO_PAD
        .decode(signature_b64)
        .map_err(|_| AccountError::TokenInvalid)?;

    mac.verify_slice(&signature)
        .map_err(|_| AccountError::TokenInvalid)?;

    // Decode claims
    let payload_json = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|_| AccountError::TokenInvalid)?;
    let claims: TokenClaims =
        serde_json::from_slice(&payload_json).map_err(|_| AccountError::TokenInvalid)?;

    if let Some(exp) = claims.exp {
        if exp < chrono::Utc::now().timestamp() {
            return Err(AccountError::TokenInvalid);
        }
    }

    Ok(claims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn config() -> AccountConfig {
        AccountConfig::new(b"test-token-secret".to_vec())
    }

    #[test]
    fn test_roundtrip() {
        let config = config();
        let user_id = Uuid::new_v4();

        let token = issue_token(&config, user_id, "alice").unwrap();
        let claims = verify_token(&config, &token).unwrap();

        assert_eq!(claims.id, user_id);
        assert_eq!(claims.user_name, "alice");
        assert!(claims.exp.is_none());
    }

    #[test]
    fn test_claims_wire_shape() {
        let claims = TokenClaims {
            id: Uuid::nil(),
            user_name: "alice".to_string(),
            exp: None,
        };
        let json = serde_json::to_string(&claims).unwrap();
        assert!(json.contains("\"userName\":\"alice\""));
        assert!(!json.contains("exp"));
    }

    #[test]
    fn test_tampered_payload_rejected() {
        let config = config();
        let token = issue_token(&config, Uuid::new_v4(), "alice").unwrap();

        let (_, signature) = token.split_once('.').unwrap();
        let forged_claims = TokenClaims {
            id: Uuid::new_v4(),
            user_name: "mallory".to_string(),
            exp: None,
        };
        let forged_payload = URL_SAFE_NO_PAD.encode(serde_json::to_vec(&forged_claims).unwrap());
        let forged = format!("{forged_payload}.{signature}");

        assert!(matches!(
            verify_token(&config, &forged),
            Err(AccountError::TokenInvalid)
        ));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = issue_token(&config(), Uuid::new_v4(), "alice").unwrap();
        let other = AccountConfig::new(b"some-other-secret".to_vec());

        assert!(matches!(
            verify_token(&other, &token),
            Err(AccountError::TokenInvalid)
        ));
    }

    #[test]
    fn test_garbled_tokens_rejected() {
        let config = config();
        for garbled in ["", "abc", "a.b.c", "!!!.???", "a.b"] {
            assert!(
                matches!(
                    verify_token(&config, garbled),
                    Err(AccountError::TokenInvalid)
                ),
                "token {garbled:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_expired_token_rejected() {
        // TTL of zero makes the exp claim already in the past or the
        // current second; back-date it explicitly to avoid flakiness
        let config = config();
        let claims = TokenClaims {
            id: Uuid::new_v4(),
            user_name: "alice".to_string(),
            exp: Some(chrono::Utc::now().timestamp() - 10),
        };
        let payload = URL_SAFE_NO_PAD.encode(serde_json::to_vec(&claims).unwrap());
        let mut mac = Hmac::<Sha256>::new_from_slice(&config.token_secret).unwrap();
        mac.update(payload.as_bytes());
        let token = format!(
            "{}.{}",
            payload,
            URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes())
        );

        assert!(matches!(
            verify_token(&config, &token),
            Err(AccountError::TokenInvalid)
        ));
    }

    #[test]
    fn test_ttl_sets_exp() {
        let config = config().with_token_ttl(Duration::from_secs(3600));
        let token = issue_token(&config, Uuid::new_v4(), "alice").unwrap();
        let claims = verify_token(&config, &token).unwrap();

        let exp = claims.exp.expect("exp claim should be set");
        assert!(exp > chrono::Utc::now().timestamp());
    }
}
