//! Session token signing and verification.
//!
//! A token is `base64url(claims).base64url(mac)` where `mac` is HMAC-SHA256
//! over the encoded claims. The signature only proves the token was minted
//! here; whether it is still live is decided by the token table.

use std::fmt;

use base64::{
    Engine as _,
    engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD},
};
use hmac::{Hmac, Mac};
use jiff::Timestamp;
use rand::{RngCore, rngs::OsRng};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use thiserror::Error;
use zeroize::Zeroize;

use crate::auth::PrincipalKind;

type HmacSha256 = Hmac<Sha256>;

/// Number of random bytes generated for a fresh signing key.
pub const SIGNING_KEY_BYTES: usize = 32;

const TOKEN_ID_BYTES: usize = 16;

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("signing key must not be empty")]
    EmptyKey,

    #[error("signing key length is not accepted")]
    KeyLength,

    #[error("signing key is not valid base64")]
    KeyEncoding(#[source] base64::DecodeError),

    #[error("token format is invalid")]
    InvalidFormat,

    #[error("token encoding is invalid")]
    InvalidEncoding(#[source] base64::DecodeError),

    #[error("token signature does not match")]
    BadSignature,

    #[error("token claims are invalid")]
    InvalidClaims(#[source] serde_json::Error),
}

#[derive(Clone)]
pub struct SigningKey {
    bytes: Vec<u8>,
}

impl SigningKey {
    /// Wrap raw key material.
    ///
    /// # Errors
    ///
    /// Returns an error when the key is empty.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Result<Self, TokenError> {
        let bytes = bytes.into();

        if bytes.is_empty() {
            return Err(TokenError::EmptyKey);
        }

        Ok(Self { bytes })
    }

    /// Decode key material from standard base64, as stored in configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when the input is not base64 or decodes to nothing.
    pub fn from_base64(encoded: &str) -> Result<Self, TokenError> {
        let bytes = STANDARD
            .decode(encoded.trim())
            .map_err(TokenError::KeyEncoding)?;

        Self::new(bytes)
    }

    /// Standard base64 of the key material, for handing to an operator.
    #[must_use]
    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.bytes)
    }

    #[must_use]
    pub fn generate() -> Self {
        let mut bytes = vec![0_u8; SIGNING_KEY_BYTES];

        OsRng.fill_bytes(&mut bytes);

        Self { bytes }
    }

    fn mac(&self) -> Result<HmacSha256, TokenError> {
        <HmacSha256 as Mac>::new_from_slice(&self.bytes)
            .map_err(|_invalid_length| TokenError::KeyLength)
    }
}

impl fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SigningKey(**redacted**)")?;
        Ok(())
    }
}

impl Drop for SigningKey {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

/// Claims carried inside a session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: i64,
    pub email: String,
    pub kind: PrincipalKind,
    pub exp: i64,
    pub jti: String,
}

impl SessionClaims {
    #[must_use]
    pub fn new(kind: PrincipalKind, sub: i64, email: &str, expires_at: Timestamp) -> Self {
        let mut token_id = [0_u8; TOKEN_ID_BYTES];

        OsRng.fill_bytes(&mut token_id);

        Self {
            sub,
            email: email.to_string(),
            kind,
            exp: expires_at.as_second(),
            jti: URL_SAFE_NO_PAD.encode(token_id),
        }
    }
}

/// Encode and sign the claims.
///
/// # Errors
///
/// Returns an error when the claims cannot be serialised.
pub fn sign_token(key: &SigningKey, claims: &SessionClaims) -> Result<String, TokenError> {
    let payload = serde_json::to_vec(claims).map_err(TokenError::InvalidClaims)?;
    let payload = URL_SAFE_NO_PAD.encode(payload);

    let mut mac = key.mac()?;

    mac.update(payload.as_bytes());

    let signature = URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes());

    Ok(format!("{payload}.{signature}"))
}

/// Check the signature and decode the claims.
///
/// # Errors
///
/// Returns an error when the token is malformed or was not signed with `key`.
pub fn verify_token(key: &SigningKey, token: &str) -> Result<SessionClaims, TokenError> {
    let (payload, signature) = token.split_once('.').ok_or(TokenError::InvalidFormat)?;

    let signature = URL_SAFE_NO_PAD
        .decode(signature)
        .map_err(TokenError::InvalidEncoding)?;

    let mut mac = key.mac()?;

    mac.update(payload.as_bytes());

    mac.verify_slice(&signature)
        .map_err(|_mismatch| TokenError::BadSignature)?;

    let payload = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(TokenError::InvalidEncoding)?;

    serde_json::from_slice(&payload).map_err(TokenError::InvalidClaims)
}
