//! `Authorization` header values.

use crate::network::error::Error;
use base64ct::{Base64, Encoding};
use heapless::{String, Vec};

/// Builds a `Basic` credential value, `Basic base64(user:password)`, in a
/// string of capacity `N`.
///
/// `N` bounds both the joined credentials and the encoded result. Returns
/// [`Error::BufferOverflow`] when either does not fit.
///
/// # Examples
///
/// ```rust
/// use iothttp::http::{auth, RequestHeader};
///
/// let value = auth::basic::<64>("Aladdin", "open sesame").unwrap();
/// let header = RequestHeader::new("Authorization", &value);
/// assert_eq!(header.value, Some("Basic QWxhZGRpbjpvcGVuIHNlc2FtZQ=="));
/// ```
pub fn basic<const N: usize>(username: &str, password: &str) -> Result<String<N>, Error> {
    let mut credentials: Vec<u8, N> = Vec::new();
    credentials
        .extend_from_slice(username.as_bytes())
        .map_err(|_| Error::BufferOverflow)?;
    credentials.push(b':').map_err(|_| Error::BufferOverflow)?;
    credentials
        .extend_from_slice(password.as_bytes())
        .map_err(|_| Error::BufferOverflow)?;

    let mut encoded = [0u8; N];
    let encoded =
        Base64::encode(&credentials, &mut encoded).map_err(|_| Error::BufferOverflow)?;

    let mut value = String::new();
    value.push_str("Basic ").map_err(|_| Error::BufferOverflow)?;
    value.push_str(encoded).map_err(|_| Error::BufferOverflow)?;
    Ok(value)
}
