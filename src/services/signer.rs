use base64::{engine::general_purpose::STANDARD, Engine};
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

// Base64 HMAC-SHA256 digest over "{timestamp}.{method}.{path}".
pub struct RequestSigner {
    secret: String,
}

impl RequestSigner {
    pub fn new(secret: String) -> Self {
        RequestSigner { secret }
    }

    pub fn sign(&self, timestamp_ms: &str, method: &str, path: &str) -> String {
        let message = format!("{}.{}.{}", timestamp_ms, method, path);
        let mut mac = HmacSha256::new_from_slice(self.secret.as_bytes())
            .expect("HMAC can take key of any size");
        mac.update(message.as_bytes());

        STANDARD.encode(mac.finalize().into_bytes())
    }
}
