//! MQTT topic encoding for channel names
//!
//! There are some restrictions to what characters are allowed to use in a
//! Grafana Live channel:
//!
//!   https://github.com/grafana/grafana-plugin-sdk-go/blob/7470982de35f3b0bb5d17631b4163463153cc204/live/channel.go#L33
//!
//! The raw topic is rewritten to comply before it is used in a channel path.
//! Two encodings exist; a deployment must pick one and use it on both sides,
//! as they are not compatible with each other. `Base64UrlSafe` is the
//! default.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

const PLUS_TOKEN: &str = "__PLUS__";
const HASH_TOKEN: &str = "__HASH__";

/// Strategy for making a topic safe for use in a channel name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TopicEncoding {
    /// URL-safe base64 of the UTF-8 topic, unpadded (RFC 4648 section 5).
    /// Opaque but fully reversible; handles any topic.
    Base64UrlSafe,
    /// Replace the MQTT wildcard characters `+` and `#` with the sentinels
    /// `__PLUS__` and `__HASH__`. Keeps the topic readable but guards only
    /// those two characters.
    WildcardTokens,
}

impl TopicEncoding {
    /// Encode a raw topic for use in a channel name.
    pub fn encode(&self, topic: &str) -> String {
        match self {
            TopicEncoding::Base64UrlSafe => URL_SAFE_NO_PAD.encode(topic.as_bytes()),
            TopicEncoding::WildcardTokens => {
                topic.replace('+', PLUS_TOKEN).replace('#', HASH_TOKEN)
            }
        }
    }
}

/// Decode an MQTT topic from a channel path produced with `Base64UrlSafe`.
///
/// The topic is the first `/`-separated segment of the path; the rest of the
/// path (interval, streaming key) is ignored. Padded base64 is rejected.
pub fn decode_topic_path(topic_path: &str) -> Result<String, String> {
    let encoded = topic_path.split('/').next().unwrap_or("");

    let decoded = URL_SAFE_NO_PAD
        .decode(encoded)
        .map_err(|e| format!("Failed to decode topic: {}", e))?;

    String::from_utf8(decoded).map_err(|e| format!("Topic is not valid UTF-8: {}", e))
}
