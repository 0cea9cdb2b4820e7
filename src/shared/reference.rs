//! Transaction reference generation.

use chrono::Utc;
use rand::RngCore;

const DEFAULT_PREFIX: &str = "REF_";

/// Generates a unique transaction reference.
///
/// Format: `<PREFIX><unix millis>_<8 uppercase hex chars>`. The prefix is
/// uppercased; without one, `REF_` is used.
///
/// ```rust,ignore
/// let reference = generate_reference(Some("order_"));
/// // "ORDER_1718900000000_9F2C01AB"
/// ```
pub fn generate_reference(prefix: Option<&str>) -> String {
    let prefix = match prefix {
        Some(p) if !p.is_empty() => p.to_uppercase(),
        _ => DEFAULT_PREFIX.to_string(),
    };

    let mut suffix = [0u8; 4];
    rand::thread_rng().fill_bytes(&mut suffix);

    format!(
        "{}{}_{}",
        prefix,
        Utc::now().timestamp_millis(),
        hex::encode_upper(suffix)
    )
}
