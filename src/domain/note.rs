//! Note record and id/timestamp generation

use chrono::{SecondsFormat, Utc};
use rand::distributions::Alphanumeric;
use rand::rngs::{OsRng, StdRng};
use rand::{Rng, RngCore, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Builder;

const FALLBACK_RANDOM_CHARS: usize = 11;

/// A single user-authored note.
///
/// Serialized with camelCase keys (`updatedAt`), matching the persisted layout.
/// Records written without a text field read it back as empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub updated_at: String,
}

impl Note {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
        updated_at: impl Into<String>,
    ) -> Self {
        Note {
            id: id.into(),
            title: title.into(),
            content: content.into(),
            updated_at: updated_at.into(),
        }
    }
}

/// Generate a fresh note id: a UUID v4 from the OS random source, or
/// [`fallback_note_id`] when that source fails.
pub fn generate_note_id() -> String {
    let mut bytes = [0u8; 16];
    let entropy = OsRng.try_fill_bytes(&mut bytes).map(|()| bytes);
    note_id_from(entropy)
}

fn note_id_from(entropy: Result<[u8; 16], rand::Error>) -> String {
    match entropy {
        Ok(bytes) => Builder::from_random_bytes(bytes).into_uuid().to_string(),
        Err(e) => {
            warn!(error = %e, "secure random source unavailable, using fallback id");
            fallback_note_id()
        }
    }
}

/// Best-effort id without the OS random source:
/// `id_<random alphanumerics>_<unix millis>`.
pub fn fallback_note_id() -> String {
    let now = Utc::now();
    let millis = now.timestamp_millis();
    let seed = (millis as u64)
        ^ u64::from(now.timestamp_subsec_nanos()).rotate_left(32)
        ^ u64::from(std::process::id());

    let random: String = StdRng::seed_from_u64(seed)
        .sample_iter(&Alphanumeric)
        .take(FALLBACK_RANDOM_CHARS)
        .map(|b| char::from(b).to_ascii_lowercase())
        .collect();

    format!("id_{}_{}", random, millis)
}

/// Current time as ISO-8601 UTC with millisecond precision.
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
