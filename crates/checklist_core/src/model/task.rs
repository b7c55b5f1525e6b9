use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// One unit of work. `completed_at` stays `None` until the task is
/// completed; the persisted form still writes an explicit epoch
/// placeholder so every stored record carries all four fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub description: String,
    pub done: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "epoch_placeholder")]
    pub completed_at: Option<OffsetDateTime>,
}

impl Task {
    pub fn new<D: Into<String>>(description: D) -> Self {
        Self {
            description: description.into(),
            done: false,
            created_at: OffsetDateTime::now_utc(),
            completed_at: None,
        }
    }
}

/// RFC3339 timestamps where "unset" is written as the Unix epoch
/// rather than null or an omitted field, and read back as `None`.
mod epoch_placeholder {
    use serde::de::Error as DeError;
    use serde::ser::Error as SerError;
    use serde::{Deserialize, Deserializer, Serializer};
    use time::OffsetDateTime;
    use time::format_description::well_known::Rfc3339;

    pub fn serialize<S>(value: &Option<OffsetDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let stamp = value.unwrap_or(OffsetDateTime::UNIX_EPOCH);
        let text = stamp.format(&Rfc3339).map_err(S::Error::custom)?;
        serializer.serialize_str(&text)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<OffsetDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        let stamp = OffsetDateTime::parse(&text, &Rfc3339).map_err(D::Error::custom)?;
        if stamp == OffsetDateTime::UNIX_EPOCH {
            Ok(None)
        } else {
            Ok(Some(stamp))
        }
    }
}
