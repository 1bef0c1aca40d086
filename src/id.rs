use std::fmt;

use chrono::{DateTime, Utc};
use diesel::deserialize::{self, FromSql, Queryable};
use diesel::expression::AsExpression;
use diesel::pg::{Pg, PgValue};
use diesel::serialize::{self, Output, ToSql};
use diesel::sql_types::Text;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::codec::{self, Error};
use crate::generator::{self, Generator};

/// The closed set of entity categories an identifier can refer to.
///
/// The tag characters match the identifiers already issued in production:
/// `AURA…` is an artist, `AURB…` a collaboration (band), and so on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IdType {
    Artist,
    Collab,
    Composition,
    Persona,
    Recording,
    Project,
}

impl IdType {
    /// Every member, in tag order.
    pub const ALL: [IdType; 6] = [
        IdType::Artist,
        IdType::Collab,
        IdType::Composition,
        IdType::Persona,
        IdType::Recording,
        IdType::Project,
    ];

    /// The single character embedded in identifiers of this type.
    pub const fn code(self) -> char {
        match self {
            IdType::Artist => 'A',
            IdType::Collab => 'B',
            IdType::Composition => 'C',
            IdType::Persona => 'P',
            IdType::Recording => 'R',
            IdType::Project => 'W',
        }
    }

    /// Maps a tag character back to its type, if recognized.
    pub fn from_code(code: char) -> Option<IdType> {
        match code {
            'A' => Some(IdType::Artist),
            'B' => Some(IdType::Collab),
            'C' => Some(IdType::Composition),
            'P' => Some(IdType::Persona),
            'R' => Some(IdType::Recording),
            'W' => Some(IdType::Project),
            _ => None,
        }
    }
}

impl fmt::Display for IdType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A validated identifier.
///
/// Wraps the 15-character string and exposes its derived views: the raw
/// value, the type tag and the creation time. Construction always validates,
/// so every live `Id` satisfies the format invariants.
///
/// When serialized with Serde the identifier is a plain string, and
/// deserialization re-validates it. Traits are also provided for Diesel
/// compatibility with Postgres `Text` columns.
///
/// # Examples
///
/// ```
/// use auracle_id::{Id, IdType};
///
/// let id = Id::new("AURR01JNYJMQP5V").unwrap();
/// assert_eq!(id.id_type(), IdType::Recording);
/// assert_eq!(id.created_at().timestamp_millis(), 1741561683653);
///
/// let fresh = Id::generate(IdType::Artist);
/// assert!(fresh.as_str().starts_with("AURA"));
/// ```
#[derive(AsExpression, Debug, Clone, PartialEq, Eq, Hash)]
#[diesel(sql_type = Text)]
pub struct Id {
    value: String,
}

impl Id {
    /// Wraps an identifier string, validating it first.
    pub fn new(value: impl Into<String>) -> Result<Id, Error> {
        let value = value.into();
        codec::validate(&value)?;
        Ok(Id { value })
    }

    /// Generates a fresh identifier of the given type using the shared
    /// process-wide timestamp generator.
    pub fn generate(id_type: IdType) -> Id {
        Id::from_millis(id_type, generator::global_unique_timestamp())
    }

    /// Generates a fresh identifier from a caller-owned [`Generator`].
    pub fn generate_with(generator: &mut Generator, id_type: IdType) -> Id {
        Id::from_millis(id_type, generator.unique_timestamp())
    }

    fn from_millis(id_type: IdType, millis: u64) -> Id {
        let value = codec::assemble(id_type, millis)
            .expect("Clock milliseconds should fit in ten base-32 digits");
        Id { value }
    }

    /// Returns the raw identifier string.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Returns the type tag.
    pub fn id_type(&self) -> IdType {
        let code = self
            .value
            .chars()
            .nth(3)
            .expect("Validated ids should have a type tag");
        IdType::from_code(code).expect("Validated ids should have a known type tag")
    }

    /// Returns the creation time decoded from the timestamp digits.
    pub fn created_at(&self) -> DateTime<Utc> {
        let millis = codec::decode_timestamp(&self.value[4..14])
            .expect("Validated ids should have a decodable timestamp");
        DateTime::from_timestamp_millis(millis as i64)
            .expect("Ten base-32 digits should be within the chrono range")
    }

    /// Re-runs validation on the wrapped string.
    pub fn validate(&self) -> Result<(), Error> {
        codec::validate(&self.value)
    }
}

/// Validates `value` and derives its creation time.
pub fn decode_creation_time(value: &str) -> Result<DateTime<Utc>, Error> {
    Id::new(value).map(|id| id.created_at())
}

impl From<Id> for String {
    /// Returns the raw identifier string.
    fn from(id: Id) -> Self {
        id.value
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl Serialize for Id {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.value)
    }
}

impl<'de> Deserialize<'de> for Id {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Id::new(value).map_err(serde::de::Error::custom)
    }
}

impl ToSql<Text, Pg> for Id {
    fn to_sql(&self, out: &mut Output<'_, '_, Pg>) -> serialize::Result {
        <String as ToSql<Text, Pg>>::to_sql(&self.value, &mut out.reborrow())
    }
}

impl FromSql<Text, Pg> for Id {
    fn from_sql(bytes: PgValue<'_>) -> deserialize::Result<Self> {
        let value = <String as FromSql<Text, Pg>>::from_sql(bytes)?;
        Ok(Id::new(value)?)
    }
}

impl Queryable<Text, Pg> for Id {
    type Row = <String as Queryable<Text, Pg>>::Row;

    fn build(row: Self::Row) -> deserialize::Result<Self> {
        let value = <String as Queryable<Text, Pg>>::build(row)?;
        Ok(Id::new(value)?)
    }
}
