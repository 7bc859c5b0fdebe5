use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};

/// Ordered list of interest labels attached to users and communities.
///
/// Stored as a JSON array so the order given at insert time is preserved
/// on every backend, including SQLite which has no native array type.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
#[serde(transparent)]
pub struct InterestTags(pub Vec<String>);

impl InterestTags {
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl<S: Into<String>> FromIterator<S> for InterestTags {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        InterestTags(iter.into_iter().map(Into::into).collect())
    }
}
