use sea_orm::{ActiveValue, FromJsonQueryResult, IntoActiveValue};
use serde::{Deserialize, Serialize};

/// Genre tags, stored as a JSON array of strings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct Genres(pub Vec<String>);

impl Genres {
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl IntoActiveValue<Genres> for Genres {
    fn into_active_value(self) -> ActiveValue<Genres> {
        ActiveValue::Set(self)
    }
}
