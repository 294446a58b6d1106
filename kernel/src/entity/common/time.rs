use time::OffsetDateTime;
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Fromln, AsRefln)]
pub struct InsertedAt(OffsetDateTime);

impl InsertedAt {
    pub fn new(time: impl Into<OffsetDateTime>) -> Self {
        Self(time.into())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Fromln, AsRefln)]
pub struct UpdatedAt(OffsetDateTime);

impl UpdatedAt {
    pub fn new(time: impl Into<OffsetDateTime>) -> Self {
        Self(time.into())
    }
}

impl From<InsertedAt> for UpdatedAt {
    fn from(value: InsertedAt) -> Self {
        Self(value.0)
    }
}
