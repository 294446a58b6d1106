use vodca::{AsRefln, Fromln};

use crate::entity::{PageCount, ReadPage};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Fromln, AsRefln)]
pub struct IsFinished(bool);

impl IsFinished {
    pub fn new(value: impl Into<bool>) -> Self {
        IsFinished(value.into())
    }

    pub fn from_progress(count: &PageCount, read: &ReadPage) -> Self {
        IsFinished(read.reaches(count))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Fromln, AsRefln)]
pub struct IsReading(bool);

impl IsReading {
    pub fn new(value: impl Into<bool>) -> Self {
        IsReading(value.into())
    }
}
