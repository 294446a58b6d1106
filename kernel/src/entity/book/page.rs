use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Fromln, AsRefln)]
pub struct PageCount(u32);

impl PageCount {
    pub fn new(count: impl Into<u32>) -> Self {
        Self(count.into())
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Fromln, AsRefln)]
pub struct ReadPage(u32);

impl ReadPage {
    pub fn new(page: impl Into<u32>) -> Self {
        Self(page.into())
    }

    pub fn exceeds(&self, count: &PageCount) -> bool {
        self.0 > count.0
    }

    pub fn reaches(&self, count: &PageCount) -> bool {
        self.0 == count.0
    }
}
