use itembox_core::ValueObject;

/// A named value stored in an [`ItemBox`](crate::ItemBox).
///
/// The name is not validated: empty names and duplicates are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Item {
    name: String,
}

impl Item {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl ValueObject for Item {}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.name)
    }
}

impl From<&str> for Item {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}
