use crate::identity::Identifier;

/// An identifier plus the versions discovered for it.
///
/// Starts empty (see [`crate::catalog::Catalog::create`]); the version source
/// fills `versions` in discovery order and the catalog persists it unchanged.
#[derive(Clone, Debug)]
pub struct Submission<I: Identifier> {
    pub identifier: I,
    pub versions: Vec<I::Version>,
}

impl<I: Identifier> Submission<I> {
    pub fn new(identifier: I) -> Self {
        Self {
            identifier,
            versions: Vec::new(),
        }
    }

    pub fn address(&self) -> String {
        self.identifier.address()
    }
}
