use crate::memory::MemoryNode;
use crate::models::AssociationType;

/// One pluggable similarity signal between two nodes.
///
/// `compare(a, b)` must equal `compare(b, a)`.
pub trait IAssociationComparator: Send + Sync {
    fn name(&self) -> &'static str;

    /// The association type this comparator produces.
    fn kind(&self) -> AssociationType;

    /// Strength in `[0, 1]`; 0 means the signal does not apply.
    fn compare(&self, a: &MemoryNode, b: &MemoryNode) -> f64;
}
