/// Capability for entities that can be paged by numeric-id range.
///
/// The numerical id is dense, zero-based and gap-free across the whole
/// entity set, unlike the stable primary id which may be sparse (ids
/// imported from an external dataset). Range pagination depends on this
/// distinction, so the two ids are never collapsed into one field.
pub trait WithNumericalId {
    fn numerical_id(&self) -> i32;
}
