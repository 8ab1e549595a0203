// Pure diff between the tags an entry has and the tags it should have.
//
// Responsibilities
// - to_link = desired - existing, to_unlink = existing - desired.
// - Ids present in both sets are never touched.
// - Never perform input or output. The caller applies the result atomically.

use crate::shared::core::primitives::TagId;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagReconciliation {
    pub to_link: BTreeSet<TagId>,
    pub to_unlink: BTreeSet<TagId>,
}

impl TagReconciliation {
    pub fn is_empty(&self) -> bool {
        self.to_link.is_empty() && self.to_unlink.is_empty()
    }

    pub fn is_disjoint(&self) -> bool {
        self.to_link.is_disjoint(&self.to_unlink)
    }

    pub fn apply_to(&self, existing: &BTreeSet<TagId>) -> BTreeSet<TagId> {
        existing
            .difference(&self.to_unlink)
            .chain(self.to_link.iter())
            .cloned()
            .collect()
    }
}

pub fn reconcile(existing: &BTreeSet<TagId>, desired: &BTreeSet<TagId>) -> TagReconciliation {
    TagReconciliation {
        to_link: desired.difference(existing).cloned().collect(),
        to_unlink: existing.difference(desired).cloned().collect(),
    }
}
