// The caller identity as handed over by the identity provider.
//
// Boundaries
// - The identity is opaque. Absence means the request is unauthenticated.

use crate::shared::core::errors::{ServiceError, ServiceResult};
use crate::shared::core::primitives::OwnerId;

pub fn require_owner(owner: Option<&OwnerId>) -> ServiceResult<&OwnerId> {
    owner.ok_or(ServiceError::Unauthenticated)
}

/// Blank identities count as absent.
pub fn owner_from_raw(raw: Option<&str>) -> Option<OwnerId> {
    raw.map(str::trim)
        .filter(|value| !value.is_empty())
        .map(OwnerId::new)
}
