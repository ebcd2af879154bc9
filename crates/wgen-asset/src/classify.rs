//! Resource classification and kind/MIME validation

use crate::types::{Resource, ResourceContent, ResourceKind};
use wgen_core::{Result, WgenError};

/// Classify a resource, rejecting kind/MIME combinations that cannot be emitted.
///
/// Static resources need a MIME type for their `Content-Type` header.
/// Dynamic code sets its own headers and must not carry one. Static text
/// is NUL-terminated on the device and may not contain NUL itself.
pub fn classify(resource: &Resource) -> Result<ResourceKind> {
    let invalid = |reason: &str| WgenError::InvalidResourceKind {
        name: resource.name.clone(),
        reason: reason.to_string(),
    };

    if resource.name.is_empty() {
        return Err(invalid("resource name must not be empty"));
    }

    // `printP` stops at the first NUL, so the rest of the page would be lost.
    if let ResourceContent::Text(text) = &resource.content {
        if text.contains('\0') {
            return Err(invalid("static text must not contain NUL; declare it as binary"));
        }
    }

    let kind = resource.kind();
    match (kind, resource.mime.as_deref()) {
        (ResourceKind::DynamicCode, Some(_)) => {
            Err(invalid("dynamic code must not declare a MIME type"))
        }
        (ResourceKind::DynamicCode, None) => Ok(kind),
        (_, None) => Err(invalid(&format!("{} resource is missing a MIME type", kind))),
        (_, Some(mime)) if mime.trim().is_empty() => {
            Err(invalid(&format!("{} resource has an empty MIME type", kind)))
        }
        (_, Some(_)) => Ok(kind),
    }
}
