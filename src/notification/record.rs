//! The change-notification record and its metadata types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The kind of change a notification describes.
///
/// Unknown wire values decode as [`OperationKind::Unknown`] so a single
/// unrecognized record does not fail an entire batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    /// A resource was created.
    Create,
    /// A resource was updated.
    Update,
    /// A resource was deleted.
    Delete,
    /// An operation kind this client version does not recognize.
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

/// Metadata about the system that published a notification.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Publisher {
    /// Stable identifier of the publishing system.
    #[serde(default)]
    pub id: String,

    /// Human-readable publisher name, if the remote supplies one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Descriptor of the remote resource a notification refers to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceRef {
    /// Resource type name (e.g. `"document"`).
    #[serde(rename = "type")]
    pub kind: String,

    /// Identifier of the resource within its type.
    pub id: String,

    /// Resource version the change applies to, if versioned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl ResourceRef {
    /// Creates a resource descriptor without a version.
    #[must_use]
    pub fn new(kind: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            id: id.into(),
            version: None,
        }
    }

    /// Sets the resource version.
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }
}

/// One change-notification record.
///
/// Produced by [`NotificationSource`](crate::source::NotificationSource)
/// deserialization and never mutated afterwards; whoever holds a reference
/// owns what it reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    /// Unique identity of this notification.
    pub id: String,

    /// When the remote published the change.
    pub published: DateTime<Utc>,

    /// The kind of change described.
    pub operation: OperationKind,

    /// Metadata about the publishing system.
    #[serde(default)]
    pub publisher: Publisher,

    /// The resource the change applies to.
    pub resource: ResourceRef,

    /// Media type of [`Notification::content`].
    #[serde(default = "default_content_type")]
    pub content_type: String,

    /// Opaque content payload; the engine never interprets it.
    #[serde(default)]
    pub content: Value,
}

fn default_content_type() -> String {
    "application/json".to_string()
}

impl Notification {
    /// Creates a notification with the given identity, operation, and
    /// resource descriptor.
    ///
    /// The publish timestamp defaults to now; publisher metadata and
    /// content default to empty. Primarily useful for tests and mock
    /// sources - production records come from deserialization.
    #[must_use]
    pub fn new(id: impl Into<String>, operation: OperationKind, resource: ResourceRef) -> Self {
        Self {
            id: id.into(),
            published: Utc::now(),
            operation,
            publisher: Publisher::default(),
            resource,
            content_type: default_content_type(),
            content: Value::Null,
        }
    }

    /// Sets the publish timestamp.
    #[must_use]
    pub fn with_published(mut self, published: DateTime<Utc>) -> Self {
        self.published = published;
        self
    }

    /// Sets the publisher metadata.
    #[must_use]
    pub fn with_publisher(mut self, publisher: Publisher) -> Self {
        self.publisher = publisher;
        self
    }

    /// Sets the content payload and its media type.
    #[must_use]
    pub fn with_content(mut self, content_type: impl Into<String>, content: Value) -> Self {
        self.content_type = content_type.into();
        self.content = content;
        self
    }
}
