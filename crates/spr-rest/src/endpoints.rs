//! Declarative resource endpoint table.
//!
//! Sprinklr spreads equivalent CRUD surfaces across two API versions with
//! per-resource collection paths. Rather than one hand-written wrapper per
//! resource and verb, everything routes through this table: a resource
//! names its API version and collection path, and the generic operations
//! in [`crate::client`] assemble `api/{version}/{collection}[/{id}]` from
//! it.

/// A Sprinklr API version path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiVersion {
    V1,
    V2,
}

impl ApiVersion {
    /// The URL path segment.
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiVersion::V1 => "v1",
            ApiVersion::V2 => "v2",
        }
    }
}

/// A resource reachable through the generic CRUD operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceSpec {
    /// Human-readable name, used in tracing.
    pub name: &'static str,
    /// Which API version serves this resource.
    pub version: ApiVersion,
    /// The collection path under `api/{version}/`.
    pub collection: &'static str,
}

impl ResourceSpec {
    /// The collection path relative to the version segment.
    pub fn collection_path(&self) -> String {
        self.collection.to_string()
    }

    /// The item path for a given id.
    pub fn item_path(&self, id: &str) -> String {
        format!("{}/{}", self.collection, urlencoding::encode(id))
    }
}

/// Customer service cases.
pub const CASE: ResourceSpec = ResourceSpec {
    name: "case",
    version: ApiVersion::V2,
    collection: "case",
};

/// Marketing campaigns.
pub const CAMPAIGN: ResourceSpec = ResourceSpec {
    name: "campaign",
    version: ApiVersion::V2,
    collection: "campaign",
};

/// Digital assets (the SAM library). Still served by the v1 API.
pub const ASSET: ResourceSpec = ResourceSpec {
    name: "asset",
    version: ApiVersion::V1,
    collection: "sam",
};

/// Asset groups.
pub const ASSET_GROUP: ResourceSpec = ResourceSpec {
    name: "asset-group",
    version: ApiVersion::V2,
    collection: "asset-group",
};

/// Social profiles.
pub const PROFILE: ResourceSpec = ResourceSpec {
    name: "profile",
    version: ApiVersion::V2,
    collection: "profile",
};

/// Channel accounts.
pub const ACCOUNT: ResourceSpec = ResourceSpec {
    name: "account",
    version: ApiVersion::V2,
    collection: "account",
};

/// Custom field definitions.
pub const CUSTOM_FIELD: ResourceSpec = ResourceSpec {
    name: "custom-field",
    version: ApiVersion::V1,
    collection: "customfield",
};

/// Marketplace extensions.
pub const EXTENSION: ResourceSpec = ResourceSpec {
    name: "extension",
    version: ApiVersion::V1,
    collection: "extension",
};

/// Product catalog entries.
pub const PRODUCT: ResourceSpec = ResourceSpec {
    name: "product",
    version: ApiVersion::V1,
    collection: "product",
};

/// Webhook subscriptions.
pub const WEBHOOK_SUBSCRIPTION: ResourceSpec = ResourceSpec {
    name: "webhook-subscription",
    version: ApiVersion::V2,
    collection: "webhook-subscriptions",
};
