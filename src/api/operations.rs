/// API操作の記述子テーブル
///
/// YouTube Content ID API (youtubePartner v1) の全操作を静的データとして定義します。
/// URLテンプレートはクライアントのルートURL（デフォルト: https://www.googleapis.com/）
/// からの相対パスです。
use crate::api::descriptor::{HttpMethod, MethodDescriptor};

/// API共通のパス接頭辞を前置する
macro_rules! path {
    ($suffix:literal) => {
        concat!("youtube/partner/v1/", $suffix)
    };
}

// assetLabels
pub const ASSET_LABELS_INSERT: MethodDescriptor = MethodDescriptor::new(
    "assetLabels.insert",
    HttpMethod::Post,
    path!("assetLabels"),
    &[],
    &[],
);

pub const ASSET_LABELS_LIST: MethodDescriptor = MethodDescriptor::new(
    "assetLabels.list",
    HttpMethod::Get,
    path!("assetLabels"),
    &[],
    &[],
);

// assetMatchPolicy
pub const ASSET_MATCH_POLICY_GET: MethodDescriptor = MethodDescriptor::new(
    "assetMatchPolicy.get",
    HttpMethod::Get,
    path!("assets/{assetId}/matchPolicy"),
    &["assetId"],
    &["assetId"],
);

pub const ASSET_MATCH_POLICY_PATCH: MethodDescriptor = MethodDescriptor::new(
    "assetMatchPolicy.patch",
    HttpMethod::Patch,
    path!("assets/{assetId}/matchPolicy"),
    &["assetId"],
    &["assetId"],
);

pub const ASSET_MATCH_POLICY_UPDATE: MethodDescriptor = MethodDescriptor::new(
    "assetMatchPolicy.update",
    HttpMethod::Put,
    path!("assets/{assetId}/matchPolicy"),
    &["assetId"],
    &["assetId"],
);

// assetRelationships
pub const ASSET_RELATIONSHIPS_DELETE: MethodDescriptor = MethodDescriptor::new(
    "assetRelationships.delete",
    HttpMethod::Delete,
    path!("assetRelationships/{assetRelationshipId}"),
    &["assetRelationshipId"],
    &["assetRelationshipId"],
);

pub const ASSET_RELATIONSHIPS_INSERT: MethodDescriptor = MethodDescriptor::new(
    "assetRelationships.insert",
    HttpMethod::Post,
    path!("assetRelationships"),
    &[],
    &[],
);

pub const ASSET_RELATIONSHIPS_LIST: MethodDescriptor = MethodDescriptor::new(
    "assetRelationships.list",
    HttpMethod::Get,
    path!("assetRelationships"),
    &["assetId"],
    &[],
);

// assetSearch
pub const ASSET_SEARCH_LIST: MethodDescriptor = MethodDescriptor::new(
    "assetSearch.list",
    HttpMethod::Get,
    path!("assetSearch"),
    &[],
    &[],
);

// assetShares
pub const ASSET_SHARES_LIST: MethodDescriptor = MethodDescriptor::new(
    "assetShares.list",
    HttpMethod::Get,
    path!("assetShares"),
    &["assetId"],
    &[],
);

// assets
pub const ASSETS_GET: MethodDescriptor = MethodDescriptor::new(
    "assets.get",
    HttpMethod::Get,
    path!("assets/{assetId}"),
    &["assetId"],
    &["assetId"],
);

pub const ASSETS_INSERT: MethodDescriptor = MethodDescriptor::new(
    "assets.insert",
    HttpMethod::Post,
    path!("assets"),
    &[],
    &[],
);

pub const ASSETS_LIST: MethodDescriptor = MethodDescriptor::new(
    "assets.list",
    HttpMethod::Get,
    path!("assets"),
    &["id"],
    &[],
);

pub const ASSETS_PATCH: MethodDescriptor = MethodDescriptor::new(
    "assets.patch",
    HttpMethod::Patch,
    path!("assets/{assetId}"),
    &["assetId"],
    &["assetId"],
);

pub const ASSETS_UPDATE: MethodDescriptor = MethodDescriptor::new(
    "assets.update",
    HttpMethod::Put,
    path!("assets/{assetId}"),
    &["assetId"],
    &["assetId"],
);

// campaigns
pub const CAMPAIGNS_DELETE: MethodDescriptor = MethodDescriptor::new(
    "campaigns.delete",
    HttpMethod::Delete,
    path!("campaigns/{campaignId}"),
    &["campaignId"],
    &["campaignId"],
);

pub const CAMPAIGNS_GET: MethodDescriptor = MethodDescriptor::new(
    "campaigns.get",
    HttpMethod::Get,
    path!("campaigns/{campaignId}"),
    &["campaignId"],
    &["campaignId"],
);

pub const CAMPAIGNS_INSERT: MethodDescriptor = MethodDescriptor::new(
    "campaigns.insert",
    HttpMethod::Post,
    path!("campaigns"),
    &[],
    &[],
);

pub const CAMPAIGNS_LIST: MethodDescriptor = MethodDescriptor::new(
    "campaigns.list",
    HttpMethod::Get,
    path!("campaigns"),
    &[],
    &[],
);

pub const CAMPAIGNS_PATCH: MethodDescriptor = MethodDescriptor::new(
    "campaigns.patch",
    HttpMethod::Patch,
    path!("campaigns/{campaignId}"),
    &["campaignId"],
    &["campaignId"],
);

pub const CAMPAIGNS_UPDATE: MethodDescriptor = MethodDescriptor::new(
    "campaigns.update",
    HttpMethod::Put,
    path!("campaigns/{campaignId}"),
    &["campaignId"],
    &["campaignId"],
);

// claimHistory
pub const CLAIM_HISTORY_GET: MethodDescriptor = MethodDescriptor::new(
    "claimHistory.get",
    HttpMethod::Get,
    path!("claimHistory/{claimId}"),
    &["claimId"],
    &["claimId"],
);

// claimSearch
pub const CLAIM_SEARCH_LIST: MethodDescriptor = MethodDescriptor::new(
    "claimSearch.list",
    HttpMethod::Get,
    path!("claimSearch"),
    &[],
    &[],
);

// claims
pub const CLAIMS_GET: MethodDescriptor = MethodDescriptor::new(
    "claims.get",
    HttpMethod::Get,
    path!("claims/{claimId}"),
    &["claimId"],
    &["claimId"],
);

pub const CLAIMS_INSERT: MethodDescriptor = MethodDescriptor::new(
    "claims.insert",
    HttpMethod::Post,
    path!("claims"),
    &[],
    &[],
);

pub const CLAIMS_LIST: MethodDescriptor = MethodDescriptor::new(
    "claims.list",
    HttpMethod::Get,
    path!("claims"),
    &[],
    &[],
);

pub const CLAIMS_PATCH: MethodDescriptor = MethodDescriptor::new(
    "claims.patch",
    HttpMethod::Patch,
    path!("claims/{claimId}"),
    &["claimId"],
    &["claimId"],
);

pub const CLAIMS_UPDATE: MethodDescriptor = MethodDescriptor::new(
    "claims.update",
    HttpMethod::Put,
    path!("claims/{claimId}"),
    &["claimId"],
    &["claimId"],
);

// contentOwnerAdvertisingOptions
pub const CONTENT_OWNER_ADVERTISING_OPTIONS_GET: MethodDescriptor = MethodDescriptor::new(
    "contentOwnerAdvertisingOptions.get",
    HttpMethod::Get,
    path!("contentOwnerAdvertisingOptions"),
    &[],
    &[],
);

pub const CONTENT_OWNER_ADVERTISING_OPTIONS_PATCH: MethodDescriptor = MethodDescriptor::new(
    "contentOwnerAdvertisingOptions.patch",
    HttpMethod::Patch,
    path!("contentOwnerAdvertisingOptions"),
    &[],
    &[],
);

pub const CONTENT_OWNER_ADVERTISING_OPTIONS_UPDATE: MethodDescriptor = MethodDescriptor::new(
    "contentOwnerAdvertisingOptions.update",
    HttpMethod::Put,
    path!("contentOwnerAdvertisingOptions"),
    &[],
    &[],
);

// contentOwners
pub const CONTENT_OWNERS_GET: MethodDescriptor = MethodDescriptor::new(
    "contentOwners.get",
    HttpMethod::Get,
    path!("contentOwners/{contentOwnerId}"),
    &["contentOwnerId"],
    &["contentOwnerId"],
);

pub const CONTENT_OWNERS_LIST: MethodDescriptor = MethodDescriptor::new(
    "contentOwners.list",
    HttpMethod::Get,
    path!("contentOwners"),
    &[],
    &[],
);

// liveCuepoints
pub const LIVE_CUEPOINTS_INSERT: MethodDescriptor = MethodDescriptor::new(
    "liveCuepoints.insert",
    HttpMethod::Post,
    path!("liveCuepoints"),
    &["channelId"],
    &[],
);

// metadataHistory
pub const METADATA_HISTORY_LIST: MethodDescriptor = MethodDescriptor::new(
    "metadataHistory.list",
    HttpMethod::Get,
    path!("metadataHistory"),
    &["assetId"],
    &[],
);

// orders
pub const ORDERS_DELETE: MethodDescriptor = MethodDescriptor::new(
    "orders.delete",
    HttpMethod::Delete,
    path!("orders/{orderId}"),
    &["orderId"],
    &["orderId"],
);

pub const ORDERS_GET: MethodDescriptor = MethodDescriptor::new(
    "orders.get",
    HttpMethod::Get,
    path!("orders/{orderId}"),
    &["orderId"],
    &["orderId"],
);

pub const ORDERS_INSERT: MethodDescriptor = MethodDescriptor::new(
    "orders.insert",
    HttpMethod::Post,
    path!("orders"),
    &[],
    &[],
);

pub const ORDERS_LIST: MethodDescriptor = MethodDescriptor::new(
    "orders.list",
    HttpMethod::Get,
    path!("orders"),
    &[],
    &[],
);

pub const ORDERS_PATCH: MethodDescriptor = MethodDescriptor::new(
    "orders.patch",
    HttpMethod::Patch,
    path!("orders/{orderId}"),
    &["orderId"],
    &["orderId"],
);

pub const ORDERS_UPDATE: MethodDescriptor = MethodDescriptor::new(
    "orders.update",
    HttpMethod::Put,
    path!("orders/{orderId}"),
    &["orderId"],
    &["orderId"],
);

// ownership
pub const OWNERSHIP_GET: MethodDescriptor = MethodDescriptor::new(
    "ownership.get",
    HttpMethod::Get,
    path!("assets/{assetId}/ownership"),
    &["assetId"],
    &["assetId"],
);

pub const OWNERSHIP_PATCH: MethodDescriptor = MethodDescriptor::new(
    "ownership.patch",
    HttpMethod::Patch,
    path!("assets/{assetId}/ownership"),
    &["assetId"],
    &["assetId"],
);

pub const OWNERSHIP_UPDATE: MethodDescriptor = MethodDescriptor::new(
    "ownership.update",
    HttpMethod::Put,
    path!("assets/{assetId}/ownership"),
    &["assetId"],
    &["assetId"],
);

// ownershipHistory
pub const OWNERSHIP_HISTORY_LIST: MethodDescriptor = MethodDescriptor::new(
    "ownershipHistory.list",
    HttpMethod::Get,
    path!("ownershipHistory"),
    &["assetId"],
    &[],
);

// policies
pub const POLICIES_GET: MethodDescriptor = MethodDescriptor::new(
    "policies.get",
    HttpMethod::Get,
    path!("policies/{policyId}"),
    &["policyId"],
    &["policyId"],
);

pub const POLICIES_INSERT: MethodDescriptor = MethodDescriptor::new(
    "policies.insert",
    HttpMethod::Post,
    path!("policies"),
    &[],
    &[],
);

pub const POLICIES_LIST: MethodDescriptor = MethodDescriptor::new(
    "policies.list",
    HttpMethod::Get,
    path!("policies"),
    &[],
    &[],
);

pub const POLICIES_PATCH: MethodDescriptor = MethodDescriptor::new(
    "policies.patch",
    HttpMethod::Patch,
    path!("policies/{policyId}"),
    &["policyId"],
    &["policyId"],
);

pub const POLICIES_UPDATE: MethodDescriptor = MethodDescriptor::new(
    "policies.update",
    HttpMethod::Put,
    path!("policies/{policyId}"),
    &["policyId"],
    &["policyId"],
);

// publishers
pub const PUBLISHERS_GET: MethodDescriptor = MethodDescriptor::new(
    "publishers.get",
    HttpMethod::Get,
    path!("publishers/{publisherId}"),
    &["publisherId"],
    &["publisherId"],
);

pub const PUBLISHERS_LIST: MethodDescriptor = MethodDescriptor::new(
    "publishers.list",
    HttpMethod::Get,
    path!("publishers"),
    &[],
    &[],
);

// referenceConflicts
pub const REFERENCE_CONFLICTS_GET: MethodDescriptor = MethodDescriptor::new(
    "referenceConflicts.get",
    HttpMethod::Get,
    path!("referenceConflicts/{referenceConflictId}"),
    &["referenceConflictId"],
    &["referenceConflictId"],
);

pub const REFERENCE_CONFLICTS_LIST: MethodDescriptor = MethodDescriptor::new(
    "referenceConflicts.list",
    HttpMethod::Get,
    path!("referenceConflicts"),
    &[],
    &[],
);

// references
pub const REFERENCES_GET: MethodDescriptor = MethodDescriptor::new(
    "references.get",
    HttpMethod::Get,
    path!("references/{referenceId}"),
    &["referenceId"],
    &["referenceId"],
);

pub const REFERENCES_INSERT: MethodDescriptor = MethodDescriptor::new(
    "references.insert",
    HttpMethod::Post,
    path!("references"),
    &[],
    &[],
)
.with_media_upload("upload/youtube/partner/v1/references");

pub const REFERENCES_LIST: MethodDescriptor = MethodDescriptor::new(
    "references.list",
    HttpMethod::Get,
    path!("references"),
    &[],
    &[],
);

pub const REFERENCES_PATCH: MethodDescriptor = MethodDescriptor::new(
    "references.patch",
    HttpMethod::Patch,
    path!("references/{referenceId}"),
    &["referenceId"],
    &["referenceId"],
);

pub const REFERENCES_UPDATE: MethodDescriptor = MethodDescriptor::new(
    "references.update",
    HttpMethod::Put,
    path!("references/{referenceId}"),
    &["referenceId"],
    &["referenceId"],
);

// validator
pub const VALIDATOR_VALIDATE: MethodDescriptor = MethodDescriptor::new(
    "validator.validate",
    HttpMethod::Post,
    path!("validator"),
    &[],
    &[],
);

// videoAdvertisingOptions
pub const VIDEO_ADVERTISING_OPTIONS_GET: MethodDescriptor = MethodDescriptor::new(
    "videoAdvertisingOptions.get",
    HttpMethod::Get,
    path!("videoAdvertisingOptions/{videoId}"),
    &["videoId"],
    &["videoId"],
);

pub const VIDEO_ADVERTISING_OPTIONS_GET_ENABLED_ADS: MethodDescriptor = MethodDescriptor::new(
    "videoAdvertisingOptions.getEnabledAds",
    HttpMethod::Get,
    path!("videoAdvertisingOptions/{videoId}/getEnabledAds"),
    &["videoId"],
    &["videoId"],
);

pub const VIDEO_ADVERTISING_OPTIONS_PATCH: MethodDescriptor = MethodDescriptor::new(
    "videoAdvertisingOptions.patch",
    HttpMethod::Patch,
    path!("videoAdvertisingOptions/{videoId}"),
    &["videoId"],
    &["videoId"],
);

pub const VIDEO_ADVERTISING_OPTIONS_UPDATE: MethodDescriptor = MethodDescriptor::new(
    "videoAdvertisingOptions.update",
    HttpMethod::Put,
    path!("videoAdvertisingOptions/{videoId}"),
    &["videoId"],
    &["videoId"],
);

// whitelists
pub const WHITELISTS_DELETE: MethodDescriptor = MethodDescriptor::new(
    "whitelists.delete",
    HttpMethod::Delete,
    path!("whitelists/{id}"),
    &["id"],
    &["id"],
);

pub const WHITELISTS_GET: MethodDescriptor = MethodDescriptor::new(
    "whitelists.get",
    HttpMethod::Get,
    path!("whitelists/{id}"),
    &["id"],
    &["id"],
);

pub const WHITELISTS_INSERT: MethodDescriptor = MethodDescriptor::new(
    "whitelists.insert",
    HttpMethod::Post,
    path!("whitelists"),
    &[],
    &[],
);

pub const WHITELISTS_LIST: MethodDescriptor = MethodDescriptor::new(
    "whitelists.list",
    HttpMethod::Get,
    path!("whitelists"),
    &[],
    &[],
);

/// 全操作の一覧（リソース名、操作名の順）
pub const ALL: &[MethodDescriptor] = &[
    ASSET_LABELS_INSERT,
    ASSET_LABELS_LIST,
    ASSET_MATCH_POLICY_GET,
    ASSET_MATCH_POLICY_PATCH,
    ASSET_MATCH_POLICY_UPDATE,
    ASSET_RELATIONSHIPS_DELETE,
    ASSET_RELATIONSHIPS_INSERT,
    ASSET_RELATIONSHIPS_LIST,
    ASSET_SEARCH_LIST,
    ASSET_SHARES_LIST,
    ASSETS_GET,
    ASSETS_INSERT,
    ASSETS_LIST,
    ASSETS_PATCH,
    ASSETS_UPDATE,
    CAMPAIGNS_DELETE,
    CAMPAIGNS_GET,
    CAMPAIGNS_INSERT,
    CAMPAIGNS_LIST,
    CAMPAIGNS_PATCH,
    CAMPAIGNS_UPDATE,
    CLAIM_HISTORY_GET,
    CLAIM_SEARCH_LIST,
    CLAIMS_GET,
    CLAIMS_INSERT,
    CLAIMS_LIST,
    CLAIMS_PATCH,
    CLAIMS_UPDATE,
    CONTENT_OWNER_ADVERTISING_OPTIONS_GET,
    CONTENT_OWNER_ADVERTISING_OPTIONS_PATCH,
    CONTENT_OWNER_ADVERTISING_OPTIONS_UPDATE,
    CONTENT_OWNERS_GET,
    CONTENT_OWNERS_LIST,
    LIVE_CUEPOINTS_INSERT,
    METADATA_HISTORY_LIST,
    ORDERS_DELETE,
    ORDERS_GET,
    ORDERS_INSERT,
    ORDERS_LIST,
    ORDERS_PATCH,
    ORDERS_UPDATE,
    OWNERSHIP_GET,
    OWNERSHIP_PATCH,
    OWNERSHIP_UPDATE,
    OWNERSHIP_HISTORY_LIST,
    POLICIES_GET,
    POLICIES_INSERT,
    POLICIES_LIST,
    POLICIES_PATCH,
    POLICIES_UPDATE,
    PUBLISHERS_GET,
    PUBLISHERS_LIST,
    REFERENCE_CONFLICTS_GET,
    REFERENCE_CONFLICTS_LIST,
    REFERENCES_GET,
    REFERENCES_INSERT,
    REFERENCES_LIST,
    REFERENCES_PATCH,
    REFERENCES_UPDATE,
    VALIDATOR_VALIDATE,
    VIDEO_ADVERTISING_OPTIONS_GET,
    VIDEO_ADVERTISING_OPTIONS_GET_ENABLED_ADS,
    VIDEO_ADVERTISING_OPTIONS_PATCH,
    VIDEO_ADVERTISING_OPTIONS_UPDATE,
    WHITELISTS_DELETE,
    WHITELISTS_GET,
    WHITELISTS_INSERT,
    WHITELISTS_LIST,
];

/// 論理的な操作名（例: "assets.get"）から記述子を探す
pub fn find(name: &str) -> Option<&'static MethodDescriptor> {
    ALL.iter().find(|descriptor| descriptor.name == name)
}
