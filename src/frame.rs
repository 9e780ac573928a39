use serde::Deserialize;

/// Interaction callback posted by a frame client. Everything lives under
/// `untrustedData`; the signed `trustedData` sibling is accepted and ignored.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FramePayload {
    pub untrusted_data: InteractionData,
}

/// Absent fields fall back to their zero values so that a partial payload
/// still decodes; only `button_index` drives any behavior.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InteractionData {
    pub fid: u64,
    pub url: String,
    pub message_hash: String,
    pub timestamp: i64,
    pub network: i32,
    pub button_index: i32,
    pub cast_id: CastId,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CastId {
    pub fid: u64,
    pub hash: String,
}
