use crate::error::DocketError;
use crate::vendors::schema::VendorProfile;

const BILLROY_JSON: &str = include_str!("../../../../profiles/billroy.json");
const CPS_JSON: &str = include_str!("../../../../profiles/cps.json");

/// Built-in vendor profiles, in detection priority order.
pub const PRESETS: &[&str] = &["billroy", "cps"];

/// Load a built-in vendor profile by name.
pub fn load_preset(name: &str) -> Result<VendorProfile, DocketError> {
    match name {
        "billroy" => {
            let profile: VendorProfile = serde_json::from_str(BILLROY_JSON)?;
            Ok(profile)
        }
        "cps" => {
            let profile: VendorProfile = serde_json::from_str(CPS_JSON)?;
            Ok(profile)
        }
        _ => Err(DocketError::ProfileInvalid(format!(
            "unknown preset '{}'. Available: {}",
            name,
            PRESETS.join(", ")
        ))),
    }
}

/// Load every built-in profile, in detection priority order.
pub fn all_presets() -> Result<Vec<VendorProfile>, DocketError> {
    PRESETS.iter().map(|name| load_preset(name)).collect()
}
