use serde::{Deserialize, Serialize};

/// Host-supplied engine configuration. Everything here is adjustable
/// without a code change; the defaults are the standard SAYC card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Convention toggles.
    pub stayman: bool,
    pub jacoby_transfers: bool,
    pub blackwood: bool,
    pub michaels: bool,
    pub negative_doubles: bool,
    pub takeout_doubles: bool,

    /// Maximum levels a non-convention candidate may jump above the
    /// current auction level before the safety layer substitutes Pass.
    pub escalation_delta: u8,
    /// Combined-strength floor for a six-level contract.
    pub slam_hcp: u8,
    /// Combined-strength floor for a seven-level contract.
    pub grand_slam_hcp: u8,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            stayman: true,
            jacoby_transfers: true,
            blackwood: true,
            michaels: true,
            negative_doubles: true,
            takeout_doubles: true,
            escalation_delta: 2,
            slam_hcp: 33,
            grand_slam_hcp: 37,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_sayc() {
        let config = EngineConfig::default();
        assert!(config.stayman);
        assert_eq!(config.escalation_delta, 2);
        assert_eq!(config.slam_hcp, 33);
        assert_eq!(config.grand_slam_hcp, 37);
    }

    #[test]
    fn test_partial_deserialization_fills_defaults() {
        let config: EngineConfig = serde_json::from_str(r#"{"michaels": false}"#).unwrap();
        assert!(!config.michaels);
        assert!(config.blackwood);
        assert_eq!(config.grand_slam_hcp, 37);
    }
}
