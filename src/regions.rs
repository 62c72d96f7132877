//! Static catalog of AWS deployment regions.
//!
//! The remote service's published region identifiers, bundled at a pinned SDK
//! snapshot rather than fetched at runtime. Membership is a case-sensitive
//! exact match on the canonical system name (e.g. `eu-west-1`).

/// Region identifiers across the aws, aws-cn, and aws-us-gov partitions.
const KNOWN_REGIONS: &[&str] = &[
    "af-south-1",
    "ap-east-1",
    "ap-northeast-1",
    "ap-northeast-2",
    "ap-northeast-3",
    "ap-south-1",
    "ap-south-2",
    "ap-southeast-1",
    "ap-southeast-2",
    "ap-southeast-3",
    "ap-southeast-4",
    "ca-central-1",
    "ca-west-1",
    "cn-north-1",
    "cn-northwest-1",
    "eu-central-1",
    "eu-central-2",
    "eu-north-1",
    "eu-south-1",
    "eu-south-2",
    "eu-west-1",
    "eu-west-2",
    "eu-west-3",
    "il-central-1",
    "me-central-1",
    "me-south-1",
    "sa-east-1",
    "us-east-1",
    "us-east-2",
    "us-gov-east-1",
    "us-gov-west-1",
    "us-west-1",
    "us-west-2",
];

/// Check whether `identifier` names a known deployment region of the remote
/// service. Unknown or absent identifiers are not regions.
pub fn is_known_region(identifier: Option<&str>) -> bool {
    match identifier {
        Some(id) => KNOWN_REGIONS.binary_search(&id).is_ok(),
        None => false,
    }
}

/// The full bundled region table, for diagnostics.
pub fn known_regions() -> &'static [&'static str] {
    KNOWN_REGIONS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_sorted_for_binary_search() {
        let mut sorted = KNOWN_REGIONS.to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, KNOWN_REGIONS);
    }

    #[test]
    fn valid_region_is_known() {
        assert!(is_known_region(Some("eu-west-1")));
        assert!(is_known_region(Some("us-gov-west-1")));
    }

    #[test]
    fn invalid_region_is_unknown() {
        assert!(!is_known_region(Some("XXX")));
        assert!(!is_known_region(Some("")));
    }

    #[test]
    fn absent_region_is_unknown() {
        assert!(!is_known_region(None));
    }

    #[test]
    fn match_is_case_sensitive() {
        assert!(!is_known_region(Some("EU-WEST-1")));
    }
}
