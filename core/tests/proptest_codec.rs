//! Property-based tests for the interface-list codec.

use proptest::prelude::*;
use zone_core::codec::{collapse, expand, from_payload, to_payload};
use zone_core::{ZoneConfig, ZoneError, ZoneMember};

/// Interface names as the device spells them: `port1`, `wan2`, `internal`, ...
fn arb_interface() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_.-]{0,14}"
}

fn arb_interfaces() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(arb_interface(), 0..32)
}

proptest! {
    #[test]
    fn expand_of_collapse_is_identity(names in arb_interfaces()) {
        let members = collapse(&names).unwrap();
        prop_assert_eq!(expand(&members), names);
    }

    #[test]
    fn collapse_of_expand_is_identity(names in arb_interfaces()) {
        let members: Vec<ZoneMember> = names
            .iter()
            .map(|n| ZoneMember { interface_name: n.clone() })
            .collect();
        prop_assert_eq!(collapse(&expand(&members)).unwrap(), members);
    }

    #[test]
    fn any_empty_entry_fails_validation(
        names in arb_interfaces(),
        idx in any::<prop::sample::Index>(),
    ) {
        let mut names = names;
        let at = idx.index(names.len() + 1);
        names.insert(at, String::new());
        let is_validation = matches!(collapse(&names), Err(ZoneError::Validation(_)));
        prop_assert!(is_validation);
    }

    #[test]
    fn payload_round_trip_preserves_zone(
        name in "[a-z][a-z0-9-]{0,20}",
        description in ".{0,40}",
        intrazone in prop_oneof!["allow", "deny"],
        interfaces in arb_interfaces(),
    ) {
        let zone = ZoneConfig { name, description, intrazone, interfaces };
        prop_assert_eq!(from_payload(to_payload(&zone).unwrap()), zone);
    }
}
