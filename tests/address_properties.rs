//! Integration tests for the public address API.
//!
//! Covers classification totality, equality laws, canonicalization,
//! wrapped-native substitution, conditional replacement, EVM-only ordering,
//! membership and construction failures.

use multichain_address::actions::{gt, gte, in_array, lt, lte, replace_address, require_wrapped};
use multichain_address::network::{self, Network, BNB, MAINNET, TRON};
use multichain_address::special::{self, WRAPPED_NATIVE_ADDRESSES};
use multichain_address::{classify, equal, Address, AddressError, AddressFamily};

// ============================================================================
// Test Helpers
// ============================================================================

const EVM_A: &str = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";
const EVM_B: &str = "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359";
const TRON_ADDR: &str = "TNUC9Qb1rRpS5CbWLmNMxXBjyFoydXjWFR";
const TON_RAW: &str = "0:83dfd552e63729b472fcbcc8c45ebcc6691702558b68ec7527e1ba403a0f31a8";
const TON_FRIENDLY: &str = "EQCD39VS5jcptHL8vMjEXrzGaRcCVYto7HUn4bpAOg8xqB2N";

fn sample_inputs() -> Vec<String> {
    vec![
        EVM_A.to_string(),
        EVM_B.to_lowercase(),
        TRON_ADDR.to_string(),
        TON_RAW.to_string(),
        TON_FRIENDLY.to_string(),
        String::new(),
        "0x".to_string(),
        "not-an-address".to_string(),
        "T".repeat(34),
        "_".repeat(50),
        "0:zz".to_string(),
    ]
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

// ============================================================================
// Classification
// ============================================================================

#[test]
fn test_classification_is_total() {
    for input in sample_inputs() {
        let family = classify(&input);
        assert!(matches!(
            family,
            AddressFamily::Evm | AddressFamily::Tron | AddressFamily::Ton | AddressFamily::Unknown
        ));
    }
}

#[test]
fn test_sentinels_classify_to_expected_family() {
    assert_eq!(Address::zero_address().family(), AddressFamily::Evm);
    assert_eq!(Address::evm_burn_address().family(), AddressFamily::Evm);
    assert_eq!(Address::evm_native_address().family(), AddressFamily::Evm);
    assert_eq!(Address::tron_zero_address().family(), AddressFamily::Tron);
    assert_eq!(
        Address::tron_contract_creation_address().family(),
        AddressFamily::Tron
    );
    assert_eq!(
        Address::ton_bounceable_native_address().family(),
        AddressFamily::Ton
    );
    for (name, literal) in WRAPPED_NATIVE_ADDRESSES {
        assert_ne!(classify(literal), AddressFamily::Unknown, "{}", name);
    }
}

// ============================================================================
// Equality
// ============================================================================

#[test]
fn test_equality_reflexive_symmetric_family_exclusive() {
    let inputs = sample_inputs();
    for a in &inputs {
        if classify(a) != AddressFamily::Unknown {
            assert!(equal(a, a), "reflexive for {}", a);
        }
        for b in &inputs {
            assert_eq!(equal(a, b), equal(b, a), "symmetric for {} / {}", a, b);
            if classify(a) != classify(b) {
                assert!(!equal(a, b), "family exclusive for {} / {}", a, b);
            }
        }
    }
}

#[test]
fn test_hex_equality_is_case_insensitive() {
    assert!(equal(
        "0xABCDEF0123456789ABCDEF0123456789ABCDEF01",
        "0xabcdef0123456789abcdef0123456789abcdef01"
    ));
}

#[test]
fn test_round_trip_canonicalization_is_idempotent() {
    for input in sample_inputs() {
        let Ok(first) = Address::new(&input) else {
            continue;
        };
        let second = Address::parse(first.to_string().as_str()).unwrap();
        assert_eq!(second.to_string(), first.to_string());
    }
}

// ============================================================================
// Wrapped-native substitution
// ============================================================================

#[test]
fn test_require_wrapped_native_substitution() {
    init_tracing();

    for network in [&BNB, &MAINNET, &TRON] {
        let registered = special::default_registry().wrapped_native_of(network);
        let wrapped = require_wrapped(Address::evm_native_address(), network);
        if network.name() == "tron" {
            // TRON's wrapped token is looked up from the TRON zero address too
            assert_eq!(
                require_wrapped(Address::tron_zero_address(), network).to_string(),
                registered.to_string()
            );
        }
        assert_eq!(wrapped.to_string(), registered.to_string());
        assert_ne!(wrapped.to_string(), Address::zero_address().to_string());
    }
}

#[test]
fn test_require_wrapped_unregistered_network_falls_back_to_zero() {
    init_tracing();

    let unknown = Network::new("holesky", 17000);
    let wrapped = require_wrapped(Address::evm_native_address(), &unknown);
    assert_eq!(wrapped.to_string(), Address::zero_address().to_string());
}

#[test]
fn test_require_wrapped_zero_address_on_bnb() {
    let bnb_wrapped = Address::wrapped_of(&network::BNB);
    let address = require_wrapped(Address::zero_address(), &network::BNB);

    assert_eq!(bnb_wrapped.to_string(), address.to_string());
    assert_ne!(bnb_wrapped.to_string(), Address::zero_address().to_string());
    assert!(!address.is_native());
}

// ============================================================================
// Conditional replacement
// ============================================================================

#[test]
fn test_replace_address_conditional_substitution() {
    let burn = Address::evm_burn_address();
    let zero = Address::zero_address();

    let replaced = replace_address(burn, burn, |_| zero.clone());
    assert_eq!(replaced.to_string(), zero.to_string());

    let kept = replace_address(burn, zero, |_| zero.clone());
    assert_eq!(kept.to_string(), burn.to_string());
}

// ============================================================================
// Ordering
// ============================================================================

#[test]
fn test_ordering_matches_integer_comparison() {
    let a = u128::from_str_radix(&EVM_A[2..34], 16).unwrap();
    let b = u128::from_str_radix(&EVM_B[2..34], 16).unwrap();
    // Leading 16 bytes differ, so they decide the full 20-byte order
    assert_ne!(a, b);

    assert_eq!(lt(EVM_A, EVM_B), a < b);
    assert_eq!(gt(EVM_A, EVM_B), a > b);
    assert_eq!(lt(EVM_B, EVM_A), b < a);
    assert!(lte(EVM_A, &EVM_A.to_lowercase()));
    assert!(gte(EVM_B, &EVM_B.to_uppercase().replacen("0X", "0x", 1)));
}

#[test]
fn test_ordering_is_false_outside_hex_family() {
    let missing: Option<&str> = None;
    assert!(!lt(EVM_A, TRON_ADDR));
    assert!(!gt(TRON_ADDR, EVM_A));
    assert!(!lt(TON_RAW, TON_FRIENDLY));
    assert!(!lt(EVM_A, "not-an-address"));
    assert!(!lt(&missing, EVM_A));
    assert!(!gt(EVM_A, &missing));
}

// ============================================================================
// Membership
// ============================================================================

#[test]
fn test_in_array_case_insensitive_and_null_tolerant() {
    let candidates = vec![
        Some(EVM_A.to_uppercase().replacen("0X", "0x", 1)),
        None,
        Some(EVM_A.to_lowercase()),
        Some(TRON_ADDR.to_string()),
    ];

    assert!(in_array(EVM_A, &candidates));
    assert!(in_array(TRON_ADDR, &candidates));
    assert!(!in_array(EVM_B, &candidates));
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_construction_rejects_invalid_input() {
    assert!(matches!(
        Address::parse(""),
        Err(AddressError::InvalidAddress(_))
    ));
    assert!(matches!(
        Address::parse("not-an-address"),
        Err(AddressError::InvalidAddress(_))
    ));
}

#[test]
fn test_parse_from_address_is_identity() {
    let address = Address::parse(Address::evm_native_address()).unwrap();
    assert_eq!(address.to_string(), Address::evm_native_address().to_string());
    assert_eq!(&address, Address::evm_native_address());
}

#[test]
fn test_env_registry_feeds_require_wrapped() {
    let registry = special::load_from_vars(|key| match key {
        "WRAPPED_NATIVE_COUNT" => Some("1".to_string()),
        "WRAPPED_NATIVE_1_NETWORK" => Some("holesky".to_string()),
        "WRAPPED_NATIVE_1_ADDRESS" => {
            Some("0x94373a4919B3240D86eA41593D5eBa789FEF3848".to_string())
        }
        _ => None,
    })
    .unwrap();

    let holesky = Network::new("holesky", 17000);
    let wrapped = Address::zero_address().require_wrapped_with(&registry, &holesky);
    assert_eq!(
        wrapped.to_string(),
        "0x94373a4919b3240d86ea41593d5eba789fef3848"
    );
    assert!(!wrapped.is_wrapped(&holesky));
}
