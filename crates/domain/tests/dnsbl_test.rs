use ferrous_dnsbl_domain::dnsbl::{
    join_response_codes, query_name, reverse_octets, validate_zone, DEFAULT_ZONE,
};
use ferrous_dnsbl_domain::DomainError;
use std::net::IpAddr;

#[test]
fn test_reverse_octets() {
    assert_eq!(reverse_octets("1.2.3.4").unwrap(), "4.3.2.1");
    assert_eq!(reverse_octets("127.0.0.2").unwrap(), "2.0.0.127");
}

#[test]
fn test_reverse_octets_is_involutive() {
    for addr in ["1.2.3.4", "10.0.0.1", "192.168.100.254", "255.255.255.255", "0.0.0.0"] {
        let twice = reverse_octets(&reverse_octets(addr).unwrap()).unwrap();
        assert_eq!(twice, addr);
    }
}

#[test]
fn test_query_name_appends_zone() {
    assert_eq!(
        query_name("1.2.3.4", DEFAULT_ZONE).unwrap(),
        "4.3.2.1.zen.spamhaus.org"
    );
    assert_eq!(
        query_name("1.2.3.4", "bl.example.net.").unwrap(),
        "4.3.2.1.bl.example.net"
    );
}

#[test]
fn test_invalid_addresses_are_rejected() {
    for input in [
        "",
        "1.2.3",
        "1.2.3.4.5",
        "256.1.1.1",
        "a.b.c.d",
        "::1",
        "2001:db8::1",
        " 1.2.3.4",
        "1.2.3.4 ",
    ] {
        match reverse_octets(input) {
            Err(DomainError::InvalidAddress(got)) => assert_eq!(got, input),
            other => panic!("Expected InvalidAddress for {:?}, got {:?}", input, other),
        }
    }
}

#[test]
fn test_invalid_address_message_names_input() {
    let err = query_name("not-an-ip", DEFAULT_ZONE).unwrap_err();
    assert_eq!(err.to_string(), "not-an-ip is not a valid IPv4 address");
}

#[test]
fn test_join_response_codes_preserves_order() {
    let addrs: Vec<IpAddr> = vec![
        "127.0.0.4".parse().unwrap(),
        "127.0.0.2".parse().unwrap(),
        "127.0.0.10".parse().unwrap(),
    ];

    let joined = join_response_codes(&addrs);

    assert_eq!(joined, "127.0.0.4,127.0.0.2,127.0.0.10");
    assert_eq!(joined.matches(',').count(), addrs.len() - 1);
}

#[test]
fn test_join_response_codes_single_and_empty() {
    let one: Vec<IpAddr> = vec!["127.0.0.2".parse().unwrap()];
    assert_eq!(join_response_codes(&one), "127.0.0.2");
    assert_eq!(join_response_codes(&[]), "");
}

#[test]
fn test_validate_zone() {
    assert!(validate_zone(DEFAULT_ZONE).is_ok());
    assert!(validate_zone("bl").is_ok());
    assert!(validate_zone("").is_err());
    assert!(validate_zone(".zen.spamhaus.org").is_err());
    assert!(validate_zone("zen.spamhaus.org.").is_err());
    assert!(validate_zone("zen..org").is_err());
    assert!(validate_zone(&format!("{}.org", "a".repeat(64))).is_err());
}
