pub mod dnsbl_query_service;

pub use dnsbl_query_service::DnsblQueryService;
