//! Text rendering of lookup reports, one line per record.

use ferrous_resolve_application::use_cases::LookupReport;

/// Lines for one name, in CNAME, A, AAAA, MX order.
pub fn render(report: &LookupReport) -> Vec<String> {
    let mut lines = Vec::with_capacity(
        report.cnames.len()
            + report.addresses.len()
            + report.ipv6_addresses.len()
            + report.mail_exchangers.len(),
    );

    for alias in &report.cnames {
        lines.push(format!("{} is an alias for {}", alias.alias, alias.name));
    }
    for record in &report.addresses {
        lines.push(format!("{} has address {}", record.name, record.address));
    }
    for record in &report.ipv6_addresses {
        lines.push(format!("{} has IPv6 address {}", record.name, record.address));
    }
    for mx in &report.mail_exchangers {
        lines.push(format!(
            "{} mail is handled by {} {}",
            mx.name, mx.preference, mx.exchange
        ));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use ferrous_resolve_application::use_cases::lookup::{
        AddressRecord, AliasRecord, MailExchangeRecord,
    };
    use std::sync::Arc;

    #[test]
    fn test_empty_report_prints_nothing() {
        assert!(render(&LookupReport::default()).is_empty());
    }

    #[test]
    fn test_templates_and_order() {
        let report = LookupReport {
            cnames: vec![AliasRecord {
                alias: "www.example.com".to_string(),
                name: Arc::from("example.com."),
            }],
            addresses: vec![AddressRecord {
                name: Arc::from("example.com."),
                address: "93.184.216.34".parse().unwrap(),
            }],
            ipv6_addresses: vec![AddressRecord {
                name: Arc::from("example.com."),
                address: "2606:2800:220:1:248:1893:25c8:1946".parse().unwrap(),
            }],
            mail_exchangers: vec![MailExchangeRecord {
                name: Arc::from("example.com."),
                preference: 10,
                exchange: Arc::from("mail.example.com."),
            }],
        };

        assert_eq!(
            render(&report),
            vec![
                "www.example.com is an alias for example.com.",
                "example.com. has address 93.184.216.34",
                "example.com. has IPv6 address 2606:2800:220:1:248:1893:25c8:1946",
                "example.com. mail is handled by 10 mail.example.com.",
            ]
        );
    }
}
