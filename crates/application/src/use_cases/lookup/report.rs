use std::net::IpAddr;
use std::sync::Arc;

/// `<alias> is an alias for <name>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasRecord {
    /// The name as the user typed it
    pub alias: String,
    pub name: Arc<str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressRecord {
    pub name: Arc<str>,
    pub address: IpAddr,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailExchangeRecord {
    pub name: Arc<str>,
    pub preference: u16,
    pub exchange: Arc<str>,
}

/// Everything found for one name, grouped by record type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupReport {
    pub cnames: Vec<AliasRecord>,
    pub addresses: Vec<AddressRecord>,
    pub ipv6_addresses: Vec<AddressRecord>,
    pub mail_exchangers: Vec<MailExchangeRecord>,
}

impl LookupReport {
    pub fn is_empty(&self) -> bool {
        self.cnames.is_empty()
            && self.addresses.is_empty()
            && self.ipv6_addresses.is_empty()
            && self.mail_exchangers.is_empty()
    }
}
