use std::fmt;
use std::str::FromStr;

/// Record types the resolution engine understands.
///
/// Anything else that shows up on the wire is carried as
/// [`RecordData::Other`](super::RecordData::Other) and never interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    A,
    NS,
    CNAME,
    SOA,
    MX,
    AAAA,
}

impl RecordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::NS => "NS",
            RecordType::CNAME => "CNAME",
            RecordType::SOA => "SOA",
            RecordType::MX => "MX",
            RecordType::AAAA => "AAAA",
        }
    }

    /// Convert from wire format number (RFC 1035)
    ///
    /// ## Wire Format Numbers
    /// - 1: A
    /// - 2: NS
    /// - 5: CNAME
    /// - 6: SOA
    /// - 15: MX
    /// - 28: AAAA
    pub fn from_u16(value: u16) -> Option<Self> {
        match value {
            1 => Some(RecordType::A),
            2 => Some(RecordType::NS),
            5 => Some(RecordType::CNAME),
            6 => Some(RecordType::SOA),
            15 => Some(RecordType::MX),
            28 => Some(RecordType::AAAA),
            _ => None,
        }
    }

    /// Convert to wire format number
    pub fn to_u16(&self) -> u16 {
        match self {
            RecordType::A => 1,
            RecordType::NS => 2,
            RecordType::CNAME => 5,
            RecordType::SOA => 6,
            RecordType::MX => 15,
            RecordType::AAAA => 28,
        }
    }

    /// Types looked up for every name, in presentation order.
    pub fn lookup_order() -> [RecordType; 4] {
        [
            RecordType::CNAME,
            RecordType::A,
            RecordType::AAAA,
            RecordType::MX,
        ]
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "A" => Ok(RecordType::A),
            "NS" => Ok(RecordType::NS),
            "CNAME" => Ok(RecordType::CNAME),
            "SOA" => Ok(RecordType::SOA),
            "MX" => Ok(RecordType::MX),
            "AAAA" => Ok(RecordType::AAAA),
            _ => Err(format!("Invalid record type: {}", s)),
        }
    }
}
