use ferrous_resolve_domain::RecordType;
use hickory_proto::rr::RecordType as HickoryRecordType;

pub struct RecordTypeMapper;

impl RecordTypeMapper {
    /// Convert domain RecordType → hickory RecordType (for building queries)
    pub fn to_hickory(record_type: &RecordType) -> HickoryRecordType {
        match record_type {
            RecordType::A => HickoryRecordType::A,
            RecordType::NS => HickoryRecordType::NS,
            RecordType::CNAME => HickoryRecordType::CNAME,
            RecordType::SOA => HickoryRecordType::SOA,
            RecordType::MX => HickoryRecordType::MX,
            RecordType::AAAA => HickoryRecordType::AAAA,
        }
    }

    /// Convert hickory RecordType → domain RecordType
    ///
    /// Returns `None` for types the resolver does not interpret.
    pub fn from_hickory(hickory_type: HickoryRecordType) -> Option<RecordType> {
        match hickory_type {
            HickoryRecordType::A => Some(RecordType::A),
            HickoryRecordType::NS => Some(RecordType::NS),
            HickoryRecordType::CNAME => Some(RecordType::CNAME),
            HickoryRecordType::SOA => Some(RecordType::SOA),
            HickoryRecordType::MX => Some(RecordType::MX),
            HickoryRecordType::AAAA => Some(RecordType::AAAA),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_for_supported_types() {
        for record_type in [
            RecordType::A,
            RecordType::NS,
            RecordType::CNAME,
            RecordType::SOA,
            RecordType::MX,
            RecordType::AAAA,
        ] {
            let hickory = RecordTypeMapper::to_hickory(&record_type);
            assert_eq!(u16::from(hickory), record_type.to_u16());
            assert_eq!(RecordTypeMapper::from_hickory(hickory), Some(record_type));
        }
    }

    #[test]
    fn test_unsupported_type_maps_to_none() {
        assert_eq!(RecordTypeMapper::from_hickory(HickoryRecordType::RRSIG), None);
        assert_eq!(RecordTypeMapper::from_hickory(HickoryRecordType::TXT), None);
    }
}
