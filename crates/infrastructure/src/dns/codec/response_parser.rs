use ferrous_resolve_domain::{
    normalize_name, DomainError, RawResponse, RecordData, ResourceRecord, ResponseCode,
};
use hickory_proto::op::{Message, MessageType, ResponseCode as HickoryResponseCode};
use hickory_proto::rr::{Name, RData, Record};
use std::net::IpAddr;
use std::sync::Arc;
use tracing::debug;

/// A decoded reply plus the header bits the client checks before trusting it.
#[derive(Debug, Clone)]
pub struct ParsedResponse {
    pub id: u16,
    pub truncated: bool,
    pub response: RawResponse,
}

pub struct ResponseParser;

impl ResponseParser {
    /// Decodes a wire-format reply from `server` into its three sections.
    pub fn parse(response_bytes: &[u8], server: IpAddr) -> Result<ParsedResponse, DomainError> {
        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::MalformedResponse {
                server,
                reason: format!("Failed to parse DNS response: {}", e),
            }
        })?;

        if message.message_type() != MessageType::Response {
            return Err(DomainError::MalformedResponse {
                server,
                reason: "QR bit not set".to_string(),
            });
        }

        let rcode = Self::map_rcode(message.response_code());
        let answers = Self::convert_section(message.answers(), server)?;
        let authorities = Self::convert_section(message.name_servers(), server)?;
        let additionals = Self::convert_section(message.additionals(), server)?;

        debug!(
            server = %server,
            rcode = %rcode,
            answers = answers.len(),
            authorities = authorities.len(),
            additionals = additionals.len(),
            truncated = message.truncated(),
            "DNS response parsed"
        );

        Ok(ParsedResponse {
            id: message.id(),
            truncated: message.truncated(),
            response: RawResponse::new(rcode, answers, authorities, additionals),
        })
    }

    fn convert_section(
        records: &[Record],
        server: IpAddr,
    ) -> Result<Vec<ResourceRecord>, DomainError> {
        records
            .iter()
            .map(|record| Self::convert_record(record, server))
            .collect()
    }

    fn convert_record(record: &Record, server: IpAddr) -> Result<ResourceRecord, DomainError> {
        let data = match record.data() {
            RData::A(a) => RecordData::A(a.0),
            RData::AAAA(aaaa) => RecordData::AAAA(aaaa.0),
            RData::CNAME(canonical) => RecordData::CNAME(Self::convert_name(&canonical.0, server)?),
            RData::NS(ns) => RecordData::NS(Self::convert_name(&ns.0, server)?),
            RData::MX(mx) => RecordData::MX {
                preference: mx.preference(),
                exchange: Self::convert_name(mx.exchange(), server)?,
            },
            RData::SOA(soa) => RecordData::SOA {
                mname: Self::convert_name(soa.mname(), server)?,
                rname: Self::convert_name(soa.rname(), server)?,
                serial: soa.serial(),
                minimum: soa.minimum(),
            },
            _ => RecordData::Other {
                code: u16::from(record.record_type()),
            },
        };

        Ok(ResourceRecord::new(
            Self::convert_name(record.name(), server)?,
            record.ttl(),
            data,
        ))
    }

    /// Names stay in wire form: IDN labels keep their `xn--` spelling, so
    /// the label limit is checked against the bytes actually on the wire.
    fn convert_name(name: &Name, server: IpAddr) -> Result<Arc<str>, DomainError> {
        normalize_name(&name.to_ascii()).map_err(|e| DomainError::MalformedResponse {
            server,
            reason: e.to_string(),
        })
    }

    pub fn map_rcode(rcode: HickoryResponseCode) -> ResponseCode {
        match rcode {
            HickoryResponseCode::NoError => ResponseCode::NoError,
            HickoryResponseCode::FormErr => ResponseCode::FormErr,
            HickoryResponseCode::ServFail => ResponseCode::ServFail,
            HickoryResponseCode::NXDomain => ResponseCode::NXDomain,
            HickoryResponseCode::NotImp => ResponseCode::NotImp,
            HickoryResponseCode::Refused => ResponseCode::Refused,
            other => ResponseCode::Other(u16::from(other)),
        }
    }
}
