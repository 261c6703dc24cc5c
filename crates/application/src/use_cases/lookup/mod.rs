pub mod collect_records;
pub mod report;

pub use collect_records::CollectRecordsUseCase;
pub use report::{AddressRecord, AliasRecord, LookupReport, MailExchangeRecord};
