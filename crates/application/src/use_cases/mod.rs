pub mod lookup;

pub use lookup::{CollectRecordsUseCase, LookupReport};
