pub mod auction;
pub mod criteria;
pub mod enums;
pub mod error;
pub mod ids;
pub mod money;
pub mod notice;
pub mod party;
pub mod period;
pub mod request;
pub mod snapshot;
pub mod tender;
pub mod violation;

pub use auction::{AuctionDetail, AuctionModality, ElectronicAuctions};
pub use criteria::{
    Coefficient, Conversion, ConversionRelatesTo, Criterion, Requirement, RequirementGroup,
};
pub use enums::{
    BusinessFunctionType, CriterionRelatesTo, DocumentType, LotStatus, LotStatusDetails,
    ProcurementMethod, TenderStatus, TenderStatusDetails,
};
pub use error::{ModelError, Result};
pub use ids::{AuctionId, Cpid, DocumentId, ItemId, LotId, Ocid};
pub use money::{Currency, Money};
pub use notice::{ContractNotice, NoticeLot, NoticeTender};
pub use party::{
    BusinessFunction, OrganizationIdentifier, Person, PersonIdentifier, ProcuringEntity,
};
pub use period::{Period, StartOnlyPeriod};
pub use request::{ChangeRequest, RequestTender};
pub use snapshot::{Budget, BudgetBreakdown, SnapshotTender, TenderSnapshot};
pub use tender::{
    Address, Classification, Document, Item, Lot, PlaceOfPerformance, Unit,
};
pub use violation::RuleViolation;
