//! 业务逻辑服务层

mod lookup_controller;

pub use lookup_controller::{
    CompletedLookup, LOOKUP_FAILED_MESSAGE, LookupController, LookupOutcome, PendingLookup,
    RejectReason,
};
