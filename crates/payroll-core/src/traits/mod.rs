//! Repository traits (ports) for data access

mod repositories;

pub use repositories::{
    EmployeeRepository, PayoutRequestRepository, PayoutSort, PayoutSortField, RefreshTokenRepository,
    RepoResult, SortDirection, UserRepository,
};
