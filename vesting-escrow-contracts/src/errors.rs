use soroban_sdk::contracterror;

/// Custom error types for the vesting escrow contract.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum VestingError {
    // Schedule validation errors (1000-1099)
    InvalidSchedule = 1000,
    NameTooLong = 1001,

    // Record lifecycle errors (1100-1199)
    RecordAlreadyExists = 1100,
    RecordNotFound = 1101,
    AlreadyRevoked = 1102,
    NotRevocable = 1103,

    // Authorization errors (1200-1299)
    Unauthorized = 1200,

    // Funds and arithmetic errors (1300-1399)
    InsufficientFunds = 1300,
    NothingToClaim = 1301,
    MathOverflow = 1302,
}
