//! Domain-level constants.
//!
//! These constants define fixed response texts and the default person directory.

// =============================================================================
// Responses
// =============================================================================

/// Greeting returned by the root endpoint
pub const GREETING: &str = "Hello from the Person API";

/// Value paired with a person id that exists in the directory
pub const PERSON_EXISTS_MESSAGE: &str = "It exists";

/// Message for a person id missing from the directory
pub const PERSON_NOT_FOUND_MESSAGE: &str = "person not found";

/// Default message attached to a successful login
pub const LOGIN_SUCCESS_MESSAGE: &str = "Login successful";

// =============================================================================
// Person Directory
// =============================================================================

/// Person ids known to exist when no other set is configured
pub const DEFAULT_PERSON_IDS: [i64; 5] = [1, 2, 3, 4, 5];

// =============================================================================
// Uploads
// =============================================================================

/// Bytes per kilobyte used for upload size reporting
pub const BYTES_PER_KB: f64 = 1024.0;

/// Decimal places kept in reported upload sizes
pub const SIZE_KB_DECIMALS: i32 = 2;
