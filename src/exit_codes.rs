//! Exit code constants for the helpgen CLI.
//!
//! - 0: Success (an article was published, or there was nothing to do)
//! - 1: Configuration error (bad config file, missing credential)
//! - 2: Queue store failure (unavailable or corrupt)
//! - 3: Generation failure (service error or empty response)
//! - 4: Output failure (template unreadable or artifact write failed)

/// Successful execution, including an idle run.
pub const SUCCESS: i32 = 0;

/// Configuration could not be loaded or is invalid.
pub const CONFIG_ERROR: i32 = 1;

/// The keyword queue could not be read, parsed, or saved.
pub const STORE_FAILURE: i32 = 2;

/// The text-generation service failed or returned nothing usable.
pub const GENERATION_FAILURE: i32 = 3;

/// The template could not be read or the article could not be written.
pub const OUTPUT_FAILURE: i32 = 4;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [
            SUCCESS,
            CONFIG_ERROR,
            STORE_FAILURE,
            GENERATION_FAILURE,
            OUTPUT_FAILURE,
        ];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn only_success_is_zero() {
        assert_eq!(SUCCESS, 0);
        assert!(CONFIG_ERROR > 0);
        assert!(STORE_FAILURE > 0);
        assert!(GENERATION_FAILURE > 0);
        assert!(OUTPUT_FAILURE > 0);
    }
}
