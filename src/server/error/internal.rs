use thiserror::Error;

/// Internal issues with stored data indicating unexpected state & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A belt column holds a value outside the known enumeration.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to the client.
    #[error("Unknown belt value '{value}' stored in database")]
    UnknownBelt {
        /// The stored string that failed to parse
        value: String,
    },

    /// A counter column (degrees, presences, extra activities, age) holds a
    /// negative value.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to the client.
    #[error("Negative value {value} stored in column '{column}'")]
    NegativeCounter {
        /// Name of the offending column
        column: &'static str,
        /// The stored value
        value: i32,
    },
}
