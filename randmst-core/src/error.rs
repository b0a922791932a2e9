//! Error types for the randmst core library.
//!
//! Defines the error enum exposed by the public API, its stable error codes,
//! and a convenient result alias.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error type produced when configuring or running a [`crate::Simulation`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum SimulationError {
    /// The point count was negative.
    #[error("numpoints must be non-negative (got {got})")]
    InvalidPointCount {
        /// The rejected point count.
        got: i64,
    },
    /// The trial count was zero or negative, leaving the mean undefined.
    #[error("numtrials must be at least 1 (got {got})")]
    InvalidTrialCount {
        /// The rejected trial count.
        got: i64,
    },
    /// The dimension was negative.
    #[error("dimension must be non-negative (got {got})")]
    InvalidDimension {
        /// The rejected dimension.
        got: i64,
    },
    /// A per-trial buffer could not be sized or allocated.
    #[error("failed to allocate {what} with {elements} elements")]
    AllocationFailed {
        /// Name of the buffer that could not be allocated.
        what: &'static str,
        /// Requested element count, saturated at `u128::MAX` on overflow.
        elements: u128,
    },
}

define_error_codes! {
    /// Stable codes describing [`SimulationError`] variants.
    enum SimulationErrorCode for SimulationError {
        /// The point count was negative.
        InvalidPointCount => InvalidPointCount { .. } => "SIMULATION_INVALID_POINT_COUNT",
        /// The trial count was zero or negative.
        InvalidTrialCount => InvalidTrialCount { .. } => "SIMULATION_INVALID_TRIAL_COUNT",
        /// The dimension was negative.
        InvalidDimension => InvalidDimension { .. } => "SIMULATION_INVALID_DIMENSION",
        /// A per-trial buffer could not be sized or allocated.
        AllocationFailed => AllocationFailed { .. } => "SIMULATION_ALLOCATION_FAILED",
    }
}

impl SimulationError {
    /// Returns `true` for errors caused by caller-supplied arguments rather
    /// than resource exhaustion.
    ///
    /// # Examples
    /// ```
    /// use randmst_core::SimulationError;
    ///
    /// assert!(SimulationError::InvalidTrialCount { got: 0 }.is_invalid_argument());
    /// assert!(
    ///     !SimulationError::AllocationFailed { what: "coordinates", elements: 1 }
    ///         .is_invalid_argument()
    /// );
    /// ```
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::InvalidPointCount { .. }
                | Self::InvalidTrialCount { .. }
                | Self::InvalidDimension { .. }
        )
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, SimulationError>;
