//! Macros for ergonomic state definitions.

/// Define an enum and implement [`State`](crate::core::State) for it.
///
/// Each variant's name is its identity key. Unit, tuple and struct variants
/// are all accepted; payloads never take part in identity.
///
/// The enum derives `Clone`, `PartialEq` and `Debug`. Extra attributes are
/// passed through.
///
/// # Example
///
/// ```
/// use waypoint::state_enum;
/// use waypoint::core::State;
///
/// state_enum! {
///     pub enum Download {
///         Queued,
///         Fetching(u32),
///         Failed { reason: String },
///         Done,
///     }
/// }
///
/// assert_eq!(Download::Fetching(3).name(), "Fetching");
/// assert_eq!(Download::Failed { reason: "timeout".into() }.name(), "Failed");
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
                $( ( $($tuple:tt)* ) )?
                $( { $($fields:tt)* } )?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
                $( ( $($tuple)* ) )?
                $( { $($fields)* } )?
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant { .. } => stringify!($variant)),*
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::State;
    use serde::{Deserialize, Serialize};

    state_enum! {
        enum TestState {
            Initial,
            Processing(u32),
            Complete,
            Failed { reason: String },
        }
    }

    #[test]
    fn state_enum_macro_generates_trait() {
        assert_eq!(TestState::Initial.name(), "Initial");
        assert_eq!(TestState::Processing(1).name(), "Processing");
        assert_eq!(TestState::Complete.name(), "Complete");
        assert_eq!(
            TestState::Failed {
                reason: "boom".to_string()
            }
            .name(),
            "Failed"
        );
    }

    #[test]
    fn state_enum_identity_ignores_payload() {
        assert!(TestState::Processing(1).same_state(&TestState::Processing(2)));
        assert_ne!(TestState::Processing(1), TestState::Processing(2));
    }

    #[test]
    fn state_enum_supports_visibility() {
        state_enum! {
            pub enum PublicState {
                A,
                B,
            }
        }

        assert_eq!(PublicState::B.name(), "B");
    }

    #[test]
    fn state_enum_passes_attributes_through() {
        state_enum! {
            #[derive(Serialize, Deserialize)]
            enum Persisted {
                /// Waiting
                Idle,
                Busy(u8),
            }
        }

        let json = serde_json::to_string(&Persisted::Busy(3)).unwrap();
        let back: Persisted = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Persisted::Busy(3));
        assert_eq!(Persisted::Idle.name(), "Idle");
    }
}
