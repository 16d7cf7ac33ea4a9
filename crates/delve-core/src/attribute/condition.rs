//! Condition scale for rooms and their contents

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Physical condition, from crumbling to pristine.
///
/// `Average` is the unmarked baseline; prose never mentions it.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    Decaying = 0,

    Busted = 1,

    Poor = 2,

    #[default]
    Average = 3,

    Good = 4,

    Exquisite = 5,
}

impl Condition {
    /// All conditions, in ascending order
    pub const ALL: [Condition; 6] = [
        Condition::Decaying,
        Condition::Busted,
        Condition::Poor,
        Condition::Average,
        Condition::Good,
        Condition::Exquisite,
    ];

    /// Check if this condition is worth mentioning in prose
    pub const fn is_notable(self) -> bool {
        !matches!(self, Condition::Average)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_is_the_baseline() {
        assert_eq!(Condition::default(), Condition::Average);
        assert!(!Condition::Average.is_notable());
        assert!(Condition::Busted.is_notable());
        assert!(Condition::Exquisite.is_notable());
    }

    #[test]
    fn test_ordering() {
        assert!(Condition::Decaying < Condition::Busted);
        assert!(Condition::Average < Condition::Good);
    }

    #[test]
    fn test_display() {
        assert_eq!(Condition::Decaying.to_string(), "decaying");
        assert_eq!(Condition::Exquisite.to_string(), "exquisite");
    }
}
