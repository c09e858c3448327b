use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

macro_rules! id {
    ($(#[$meta:meta])* $name:ident, $id:ty) => {
        $(#[$meta])*
        #[derive(
            Copy,
            Clone,
            Debug,
            Default,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            Serialize,
            Deserialize,
        )]
        #[repr(transparent)]
        #[serde(transparent)]
        pub struct $name(pub $id);

        impl Display for $name {
            #[inline]
            fn fmt(&self, f: &mut Formatter) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl From<$id> for $name {
            #[inline]
            fn from(id: $id) -> Self {
                Self(id)
            }
        }

        impl FromStr for $name {
            type Err = <$id as FromStr>::Err;

            #[inline]
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.trim().parse::<$id>()?))
            }
        }
    };
}

id! {
    /// The public identifier of a playable place, as entered by the site operator.
    PlaceId, u64
}

id! {
    /// The internal identifier grouping one or more places.
    UniverseId, u64
}

#[cfg(test)]
mod tests {
    use serde_test::{assert_tokens, Token};

    use super::{PlaceId, UniverseId};

    #[test]
    fn test_id_serde() {
        assert_tokens(&PlaceId(920587237), &[Token::U64(920587237)]);
        assert_tokens(&UniverseId(383310974), &[Token::U64(383310974)]);
    }

    #[test]
    fn test_id_from_str() {
        assert_eq!(" 920587237 ".parse::<PlaceId>().unwrap(), PlaceId(920587237));
        assert!("".parse::<PlaceId>().is_err());
        assert!("abc".parse::<PlaceId>().is_err());
        assert!("-1".parse::<UniverseId>().is_err());
    }

    #[test]
    fn test_id_display() {
        assert_eq!(UniverseId(42).to_string(), "42");
    }
}
