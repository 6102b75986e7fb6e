use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

macro_rules! id_type {
    ($name:ident) => {
        #[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
        pub struct $name(pub Uuid);

        impl $name {
            #[inline]
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Uuid::parse_str(s).map(Self)
            }
        }
    };
}

id_type!(ClientId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_new_client_id_when_generated_should_be_unique() {
        let result = ClientId::new();
        assert_ne!(result, ClientId::new());
    }

    #[test]
    fn given_client_id_when_displayed_should_parse_back() {
        let id = ClientId::new();

        let parsed: ClientId = id.to_string().parse().unwrap();

        assert_eq!(parsed, id);
    }

    #[test]
    fn given_garbage_when_parsed_should_fail() {
        assert!("not-an-id".parse::<ClientId>().is_err());
    }
}
