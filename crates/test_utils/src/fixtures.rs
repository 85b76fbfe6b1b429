//! Pre-built test data for common entities

use core_kernel::Amount;
use domain_split::NewUser;
use rust_decimal_macros::dec;

/// Registration data for the standard test users
pub struct UserFixtures;

impl UserFixtures {
    pub fn alice() -> NewUser {
        NewUser {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            password: "alices-password".to_string(),
        }
    }

    pub fn bob() -> NewUser {
        NewUser {
            name: "Bob".to_string(),
            email: "bob@example.com".to_string(),
            password: "bobs-password".to_string(),
        }
    }

    pub fn carol() -> NewUser {
        NewUser {
            name: "Carol".to_string(),
            email: "carol@example.com".to_string(),
            password: "carols-password".to_string(),
        }
    }

    /// An outsider who belongs to no group and holds no shares
    pub fn mallory() -> NewUser {
        NewUser {
            name: "Mallory".to_string(),
            email: "mallory@example.com".to_string(),
            password: "mallorys-password".to_string(),
        }
    }
}

/// Common amounts used across the suite
pub struct AmountFixtures;

impl AmountFixtures {
    /// The 90.00 dinner bill from the split examples
    pub fn dinner() -> Amount {
        Amount::new(dec!(90))
    }

    /// The 100.00 bill used in mixed fixed/even examples
    pub fn groceries() -> Amount {
        Amount::new(dec!(100))
    }
}
