//! Drafts for the reference entities: staff users, products, pickup locations and
//! the customers embedded in orders.

use crate::demo_data::random::RandomStream;
use crate::demo_data::vocabulary::{
    FILLINGS, FIRST_NAMES, LAST_NAMES, PICKUP_LOCATION_NAMES, PRODUCT_TYPES, VIP_DETAILS,
};
use crate::model::{Customer, PickupLocationCreate, ProductCreate, Role, UserCreate};
use crate::password::PasswordHasher;

/// Lowest product price, in cents.
pub const MIN_PRICE: u32 = 200;
/// Width of the price range above [`MIN_PRICE`], in cents.
pub const PRICE_SPREAD: f64 = 10_000.0;

/// A fixed staff account. The password is kept in plaintext only until it is hashed.
#[derive(Debug, Clone, Copy)]
pub struct StaffAccount {
    pub email: &'static str,
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub password: &'static str,
    pub role: Role,
    pub locked: bool,
}

impl StaffAccount {
    pub fn draft(&self, hasher: &dyn PasswordHasher) -> UserCreate {
        UserCreate::new(
            self.email,
            self.first_name,
            self.last_name,
            hasher.encode(self.password),
            self.role,
            self.locked,
        )
    }
}

/// Fulfils orders.
pub const BAKER: StaffAccount = StaffAccount {
    email: "baker@vaadin.com",
    first_name: "Heidi",
    last_name: "Carter",
    password: "baker",
    role: Role::Baker,
    locked: false,
};

/// Takes orders.
pub const BARISTA: StaffAccount = StaffAccount {
    email: "barista@vaadin.com",
    first_name: "Malin",
    last_name: "Castro",
    password: "barista",
    role: Role::Barista,
    locked: true,
};

pub const ADMIN: StaffAccount = StaffAccount {
    email: "admin@vaadin.com",
    first_name: "Göran",
    last_name: "Rich",
    password: "admin",
    role: Role::Admin,
    locked: true,
};

/// Accounts nothing refers to, so they can be removed in a demo.
pub const DELETABLE_USERS: [StaffAccount; 2] = [
    StaffAccount {
        email: "peter@vaadin.com",
        first_name: "Peter",
        last_name: "Bush",
        password: "peter",
        role: Role::Barista,
        locked: false,
    },
    StaffAccount {
        email: "mary@vaadin.com",
        first_name: "Mary",
        last_name: "Ocon",
        password: "mary",
        role: Role::Baker,
        locked: true,
    },
];

/// One or two distinct fillings followed by a product type, e.g. "Vanilla Chocolate Tart".
pub fn product_name(random: &mut RandomStream) -> String {
    let first = *random.pick(&FILLINGS);
    let mut name = String::from(first);
    if random.next_bool() {
        let mut second = *random.pick(&FILLINGS);
        while second == first {
            second = *random.pick(&FILLINGS);
        }
        name.push(' ');
        name.push_str(second);
    }
    name.push(' ');
    name.push_str(*random.pick(&PRODUCT_TYPES));
    name
}

/// Price in cents within `[200, 10200)`.
pub fn product_price(random: &mut RandomStream) -> u32 {
    MIN_PRICE + (random.next_double() * PRICE_SPREAD) as u32
}

pub fn product(random: &mut RandomStream) -> ProductCreate {
    let name = product_name(random);
    let price = product_price(random);
    ProductCreate { name, price }
}

pub fn pickup_locations() -> Vec<PickupLocationCreate> {
    PICKUP_LOCATION_NAMES
        .iter()
        .map(|name| PickupLocationCreate {
            name: (*name).to_string(),
        })
        .collect()
}

/// A customer with a `+1-555-NNNN` phone number. One in ten is flagged as important.
pub fn customer(random: &mut RandomStream) -> Customer {
    let first_name = random.pick(&FIRST_NAMES);
    let last_name = random.pick(&LAST_NAMES);
    let phone_number = format!("+1-555-{:04}", random.next_int(10_000));
    let details = (random.next_int(10) == 0).then(|| VIP_DETAILS.to_string());
    Customer {
        full_name: format!("{} {}", first_name, last_name),
        phone_number,
        details,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::password::Sha256PasswordHasher;

    #[test]
    fn product_names_are_composed_from_pools() {
        let mut random = RandomStream::seeded(1);
        for _ in 0..500 {
            let name = product_name(&mut random);
            let kind = PRODUCT_TYPES
                .iter()
                .filter(|t| name.ends_with(*t))
                .max_by_key(|t| t.len())
                .expect("name ends with a product type");
            let fillings: Vec<&str> = name[..name.len() - kind.len()].split_whitespace().collect();
            assert!(matches!(fillings.len(), 1 | 2), "{}", name);
            assert!(fillings.iter().all(|f| FILLINGS.contains(f)));
            if fillings.len() == 2 {
                assert_ne!(fillings[0], fillings[1]);
            }
        }
    }

    #[test]
    fn prices_stay_in_range() {
        let mut random = RandomStream::seeded(5);
        for _ in 0..1000 {
            let price = product_price(&mut random);
            assert!((200..10_200).contains(&price));
        }
    }

    #[test]
    fn customers_have_formatted_phone_numbers() {
        let mut random = RandomStream::seeded(9);
        let mut important = 0;
        for _ in 0..1000 {
            let customer = customer(&mut random);
            assert_eq!(customer.phone_number.len(), "+1-555-0000".len());
            assert!(customer.phone_number.starts_with("+1-555-"));
            assert!(customer.phone_number[7..].chars().all(|c| c.is_ascii_digit()));
            assert_eq!(customer.full_name.split(' ').count(), 2);
            if let Some(details) = &customer.details {
                assert_eq!(details, VIP_DETAILS);
                important += 1;
            }
        }
        assert!((50..150).contains(&important), "{} important customers", important);
    }

    #[test]
    fn staff_drafts_carry_hashed_passwords() {
        let draft = BAKER.draft(&Sha256PasswordHasher);
        assert_eq!(draft.email, "baker@vaadin.com");
        assert_eq!(draft.role, Role::Baker);
        assert!(!draft.locked);
        assert_ne!(draft.password_hash, "baker");
        assert_eq!(draft.password_hash, Sha256PasswordHasher.encode("baker"));
    }

    #[test]
    fn pickup_locations_are_store_and_bakery() {
        let names: Vec<String> = pickup_locations().into_iter().map(|l| l.name).collect();
        assert_eq!(names, vec!["Store", "Bakery"]);
    }
}
