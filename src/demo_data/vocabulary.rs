//! Word pools used to compose human-looking names.

pub const FILLINGS: [&str; 5] = ["Strawberry", "Chocolate", "Blueberry", "Raspberry", "Vanilla"];

pub const PRODUCT_TYPES: [&str; 12] = [
    "Cake",
    "Pastry",
    "Tart",
    "Muffin",
    "Biscuit",
    "Bread",
    "Bagel",
    "Bun",
    "Brownie",
    "Cookie",
    "Cracker",
    "Cheese Cake",
];

pub const FIRST_NAMES: [&str; 19] = [
    "Ori", "Amanda", "Octavia", "Laurel", "Lael", "Delilah", "Jason", "Skyler", "Arsenio", "Haley",
    "Lionel", "Sylvia", "Jessica", "Lester", "Ferdinand", "Elaine", "Griffin", "Kerry", "Dominique",
];

// "Macias" appears twice, which doubles its weight.
pub const LAST_NAMES: [&str; 34] = [
    "Carter", "Castro", "Rich", "Irwin", "Moore", "Hendricks", "Huber", "Patton", "Wilkinson",
    "Thornton", "Nunez", "Macias", "Gallegos", "Blevins", "Mejia", "Pickett", "Whitney", "Farmer",
    "Henry", "Chen", "Macias", "Rowland", "Pierce", "Cortez", "Noble", "Howard", "Nixon", "Mcbride",
    "Leblanc", "Russell", "Carver", "Benton", "Maldonado", "Lyons",
];

pub const PICKUP_LOCATION_NAMES: [&str; 2] = ["Store", "Bakery"];

pub const VIP_DETAILS: &str = "Very important customer";
