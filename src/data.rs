use crate::models::{FeedingRecord, Pet, User};

// Hardcoded demo data - nothing is ever written back

pub static PETS: [Pet; 3] = [
    Pet { id: 1, name: "Snowball", kind: "dog", age: 2 },
    Pet { id: 2, name: "Shadow", kind: "cat", age: 1 },
    Pet { id: 3, name: "Blossom", kind: "rabbit", age: 3 },
];

pub static FEEDING_LOG: [FeedingRecord; 2] = [
    FeedingRecord {
        id: 1,
        pet_id: 1,
        time: "2025-08-28T08:00:00Z",
        food: "dog food",
        amount: "100g",
    },
    FeedingRecord {
        id: 2,
        pet_id: 2,
        time: "2025-08-28T09:00:00Z",
        food: "cat food",
        amount: "80g",
    },
];

// The only account the mock login accepts
pub const DEMO_USERNAME: &str = "admin";
pub const DEMO_PASSWORD: &str = "password";

pub const DEMO_USER: User = User {
    id: 1,
    username: DEMO_USERNAME,
    role: "admin",
};
