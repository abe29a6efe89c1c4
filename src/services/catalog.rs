use crate::models::{Pet, PetType};

/// Breeds offered per pet type during onboarding. Breeds outside the
/// catalog are still accepted.
pub fn breeds_for(pet_type: PetType) -> &'static [&'static str] {
    match pet_type {
        PetType::Dog => &[
            "Affenpinscher", "Afghan Hound", "Airedale Terrier", "Akita",
            "Alaskan Malamute", "American Bulldog", "American Staffordshire Terrier",
            "Australian Cattle Dog", "Australian Shepherd", "Basenji", "Basset Hound",
            "Beagle", "Belgian Malinois", "Bernese Mountain Dog", "Bichon Frise",
            "Bloodhound", "Border Collie", "Border Terrier", "Boston Terrier", "Boxer",
            "Boykin Spaniel", "Brittany", "Brussels Griffon", "Bull Terrier", "Bulldog",
            "Bullmastiff", "Cairn Terrier", "Cane Corso",
            "Cavalier King Charles Spaniel", "Chesapeake Bay Retriever", "Chihuahua",
            "Chinese Crested", "Chow Chow", "Cocker Spaniel", "Collie", "Corgi",
            "Dachshund", "Dalmatian", "Doberman Pinscher", "Dogo Argentino",
            "English Setter", "English Springer Spaniel", "French Bulldog",
            "German Shepherd", "German Shorthaired Pointer", "Giant Schnauzer",
            "Golden Retriever", "Great Dane", "Great Pyrenees", "Greyhound", "Havanese",
            "Irish Setter", "Irish Wolfhound", "Italian Greyhound",
            "Jack Russell Terrier", "Japanese Chin", "Keeshond", "Labradoodle",
            "Labrador Retriever", "Lhasa Apso", "Maltese", "Mastiff",
            "Miniature Pinscher", "Miniature Schnauzer", "Newfoundland",
            "Norwich Terrier", "Old English Sheepdog", "Papillon", "Pekingese",
            "Pembroke Welsh Corgi", "Pit Bull", "Pointer", "Pomeranian", "Poodle",
            "Portuguese Water Dog", "Pug", "Rat Terrier", "Rhodesian Ridgeback",
            "Rottweiler", "Saint Bernard", "Samoyed", "Schipperke", "Scottish Terrier",
            "Shetland Sheepdog", "Shiba Inu", "Shih Tzu", "Siberian Husky",
            "Soft Coated Wheaten Terrier", "Staffordshire Bull Terrier",
            "Standard Schnauzer", "Tibetan Mastiff", "Toy Fox Terrier", "Vizsla",
            "Weimaraner", "West Highland White Terrier", "Whippet", "Wire Fox Terrier",
            "Yorkshire Terrier", "Mixed Breed",
        ],
        PetType::Cat => &[
            "Abyssinian", "American Bobtail", "American Curl", "American Shorthair",
            "American Wirehair", "Balinese", "Bengal", "Birman", "Bombay",
            "British Shorthair", "Burmese", "Burmilla", "Chartreux", "Cornish Rex",
            "Cymric", "Devon Rex", "Domestic Long Hair", "Domestic Medium Hair",
            "Domestic Short Hair", "Egyptian Mau", "Exotic Shorthair", "Havana Brown",
            "Himalayan", "Japanese Bobtail", "Javanese", "Korat", "LaPerm",
            "Maine Coon", "Manx", "Munchkin", "Nebelung", "Norwegian Forest Cat",
            "Ocicat", "Oriental", "Persian", "Ragamuffin", "Ragdoll", "Russian Blue",
            "Savannah", "Scottish Fold", "Selkirk Rex", "Siamese", "Siberian",
            "Singapura", "Snowshoe", "Somali", "Sphynx", "Tonkinese", "Toyger",
            "Turkish Angora", "Turkish Van",
        ],
        PetType::Rabbit => &[
            "American", "American Chinchilla", "American Fuzzy Lop", "American Sable",
            "Argente Brun", "Belgian Hare", "Beveren", "Blanc de Hotot",
            "Britannia Petite", "Californian", "Champagne d'Argent", "Checkered Giant",
            "Cinnamon", "Crème d'Argent", "Dutch", "Dwarf Hotot", "Dwarf Papillon",
            "English Angora", "English Lop", "English Spot", "Flemish Giant",
            "Florida White", "French Angora", "French Lop", "Giant Angora",
            "Giant Chinchilla", "Harlequin", "Havana", "Himalayan", "Holland Lop",
            "Jersey Wooly", "Lilac", "Lionhead", "Mini Lop", "Mini Rex", "Mini Satin",
            "Netherland Dwarf", "New Zealand", "Palomino", "Polish", "Rex",
            "Rhinelander", "Satin", "Satin Angora", "Silver", "Silver Fox",
            "Silver Marten", "Standard Chinchilla", "Tan", "Thrianta",
        ],
        PetType::Bird => &[
            "African Grey", "Amazon Parrot", "Budgerigar (Parakeet)", "Caique",
            "Canary", "Cockatiel", "Cockatoo", "Conure", "Dove", "Eclectus", "Finch",
            "Lory", "Lovebird", "Macaw", "Parrotlet", "Pigeon", "Pionus", "Poicephalus",
            "Quaker Parakeet", "Senegal Parrot",
        ],
        PetType::Hamster => &[
            "Syrian", "Campbell's Dwarf", "Roborovski Dwarf", "Chinese",
            "Winter White Russian Dwarf",
        ],
        PetType::Reptile => &[
            "Bearded Dragon", "Ball Python", "Leopard Gecko", "Corn Snake",
            "Crested Gecko", "Turtle", "Tortoise", "Iguana", "Chameleon",
        ],
        PetType::Fish => &[
            "Betta", "Goldfish", "Guppy", "Tetra", "Angelfish", "Cichlid", "Molly",
            "Platy", "Swordtail", "Discus",
        ],
    }
}

/// Case-insensitive catalog lookup
pub fn is_known_breed(pet_type: PetType, breed: &str) -> bool {
    let breed = breed.trim();
    breeds_for(pet_type)
        .iter()
        .any(|known| known.eq_ignore_ascii_case(breed))
}

#[allow(clippy::too_many_arguments)]
fn seed_pet(
    id: i64,
    name: &str,
    pet_type: PetType,
    breed: &str,
    age: &str,
    gender: &str,
    distance: &str,
    owner: &str,
    bio: &str,
    traits: &[&str],
) -> Pet {
    Pet {
        id,
        name: name.to_string(),
        pet_type,
        breed: breed.to_string(),
        distance: distance.to_string(),
        age: age.to_string(),
        gender: gender.to_string(),
        bio: bio.to_string(),
        image: None,
        images: vec![],
        owner: owner.to_string(),
        owner_id: format!("seed-owner-{}", id),
        traits: traits.iter().map(|t| t.to_string()).collect(),
        created_at: None,
    }
}

/// Built-in pets shown before any user has added their own
pub fn seed_pets() -> Vec<Pet> {
    vec![
        seed_pet(1, "Buddy", PetType::Dog, "Golden Retriever", "3 years", "Male", "2m",
            "Sarah", "Loves fetch and long walks in the park.", &["Friendly", "Energetic"]),
        seed_pet(2, "Luna", PetType::Cat, "Siamese", "2 years", "Female", "5m",
            "Mike", "Chatty and curious, rules the windowsill.", &["Vocal", "Curious"]),
        seed_pet(3, "Max", PetType::Dog, "German Shepherd", "4 years", "Male", "8 miles",
            "Emma", "Well trained and protective.", &["Loyal", "Smart"]),
        seed_pet(4, "Coco", PetType::Rabbit, "Holland Lop", "1 year", "Female", "3m",
            "Lily", "Enjoys carrots and gentle cuddles.", &["Gentle", "Quiet"]),
        seed_pet(5, "Kiwi", PetType::Bird, "Cockatiel", "2 years", "Male", "12m",
            "Tom", "Whistles the morning away.", &["Social", "Musical"]),
        seed_pet(6, "Peanut", PetType::Hamster, "Syrian", "6 months", "Male", "1m",
            "Anna", "Night owl with a love for tunnels.", &["Active"]),
        seed_pet(7, "Spike", PetType::Reptile, "Bearded Dragon", "5 years", "Male", "30 miles",
            "Jake", "Chill sunbather.", &["Calm"]),
        seed_pet(8, "Bubbles", PetType::Fish, "Betta", "1 year", "Female", "60m",
            "Zoe", "Flowing fins and lots of personality.", &["Colorful"]),
        seed_pet(9, "Bella", PetType::Dog, "Poodle", "2 years", "Female", "15m",
            "Chris", "Smart, playful and hypoallergenic.", &["Playful", "Smart"]),
        seed_pet(10, "Oliver", PetType::Cat, "Maine Coon", "5 years", "Male", "7m",
            "Nina", "Gentle giant who loves laps.", &["Affectionate"]),
    ]
}
