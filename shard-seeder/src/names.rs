//! Name pools for generated accounts, characters and towns

use rand::distributions::Alphanumeric;
use rand::Rng;

/// Domain of every generated account's email; marks accounts the seeder owns
pub const SEED_EMAIL_DOMAIN: &str = "seed.shard.test";

/// Pick a `Given Family` character name
pub fn character_name(rng: &mut impl Rng) -> String {
    let given = GIVEN_NAMES[rng.gen_range(0..GIVEN_NAMES.len())];
    let family = FAMILY_NAMES[rng.gen_range(0..FAMILY_NAMES.len())];
    format!("{} {}", given, family)
}

/// Pick a town name; towns may share names
pub fn town_name(rng: &mut impl Rng) -> String {
    CITY_NAMES[rng.gen_range(0..CITY_NAMES.len())].to_string()
}

/// Login name in the `given.family42` / `given_family` style
pub fn username(rng: &mut impl Rng) -> String {
    let given = GIVEN_NAMES[rng.gen_range(0..GIVEN_NAMES.len())].to_lowercase();
    let family = FAMILY_NAMES[rng.gen_range(0..FAMILY_NAMES.len())].to_lowercase();
    match rng.gen_range(0..3) {
        0 => format!("{}.{}", given, family),
        1 => format!("{}_{}", given, family),
        _ => format!("{}{}", given, rng.gen_range(1..100)),
    }
}

pub fn email(username: &str) -> String {
    format!("{}@{}", username, SEED_EMAIL_DOMAIN)
}

/// Plaintext password; only its digest is ever stored
pub fn password(rng: &mut impl Rng) -> String {
    let len = rng.gen_range(8..=16);
    rng.sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

/// Distinct character names available to the generator
pub fn character_pool_size() -> usize {
    GIVEN_NAMES.len() * FAMILY_NAMES.len()
}

pub static GIVEN_NAMES: &[&str] = &[
    "Aaliyah", "Abel", "Ada", "Adrian", "Agnes", "Alaric", "Alba", "Aldo",
    "Alma", "Amara", "Ambrose", "Anika", "Ansel", "Arden", "Arlo", "Astrid",
    "Aurelia", "Bastian", "Beatrix", "Benedict", "Bianca", "Bram", "Brenna", "Caius",
    "Calla", "Cedric", "Celeste", "Corin", "Dagny", "Dario", "Delia", "Desmond",
    "Dorian", "Edda", "Edmund", "Elena", "Elias", "Elke", "Emeric", "Enzo",
    "Esme", "Evander", "Fabian", "Faye", "Felix", "Freya", "Galen", "Greta",
    "Gideon", "Hale", "Hedda", "Hugo", "Ida", "Ilse", "Imogen", "Ingrid",
    "Ivo", "Jasper", "Jolene", "Jonas", "Kasimir", "Keira", "Konrad", "Lars",
    "Leander", "Leila", "Linnea", "Lorcan", "Lucia", "Magnus", "Maren", "Marius",
    "Mila", "Milo", "Nadia", "Nestor", "Niamh", "Nils", "Odette", "Oskar",
    "Otto", "Petra", "Quentin", "Quinn", "Rafe", "Rhea", "Roderick", "Rosalind",
    "Runa", "Sabine", "Silas", "Sigrid", "Soren", "Stellan", "Sybil", "Tamsin",
    "Theron", "Thora", "Tobias", "Ulric", "Una", "Valen", "Vera", "Viggo",
    "Wendel", "Wilma", "Xavier", "Yara", "Yorick", "Zelda", "Zora", "Zygmunt",
];

pub static FAMILY_NAMES: &[&str] = &[
    "Ashford", "Blackwood", "Brightwater", "Crowley", "Dunmore", "Everhart",
    "Fairbanks", "Greaves", "Hollow", "Ironside", "Kettle", "Lockwood",
    "Marsh", "Northcott", "Oakes", "Pennywhistle", "Quarry", "Ravensworth",
    "Stone", "Thorne", "Underhill", "Vance", "Whitlock", "Yardley",
];

static CITY_NAMES: &[&str] = &[
    "Ab'Dendriel", "Ankrahmun", "Carlin", "Darashia", "Edron", "Farmine",
    "Kazordoon", "Liberty Bay", "Port Hope", "Rathleton", "Svargrond", "Thais",
    "Venore", "Yalahar", "Gray Beach", "Rookgaard",
];
