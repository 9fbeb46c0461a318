//! Wordlists for cheatcode words
//!
//! The validator and completer only ever ask two things of a vocabulary:
//! whether a word belongs to it, and what its words are in a stable order.
//! [`Wordlist`] captures exactly that so the vocabulary can be swapped
//! (tests use small [`WordSet`]s; the client uses [`PgpWordlist`]).

use once_cell::sync::Lazy;
use std::collections::{BTreeSet, HashSet};
use std::sync::Arc;

/// Vocabulary that cheatcode words are drawn from
pub trait Wordlist: Send + Sync {
    /// Membership test (exact, case-sensitive)
    fn contains(&self, word: &str) -> bool;

    /// All words, in a stable order
    fn words(&self) -> Box<dyn Iterator<Item = &str> + '_>;

    /// Number of words
    fn len(&self) -> usize {
        self.words().count()
    }

    /// True if the vocabulary has no words
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<W: Wordlist + ?Sized> Wordlist for Arc<W> {
    fn contains(&self, word: &str) -> bool {
        (**self).contains(word)
    }

    fn words(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        (**self).words()
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}

/// PGP word list, lower-cased, as used by magic-wormhole invite codes
///
/// Even and odd halves are merged; word parity carries no meaning for
/// cheatcodes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PgpWordlist;

static PGP_INDEX: Lazy<HashSet<&'static str>> =
    Lazy::new(|| PGP_EVEN.iter().chain(PGP_ODD.iter()).copied().collect());

static PGP_SORTED: Lazy<Vec<&'static str>> = Lazy::new(|| {
    let mut words: Vec<_> = PGP_EVEN.iter().chain(PGP_ODD.iter()).copied().collect();
    words.sort_unstable();
    words
});

impl PgpWordlist {
    /// Create the default wordlist
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Wordlist for PgpWordlist {
    fn contains(&self, word: &str) -> bool {
        PGP_INDEX.contains(word)
    }

    fn words(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(PGP_SORTED.iter().copied())
    }

    fn len(&self) -> usize {
        PGP_SORTED.len()
    }
}

/// Owned, sorted set of words
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordSet {
    words: BTreeSet<String>,
}

impl WordSet {
    /// Create empty set
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a word, returning false if it was already present
    pub fn insert(&mut self, word: impl Into<String>) -> bool {
        self.words.insert(word.into())
    }
}

impl<S: Into<String>> FromIterator<S> for WordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl Wordlist for WordSet {
    fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    fn words(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.words.iter().map(String::as_str))
    }

    fn len(&self) -> usize {
        self.words.len()
    }
}

// Two-syllable words, indexed by byte value.
const PGP_EVEN: [&str; 256] = [
    "aardvark", "absurd", "accrue", "acme", "adrift", "adult",
    "afflict", "ahead", "aimless", "algol", "allow", "alone",
    "ammo", "ancient", "apple", "artist", "assume", "athens",
    "atlas", "aztec", "baboon", "backfield", "backward", "banjo",
    "beaming", "bedlamp", "beehive", "beeswax", "befriend", "belfast",
    "berserk", "billiard", "bison", "blackjack", "blockade", "blowtorch",
    "bluebird", "bombast", "bookshelf", "brackish", "breadline", "breakup",
    "brickyard", "briefcase", "burbank", "button", "buzzard", "cement",
    "chairlift", "chatter", "checkup", "chisel", "choking", "chopper",
    "christmas", "clamshell", "classic", "classroom", "cleanup", "clockwork",
    "cobra", "commence", "concert", "cowbell", "crackdown", "cranky",
    "crowfoot", "crucial", "crumpled", "crusade", "cubic", "dashboard",
    "deadbolt", "deckhand", "dogsled", "dragnet", "drainage", "dreadful",
    "drifter", "dropper", "drumbeat", "drunken", "dupont", "dwelling",
    "eating", "edict", "egghead", "eightball", "endorse", "endow",
    "enlist", "erase", "escape", "exceed", "eyeglass", "eyetooth",
    "facial", "fallout", "flagpole", "flatfoot", "flytrap", "fracture",
    "framework", "freedom", "frighten", "gazelle", "geiger", "glitter",
    "glucose", "goggles", "goldfish", "gremlin", "guidance", "hamlet",
    "highchair", "hockey", "indoors", "indulge", "inverse", "involve",
    "island", "jawbone", "keyboard", "kickoff", "kiwi", "klaxon",
    "locale", "lockup", "merit", "minnow", "miser", "mohawk",
    "mural", "music", "necklace", "neptune", "newborn", "nightbird",
    "oakland", "obtuse", "offload", "optic", "orca", "payday",
    "peachy", "pheasant", "physique", "playhouse", "pluto", "preclude",
    "prefer", "preshrunk", "printer", "prowler", "pupil", "puppy",
    "python", "quadrant", "quiver", "quota", "ragtime", "ratchet",
    "rebirth", "reform", "regain", "reindeer", "rematch", "repay",
    "retouch", "revenge", "reward", "rhythm", "ribcage", "ringbolt",
    "robust", "rocker", "ruffled", "sailboat", "sawdust", "scallion",
    "scenic", "scorecard", "scotland", "seabird", "select", "sentence",
    "shadow", "shamrock", "showgirl", "skullcap", "skydive", "slingshot",
    "slowdown", "snapline", "snapshot", "snowcap", "snowslide", "solo",
    "southward", "soybean", "spaniel", "spearhead", "spellbind", "spheroid",
    "spigot", "spindle", "spyglass", "stagehand", "stagnate", "stairway",
    "standard", "stapler", "steamship", "sterling", "stockman", "stopwatch",
    "stormy", "sugar", "surmount", "suspense", "sweatband", "swelter",
    "tactics", "talon", "tapeworm", "tempest", "tiger", "tissue",
    "tonic", "topmost", "tracker", "transit", "trauma", "treadmill",
    "trojan", "trouble", "tumor", "tunnel", "tycoon", "uncut",
    "unearth", "unwind", "uproot", "upset", "upshot", "vapor",
    "village", "virus", "vulcan", "waffle", "wallet", "watchword",
    "wayside", "willow", "woodlark", "zulu",
];

// Three-syllable words, indexed by byte value.
const PGP_ODD: [&str; 256] = [
    "adroitness", "adviser", "aftermath", "aggregate", "alkali", "almighty",
    "amulet", "amusement", "antenna", "applicant", "apollo", "armistice",
    "article", "asteroid", "atlantic", "atmosphere", "autopsy", "babylon",
    "backwater", "barbecue", "belowground", "bifocals", "bodyguard", "bookseller",
    "borderline", "bottomless", "bradbury", "bravado", "brazilian", "breakaway",
    "burlington", "businessman", "butterfat", "camelot", "candidate", "cannonball",
    "capricorn", "caravan", "caretaker", "celebrate", "cellulose", "certify",
    "chambermaid", "cherokee", "chicago", "clergyman", "coherence", "combustion",
    "commando", "company", "component", "concurrent", "confidence", "conformist",
    "congregate", "consensus", "consulting", "corporate", "corrosion", "councilman",
    "crossover", "crucifix", "cumbersome", "customer", "dakota", "decadence",
    "december", "decimal", "designing", "detector", "detergent", "determine",
    "dictator", "dinosaur", "direction", "disable", "disbelief", "disruptive",
    "distortion", "document", "embezzle", "enchanting", "enrollment", "enterprise",
    "equation", "equipment", "escapade", "eskimo", "everyday", "examine",
    "existence", "exodus", "fascinate", "filament", "finicky", "forever",
    "fortitude", "frequency", "gadgetry", "galveston", "getaway", "glossary",
    "gossamer", "graduate", "gravity", "guitarist", "hamburger", "hamilton",
    "handiwork", "hazardous", "headwaters", "hemisphere", "hesitate", "hideaway",
    "holiness", "hurricane", "hydraulic", "impartial", "impetus", "inception",
    "indigo", "inertia", "infancy", "inferno", "informant", "insincere",
    "insurgent", "integrate", "intention", "inventive", "istanbul", "jamaica",
    "jupiter", "leprosy", "letterhead", "liberty", "maritime", "matchmaker",
    "maverick", "medusa", "megaton", "microscope", "microwave", "midsummer",
    "millionaire", "miracle", "misnomer", "molasses", "molecule", "montana",
    "monument", "mosquito", "narrative", "nebula", "newsletter", "norwegian",
    "october", "ohio", "onlooker", "opulent", "orlando", "outfielder",
    "pacific", "pandemic", "pandora", "paperweight", "paragon", "paragraph",
    "paramount", "passenger", "pedigree", "pegasus", "penetrate", "perceptive",
    "performance", "pharmacy", "phonetic", "photograph", "pioneer", "pocketful",
    "politeness", "positive", "potato", "processor", "provincial", "proximate",
    "puberty", "publisher", "pyramid", "quantity", "racketeer", "rebellion",
    "recipe", "recover", "repellent", "replica", "reproduce", "resistor",
    "responsive", "retraction", "retrieval", "retrospect", "revenue", "revival",
    "revolver", "sandalwood", "sardonic", "saturday", "savagery", "scavenger",
    "sensation", "sociable", "souvenir", "specialist", "speculate", "stethoscope",
    "stupendous", "supportive", "surrender", "suspicious", "sympathy", "tambourine",
    "telephone", "therapist", "tobacco", "tolerance", "tomorrow", "torpedo",
    "tradition", "travesty", "trombonist", "truncated", "typewriter", "ultimate",
    "undaunted", "underfoot", "unicorn", "unify", "universe", "unravel",
    "upcoming", "vacancy", "vagabond", "vertigo", "virginia", "visitor",
    "vocalist", "voyager", "warranty", "waterloo", "whimsical", "wichita",
    "wilmington", "wyoming", "yesteryear", "yucatan",
];
