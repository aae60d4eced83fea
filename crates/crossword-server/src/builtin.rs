use crossword_core::{Direction, RawClue};
use rand::{rng, RngExt};

/// Canned clue sets served in dev mode, so the client works without an
/// upstream API key.
const SETS: &[&[(&str, &str)]] = &[
    &[
        ("Force that keeps planets in orbit", "GRAVITY"),
        ("Uncharged particle in an atomic nucleus", "NEUTRON"),
        ("The Moon blocking the Sun, for example", "ECLIPSE"),
        ("Smallest unit of a chemical compound", "MOLECULE"),
        ("Smallest unit of an element", "ATOM"),
        ("Basic building block of living things", "CELL"),
        ("Path of a satellite around a planet", "ORBIT"),
        ("Protein that speeds up a reaction", "ENZYME"),
        ("Constituent of protons and neutrons", "QUARK"),
        ("Molten rock beneath the surface", "MAGMA"),
    ],
    &[
        ("Imaginary line around the Earth's middle", "EQUATOR"),
        ("Slow-moving river of ice", "GLACIER"),
        ("Mountain that can erupt", "VOLCANO"),
        ("Vast region with almost no rain", "DESERT"),
        ("Land surrounded by water", "ISLAND"),
        ("Triangular deposit at a river mouth", "DELTA"),
        ("Narrow Norwegian inlet", "FJORD"),
        ("Treeless Arctic plain", "TUNDRA"),
        ("Book of maps", "ATLAS"),
        ("Deep gorge carved by a river", "CANYON"),
    ],
    &[
        ("Sequence of notes forming a tune", "MELODY"),
        ("Pattern of beats in music", "RHYTHM"),
        ("Interval of eight notes", "OCTAVE"),
        ("Repeated section of a song", "CHORUS"),
        ("Speed at which a piece is played", "TEMPO"),
        ("Four-stringed orchestral instrument", "VIOLIN"),
        ("Multi-movement piece for a soloist", "SONATA"),
        ("Notes sounding pleasing together", "HARMONY"),
        ("Slow, sentimental song", "BALLAD"),
        ("Extra performance demanded by the crowd", "ENCORE"),
    ],
];

/// Pick one built-in set. The topic is ignored; dev mode only promises
/// well-formed clues, not on-topic ones.
pub fn sample_clues() -> Vec<RawClue> {
    let mut rng = rng();
    let set = SETS[rng.random_range(0..SETS.len())];

    set.iter()
        .enumerate()
        .map(|(i, (clue, answer))| RawClue {
            clue: clue.to_string(),
            answer: answer.to_string(),
            direction: if i % 2 == 0 {
                Direction::Across
            } else {
                Direction::Down
            },
        })
        .collect()
}
