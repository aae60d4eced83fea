use crate::clue::{ClueEntry, Placement};
use crate::grid::{blank_grid, Cell, Direction, Grid, GRID_SIZE};

const CENTER: i32 = 6;
/// Occupied-cell overlaps plus occupied perpendicular neighbors allowed
/// while walking a candidate slot. More than this means the word would
/// crowd existing words into accidental adjacent runs.
const MAX_CROSSINGS: u32 = 2;
/// Score bonus for each letter that lands on an already-occupied cell.
const INTERSECTION_BONUS: i32 = 5;
/// The first few words get a centrality bonus so the puzzle grows from
/// the middle of the board outward.
const CENTRAL_WORD_COUNT: usize = 3;

#[derive(Clone, Copy)]
struct Candidate {
    x: usize,
    y: usize,
    direction: Direction,
}

/// Lay the entries out on a fresh grid, longest answer first. Each
/// placed entry gets its `placement` filled in; entries that fit
/// nowhere keep `placement == None` and consume no clue number.
///
/// The search is greedy with no backtracking and fully deterministic:
/// same entries in, same grid out.
pub fn place_words(entries: &mut [ClueEntry]) -> Grid {
    let mut grid = blank_grid();

    // Longest first; equal lengths keep their input order. Long words
    // offer more intersection points to the shorter words that follow.
    let mut order: Vec<usize> = (0..entries.len()).collect();
    order.sort_by_key(|&i| std::cmp::Reverse(entries[i].answer_len()));

    let mut placed_words = 0usize;
    let mut next_number = 1usize;

    for idx in order {
        let answer = entries[idx].answer.clone();
        let Some(best) = find_best_placement(&grid, &answer, placed_words) else {
            // Expected outcome, not an error: the word is dropped.
            continue;
        };

        write_word(&mut grid, &answer, best, next_number);
        entries[idx].placement = Some(Placement {
            x: best.x,
            y: best.y,
            direction: best.direction,
            number: next_number,
        });
        placed_words += 1;
        next_number += 1;
    }

    grid
}

/// Scan every slot, across then down, row-major, and keep the highest
/// scoring feasible one. Ties keep the first candidate found, so the
/// scan order is part of the contract.
fn find_best_placement(grid: &Grid, word: &str, placed_words: usize) -> Option<Candidate> {
    let mut best: Option<Candidate> = None;
    let mut best_score = -1i32;

    for direction in [Direction::Across, Direction::Down] {
        for y in 0..GRID_SIZE {
            for x in 0..GRID_SIZE {
                let candidate = Candidate { x, y, direction };
                if !can_place_word(grid, word, candidate) {
                    continue;
                }
                let score = placement_score(grid, word, candidate, placed_words);
                if score > best_score {
                    best_score = score;
                    best = Some(candidate);
                }
            }
        }
    }

    best
}

fn can_place_word(grid: &Grid, word: &str, c: Candidate) -> bool {
    let len = word.len();
    let Candidate { x, y, direction } = c;

    // The cell just before the start and just after the end must be
    // blank, so the word never runs together with an existing one.
    match direction {
        Direction::Across => {
            if x + len > GRID_SIZE {
                return false;
            }
            if x > 0 && !grid[y][x - 1].is_blank() {
                return false;
            }
            if x + len < GRID_SIZE && !grid[y][x + len].is_blank() {
                return false;
            }
        }
        Direction::Down => {
            if y + len > GRID_SIZE {
                return false;
            }
            if y > 0 && !grid[y - 1][x].is_blank() {
                return false;
            }
            if y + len < GRID_SIZE && !grid[y + len][x].is_blank() {
                return false;
            }
        }
    }

    let mut crossings = 0u32;

    for (i, b) in word.bytes().enumerate() {
        let (cx, cy) = direction.offset(x, y, i);

        match grid[cy][cx] {
            Cell::Letter { letter, .. } => {
                // Intersection: the existing letter must agree.
                if letter != b.to_ascii_uppercase() as char {
                    return false;
                }
                crossings += 1;
            }
            Cell::Blank => {
                // Occupied perpendicular neighbors count against the
                // same cap; they would form accidental adjacent words.
                match direction {
                    Direction::Across => {
                        if cy > 0 && !grid[cy - 1][cx].is_blank() {
                            crossings += 1;
                        }
                        if cy < GRID_SIZE - 1 && !grid[cy + 1][cx].is_blank() {
                            crossings += 1;
                        }
                    }
                    Direction::Down => {
                        if cx > 0 && !grid[cy][cx - 1].is_blank() {
                            crossings += 1;
                        }
                        if cx < GRID_SIZE - 1 && !grid[cy][cx + 1].is_blank() {
                            crossings += 1;
                        }
                    }
                }
            }
        }

        if crossings > MAX_CROSSINGS {
            return false;
        }
    }

    true
}

fn placement_score(grid: &Grid, word: &str, c: Candidate, placed_words: usize) -> i32 {
    let mut score = 0i32;

    if placed_words < CENTRAL_WORD_COUNT {
        score += 12 - (c.x as i32 - CENTER).abs() - (c.y as i32 - CENTER).abs();
    }

    for i in 0..word.len() {
        let (cx, cy) = c.direction.offset(c.x, c.y, i);
        if !grid[cy][cx].is_blank() {
            score += INTERSECTION_BONUS;
        }
    }

    score
}

fn write_word(grid: &mut Grid, word: &str, c: Candidate, number: usize) {
    for (i, b) in word.bytes().enumerate() {
        let (cx, cy) = c.direction.offset(c.x, c.y, i);
        // The start cell takes this word's number; a crossing cell
        // keeps whatever number an earlier word already put there.
        let number = if i == 0 {
            Some(number)
        } else {
            grid[cy][cx].number()
        };
        grid[cy][cx] = Cell::Letter {
            letter: b.to_ascii_uppercase() as char,
            number,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clue::RawClue;
    use crate::validation::validate_grid;

    fn entries(answers: &[&str]) -> Vec<ClueEntry> {
        answers
            .iter()
            .map(|a| {
                ClueEntry::from_raw(RawClue {
                    clue: format!("clue for {}", a),
                    answer: a.to_string(),
                    direction: Direction::Across,
                })
                .unwrap()
            })
            .collect()
    }

    /// The letter the grid holds at the i-th cell of a placed entry.
    fn grid_letter(grid: &Grid, entry: &ClueEntry, i: usize) -> char {
        let (x, y) = entry.cell(i).unwrap();
        grid[y][x].letter().unwrap()
    }

    #[test]
    fn first_word_lands_centered_across() {
        let mut list = entries(&["PLANET"]);
        let grid = place_words(&mut list);

        let p = list[0].placement.unwrap();
        // Across is tried first and the centrality bonus peaks at the
        // grid center.
        assert_eq!(p.direction, Direction::Across);
        assert_eq!((p.x, p.y), (6, 6));
        assert_eq!(p.number, 1);
        assert_eq!(grid[6][6], Cell::Letter { letter: 'P', number: Some(1) });
        assert_eq!(grid[6][11].letter(), Some('T'));
    }

    #[test]
    fn placement_is_deterministic() {
        let mut a = entries(&["GRAVITY", "NEUTRON", "ORBIT", "ATOM", "STAR"]);
        let mut b = a.clone();

        let grid_a = place_words(&mut a);
        let grid_b = place_words(&mut b);

        assert_eq!(grid_a, grid_b);
        for (ea, eb) in a.iter().zip(&b) {
            assert_eq!(ea.placement, eb.placement);
        }
    }

    #[test]
    fn longest_word_gets_number_one() {
        let mut list = entries(&["CAT", "STONE", "MOON"]);
        place_words(&mut list);

        // STONE (5) is attempted before MOON (4) before CAT (3).
        assert_eq!(list[1].placement.unwrap().number, 1);
    }

    #[test]
    fn equal_lengths_keep_input_order() {
        let mut list = entries(&["STONE", "SNAKE"]);
        place_words(&mut list);

        let first = list[0].placement.unwrap();
        let second = list[1].placement.unwrap();
        assert_eq!(first.number, 1);
        assert_eq!(second.number, 2);
    }

    #[test]
    fn shared_cells_agree_under_both_words() {
        let mut list = entries(&["GRAVITY", "NEUTRON", "ORBIT", "ATOM", "STAR", "COMET"]);
        let grid = place_words(&mut list);

        let mut crossings = 0;
        for entry in list.iter().filter(|e| e.is_placed()) {
            for (i, expected) in entry.answer.chars().enumerate() {
                assert_eq!(grid_letter(&grid, entry, i), expected);
            }
            let p = entry.placement.unwrap();
            for i in 0..entry.answer_len() {
                let (x, y) = entry.cell(i).unwrap();
                let crossed = list
                    .iter()
                    .filter(|other| {
                        other.placement.map(|o| o.direction) == Some(p.direction.toggle())
                    })
                    .any(|other| other.covers(x, y));
                if crossed {
                    crossings += 1;
                }
            }
        }
        // A layout of intersecting words, not isolated strips.
        assert!(crossings > 0);
    }

    #[test]
    fn second_word_intersects_the_first() {
        let mut list = entries(&["CAT", "CAR"]);
        let grid = place_words(&mut list);

        // CAT takes the center; CAR scores higher crossing its C than
        // sitting anywhere isolated.
        assert_eq!(list[0].placement.unwrap(), Placement {
            x: 6,
            y: 6,
            direction: Direction::Across,
            number: 1,
        });
        assert_eq!(list[1].placement.unwrap(), Placement {
            x: 6,
            y: 6,
            direction: Direction::Down,
            number: 2,
        });
        // The shared cell keeps the first word's number.
        assert_eq!(grid[6][6].number(), Some(1));
    }

    #[test]
    fn isolated_placement_beats_dropping() {
        let mut list = entries(&["CAT", "CAR", "ART"]);
        let grid = place_words(&mut list);

        // All three fit: ART either crosses a shared letter or takes
        // its own best slot, it is never dropped on an open board.
        assert!(list.iter().all(|e| e.is_placed()));
        for entry in &list {
            for (i, expected) in entry.answer.chars().enumerate() {
                assert_eq!(grid_letter(&grid, entry, i), expected);
            }
        }
        assert!(validate_grid(&grid));
    }

    #[test]
    fn oversized_answer_is_never_placed() {
        // Constructed directly: from_raw would reject it at the
        // boundary, and the placer must still refuse every slot.
        let mut list = entries(&["ORBIT"]);
        list.push(ClueEntry {
            clue: "too long".to_string(),
            answer: "ABCDEFGHIJKLM".to_string(),
            hint_direction: Direction::Across,
            placement: None,
        });

        place_words(&mut list);
        assert!(list[0].is_placed());
        assert!(!list[1].is_placed());
    }

    #[test]
    fn unplaceable_word_consumes_no_number() {
        let mut list = entries(&["ORBIT", "STAR"]);
        list.insert(1, ClueEntry {
            clue: "too long".to_string(),
            answer: "ABCDEFGHIJKLM".to_string(),
            hint_direction: Direction::Across,
            placement: None,
        });

        place_words(&mut list);
        assert_eq!(list[0].placement.unwrap().number, 1);
        assert!(!list[1].is_placed());
        assert_eq!(list[2].placement.unwrap().number, 2);
    }

    #[test]
    fn conflicting_letters_are_rejected() {
        let mut grid = blank_grid();
        write_word(
            &mut grid,
            "CAT",
            Candidate { x: 4, y: 6, direction: Direction::Across },
            1,
        );

        // DOG down through CAT's A would need A == O.
        assert!(!can_place_word(
            &grid,
            "DOG",
            Candidate { x: 5, y: 5, direction: Direction::Down },
        ));
        // CART over CAT disagrees at the third letter.
        assert!(!can_place_word(
            &grid,
            "CART",
            Candidate { x: 4, y: 6, direction: Direction::Across },
        ));
    }

    #[test]
    fn words_cannot_run_together() {
        let mut grid = blank_grid();
        write_word(
            &mut grid,
            "CAT",
            Candidate { x: 4, y: 6, direction: Direction::Across },
            1,
        );

        // Starting right after CAT's T on the same row.
        assert!(!can_place_word(
            &grid,
            "DOG",
            Candidate { x: 7, y: 6, direction: Direction::Across },
        ));
        // Ending right before CAT's C.
        assert!(!can_place_word(
            &grid,
            "DOG",
            Candidate { x: 1, y: 6, direction: Direction::Across },
        ));
    }

    #[test]
    fn crowded_placements_are_rejected() {
        let mut grid = blank_grid();
        write_word(
            &mut grid,
            "STONE",
            Candidate { x: 3, y: 5, direction: Direction::Across },
            1,
        );

        // A parallel word one row below touches five occupied
        // neighbors, far past the crossing cap.
        assert!(!can_place_word(
            &grid,
            "TONES",
            Candidate { x: 3, y: 6, direction: Direction::Across },
        ));
    }

    #[test]
    fn full_puzzle_produces_a_valid_grid() {
        let mut list = entries(&[
            "GRAVITY", "NEUTRON", "ECLIPSE", "ORBIT", "COMET", "ATOM", "STAR", "ION",
        ]);
        let grid = place_words(&mut list);

        assert!(list.iter().filter(|e| e.is_placed()).count() >= 2);
        assert!(validate_grid(&grid));

        // Numbers are sequential over placed entries, in length order.
        let mut numbers: Vec<usize> = list
            .iter()
            .filter_map(|e| e.placement.map(|p| p.number))
            .collect();
        numbers.sort_unstable();
        let placed = numbers.len();
        assert_eq!(numbers, (1..=placed).collect::<Vec<_>>());
    }
}
