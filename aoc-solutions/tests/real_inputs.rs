//! Known answers for the author's puzzle inputs
//!
//! Inputs are personal and not checked in, so this suite is ignored by
//! default. Put them at `inputs/dayN.txt` in the workspace root and run
//! `cargo test -p aoc-solutions --test real_inputs -- --ignored`.
//! Days without an input file are skipped, but at least one must be present.

use aoc_solutions::registry;
use aoc_solver::{Answer, Solution as _};
use std::path::PathBuf;

const KNOWN_ANSWERS: [(u8, Answer, Option<Answer>); 25] = [
    (1, 53651, Some(53894)),
    (2, 2486, Some(87984)),
    (3, 532428, Some(84051670)),
    (4, 26914, Some(13080971)),
    (5, 993500720, Some(4917124)),
    (6, 1731600, Some(40087680)),
    (7, 253313241, Some(253362743)),
    (8, 18727, Some(18024643846273)),
    (9, 1647269739, Some(864)),
    (10, 7063, Some(589)),
    (11, 9543156, Some(625243292686)),
    (12, 7007, Some(3476169006222)),
    (13, 35210, Some(31974)),
    (14, 111339, Some(93736)),
    (15, 508498, Some(279116)),
    (16, 7798, Some(8026)),
    (17, 724, Some(877)),
    (18, 61865, Some(40343619199142)),
    (19, 362930, Some(116365820987729)),
    (20, 680278040, Some(243548140870057)),
    (21, 3743, Some(618261433219147)),
    (22, 459, Some(75784)),
    (23, 2182, Some(6670)),
    (24, 14672, Some(646810057104753)),
    (25, 554064, None),
];

fn input_for(day: u8) -> Option<String> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("inputs")
        .join(format!("day{day}.txt"));
    std::fs::read_to_string(path).ok()
}

#[test]
#[ignore = "needs personal puzzle inputs under inputs/"]
fn known_answers_hold() {
    let registry = registry().unwrap();
    let mut checked = 0;
    for (day, part_one, part_two) in KNOWN_ANSWERS {
        let Some(input) = input_for(day) else {
            continue;
        };
        let result = registry.lookup(day).unwrap().run(&input).unwrap();
        assert_eq!(result.answer(1), Some(part_one), "day {day} part 1");
        assert_eq!(result.answer(2), part_two, "day {day} part 2");
        checked += 1;
    }
    assert!(checked > 0, "no inputs/dayN.txt found, nothing was checked");
    eprintln!("checked {checked} of {} days against real inputs", KNOWN_ANSWERS.len());
}
