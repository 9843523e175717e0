//! QA tests for full investigations through the public session API.
//!
//! Run with: `cargo test -p detective-core --test qa_scenarios`

use detective_core::explore::{Notice, Transition};
use detective_core::{Direction, SessionError, TestHarness, Verdict};

const ENTRY_CLUE: &str = "Uma pegada estranha na entrada principal";

// =============================================================================
// Scenario A: one clue against the accused
// =============================================================================

#[test]
fn test_left_wing_accusing_williams_is_unresolved() {
    let mut harness = TestHarness::new();
    harness.play(&["e", "e"]);
    harness.assert_in_room("Escritorio");
    harness.assert_noticed(&Notice::ClueFound {
        clue: "Carta de ameaca parcialmente queimada".to_string(),
        suspect: Some("Sra. Johnson".to_string()),
        new: true,
    });

    harness.send("s");
    assert!(harness.session.is_over());

    let accusation = harness.accuse("Sr. Williams").unwrap();
    assert_eq!(accusation.match_count(), 1);
    assert_eq!(accusation.supporting, vec![ENTRY_CLUE]);
    assert_eq!(accusation.verdict, Verdict::OneClue);
    assert!(!accusation.verdict.is_solved());
}

// =============================================================================
// Scenario B: two clues against the accused
// =============================================================================

#[test]
fn test_right_wing_accusing_williams_is_solved() {
    let mut harness = TestHarness::new();
    harness.play(&["d", "d", "s"]);

    harness.assert_clues(&[
        "Cinzas ainda quentes na lareira",
        "Flores venenosas recentemente colhidas",
        ENTRY_CLUE,
    ]);

    let accusation = harness.accuse("Sr. Williams").unwrap();
    assert_eq!(accusation.match_count(), 2);
    assert_eq!(
        accusation.supporting,
        vec!["Cinzas ainda quentes na lareira", ENTRY_CLUE]
    );
    assert_eq!(accusation.verdict, Verdict::Solved);

    let smith = harness.accuse("Dr. Smith").unwrap();
    assert_eq!(smith.match_count(), 1);
    let james = harness.accuse("Mordomo James").unwrap();
    assert_eq!(james.verdict, Verdict::NoClues);
}

// =============================================================================
// Scenario C: invalid moves leave the player in place
// =============================================================================

#[test]
fn test_invalid_move_then_valid_move() {
    let mut harness = TestHarness::new();
    harness.play(&["e", "d"]);
    harness.assert_in_room("Sala de Musica");
    let clues_before = harness.clues();

    let step = harness.send("e");
    assert_eq!(step.transition, Transition::Stayed);
    assert_eq!(step.notices[0], Notice::InvalidMove(Direction::Left));
    harness.assert_in_room("Sala de Musica");
    assert_eq!(harness.clues(), clues_before);

    harness.send("D");
    harness.assert_in_room("Piano Antigo");
    assert!(harness
        .clues()
        .contains(&"Partitura com codigo secreto".to_string()));
}

#[test]
fn test_unrecognized_input_is_rejected() {
    let mut harness = TestHarness::new();
    for input in ["x", "1", "?", "north"] {
        let step = harness.send(input);
        assert_eq!(step.transition, Transition::Stayed);
        assert!(matches!(step.notices[0], Notice::Unrecognized(_)));
    }
    harness.assert_in_room("Hall de Entrada");
    harness.assert_clues(&[ENTRY_CLUE]);
}

#[test]
fn test_room_without_clue_adds_nothing() {
    let mut harness = TestHarness::new();
    harness.send("e");
    let before = harness.clues();

    let step = harness.send("d");
    assert!(step.notices.contains(&Notice::NoClue));
    assert_eq!(harness.clues(), before);
}

#[test]
fn test_full_tree_walk_collects_along_path() {
    let mut harness = TestHarness::new();
    harness.play(&["d", "e", "e"]);
    harness.assert_in_room("Despensa");
    harness.assert_noticed(&Notice::DeadEnd);

    // Still exploring at a dead end until the player ends it.
    assert!(matches!(
        harness.accuse("Dr. Smith"),
        Err(SessionError::StillExploring)
    ));

    harness.send("s");
    harness.assert_clues(&[
        "Cinzas ainda quentes na lareira",
        "Faca com manchas suspeitas",
        "Frasco vazio de arsênico",
        ENTRY_CLUE,
    ]);
    let report = harness.session.final_report();
    assert_eq!(report.rooms_visited, 4);
    assert_eq!(report.discoveries, 4);
    assert_eq!(harness.transitions.last(), Some(&Transition::Ended));
}

#[test]
fn test_commands_after_end_are_ignored() {
    let mut harness = TestHarness::new();
    harness.play(&["s", "e", "d"]);
    harness.assert_in_room("Hall de Entrada");
    assert_eq!(
        harness.transitions,
        vec![Transition::Ended, Transition::Stayed, Transition::Stayed]
    );
}

#[test]
fn test_accused_name_is_exact() {
    let mut harness = TestHarness::new();
    harness.play(&["d", "s"]);

    assert!(harness.accuse("Sr. Williams\n").unwrap().verdict.is_solved());
    assert_eq!(harness.accuse("SR. WILLIAMS").unwrap().match_count(), 0);
    assert_eq!(harness.accuse("Williams").unwrap().match_count(), 0);
}

#[test]
fn test_roster_lists_all_suspects() {
    let harness = TestHarness::new();
    assert_eq!(
        harness.session.suspects(),
        vec!["Dr. Smith", "Sra. Johnson", "Sr. Williams", "Mordomo James"]
    );
}
