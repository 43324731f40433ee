//! Deck and roster property tests.
//!
//! Shuffles must keep the 52-card multiset intact and show no positional
//! bias; rosters must keep order and fill blank names by seat.

use proptest::prelude::*;

use kings_cup::{build_ordered_deck, shuffle, Deck, GameRng, Rank, Roster, DECK_SIZE, MAX_PLAYERS};

fn rank_counts(cards: &[Rank]) -> [usize; 13] {
    let mut counts = [0usize; 13];
    for &card in cards {
        let idx = Rank::ALL.iter().position(|&r| r == card).unwrap();
        counts[idx] += 1;
    }
    counts
}

/// Test the canonical deck: 52 cards, four of each rank.
#[test]
fn test_ordered_deck_contents() {
    let cards = build_ordered_deck();

    assert_eq!(cards.len(), DECK_SIZE);
    assert_eq!(rank_counts(&cards), [4; 13]);
    assert_eq!(cards, build_ordered_deck());
}

/// Test that no rank is favoured at any position across many shuffles.
#[test]
fn test_shuffle_positional_uniformity() {
    const TRIALS: usize = 2000;
    let positions = [0, 13, 25, 38, 51];
    let mut hits = vec![[0usize; 13]; positions.len()];
    let mut rng = GameRng::new(2024);

    for _ in 0..TRIALS {
        let mut cards = build_ordered_deck();
        shuffle(&mut cards, &mut rng);
        for (slot, &pos) in positions.iter().enumerate() {
            let idx = Rank::ALL.iter().position(|&r| r == cards[pos]).unwrap();
            hits[slot][idx] += 1;
        }
    }

    // Expected 2000 * 4/52 ≈ 154 per rank per position
    for (slot, counts) in hits.iter().enumerate() {
        for (idx, &count) in counts.iter().enumerate() {
            assert!(
                (100..=210).contains(&count),
                "rank {} at position {} seen {} times",
                Rank::ALL[idx],
                positions[slot],
                count
            );
        }
    }
}

/// Test that drawing a shuffled deck deals every card exactly once.
#[test]
fn test_drawing_deals_every_card() {
    let mut deck = Deck::shuffled(&mut GameRng::new(5));
    let mut dealt = Vec::new();
    while let Some(card) = deck.draw() {
        dealt.push(card);
    }

    assert_eq!(dealt.len(), DECK_SIZE);
    assert_eq!(rank_counts(&dealt), [4; 13]);
    assert!(deck.is_empty());
}

proptest! {
    #[test]
    fn prop_shuffle_preserves_multiset(seed in any::<u64>()) {
        let mut rng = GameRng::new(seed);
        let deck = Deck::shuffled(&mut rng);

        prop_assert_eq!(deck.len(), DECK_SIZE);
        prop_assert_eq!(rank_counts(deck.as_slice()), [4; 13]);
    }

    #[test]
    fn prop_draw_shrinks_by_one(seed in any::<u64>(), draws in 0usize..60) {
        let mut deck = Deck::shuffled(&mut GameRng::new(seed));

        for i in 0..draws {
            let before = deck.len();
            let card = deck.draw();
            if i < DECK_SIZE {
                prop_assert!(card.is_some());
                prop_assert_eq!(deck.len(), before - 1);
            } else {
                prop_assert!(card.is_none());
                prop_assert_eq!(deck.len(), 0);
            }
        }
    }

    #[test]
    fn prop_roster_names(names in prop::collection::vec("[ a-zA-Z]{0,6}", 2..12)) {
        let roster = Roster::new(&names, "Player", MAX_PLAYERS).unwrap();

        prop_assert_eq!(roster.len(), names.len());
        for (i, (player, raw)) in roster.iter().zip(&names).enumerate() {
            prop_assert_eq!(player.id.index(), i);
            if raw.trim().is_empty() {
                prop_assert_eq!(player.name.clone(), format!("Player {}", i + 1));
            } else {
                prop_assert_eq!(&player.name, raw);
            }
        }
    }

    #[test]
    fn prop_roster_next_cycles(count in 2usize..20) {
        let roster = Roster::generated(count, "Player", MAX_PLAYERS).unwrap();
        let start = kings_cup::PlayerId::new(0);

        let mut seat = start;
        for _ in 0..count {
            seat = roster.next(seat);
        }
        prop_assert_eq!(seat, start);
    }
}
