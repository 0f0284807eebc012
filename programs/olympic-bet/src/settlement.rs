//! Winner determination and prize-split arithmetic, kept free of account
//! plumbing so the money invariants can be tested directly.

use anchor_lang::prelude::*;

/// Collects the bettors whose prediction equals `correct_country`,
/// preserving bet order. Entries arrive in event insertion order, so the
/// resulting winners list is ordered the same way.
pub fn select_winners(bets: &[(Pubkey, String)], correct_country: &str) -> Vec<Pubkey> {
    bets.iter()
        .filter(|(_, prediction)| prediction == correct_country)
        .map(|(user, _)| *user)
        .collect()
}

/// Splits `prize` evenly across `winner_count` winners using floor
/// division. Returns the per-winner share and the undistributed
/// remainder, which the engine retains. `None` when there are no winners.
pub fn prize_share(prize: u64, winner_count: u64) -> Option<(u64, u64)> {
    let share = prize.checked_div(winner_count)?;
    let remainder = prize - share * winner_count;
    Some((share, remainder))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bettor(byte: u8) -> Pubkey {
        Pubkey::new_from_array([byte; 32])
    }

    fn sample_bets() -> Vec<(Pubkey, String)> {
        vec![
            (bettor(1), "France".to_string()),
            (bettor(2), "France".to_string()),
            (bettor(3), "France".to_string()),
            (bettor(4), "Germany".to_string()),
            (bettor(5), "Germany".to_string()),
        ]
    }

    #[test]
    fn winners_follow_bet_order() {
        let winners = select_winners(&sample_bets(), "France");
        assert_eq!(winners, vec![bettor(1), bettor(2), bettor(3)]);
    }

    #[test]
    fn no_matching_bets_yields_empty_winners() {
        let winners = select_winners(&sample_bets(), "Italy");
        assert!(winners.is_empty());
    }

    #[test]
    fn interleaved_predictions_keep_relative_order() {
        let bets = vec![
            (bettor(9), "Germany".to_string()),
            (bettor(7), "France".to_string()),
            (bettor(8), "Germany".to_string()),
            (bettor(6), "France".to_string()),
        ];
        assert_eq!(select_winners(&bets, "France"), vec![bettor(7), bettor(6)]);
        assert_eq!(select_winners(&bets, "Germany"), vec![bettor(9), bettor(8)]);
    }

    #[test]
    fn ten_split_three_ways_pays_three_each() {
        let (share, remainder) = prize_share(10, 3).unwrap();
        assert_eq!(share, 3);
        assert_eq!(remainder, 1);
    }

    #[test]
    fn exact_split_has_no_remainder() {
        let (share, remainder) = prize_share(10, 5).unwrap();
        assert_eq!(share, 2);
        assert_eq!(remainder, 0);
    }

    #[test]
    fn split_never_exceeds_prize() {
        for prize in [0u64, 1, 7, 10, 1_000_000_007] {
            for count in 1u64..=10 {
                let (share, remainder) = prize_share(prize, count).unwrap();
                assert_eq!(share * count + remainder, prize);
                assert!(remainder < count);
            }
        }
    }

    #[test]
    fn zero_winners_is_not_payable() {
        assert!(prize_share(10, 0).is_none());
    }

    #[test]
    fn prize_smaller_than_winner_count_pays_nothing() {
        let (share, remainder) = prize_share(2, 3).unwrap();
        assert_eq!(share, 0);
        assert_eq!(remainder, 2);
    }
}
