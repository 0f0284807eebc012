use anchor_lang::prelude::*;

use crate::constants::*;

#[account]
pub struct ProgramState {
    /// Administrator fixed at initialization; every gated instruction
    /// checks the signer against this key
    pub admin: Pubkey,
    /// 1-based id of the next event; 0 is reserved. Doubles as the
    /// externally observable event count cursor
    pub next_event_id: u64,
    /// Global timestamp after which stakes become withdrawable
    pub withdrawal_cutoff: i64,
    /// Sum of prizes for events that can still pay out
    pub escrowed_prizes: u64,
    /// Lamports held by the engine that back neither stakes nor prizes;
    /// the only funds `sweep_funds` may touch
    pub free_funds: u64,
}

impl ProgramState {
    pub const LEN: usize = 32 + // admin
        8 + // next_event_id
        8 + // withdrawal_cutoff
        8 + // escrowed_prizes
        8; // free_funds

}

#[account]
pub struct UserBalance {
    pub user: Pubkey,
    pub amount: u64,
}

impl UserBalance {
    pub const LEN: usize = 32 + 8;

    pub fn deposit_meets_minimum(amount: u64) -> bool {
        amount >= ENTRY_FEE
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum EventStatus {
    Open,
    Determined,
    Paid,
}

#[account]
pub struct Event {
    pub id: u64,
    /// Prize escrowed at creation; never changes afterwards
    pub prize: u64,
    pub question: String,
    pub countries: Vec<String>,
    pub deadline: i64,
    /// Append-only, insertion order = bet order
    pub participants: Vec<Pubkey>,
    /// Empty until the event is determined, fixed once set
    pub winners: Vec<Pubkey>,
    pub status: EventStatus,
    pub bump: u8,
}

impl Event {
    /// Account space for a freshly created event. The participant and
    /// winner lists are sized up front to their capacity so bets never
    /// need a realloc.
    pub fn space(question: &str, countries: &[String]) -> usize {
        8 + // id
        8 + // prize
        4 + question.len() + // question
        4 + countries.iter().map(|c| 4 + c.len()).sum::<usize>() + // countries
        8 + // deadline
        4 + 32 * MAX_PARTICIPANTS + // participants
        4 + 32 * MAX_PARTICIPANTS + // winners
        1 + // status
        1 // bump
    }

    pub fn has_country(&self, country: &str) -> bool {
        self.countries.iter().any(|c| c == country)
    }

    pub fn has_ended(&self, now: i64) -> bool {
        now >= self.deadline
    }

    // Status only moves forward: Open -> Determined -> Paid.
    pub fn can_determine(&self) -> bool {
        self.status == EventStatus::Open
    }

    pub fn can_pay(&self) -> bool {
        self.status == EventStatus::Determined
    }
}

#[account]
pub struct Bet {
    pub user: Pubkey,
    pub event_id: u64,
    pub prediction: String,
    pub placed: bool,
}

impl Bet {
    pub const LEN: usize = 32 + // user
        8 + // event_id
        4 + MAX_COUNTRY_LEN + // prediction
        1; // placed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_event() -> Event {
        Event {
            id: 1,
            prize: 10,
            question: "Which country will win the most gold medals?".into(),
            countries: vec!["France".into(), "Germany".into(), "Italy".into()],
            deadline: 1_723_302_000,
            participants: vec![],
            winners: vec![],
            status: EventStatus::Open,
            bump: 255,
        }
    }

    #[test]
    fn country_membership() {
        let event = open_event();
        assert!(event.has_country("France"));
        assert!(event.has_country("Italy"));
        assert!(!event.has_country("Spain"));
        assert!(!event.has_country("france"));
    }

    #[test]
    fn deadline_is_inclusive() {
        let event = open_event();
        assert!(!event.has_ended(event.deadline - 1));
        assert!(event.has_ended(event.deadline));
        assert!(event.has_ended(event.deadline + 1));
    }

    #[test]
    fn settlement_only_moves_forward() {
        let mut event = open_event();
        assert!(event.can_determine());
        assert!(!event.can_pay());

        event.status = EventStatus::Determined;
        assert!(!event.can_determine());
        assert!(event.can_pay());

        // Paid is terminal.
        event.status = EventStatus::Paid;
        assert!(!event.can_determine());
        assert!(!event.can_pay());
    }

    #[test]
    fn rejects_deposits_below_ten_units() {
        assert!(!UserBalance::deposit_meets_minimum(ENTRY_FEE - 1));
        assert!(!UserBalance::deposit_meets_minimum(0));
        assert!(UserBalance::deposit_meets_minimum(ENTRY_FEE));
        assert!(UserBalance::deposit_meets_minimum(ENTRY_FEE + 1));
    }

    #[test]
    fn bet_len_covers_longest_country_name() {
        let bet = Bet {
            user: Pubkey::new_unique(),
            event_id: u64::MAX,
            prediction: "x".repeat(MAX_COUNTRY_LEN),
            placed: true,
        };
        assert!(bet.try_to_vec().unwrap().len() <= Bet::LEN);
    }

    #[test]
    fn event_space_covers_full_lists() {
        let event = open_event();
        let space = Event::space(&event.question, &event.countries);
        // Lists are reserved at capacity regardless of current fill.
        assert!(space > 2 * (4 + 32 * MAX_PARTICIPANTS));
        let serialized = event.try_to_vec().unwrap();
        assert!(serialized.len() <= space);
    }
}
