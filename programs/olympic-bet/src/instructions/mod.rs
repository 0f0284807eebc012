pub mod create_event;
pub mod initialize;
pub mod pay_entry_fee;
pub mod pay_winners;
pub mod place_bet;
pub mod set_event_winners;
pub mod sweep_funds;
pub mod withdraw_stake;

pub use create_event::*;
pub use initialize::*;
pub use pay_entry_fee::*;
pub use pay_winners::*;
pub use place_bet::*;
pub use set_event_winners::*;
pub use sweep_funds::*;
pub use withdraw_stake::*;
