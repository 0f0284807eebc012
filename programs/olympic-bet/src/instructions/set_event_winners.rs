use anchor_lang::prelude::*;

use crate::{constants::*, error::OlympicBetError, settlement, state::*};

#[derive(Accounts)]
pub struct SetEventWinners<'info> {
    #[account(
        mut,
        seeds = [PROGRAM_STATE_SEED],
        bump,
        has_one = admin @ OlympicBetError::Unauthorized
    )]
    pub program_state: Account<'info, ProgramState>,

    #[account(
        mut,
        seeds = [EVENT_SEED, &event.id.to_le_bytes()],
        bump = event.bump
    )]
    pub event: Account<'info, Event>,

    pub admin: Signer<'info>,
}

/// Phase one of settlement. The caller passes each participant's Bet
/// account via remaining accounts, in participant (= bet) order.
pub fn set_event_winners_handler<'info>(
    ctx: Context<'_, '_, '_, 'info, SetEventWinners<'info>>,
    correct_country: String,
) -> Result<()> {
    let event = &mut ctx.accounts.event;
    let program_state = &mut ctx.accounts.program_state;
    let clock = Clock::get()?;

    require!(
        event.has_ended(clock.unix_timestamp),
        OlympicBetError::EventNotEnded
    );
    require!(event.can_determine(), OlympicBetError::WrongStatus);
    require!(
        event.has_country(&correct_country),
        OlympicBetError::InvalidPrediction
    );
    require!(
        ctx.remaining_accounts.len() == event.participants.len(),
        OlympicBetError::BetAccountMismatch
    );

    let mut bets: Vec<(Pubkey, String)> = Vec::with_capacity(event.participants.len());
    for (participant, bet_info) in event.participants.iter().zip(ctx.remaining_accounts) {
        require!(
            bet_info.owner == &crate::ID,
            OlympicBetError::BetAccountMismatch
        );
        let data = bet_info.try_borrow_data()?;
        let bet = Bet::try_deserialize(&mut &data[..])?;
        require!(
            bet.placed && bet.user == *participant,
            OlympicBetError::BetAccountMismatch
        );
        require!(bet.event_id == event.id, OlympicBetError::NoSuchEvent);
        bets.push((bet.user, bet.prediction));
    }

    let winners = settlement::select_winners(&bets, &correct_country);

    // A determined event with no winners can never be paid; its prize
    // stops backing the escrow and becomes sweepable.
    if winners.is_empty() {
        program_state.escrowed_prizes = program_state
            .escrowed_prizes
            .checked_sub(event.prize)
            .ok_or(OlympicBetError::ArithmeticOverflow)?;
        program_state.free_funds = program_state
            .free_funds
            .checked_add(event.prize)
            .ok_or(OlympicBetError::ArithmeticOverflow)?;
    }

    event.winners = winners.clone();
    event.status = EventStatus::Determined;

    emit!(EventWinnersSet {
        event_id: event.id,
        correct_country,
        winners,
        status: EventStatus::Determined,
    });

    Ok(())
}

#[event]
pub struct EventWinnersSet {
    pub event_id: u64,
    pub correct_country: String,
    pub winners: Vec<Pubkey>,
    pub status: EventStatus,
}
