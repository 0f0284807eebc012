use anchor_lang::prelude::*;

use crate::{constants::*, error::OlympicBetError, state::*};

#[derive(Accounts)]
pub struct PlaceBet<'info> {
    #[account(
        mut,
        seeds = [EVENT_SEED, &event.id.to_le_bytes()],
        bump = event.bump
    )]
    pub event: Account<'info, Event>,

    // init_if_needed so a user who never deposited fails the balance
    // check below instead of failing account resolution.
    #[account(
        init_if_needed,
        payer = user,
        space = 8 + UserBalance::LEN,
        seeds = [USER_BALANCE_SEED, user.key().as_ref()],
        bump
    )]
    pub user_balance: Account<'info, UserBalance>,

    #[account(
        init_if_needed,
        payer = user,
        space = 8 + Bet::LEN,
        seeds = [BET_SEED, user.key().as_ref(), &event.id.to_le_bytes()],
        bump
    )]
    pub bet: Account<'info, Bet>,

    #[account(mut)]
    pub user: Signer<'info>,
    pub system_program: Program<'info, System>,
}

pub fn place_bet_handler(ctx: Context<PlaceBet>, prediction: String) -> Result<()> {
    let event = &mut ctx.accounts.event;
    let bet = &mut ctx.accounts.bet;
    let clock = Clock::get()?;

    require!(
        ctx.accounts.user_balance.amount > 0,
        OlympicBetError::EntryFeeNotPaid
    );
    require!(
        !event.has_ended(clock.unix_timestamp),
        OlympicBetError::EventEnded
    );
    require!(!bet.placed, OlympicBetError::BetAlreadyPlaced);
    require!(
        event.has_country(&prediction),
        OlympicBetError::InvalidPrediction
    );
    require!(
        event.participants.len() < MAX_PARTICIPANTS,
        OlympicBetError::EventFull
    );

    bet.set_inner(Bet {
        user: ctx.accounts.user.key(),
        event_id: event.id,
        prediction: prediction.clone(),
        placed: true,
    });

    // One bet per (user, event), so no duplicates can enter the list.
    event.participants.push(ctx.accounts.user.key());

    emit!(BetPlaced {
        event_id: event.id,
        prediction,
        placed: true,
        user: ctx.accounts.user.key(),
    });

    Ok(())
}

#[event]
pub struct BetPlaced {
    pub event_id: u64,
    pub prediction: String,
    pub placed: bool,
    pub user: Pubkey,
}
