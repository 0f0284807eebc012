use anchor_lang::prelude::*;

use crate::{constants::*, error::OlympicBetError, settlement, state::*};

#[derive(Accounts)]
pub struct PayWinners<'info> {
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

/// Phase two of settlement. Winner wallets are passed via remaining
/// accounts in winners-list order; each receives `prize / winner_count`
/// lamports and the floor-division remainder stays with the engine.
pub fn pay_winners_handler<'info>(
    ctx: Context<'_, '_, '_, 'info, PayWinners<'info>>,
) -> Result<()> {
    let event = &mut ctx.accounts.event;
    let program_state = &mut ctx.accounts.program_state;

    require!(event.can_pay(), OlympicBetError::WrongStatus);
    require!(!event.winners.is_empty(), OlympicBetError::NoWinners);
    require!(
        ctx.remaining_accounts.len() == event.winners.len(),
        OlympicBetError::WinnerAccountMismatch
    );
    for (winner, wallet) in event.winners.iter().zip(ctx.remaining_accounts) {
        require!(
            wallet.key() == *winner,
            OlympicBetError::WinnerAccountMismatch
        );
    }

    let winner_count = event.winners.len() as u64;
    let (share, remainder) =
        settlement::prize_share(event.prize, winner_count).ok_or(OlympicBetError::NoWinners)?;
    let total_paid = share
        .checked_mul(winner_count)
        .ok_or(OlympicBetError::ArithmeticOverflow)?;

    // Debit the state PDA, then credit each winner.
    let state_info = program_state.to_account_info();
    {
        let mut state_lamports = state_info.try_borrow_mut_lamports()?;
        **state_lamports = state_lamports
            .checked_sub(total_paid)
            .ok_or(OlympicBetError::ArithmeticOverflow)?;
    }
    for wallet in ctx.remaining_accounts {
        let mut wallet_lamports = wallet.try_borrow_mut_lamports()?;
        **wallet_lamports = wallet_lamports
            .checked_add(share)
            .ok_or(OlympicBetError::ArithmeticOverflow)?;
    }

    program_state.escrowed_prizes = program_state
        .escrowed_prizes
        .checked_sub(event.prize)
        .ok_or(OlympicBetError::ArithmeticOverflow)?;
    program_state.free_funds = program_state
        .free_funds
        .checked_add(remainder)
        .ok_or(OlympicBetError::ArithmeticOverflow)?;

    event.status = EventStatus::Paid;

    emit!(WinnersPaid {
        event_id: event.id,
        prize: event.prize,
        share,
        winner_count,
        status: EventStatus::Paid,
    });

    Ok(())
}

#[event]
pub struct WinnersPaid {
    pub event_id: u64,
    pub prize: u64,
    pub share: u64,
    pub winner_count: u64,
    pub status: EventStatus,
}
