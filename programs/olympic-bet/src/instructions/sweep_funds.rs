use anchor_lang::prelude::*;

use crate::{constants::*, error::OlympicBetError, state::*};

#[derive(Accounts)]
pub struct SweepFunds<'info> {
    #[account(
        mut,
        seeds = [PROGRAM_STATE_SEED],
        bump,
        has_one = admin @ OlympicBetError::Unauthorized
    )]
    pub program_state: Account<'info, ProgramState>,

    #[account(mut)]
    pub admin: Signer<'info>,
}

pub fn sweep_funds_handler(ctx: Context<SweepFunds>, amount: u64) -> Result<()> {
    require!(amount > 0, OlympicBetError::SweepAmountZero);

    let program_state = &mut ctx.accounts.program_state;
    // Sweeps are bounded by the free-funds counter so stakes and
    // escrowed prizes can never leave through this path.
    require!(
        amount <= program_state.free_funds,
        OlympicBetError::InsufficientFreeFunds
    );
    program_state.free_funds -= amount;

    let state_info = program_state.to_account_info();
    {
        let mut state_lamports = state_info.try_borrow_mut_lamports()?;
        **state_lamports = state_lamports
            .checked_sub(amount)
            .ok_or(OlympicBetError::ArithmeticOverflow)?;
    }
    let admin_info = ctx.accounts.admin.to_account_info();
    {
        let mut admin_lamports = admin_info.try_borrow_mut_lamports()?;
        **admin_lamports = admin_lamports
            .checked_add(amount)
            .ok_or(OlympicBetError::ArithmeticOverflow)?;
    }

    emit!(FundsSwept {
        admin: ctx.accounts.admin.key(),
        amount,
    });

    Ok(())
}

#[event]
pub struct FundsSwept {
    pub admin: Pubkey,
    pub amount: u64,
}
