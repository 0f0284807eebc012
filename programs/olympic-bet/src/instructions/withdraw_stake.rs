use anchor_lang::prelude::*;

use crate::{constants::*, error::OlympicBetError, state::*};

#[derive(Accounts)]
pub struct WithdrawStake<'info> {
    #[account(mut, seeds = [PROGRAM_STATE_SEED], bump)]
    pub program_state: Account<'info, ProgramState>,

    #[account(
        mut,
        seeds = [USER_BALANCE_SEED, user.key().as_ref()],
        bump,
        has_one = user
    )]
    pub user_balance: Account<'info, UserBalance>,

    #[account(mut)]
    pub user: Signer<'info>,
}

pub fn withdraw_stake_handler(ctx: Context<WithdrawStake>) -> Result<()> {
    let program_state = &ctx.accounts.program_state;
    let user_balance = &mut ctx.accounts.user_balance;
    let clock = Clock::get()?;

    require!(
        clock.unix_timestamp >= program_state.withdrawal_cutoff,
        OlympicBetError::TooEarly
    );
    let amount = user_balance.amount;
    require!(amount > 0, OlympicBetError::NoBalance);

    // Zero the balance in the same instruction as the transfer.
    user_balance.amount = 0;

    let state_info = ctx.accounts.program_state.to_account_info();
    {
        let mut state_lamports = state_info.try_borrow_mut_lamports()?;
        **state_lamports = state_lamports
            .checked_sub(amount)
            .ok_or(OlympicBetError::ArithmeticOverflow)?;
    }
    let user_info = ctx.accounts.user.to_account_info();
    {
        let mut user_lamports = user_info.try_borrow_mut_lamports()?;
        **user_lamports = user_lamports
            .checked_add(amount)
            .ok_or(OlympicBetError::ArithmeticOverflow)?;
    }

    emit!(StakeWithdrawn {
        user: ctx.accounts.user.key(),
        amount,
    });

    Ok(())
}

#[event]
pub struct StakeWithdrawn {
    pub user: Pubkey,
    pub amount: u64,
}
