use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::{constants::*, error::OlympicBetError, state::*};

#[derive(Accounts)]
pub struct PayEntryFee<'info> {
    #[account(mut, seeds = [PROGRAM_STATE_SEED], bump)]
    pub program_state: Account<'info, ProgramState>,

    #[account(
        init_if_needed,
        payer = user,
        space = 8 + UserBalance::LEN,
        seeds = [USER_BALANCE_SEED, user.key().as_ref()],
        bump
    )]
    pub user_balance: Account<'info, UserBalance>,

    #[account(mut)]
    pub user: Signer<'info>,
    pub system_program: Program<'info, System>,
}

pub fn pay_entry_fee_handler(ctx: Context<PayEntryFee>, amount: u64) -> Result<()> {
    require!(
        UserBalance::deposit_meets_minimum(amount),
        OlympicBetError::InsufficientDeposit
    );

    // Stake lamports live in the state PDA alongside escrowed prizes.
    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.user.to_account_info(),
                to: ctx.accounts.program_state.to_account_info(),
            },
        ),
        amount,
    )?;

    let user_balance = &mut ctx.accounts.user_balance;
    user_balance.user = ctx.accounts.user.key();
    // Re-deposits are permitted and additive.
    user_balance.amount = user_balance
        .amount
        .checked_add(amount)
        .ok_or(OlympicBetError::ArithmeticOverflow)?;

    emit!(EntryFeePaid {
        user: ctx.accounts.user.key(),
        amount,
        balance: user_balance.amount,
    });

    Ok(())
}

#[event]
pub struct EntryFeePaid {
    pub user: Pubkey,
    pub amount: u64,
    pub balance: u64,
}
