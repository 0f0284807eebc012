use anchor_lang::prelude::*;

use crate::{constants::*, state::*};

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = admin,
        space = 8 + ProgramState::LEN,
        seeds = [PROGRAM_STATE_SEED],
        bump
    )]
    pub program_state: Account<'info, ProgramState>,

    #[account(mut)]
    pub admin: Signer<'info>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Initialize>, withdrawal_cutoff: i64) -> Result<()> {
    ctx.accounts.program_state.set_inner(ProgramState {
        admin: ctx.accounts.admin.key(),
        // Event ids are 1-based; id 0 is reserved.
        next_event_id: 1,
        withdrawal_cutoff,
        escrowed_prizes: 0,
        free_funds: 0,
    });
    Ok(())
}
