//! Escrow-and-settlement engine for outcome-based wagering events.
//!
//! Participants deposit a fixed entry stake, the administrator opens
//! prediction events with an escrowed prize, each participant commits one
//! prediction per event before its deadline, and after the deadline the
//! administrator determines the winners and distributes the prize evenly
//! among them (floor division, remainder retained). Stakes become
//! withdrawable after a global cutoff; residual non-escrowed funds can be
//! swept by the administrator.

#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod settlement;
pub mod state;

pub use instructions::*;
pub use state::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod olympic_bet {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>, withdrawal_cutoff: i64) -> Result<()> {
        instructions::initialize::handler(ctx, withdrawal_cutoff)
    }

    pub fn pay_entry_fee(ctx: Context<PayEntryFee>, amount: u64) -> Result<()> {
        instructions::pay_entry_fee::pay_entry_fee_handler(ctx, amount)
    }

    pub fn create_event(
        ctx: Context<CreateEvent>,
        prize: u64,
        question: String,
        countries: Vec<String>,
        deadline: i64,
        escrow: u64,
    ) -> Result<()> {
        instructions::create_event::create_event_handler(
            ctx, prize, question, countries, deadline, escrow,
        )
    }

    pub fn place_bet(ctx: Context<PlaceBet>, prediction: String) -> Result<()> {
        instructions::place_bet::place_bet_handler(ctx, prediction)
    }

    pub fn set_event_winners<'info>(
        ctx: Context<'_, '_, '_, 'info, SetEventWinners<'info>>,
        correct_country: String,
    ) -> Result<()> {
        instructions::set_event_winners::set_event_winners_handler(ctx, correct_country)
    }

    pub fn pay_winners<'info>(ctx: Context<'_, '_, '_, 'info, PayWinners<'info>>) -> Result<()> {
        instructions::pay_winners::pay_winners_handler(ctx)
    }

    pub fn withdraw_stake(ctx: Context<WithdrawStake>) -> Result<()> {
        instructions::withdraw_stake::withdraw_stake_handler(ctx)
    }

    pub fn sweep_funds(ctx: Context<SweepFunds>, amount: u64) -> Result<()> {
        instructions::sweep_funds::sweep_funds_handler(ctx, amount)
    }
}
