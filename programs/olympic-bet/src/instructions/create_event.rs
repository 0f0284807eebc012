use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::{constants::*, error::OlympicBetError, state::*};

#[derive(Accounts)]
#[instruction(prize: u64, question: String, countries: Vec<String>)]
pub struct CreateEvent<'info> {
    #[account(
        mut,
        seeds = [PROGRAM_STATE_SEED],
        bump,
        has_one = admin @ OlympicBetError::Unauthorized
    )]
    pub program_state: Account<'info, ProgramState>,

    #[account(
        init,
        payer = admin,
        space = 8 + Event::space(&question, &countries),
        seeds = [EVENT_SEED, &program_state.next_event_id.to_le_bytes()],
        bump
    )]
    pub event: Account<'info, Event>,

    #[account(mut)]
    pub admin: Signer<'info>,
    pub system_program: Program<'info, System>,
}

pub fn create_event_handler(
    ctx: Context<CreateEvent>,
    prize: u64,
    question: String,
    countries: Vec<String>,
    deadline: i64,
    escrow: u64,
) -> Result<()> {
    let clock = Clock::get()?;
    require!(
        deadline > clock.unix_timestamp,
        OlympicBetError::InvalidDeadline
    );
    require!(escrow >= prize, OlympicBetError::InsufficientEscrow);
    require!(
        question.len() <= MAX_QUESTION_LEN,
        OlympicBetError::QuestionTooLong
    );
    require!(!countries.is_empty(), OlympicBetError::NoCountriesSpecified);
    require!(
        countries.len() <= MAX_COUNTRIES,
        OlympicBetError::TooManyCountries
    );
    require!(
        countries.iter().all(|c| c.len() <= MAX_COUNTRY_LEN),
        OlympicBetError::CountryNameTooLong
    );

    // Escrow the prize (plus any excess, which becomes free funds).
    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.admin.to_account_info(),
                to: ctx.accounts.program_state.to_account_info(),
            },
        ),
        escrow,
    )?;

    let program_state = &mut ctx.accounts.program_state;
    let event_id = program_state.next_event_id;

    program_state.next_event_id = program_state
        .next_event_id
        .checked_add(1)
        .ok_or(OlympicBetError::ArithmeticOverflow)?;
    program_state.escrowed_prizes = program_state
        .escrowed_prizes
        .checked_add(prize)
        .ok_or(OlympicBetError::ArithmeticOverflow)?;
    program_state.free_funds = program_state
        .free_funds
        .checked_add(escrow - prize)
        .ok_or(OlympicBetError::ArithmeticOverflow)?;

    ctx.accounts.event.set_inner(Event {
        id: event_id,
        prize,
        question: question.clone(),
        countries: countries.clone(),
        deadline,
        participants: Vec::new(),
        winners: Vec::new(),
        status: EventStatus::Open,
        bump: ctx.bumps.event,
    });

    emit!(EventCreated {
        event_id,
        prize,
        question,
        countries,
        deadline,
        status: EventStatus::Open,
    });

    Ok(())
}

#[event]
pub struct EventCreated {
    pub event_id: u64,
    pub prize: u64,
    pub question: String,
    pub countries: Vec<String>,
    pub deadline: i64,
    pub status: EventStatus,
}
