use anchor_lang::prelude::*;

#[error_code]
pub enum OlympicBetError {
    #[msg("Not authorized")]
    Unauthorized,
    #[msg("Deadline must be in the future")]
    InvalidDeadline,
    #[msg("Please send enough funds to cover the prize")]
    InsufficientEscrow,
    #[msg("You need to deposit 10 units to participate")]
    InsufficientDeposit,
    #[msg("No such event")]
    NoSuchEvent,
    #[msg("Event has ended")]
    EventEnded,
    #[msg("Event has not ended yet")]
    EventNotEnded,
    #[msg("Bet already placed")]
    BetAlreadyPlaced,
    #[msg("Entry fee not paid")]
    EntryFeeNotPaid,
    #[msg("Event is not in the required status")]
    WrongStatus,
    #[msg("No winners to pay")]
    NoWinners,
    #[msg("Withdrawals are not open yet")]
    TooEarly,
    #[msg("No balance to withdraw")]
    NoBalance,
    #[msg("Prediction is not one of the event's countries")]
    InvalidPrediction,
    #[msg("Question exceeds maximum length")]
    QuestionTooLong,
    #[msg("No countries specified")]
    NoCountriesSpecified,
    #[msg("Too many countries")]
    TooManyCountries,
    #[msg("Country name exceeds maximum length")]
    CountryNameTooLong,
    #[msg("Event participant list is full")]
    EventFull,
    #[msg("Bet account does not match the expected participant")]
    BetAccountMismatch,
    #[msg("Winner account does not match the winners list")]
    WinnerAccountMismatch,
    #[msg("Sweep amount must be greater than zero")]
    SweepAmountZero,
    #[msg("Amount exceeds free (non-escrowed) funds")]
    InsufficientFreeFunds,
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
}
