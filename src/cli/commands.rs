//! Command handlers for the demo bank shell.

use chrono::Utc;
use rand::thread_rng;

use crate::cli::{output, CommandError, LoopControl, ShellContext};
use crate::core::services::{
    AccountService, AuthService, LoanService, StatementOrder, StatementService, SummaryService,
    TransferService,
};
use crate::domain::common::Displayable;

/// Every command the shell understands, for help and tab completion.
pub const COMMAND_NAMES: &[&str] = &[
    "help", "login", "logout", "accounts", "balance", "summary", "movements", "sort", "transfer",
    "loan", "pool", "signup", "close", "exit", "quit",
];

pub fn dispatch(
    context: &mut ShellContext,
    command: &str,
    args: &[&str],
) -> Result<LoopControl, CommandError> {
    match command {
        "help" => help(),
        "login" => login(context, args),
        "logout" => logout(context),
        "accounts" => accounts(context),
        "balance" => balance(context),
        "summary" => summary(context),
        "movements" => movements(context),
        "sort" => sort(context),
        "transfer" => transfer(context, args),
        "loan" => loan(context, args),
        "pool" => pool(context),
        "signup" => signup(context, args),
        "close" => close(context, args),
        "exit" | "quit" => return Ok(LoopControl::Exit),
        other => return Err(CommandError::Unknown(other.to_string())),
    }?;
    Ok(LoopControl::Continue)
}

fn help() -> Result<(), CommandError> {
    output::section("Commands");
    output::info("  login <username> <pin>     open a session");
    output::info("  logout                     end the session");
    output::info("  accounts                   list account labels");
    output::info("  balance                    current balance");
    output::info("  summary                    in / out / interest totals");
    output::info("  movements                  statement in the current order");
    output::info("  sort                       toggle the statement sort");
    output::info("  transfer <username> <amt>  send funds to another account");
    output::info("  loan <amount>              request a credit-gated loan");
    output::info("  pool                       remaining bank-wide loan pool");
    output::info("  signup <pin> <full name>   open a new account");
    output::info("  close <username> <pin>     close the logged-in account");
    output::info("  exit | quit                leave the shell");
    Ok(())
}

fn login(context: &mut ShellContext, args: &[&str]) -> Result<(), CommandError> {
    let [username, pin] = args else {
        return Err(CommandError::Usage("login <username> <pin>"));
    };
    let id = AuthService::login(&context.bank, username, pin)?;
    context.start_session(id);
    if let Some(account) = context.active_account() {
        output::success(format!("Welcome, {}!", account.first_name()));
    }
    Ok(())
}

fn logout(context: &mut ShellContext) -> Result<(), CommandError> {
    context.require_session()?;
    context.end_session();
    output::info("Logged out.");
    Ok(())
}

fn accounts(context: &ShellContext) -> Result<(), CommandError> {
    for account in AccountService::list(&context.bank) {
        output::info(format!("  {}", account.display_label()));
    }
    Ok(())
}

fn balance(context: &ShellContext) -> Result<(), CommandError> {
    context.require_session()?;
    let account = context.active_account().ok_or(CommandError::NotLoggedIn)?;
    let balance = SummaryService::balance(account);
    output::info(format!("Balance: {:.2} {}", balance, account.currency));
    Ok(())
}

fn summary(context: &ShellContext) -> Result<(), CommandError> {
    context.require_session()?;
    let account = context.active_account().ok_or(CommandError::NotLoggedIn)?;
    let summary = SummaryService::summarize(account);
    output::info(format!("In:       {:.2} {}", summary.income, account.currency));
    output::info(format!(
        "Out:      {:.2} {}",
        summary.outgoing.abs(),
        account.currency
    ));
    output::info(format!(
        "Interest: {:.2} {}",
        summary.interest, account.currency
    ));
    Ok(())
}

fn movements(context: &ShellContext) -> Result<(), CommandError> {
    context.require_session()?;
    let account = context.active_account().ok_or(CommandError::NotLoggedIn)?;
    let lines = StatementService::statement(account, context.statement_order, Utc::now());
    // Newest row on top, as the original rendered it.
    for line in lines.iter().rev() {
        output::info(format!(
            "{:>3}  {:<10}  {:<12}  {}",
            line.sequence,
            line.kind.label(),
            line.display_date,
            output::amount(line.amount)
        ));
    }
    Ok(())
}

fn sort(context: &mut ShellContext) -> Result<(), CommandError> {
    context.require_session()?;
    context.statement_order = context.statement_order.toggled();
    let direction = match context.statement_order {
        StatementOrder::AmountDescending => "amount, descending",
        StatementOrder::AmountAscending => "amount, ascending",
        StatementOrder::Recorded => "recorded order",
    };
    output::info(format!("Statement sorted by {direction}."));
    movements(context)
}

fn transfer(context: &mut ShellContext, args: &[&str]) -> Result<(), CommandError> {
    let [receiver, amount] = args else {
        return Err(CommandError::Usage("transfer <username> <amount>"));
    };
    let sender = context.require_session()?;
    let amount = parse_amount(amount, "transfer <username> <amount>")?;
    TransferService::transfer(&mut context.bank, sender, receiver, amount)?;
    output::success(format!("Transferred {amount:.2} to {receiver}."));
    Ok(())
}

fn loan(context: &mut ShellContext, args: &[&str]) -> Result<(), CommandError> {
    let [amount] = args else {
        return Err(CommandError::Usage("loan <amount>"));
    };
    let account_id = context.require_session()?;
    let amount = parse_amount(amount, "loan <amount>")?;
    let granted = LoanService::request(&mut context.bank, account_id, amount)?;
    output::success(format!("Loan approved: {granted:.2}."));
    Ok(())
}

fn pool(context: &ShellContext) -> Result<(), CommandError> {
    output::info(format!("Loan pool remaining: {:.2}", context.bank.loan_pool));
    Ok(())
}

fn signup(context: &mut ShellContext, args: &[&str]) -> Result<(), CommandError> {
    let [pin, name @ ..] = args else {
        return Err(CommandError::Usage("signup <pin> <full name>"));
    };
    if name.is_empty() {
        return Err(CommandError::Usage("signup <pin> <full name>"));
    }
    let owner = name.join(" ");
    let id = AccountService::signup(
        &mut context.bank,
        &owner,
        pin,
        &context.config,
        &mut thread_rng(),
    )?;
    // The original auto-logged the fresh account in.
    context.start_session(id);
    if let Some(account) = context.active_account() {
        output::success(format!(
            "Account created. Username: {}, credit score: {} ({}).",
            account.username,
            account.credit_score.value(),
            account.credit_score.rating().label()
        ));
    }
    Ok(())
}

fn close(context: &mut ShellContext, args: &[&str]) -> Result<(), CommandError> {
    let [username, pin] = args else {
        return Err(CommandError::Usage("close <username> <pin>"));
    };
    let account_id = context.require_session()?;
    let removed = AccountService::close(&mut context.bank, account_id, username, pin)?;
    context.end_session();
    output::info(format!("Account {} closed.", removed.username));
    Ok(())
}

fn parse_amount(raw: &str, usage: &'static str) -> Result<f64, CommandError> {
    raw.parse::<f64>().map_err(|_| CommandError::Usage(usage))
}
