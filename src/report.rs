//! Text rendering of a run snapshot

use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;

use crate::common::types::TradeRecord;
use crate::strategy::Snapshot;

/// Round a money amount to cents, midpoint away from zero
///
/// `None` for values a `Decimal` cannot hold (NaN, infinities, > ~7.9e28).
pub fn round_money(value: f64) -> Option<Decimal> {
    Decimal::from_f64_retain(value)
        .map(|d| d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
}

fn money(value: f64) -> String {
    match round_money(value) {
        Some(d) => format!("{:.2}", d),
        None => format!("{}", value),
    }
}

fn signed_money(value: f64) -> String {
    if value > 0.0 {
        format!("+{}", money(value))
    } else {
        money(value)
    }
}

/// Summary and trade history of a run, ready to print
pub struct Report<'a>(pub &'a Snapshot);

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.0;

        writeln!(f, "Status:          {} ({})", s.status, s.status.describe())?;
        writeln!(
            f,
            "Balance:         {} (start {}, net {})",
            money(s.balance),
            money(s.capital),
            signed_money(s.net_result())
        )?;
        writeln!(f, "Target capital:  {}", money(s.target_capital))?;
        writeln!(
            f,
            "Payout:          {}% (odds {:.4}, implied p {:.4})",
            s.payout_percent, s.odds, s.implied_probability
        )?;
        writeln!(
            f,
            "Success chance:  {:.2}%",
            s.success_probability * 100.0
        )?;
        writeln!(
            f,
            "Trades:          {}/{} ({} remaining)",
            s.trades_taken, s.total_trades, s.remaining_trades
        )?;
        writeln!(
            f,
            "Wins:            {}/{} ({} needed)",
            s.wins_achieved, s.target_wins, s.wins_needed
        )?;
        writeln!(f, "Next stake:      {}", money(s.next_stake))?;

        if !s.history.is_empty() {
            writeln!(f)?;
            write!(f, "{}", HistoryTable(&s.history))?;
        }
        Ok(())
    }
}

/// Trade history as a fixed-width table
pub struct HistoryTable<'a>(pub &'a [TradeRecord]);

impl fmt::Display for HistoryTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:>4}  {:<7}{:>14}{:>14}{:>14}",
            "#", "Result", "Stake", "P/L", "Balance"
        )?;
        for trade in self.0 {
            writeln!(
                f,
                "{:>4}  {:<7}{:>14}{:>14}{:>14}",
                trade.index,
                trade.outcome.to_string(),
                money(trade.stake),
                signed_money(trade.profit_or_loss),
                money(trade.balance_after)
            )?;
        }
        Ok(())
    }
}
