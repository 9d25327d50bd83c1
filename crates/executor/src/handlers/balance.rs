//! Balance handlers: init and move.

use ledgercc_core::{encode_amount, parse_amount, parse_stored_amount, LedgerAccessor};
use tracing::{debug, info};

use super::{read_state, SequentialWrites};
use crate::{Error, Output, Result};

/// Handle Init: seed two balances.
///
/// Both amounts are parsed before anything is written. The writes are not
/// atomic; a failure on the second leaves the first in place.
pub fn init<L: LedgerAccessor>(
    ledger: &L,
    a: &str,
    a_amount: &str,
    b: &str,
    b_amount: &str,
) -> Result<Output> {
    let a_val = parse_argument(a, a_amount)?;
    let b_val = parse_argument(b, b_amount)?;
    info!("Init {} = {}, {} = {}", a, a_val, b, b_val);

    let mut writes = SequentialWrites::new(ledger);
    writes.put(a, &encode_amount(a_val))?;
    writes.put(b, &encode_amount(b_val))?;
    Ok(Output::Unit)
}

/// Handle Move: transfer `amount` from `from` to `to`.
///
/// Balances may go negative. The sum of the two balances is unchanged on
/// success. A transfer from an account to itself is validated like any
/// other and then leaves the balance untouched.
pub fn transfer<L: LedgerAccessor>(
    ledger: &L,
    from: &str,
    to: &str,
    amount: &str,
) -> Result<Output> {
    let from_bytes = read_state(ledger, from)?;
    let to_bytes = read_state(ledger, to)?;

    let x = parse_amount(amount).map_err(|e| Error::InvalidAmount {
        subject: "transaction amount".to_string(),
        value: e.value,
    })?;
    let from_val = parse_stored(from, &from_bytes)?;
    let to_val = parse_stored(to, &to_bytes)?;

    if from == to {
        debug!("Move from {} to itself leaves balance at {}", from, from_val);
        return Ok(Output::Unit);
    }

    let new_from = from_val.checked_sub(x).ok_or_else(|| Error::Overflow {
        key: from.to_string(),
        amount: x,
    })?;
    let new_to = to_val.checked_add(x).ok_or_else(|| Error::Overflow {
        key: to.to_string(),
        amount: x,
    })?;

    info!("Move {} from {} to {}: {} = {}, {} = {}", x, from, to, from, new_from, to, new_to);

    let mut writes = SequentialWrites::new(ledger);
    writes.put(from, &encode_amount(new_from))?;
    writes.put(to, &encode_amount(new_to))?;
    Ok(Output::Unit)
}

fn parse_argument(account: &str, text: &str) -> Result<i64> {
    parse_amount(text).map_err(|e| Error::InvalidAmount {
        subject: format!("asset holding of {}", account),
        value: e.value,
    })
}

fn parse_stored(key: &str, bytes: &[u8]) -> Result<i64> {
    parse_stored_amount(bytes).map_err(|e| Error::InvalidAmount {
        subject: format!("stored balance of {}", key),
        value: e.value,
    })
}
